use anyhow::Result;
use base64::{engine::general_purpose, Engine as _};
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use std::fs::File;
use std::io::{BufWriter, Write};

/// Longest string written to the benchmark fixture files.
pub const MAX_STRING_LEN: usize = 1000;
/// How many strings are written per length.
pub const STRINGS_PER_LEN: usize = 10;

/// Returns a random string of `length` characters drawn from [A-Za-z0-9].
pub fn generate_random_string(length: usize) -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// Writes the encode benchmark fixture: for every length 1..=1000, ten
/// random alphanumeric strings, one per line.
pub fn write_encode_data(path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for length in 1..=MAX_STRING_LEN {
        for _ in 0..STRINGS_PER_LEN {
            writer.write_all(generate_random_string(length).as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the decode benchmark fixture: same shape as the encode data, but
/// every string is base64-encoded (standard alphabet, '=' padding) first.
pub fn write_decode_data(path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for length in 1..=MAX_STRING_LEN {
        for _ in 0..STRINGS_PER_LEN {
            let encoded = general_purpose::STANDARD.encode(generate_random_string(length));
            writer.write_all(encoded.as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}

/// Writes the simplified plain-text fixture: same shape as the encode data,
/// but lengths stop at 999 (the upper bound is exclusive here).
pub fn write_plain_data(path: &str) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for length in 1..MAX_STRING_LEN {
        for _ in 0..STRINGS_PER_LEN {
            writer.write_all(generate_random_string(length).as_bytes())?;
            writer.write_all(b"\n")?;
        }
    }

    writer.flush()?;
    Ok(())
}
