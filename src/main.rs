use anyhow::Result;
use fixture_gen::{write_decode_data, write_encode_data, MAX_STRING_LEN, STRINGS_PER_LEN};

fn main() -> Result<()> {
    let total_lines = MAX_STRING_LEN * STRINGS_PER_LEN;

    write_encode_data("./testdata/encode-test-data")?;
    println!("✅ Created ./testdata/encode-test-data ({} lines)", total_lines);

    write_decode_data("./testdata/decode-test-data")?;
    println!("✅ Created ./testdata/decode-test-data ({} lines)", total_lines);

    Ok(())
}
