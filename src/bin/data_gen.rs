use fixture_gen::{write_plain_data, MAX_STRING_LEN, STRINGS_PER_LEN};

// Simplified variant: one plain-text file, lengths 1..=999 only.
fn main() {
    write_plain_data("data").expect("Failed to write data file");
    println!("✅ Created data ({} lines)", (MAX_STRING_LEN - 1) * STRINGS_PER_LEN);
}
