//! Basic CCDV encoding and decoding.
//!
//! Run with: cargo run --example simple

use ccdv::{from_slice, to_vec};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let rows = vec![
        vec!["id", "name", "bio"],
        vec!["42", "Alice Johnson", "Likes \"quotes\",\ncommas and newlines"],
        vec!["43", "Bob Smith", "C:\\path\\with\\backslashes"],
    ];

    // Encode
    let bytes = to_vec(&rows)?;
    println!("Encoded ({} bytes): {:?}\n", bytes.len(), String::from_utf8_lossy(&bytes));

    // Decode back
    let records = from_slice(&bytes)?;
    for record in &records {
        println!("{:?}", record.to_string_vec()?);
    }
    assert_eq!(records.len(), rows.len());
    println!("✓ Round-trip successful");

    Ok(())
}
