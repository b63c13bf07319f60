//! Customizing decoding with DecoderOptions.
//!
//! Run with: cargo run --example custom_options

use ccdv::{Decoder, DecoderOptions, Error as CcdvError, FieldCount};
use std::error::Error;

const INPUT: &str = "\x10exported table\x1e  id\x1f  name\x1e\x1e  1\x1f  Alice\x1e  2\x1e";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // Defaults: any field count, no trimming
    println!("Default:");
    for record in Decoder::new(INPUT.as_bytes()).records() {
        println!("  {:?}", record?);
    }

    // Trim leading spaces and lock the field count to the first record
    println!("\nTrimmed, inferred field count:");
    let options = DecoderOptions::new()
        .with_trim_leading_space(true)
        .with_field_count(FieldCount::Infer);
    let mut decoder = Decoder::with_options(INPUT.as_bytes(), options);
    loop {
        match decoder.decode() {
            Ok(Some(record)) => println!("  {:?}", record),
            Ok(None) => break,
            Err(CcdvError::Parse(err)) => {
                println!("  skipping bad record: {}", err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    // Options can come from a config file
    let options: DecoderOptions =
        serde_json::from_str(r#"{ "field_count": { "exact": 2 }, "reuse_record": true }"#)?;
    println!("\nFrom JSON: {:?}", options);

    Ok(())
}
