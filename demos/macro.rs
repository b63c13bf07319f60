//! Building records with the record! macro.
//!
//! Run with: cargo run --example macro

use ccdv::{record, Encoder};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let header = record!["sku", "blob", "note"];
    let name = String::from("WIDGET-001");
    let row = record![name, vec![0x00u8, 0xB4, 0xFF], b"raw bytes are fine"];

    let mut encoder = Encoder::new(Vec::new());
    encoder.encode(&header)?;
    encoder.encode(&row)?;
    let bytes = encoder.into_inner()?;
    println!("{:?}", bytes);

    // A rejected record leaves its leading fields in that encoder's buffer,
    // so it gets an encoder of its own that is dropped unflushed.
    let bad = record!["fine", "not\x1efine"];
    let mut scratch = Encoder::new(Vec::new());
    if let Err(err) = scratch.encode(&bad) {
        println!("Rejected: {}", err);
    }

    Ok(())
}
