//! Basic usage examples for `BitVector`

use tagged_bitvec::{BitVector, BitVectorError, Format};

fn main() -> Result<(), BitVectorError> {
    println!("=== BitVector Basic Usage ===\n");

    // Create a zeroed 16-bit vector
    let mut bits = BitVector::new(16)?;
    println!("Created {}-bit vector ({} bytes)", bits.bit_len(), bits.byte_len());
    println!("Any bits set? {}\n", bits.any());

    // Set some bits
    bits.set(0)?.set(1)?.set(8)?.set(15)?;
    println!("Set bits at positions: 0, 1, 8, 15");
    println!("Number of set bits: {}", bits.count_ones());
    println!("Set bits: {:?}\n", bits.iter_ones().collect::<Vec<_>>());

    // Every text form
    println!("Text forms:");
    for format in [Format::Digits, Format::Binary, Format::Hex, Format::Base64] {
        println!("  {format:?}: {}", bits.stringify(format));
    }
    println!();

    // Parse back
    let parsed = BitVector::parse("BitVector:BASE64(16):A4E=")?;
    println!("Parsed base64 equals original? {}\n", parsed == bits);

    // Masks and shifts
    let mut mask = BitVector::new(16)?;
    mask.set_all().shift(-4);
    println!("Mask (all ones, shifted right by 4): {mask}");

    bits.and(&mask)?.complement();
    println!("NOT (bits AND mask): {bits}\n");

    // Errors are values
    println!("Errors:");
    if let Err(e) = BitVector::new(0) {
        println!("  new(0): {e}");
    }
    if let Err(e) = BitVector::parse("BitVector:01(4):101") {
        println!("  parse: {e}");
    }
    if let Err(e) = bits.clone().and(&BitVector::new(8)?) {
        println!("  and: {e}");
    }

    Ok(())
}
