use tagged_bitvec::{BitVector, BitVectorError, Format};

fn sample() -> BitVector {
    let mut bits = BitVector::new(16).unwrap();
    bits.set(0).unwrap().set(1).unwrap().set(8).unwrap().set(15).unwrap();
    bits
}

fn all_ones(bits: usize) -> BitVector {
    let mut v = BitVector::new(bits).unwrap();
    v.set_all();
    v
}

// ============================================================================
// Text forms
// ============================================================================

#[test]
fn test_sample_in_every_format() {
    let bits = sample();
    assert_eq!(bits.stringify(Format::Digits), "1000000100000011");
    assert_eq!(
        bits.stringify(Format::Binary),
        "BitVector:01(16):1000000100000011"
    );
    assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(16):8103");
    assert_eq!(bits.stringify(Format::Base64), "BitVector:BASE64(16):A4E=");
}

#[test]
fn test_sample_parses_from_every_format() {
    let expected = sample();
    for text in [
        "1000000100000011",
        "BitVector:01(16):1000000100000011",
        "BitVector:HEX(16):8103",
        "BitVector:BASE64(16):A4E=",
    ] {
        assert_eq!(BitVector::parse(text), Ok(expected.clone()), "text {text:?}");
    }
}

#[test]
fn test_from_str() {
    let bits: BitVector = "BitVector:HEX(16):8103".parse().unwrap();
    assert_eq!(bits, sample());
    assert!("10".parse::<BitVector>().is_err());
}

#[test]
fn test_fmt_traits() {
    let bits = sample();
    assert_eq!(format!("{bits}"), "1000000100000011");
    assert_eq!(format!("{bits:b}"), "1000000100000011");
    assert_eq!(format!("{bits:#b}"), "0b1000000100000011");
    assert_eq!(format!("{bits:X}"), "8103");
    assert_eq!(format!("{bits:#x}"), "0x8103");
    assert_eq!(format!("{bits:?}"), "BitVector:HEX(16):8103");
}

#[test]
fn test_hex_and_base64_byte_order_differ() {
    let bits = BitVector::from_bytes(vec![0x01, 0x02, 0x03]).unwrap();
    // Hex prints the last byte first, base64 encodes byte 0 first.
    assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(24):030201");
    assert_eq!(bits.stringify(Format::Base64), "BitVector:BASE64(24):AQID");
}

#[test]
fn test_hex_accepts_lowercase() {
    let bits = BitVector::parse("BitVector:HEX(16):beef").unwrap();
    assert_eq!(bits.as_bytes(), &[0xEF, 0xBE]);
    assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(16):BEEF");
}

#[test]
fn test_parse_length_mismatch() {
    assert_eq!(
        BitVector::parse("BitVector:01(4):101"),
        Err(BitVectorError::LengthMismatch {
            expected: 4,
            actual: 3
        })
    );
    assert_eq!(
        BitVector::parse("BitVector:01(16):10000001"),
        Err(BitVectorError::LengthMismatch {
            expected: 16,
            actual: 8
        })
    );
    assert_eq!(
        BitVector::parse("BitVector:HEX(24):8103"),
        Err(BitVectorError::LengthMismatch {
            expected: 24,
            actual: 16
        })
    );
    assert_eq!(
        BitVector::parse("BitVector:BASE64(8):A4E="),
        Err(BitVectorError::LengthMismatch {
            expected: 8,
            actual: 16
        })
    );
}

#[test]
fn test_parse_invalid_digit_length() {
    assert_eq!(
        BitVector::parse("101"),
        Err(BitVectorError::InvalidLength { bits: 3 })
    );
    assert_eq!(
        BitVector::parse(""),
        Err(BitVectorError::InvalidLength { bits: 0 })
    );
}

#[test]
fn test_parse_syntax_errors() {
    for text in [
        "1010101x",
        "BitVector:01(8):10101012",
        "BitVector:01(8)10101010",
        "BitVector:HEX(x):FF",
        "BitVector:HEX():FF",
        "BitVector:HEX(4):F",
        "BitVector:HEX(0):",
        "BitVector:HEX(8):GG",
        "BitVector:BASE64(8):!!!!",
        "BitVector:BASE64(12):/w==",
    ] {
        assert!(
            matches!(BitVector::parse(text), Err(BitVectorError::Syntax { .. })),
            "{text:?} should be a syntax error, got {:?}",
            BitVector::parse(text)
        );
    }
}

#[test]
fn test_unknown_tag_is_treated_as_digits() {
    assert_eq!(Format::detect("BitVector:OCT(8):377"), Format::Digits);
    assert!(matches!(
        BitVector::parse("BitVector:OCT(8):377"),
        Err(BitVectorError::Syntax { .. })
    ));
}

// ============================================================================
// Bitwise identities
// ============================================================================

#[test]
fn test_and_with_self() {
    let bits = sample();
    let mut copy = bits.clone();
    copy.and(&bits).unwrap();
    assert_eq!(copy, bits);
}

#[test]
fn test_xor_with_self_is_zero() {
    let bits = sample();
    let mut copy = bits.clone();
    copy.xor(&bits).unwrap();
    assert!(!copy.any());
}

#[test]
fn test_or_with_all_ones() {
    let mut bits = sample();
    bits.or(&all_ones(16)).unwrap();
    assert!(bits.all());
    assert_eq!(bits, all_ones(16));
}

#[test]
fn test_nand_nor() {
    let a = BitVector::from_bytes(vec![0b1100_1100]).unwrap();
    let b = BitVector::from_bytes(vec![0b1010_1010]).unwrap();

    let mut nand = a.clone();
    nand.nand(&b).unwrap();
    assert_eq!(nand.as_bytes(), &[0b0111_0111]);

    let mut nor = a.clone();
    nor.nor(&b).unwrap();
    assert_eq!(nor.as_bytes(), &[0b0001_0001]);
}

#[test]
fn test_length_mismatch_leaves_receiver_unchanged() {
    let mut a = sample();
    let b = BitVector::new(8).unwrap();
    let expected = Err(BitVectorError::LengthMismatch {
        expected: 16,
        actual: 8,
    });

    assert_eq!(a.and(&b).map(|v| v.clone()), expected);
    assert_eq!(a.or(&b).map(|v| v.clone()), expected);
    assert_eq!(a.xor(&b).map(|v| v.clone()), expected);
    assert_eq!(a.nand(&b).map(|v| v.clone()), expected);
    assert_eq!(a.nor(&b).map(|v| v.clone()), expected);
    assert_eq!(
        a.equal(&b),
        Err(BitVectorError::LengthMismatch {
            expected: 16,
            actual: 8,
        })
    );
    assert_eq!(a, sample());
}

#[test]
#[should_panic(expected = "length mismatch")]
fn test_operator_panics_on_length_mismatch() {
    let a = sample();
    let b = BitVector::new(8).unwrap();
    let _ = &a & &b;
}

#[test]
fn test_operators_match_methods() {
    let a = sample();
    let mut b = BitVector::new(16).unwrap();
    b.set(1).unwrap().set(2).unwrap().set(15).unwrap();

    let mut and = a.clone();
    and.and(&b).unwrap();
    assert_eq!(&a & &b, and);

    let mut assigned = a.clone();
    assigned |= &b;
    let mut or = a.clone();
    or.or(&b).unwrap();
    assert_eq!(assigned, or);

    let mut assigned = a.clone();
    assigned ^= &b;
    assert_eq!(assigned, &a ^ &b);

    assert_eq!((!a.clone()).as_bytes(), (!&a).as_bytes());
}

// ============================================================================
// Chaining
// ============================================================================

#[test]
fn test_chained_mask() {
    let mut bits = sample();
    let mut mask = BitVector::new(16).unwrap();
    mask.set_all().shift(-4);
    assert_eq!(mask.to_string(), "0000111111111111");

    bits.and(&mask).unwrap().complement();
    assert_eq!(bits.to_string(), "1111111011111100");
}

#[test]
fn test_chained_mutators() {
    let mut bits = BitVector::new(8).unwrap();
    bits.set(0)
        .unwrap()
        .shift(3)
        .toggle(0)
        .unwrap()
        .resize(16)
        .unwrap()
        .shift(8);
    assert_eq!(bits.iter_ones().collect::<Vec<_>>(), [8, 11]);
}

// ============================================================================
// Conversions
// ============================================================================

#[test]
fn test_try_from_bytes() {
    let bits = BitVector::try_from(vec![0x03, 0x81]).unwrap();
    assert_eq!(bits, sample());
    let bits = BitVector::try_from([0x03u8, 0x81].as_slice()).unwrap();
    assert_eq!(bits, sample());
    assert_eq!(
        BitVector::try_from(Vec::<u8>::new()),
        Err(BitVectorError::InvalidLength { bits: 0 })
    );

    let bytes: Vec<u8> = sample().into();
    assert_eq!(bytes, [0x03, 0x81]);
    assert_eq!(sample().as_ref(), &[0x03, 0x81]);
}

#[test]
fn test_large_vector_roundtrip() {
    let mut bits = BitVector::new(1024).unwrap();
    for i in (0..1024).step_by(7) {
        bits.set(i).unwrap();
    }
    for format in [Format::Digits, Format::Binary, Format::Hex, Format::Base64] {
        assert_eq!(BitVector::parse(&bits.stringify(format)), Ok(bits.clone()));
    }
}

#[test]
fn test_error_display() {
    let err = BitVector::new(0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid bit length 0: must be a positive multiple of 8"
    );
    let err: Box<dyn std::error::Error> = Box::new(err);
    assert!(err.to_string().contains("multiple of 8"));
}
