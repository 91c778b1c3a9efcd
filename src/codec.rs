//! Tagged text encodings for `BitVector`.
//!
//! Every tagged form starts with `BitVector:<TAG>(<N>):`, where `<N>` is the
//! bit length in decimal, so a string carries enough information to rebuild
//! the vector it came from:
//!
//! | Format | Text |
//! |---|---|
//! | [`Format::Digits`] | `1000000100000011` |
//! | [`Format::Binary`] | `BitVector:01(16):1000000100000011` |
//! | [`Format::Hex`] | `BitVector:HEX(16):8103` |
//! | [`Format::Base64`] | `BitVector:BASE64(16):A4E=` |
//!
//! Binary digits and hex print the highest bit (last byte) first. Base64
//! encodes the bytes in storage order, byte 0 first.

use alloc::{format, string::String};

use data_encoding::{BASE64, HEXUPPER_PERMISSIVE};

use crate::{
    BitVector,
    storage::BITS_PER_BYTE,
    traits::{BitVectorError, Result},
};

/// Marker shared by every tagged form.
const PREFIX: &str = "BitVector:";

/// Text encodings understood by [`BitVector::stringify`] and
/// [`BitVector::parse`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Bare `0`/`1` digits with no tag; the bit length is the digit count.
    #[default]
    Digits,
    /// `0`/`1` digits behind a `BitVector:01(<N>):` tag.
    Binary,
    /// Uppercase hex pairs behind a `BitVector:HEX(<N>):` tag.
    Hex,
    /// Padded standard base64 behind a `BitVector:BASE64(<N>):` tag.
    Base64,
}

impl Format {
    /// Returns the tag name written between `BitVector:` and the length, or
    /// `None` for the untagged digit form.
    #[must_use]
    pub const fn tag(self) -> Option<&'static str> {
        match self {
            Self::Digits => None,
            Self::Binary => Some("01"),
            Self::Hex => Some("HEX"),
            Self::Base64 => Some("BASE64"),
        }
    }

    /// Reports which form `text` claims to be in, judging by its prefix only.
    ///
    /// Anything without a recognised tag is treated as bare digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::Format;
    ///
    /// assert_eq!(Format::detect("BitVector:HEX(8):FF"), Format::Hex);
    /// assert_eq!(Format::detect("BitVector:BASE64(8):/w=="), Format::Base64);
    /// assert_eq!(Format::detect("BitVector:01(8):11111111"), Format::Binary);
    /// assert_eq!(Format::detect("11111111"), Format::Digits);
    /// ```
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let Some(rest) = text.strip_prefix(PREFIX) else {
            return Self::Digits;
        };
        [Self::Hex, Self::Base64, Self::Binary]
            .into_iter()
            .find(|format| {
                format
                    .tag()
                    .and_then(|tag| rest.strip_prefix(tag))
                    .is_some_and(|rest| rest.starts_with('('))
            })
            .unwrap_or(Self::Digits)
    }
}

impl BitVector {
    /// Encodes the vector as text in the given format.
    ///
    /// [`Format::default()`] is the untagged digit form, the same text
    /// [`Display`](core::fmt::Display) produces.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::{BitVector, Format};
    ///
    /// let mut bits = BitVector::new(16)?;
    /// bits.set(0)?;
    ///
    /// assert_eq!(bits.stringify(Format::default()), "0000000000000001");
    /// assert_eq!(bits.stringify(Format::Binary), "BitVector:01(16):0000000000000001");
    /// assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(16):0001");
    /// assert_eq!(bits.stringify(Format::Base64), "BitVector:BASE64(16):AQA=");
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn stringify(&self, format: Format) -> String {
        let body = match format {
            Format::Digits | Format::Binary => format!("{self:b}"),
            Format::Hex => format!("{self:X}"),
            Format::Base64 => BASE64.encode(&self.bytes),
        };
        match format.tag() {
            None => body,
            Some(tag) => format!("{PREFIX}{tag}({}):{body}", self.bits),
        }
    }

    /// Decodes a vector from any of the text forms.
    ///
    /// The form is picked by [`Format::detect`]. Hex digits may be upper or
    /// lower case.
    ///
    /// # Errors
    ///
    /// - [`BitVectorError::Syntax`] for a malformed tag, a declared length
    ///   that is not a positive multiple of 8 (hex and base64), a character
    ///   other than `0`/`1` in digit forms, or an undecodable payload.
    /// - [`BitVectorError::LengthMismatch`] when the declared length
    ///   disagrees with the payload.
    /// - [`BitVectorError::InvalidLength`] when a digit string's length is
    ///   not a positive multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::{BitVector, BitVectorError};
    ///
    /// let bits = BitVector::parse("BitVector:BASE64(16):A4E=")?;
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), [0, 1, 8, 15]);
    ///
    /// assert_eq!(
    ///     BitVector::parse("BitVector:01(4):101"),
    ///     Err(BitVectorError::LengthMismatch { expected: 4, actual: 3 })
    /// );
    /// # Ok::<(), BitVectorError>(())
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let format = Format::detect(text);
        let parsed = match format {
            Format::Digits => from_digits(text),
            Format::Binary => parse_binary(text),
            Format::Hex => parse_hex(text),
            Format::Base64 => parse_base64(text),
        };
        if let Err(err) = &parsed {
            log::debug!("rejected {format:?} bit vector text: {err}");
        }
        parsed
    }
}

/// Splits a tagged string into its declared bit length and its payload.
fn split_tagged(text: &str, format: Format) -> Result<(usize, &str)> {
    let malformed = BitVectorError::Syntax {
        reason: "malformed tag, expected `BitVector:<TAG>(<N>):`",
    };
    let rest = text
        .strip_prefix(PREFIX)
        .zip(format.tag())
        .and_then(|(rest, tag)| rest.strip_prefix(tag))
        .and_then(|rest| rest.strip_prefix('('))
        .ok_or_else(|| malformed.clone())?;
    let (len, body) = rest.split_once("):").ok_or(malformed)?;

    if len.is_empty() || !len.bytes().all(|c| c.is_ascii_digit()) {
        return Err(BitVectorError::Syntax {
            reason: "declared length is not a decimal number",
        });
    }
    let declared = len.parse::<usize>().map_err(|_| BitVectorError::Syntax {
        reason: "declared length does not fit in usize",
    })?;
    Ok((declared, body))
}

/// Checks the declared length of a byte-oriented (hex or base64) form.
fn check_declared_bytes(declared: usize) -> Result<()> {
    if declared == 0 || !declared.is_multiple_of(BITS_PER_BYTE) {
        return Err(BitVectorError::Syntax {
            reason: "declared length must be a positive multiple of 8",
        });
    }
    Ok(())
}

/// Checks that a decoded payload holds exactly the declared number of bits.
fn check_decoded_len(declared: usize, decoded: usize) -> Result<()> {
    let actual = decoded.saturating_mul(BITS_PER_BYTE);
    if actual != declared {
        return Err(BitVectorError::LengthMismatch {
            expected: declared,
            actual,
        });
    }
    Ok(())
}

/// Builds a vector from a `0`/`1` digit string, highest bit first.
fn from_digits(digits: &str) -> Result<BitVector> {
    let digits = digits.as_bytes();
    if !digits.iter().all(|&c| c == b'0' || c == b'1') {
        return Err(BitVectorError::Syntax {
            reason: "expected only '0' and '1' digits",
        });
    }

    let mut bits = BitVector::new(digits.len())?;
    // The last eight digits are byte 0; within a chunk the first digit is
    // the byte's top bit.
    for (byte, chunk) in bits.bytes.iter_mut().zip(digits.rchunks(BITS_PER_BYTE)) {
        *byte = chunk.iter().fold(0, |acc, &c| (acc << 1) | (c - b'0'));
    }
    Ok(bits)
}

fn parse_binary(text: &str) -> Result<BitVector> {
    let (declared, body) = split_tagged(text, Format::Binary)?;
    if body.len() != declared {
        return Err(BitVectorError::LengthMismatch {
            expected: declared,
            actual: body.len(),
        });
    }
    from_digits(body)
}

fn parse_hex(text: &str) -> Result<BitVector> {
    let (declared, body) = split_tagged(text, Format::Hex)?;
    check_declared_bytes(declared)?;
    let mut bytes = HEXUPPER_PERMISSIVE
        .decode(body.as_bytes())
        .map_err(|_| BitVectorError::Syntax {
            reason: "invalid hexadecimal payload",
        })?;
    check_decoded_len(declared, bytes.len())?;
    // Hex text starts with the last byte.
    bytes.reverse();
    BitVector::from_bytes(bytes)
}

fn parse_base64(text: &str) -> Result<BitVector> {
    let (declared, body) = split_tagged(text, Format::Base64)?;
    check_declared_bytes(declared)?;
    let bytes = BASE64
        .decode(body.as_bytes())
        .map_err(|_| BitVectorError::Syntax {
            reason: "invalid base64 payload",
        })?;
    check_decoded_len(declared, bytes.len())?;
    BitVector::from_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_detect_requires_parenthesis() {
        assert_eq!(Format::detect("BitVector:HEXX(8):FF"), Format::Digits);
        assert_eq!(Format::detect("BitVector:BASE64"), Format::Digits);
        assert_eq!(Format::detect("bitvector:HEX(8):FF"), Format::Digits);
    }

    #[test]
    fn test_split_tagged() {
        assert_eq!(
            split_tagged("BitVector:HEX(16):8103", Format::Hex),
            Ok((16, "8103"))
        );
        assert_eq!(
            split_tagged("BitVector:01(8):", Format::Binary),
            Ok((8, ""))
        );
        assert!(split_tagged("BitVector:HEX(16)8103", Format::Hex).is_err());
        assert!(split_tagged("BitVector:HEX():8103", Format::Hex).is_err());
        assert!(split_tagged("BitVector:HEX(+16):8103", Format::Hex).is_err());
        assert!(split_tagged("BitVector:HEX(-8):FF", Format::Hex).is_err());
        assert!(
            split_tagged("BitVector:HEX(99999999999999999999999):FF", Format::Hex).is_err()
        );
    }

    #[test]
    fn test_from_digits_layout() {
        let bits = from_digits("0000000110000000").unwrap();
        assert_eq!(bits.as_bytes(), &[0x80, 0x01]);
    }

    #[test]
    fn test_hex_is_case_insensitive() {
        let bits = BitVector::parse("BitVector:HEX(16):beef").unwrap();
        assert_eq!(bits.as_bytes(), &[0xEF, 0xBE]);
    }

    #[test]
    fn test_base64_byte_order_differs_from_hex() {
        let bits = BitVector::from_bytes(vec![0x01, 0x02]).unwrap();
        assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(16):0201");
        assert_eq!(bits.stringify(Format::Base64), "BitVector:BASE64(16):AQI=");
    }
}
