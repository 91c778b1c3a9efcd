//! Trait implementations for `BitVector`.

use crate::{BitVector, codec::Format};
use alloc::vec::Vec;
use core::{
    convert::TryFrom,
    fmt,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not},
    str::FromStr,
};

/// Errors reported by [`BitVector`] operations.
///
/// Every failure is detected before the vector is modified, so an operation
/// that returns an error leaves its receiver exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitVectorError {
    /// A bit length was zero or not a multiple of 8.
    InvalidLength {
        /// The rejected length in bits
        bits: usize,
    },

    /// A bit index was not below the vector's bit length.
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// The bit length of the vector
        len: usize,
    },

    /// Two lengths that must agree did not.
    ///
    /// Raised for binary operators and [`BitVector::equal`] on vectors of
    /// different lengths, and by the parser when a declared length does not
    /// match the encoded payload.
    LengthMismatch {
        /// The length that was required
        expected: usize,
        /// The length that was found
        actual: usize,
    },

    /// Serialized text was malformed.
    Syntax {
        /// What was wrong with the input
        reason: &'static str,
    },
}

impl fmt::Display for BitVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { bits } => {
                write!(
                    f,
                    "invalid bit length {bits}: must be a positive multiple of 8"
                )
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "bit index {index} out of range for length {len}")
            }
            Self::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {expected} bits, found {actual}")
            }
            Self::Syntax { reason } => write!(f, "malformed bit vector text: {reason}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BitVectorError {}

/// Result type used throughout this crate.
pub type Result<T, E = BitVectorError> = core::result::Result<T, E>;

impl From<BitVector> for Vec<u8> {
    fn from(bits: BitVector) -> Self {
        bits.into_bytes()
    }
}

impl TryFrom<Vec<u8>> for BitVector {
    type Error = BitVectorError;

    /// Wraps a byte buffer; see [`BitVector::from_bytes`].
    fn try_from(bytes: Vec<u8>) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl TryFrom<&[u8]> for BitVector {
    type Error = BitVectorError;

    /// Copies a byte slice; see [`BitVector::from_bytes`].
    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for BitVector {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Display for BitVector {
    /// Writes the untagged binary digit form, highest bit first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(self, f)
    }
}

impl fmt::Binary for BitVector {
    /// Formats the bits as `0`/`1` digits, highest bit first.
    ///
    /// Every bit is printed, including leading zeros. The alternate flag adds
    /// a `0b` prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_bytes(vec![0x05, 0x80])?;
    /// assert_eq!(format!("{bits:b}"), "1000000000000101");
    /// assert_eq!(format!("{bits:#b}"), "0b1000000000000101");
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        for &byte in self.as_bytes().iter().rev() {
            write!(f, "{byte:08b}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for BitVector {
    /// Formats the bytes as uppercase hex pairs, last byte first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_bytes(vec![0xEF, 0xBE, 0xAD, 0xDE])?;
    /// assert_eq!(format!("{bits:X}"), "DEADBEEF");
    /// assert_eq!(format!("{bits:#X}"), "0xDEADBEEF");
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for &byte in self.as_bytes().iter().rev() {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for BitVector {
    /// Formats the bytes as lowercase hex pairs, last byte first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for &byte in self.as_bytes().iter().rev() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringify(Format::Hex))
    }
}

impl FromStr for BitVector {
    type Err = BitVectorError;

    /// Parses any of the text forms; see [`BitVector::parse`].
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Bitwise Operator Implementations
// ============================================================================
//
// The operator forms cannot report a length mismatch through their return
// type, so they panic instead. The `and`/`or`/`xor` methods are the
// non-panicking path.

#[track_caller]
fn expect_same_len(r: Result<&mut BitVector>) {
    if let Err(e) = r {
        panic!("{e}");
    }
}

impl BitAnd for &BitVector {
    type Output = BitVector;

    /// Returns the bitwise AND of two vectors.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let a = BitVector::from_bytes(vec![0b0011])?;
    /// let b = BitVector::from_bytes(vec![0b0110])?;
    /// assert_eq!((&a & &b).as_bytes(), &[0b0010]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl BitAndAssign<&Self> for BitVector {
    /// Performs an in-place bitwise AND.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    #[inline]
    #[track_caller]
    fn bitand_assign(&mut self, rhs: &Self) {
        expect_same_len(self.and(rhs));
    }
}

impl BitOr for &BitVector {
    type Output = BitVector;

    /// Returns the bitwise OR of two vectors.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl BitOrAssign<&Self> for BitVector {
    /// Performs an in-place bitwise OR.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    #[inline]
    #[track_caller]
    fn bitor_assign(&mut self, rhs: &Self) {
        expect_same_len(self.or(rhs));
    }
}

impl BitXor for &BitVector {
    type Output = BitVector;

    /// Returns the bitwise XOR of two vectors.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    #[inline]
    fn bitxor(self, rhs: Self) -> Self::Output {
        let mut out = self.clone();
        out ^= rhs;
        out
    }
}

impl BitXorAssign<&Self> for BitVector {
    /// Performs an in-place bitwise XOR.
    ///
    /// # Panics
    ///
    /// Panics if the bit lengths differ.
    #[inline]
    #[track_caller]
    fn bitxor_assign(&mut self, rhs: &Self) {
        expect_same_len(self.xor(rhs));
    }
}

impl Not for BitVector {
    type Output = Self;

    /// Returns the vector with every bit flipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_bytes(vec![0x0F])?;
    /// assert_eq!((!bits).as_bytes(), &[0xF0]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    fn not(mut self) -> Self::Output {
        self.complement();
        self
    }
}

impl Not for &BitVector {
    type Output = BitVector;

    #[inline]
    fn not(self) -> Self::Output {
        !self.clone()
    }
}
