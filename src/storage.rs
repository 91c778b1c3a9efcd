//! Internal storage layout and length validation for the bit vector.
//!
//! A [`BitVector`](crate::BitVector) stores its bits in a `Vec<u8>`, one
//! byte per eight bits, least significant bit first. The helpers here are the
//! single place that knows how bit lengths map onto that buffer.

use crate::traits::{BitVectorError, Result};

/// Number of bits held by one storage byte.
pub const BITS_PER_BYTE: usize = 8;

/// High-bit masks indexed by a sub-byte shift amount.
///
/// `HIGH_MASKS[r]` selects the top `r` bits of a byte, which are the bits that
/// leave a byte when it is shifted left by `r`.
pub(crate) const HIGH_MASKS: [u8; BITS_PER_BYTE] =
    [0x00, 0x80, 0xC0, 0xE0, 0xF0, 0xF8, 0xFC, 0xFE];

/// Low-bit masks indexed by a sub-byte shift amount.
///
/// `LOW_MASKS[r]` selects the bottom `r` bits of a byte, which are the bits
/// that leave a byte when it is shifted right by `r`.
pub(crate) const LOW_MASKS: [u8; BITS_PER_BYTE] =
    [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// Returns the number of storage bytes needed for `bits` bits.
///
/// # Examples
///
/// ```
/// use tagged_bitvec::storage::byte_len;
///
/// assert_eq!(byte_len(8), 1);
/// assert_eq!(byte_len(9), 2);
/// assert_eq!(byte_len(0), 0);
/// ```
#[must_use]
#[inline(always)]
pub const fn byte_len(bits: usize) -> usize {
    bits.div_ceil(BITS_PER_BYTE)
}

/// Validates a requested bit length and returns the matching byte count.
///
/// A length is valid when it is non-zero and a multiple of
/// [`BITS_PER_BYTE`].
///
/// # Errors
///
/// Returns [`BitVectorError::InvalidLength`] for any other length.
///
/// # Examples
///
/// ```
/// use tagged_bitvec::{BitVectorError, storage::checked_byte_len};
///
/// assert_eq!(checked_byte_len(24), Ok(3));
/// assert_eq!(checked_byte_len(0), Err(BitVectorError::InvalidLength { bits: 0 }));
/// assert_eq!(checked_byte_len(12), Err(BitVectorError::InvalidLength { bits: 12 }));
/// ```
#[inline]
pub const fn checked_byte_len(bits: usize) -> Result<usize> {
    if bits == 0 || !bits.is_multiple_of(BITS_PER_BYTE) {
        return Err(BitVectorError::InvalidLength { bits });
    }
    Ok(bits / BITS_PER_BYTE)
}

/// Returns the bit length represented by `len` storage bytes, or `None` when
/// the product overflows `usize`.
#[inline(always)]
pub(crate) const fn bit_len_of(len: usize) -> Option<usize> {
    len.checked_mul(BITS_PER_BYTE)
}
