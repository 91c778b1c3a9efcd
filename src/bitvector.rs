//! `BitVector` struct and core implementation.

use alloc::{vec, vec::Vec};
use core::cmp;

use crate::{
    iter::{Bits, Ones},
    macros::bytepos,
    storage::{self, BITS_PER_BYTE},
    traits::{BitVectorError, Result},
};

/// A fixed-length vector of bits packed into bytes.
///
/// # Overview
///
/// `BitVector` owns a byte buffer and a bit length. The length is fixed at
/// construction, must be a positive multiple of 8, and only changes through
/// [`resize`](Self::resize). Every operation that can fail validates its
/// input before touching the buffer, so a failed call leaves the vector
/// unchanged.
///
/// # Chaining
///
/// Mutating methods return `&mut Self` (wrapped in a [`Result`] when they can
/// fail) so that several edits read as one expression.
///
/// # Examples
///
/// ```
/// use tagged_bitvec::BitVector;
///
/// let mut bits = BitVector::new(32)?;
/// bits.set(3)?.set(17)?;
///
/// assert!(bits.test(3)?);
/// assert!(!bits.test(4)?);
/// assert_eq!(bits.count_ones(), 2);
///
/// // Index 32 is one past the end.
/// assert!(bits.set(32).is_err());
/// # Ok::<(), tagged_bitvec::BitVectorError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitVector {
    pub(crate) bytes: Vec<u8>,
    pub(crate) bits: usize,
}

impl BitVector {
    /// Creates a zero-filled bit vector holding `bits` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidLength`] if `bits` is zero or not a
    /// multiple of 8.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::{BitVector, BitVectorError};
    ///
    /// let bits = BitVector::new(16)?;
    /// assert_eq!(bits.bit_len(), 16);
    /// assert!(!bits.any());
    ///
    /// assert_eq!(BitVector::new(0), Err(BitVectorError::InvalidLength { bits: 0 }));
    /// assert_eq!(BitVector::new(10), Err(BitVectorError::InvalidLength { bits: 10 }));
    /// # Ok::<(), BitVectorError>(())
    /// ```
    pub fn new(bits: usize) -> Result<Self> {
        let len = storage::checked_byte_len(bits)?;
        Ok(Self {
            bytes: vec![0; len],
            bits,
        })
    }

    /// Wraps an existing byte buffer; the bit length is eight times its
    /// length.
    ///
    /// Byte 0 holds bits 0 through 7.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidLength`] if the buffer is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_bytes(vec![0x01, 0x80])?;
    /// assert_eq!(bits.bit_len(), 16);
    /// assert!(bits.test(0)?);
    /// assert!(bits.test(15)?);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let bytes = bytes.into();
        let bits = storage::bit_len_of(bytes.len())
            .filter(|&bits| bits > 0)
            .ok_or(BitVectorError::InvalidLength {
                bits: bytes.len().saturating_mul(BITS_PER_BYTE),
            })?;
        Ok(Self { bytes, bits })
    }

    /// Returns the number of bits in the vector.
    #[must_use]
    #[inline]
    pub const fn bit_len(&self) -> usize {
        self.bits
    }

    /// Returns the number of storage bytes.
    #[must_use]
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns the storage bytes, byte 0 first.
    #[must_use]
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the vector and returns its storage bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Changes the bit length in place.
    ///
    /// Growing keeps every existing bit and zero-fills the new ones;
    /// shrinking drops the high bits. Resizing to the current length does
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::InvalidLength`] under the same conditions as
    /// [`new`](Self::new). The vector is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(16)?;
    /// bits.set(3)?.set(12)?;
    ///
    /// bits.resize(8)?;
    /// assert_eq!(bits.to_string(), "00001000");
    ///
    /// bits.resize(24)?;
    /// assert_eq!(bits.bit_len(), 24);
    /// assert!(bits.test(3)?);
    /// assert!(!bits.test(12)?);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn resize(&mut self, bits: usize) -> Result<&mut Self> {
        let len = storage::checked_byte_len(bits)?;
        if bits == self.bits {
            return Ok(self);
        }

        log::trace!("resizing bit vector from {} to {} bits", self.bits, bits);

        let mut resized = vec![0; len];
        let keep = cmp::min(self.bytes.len(), len);
        resized[..keep].copy_from_slice(&self.bytes[..keep]);
        self.bytes = resized;
        self.bits = bits;
        Ok(self)
    }

    /// Checks `i` against the bit length and returns its byte position.
    #[inline]
    fn locate(&self, i: usize) -> Result<(usize, u8)> {
        if i >= self.bits {
            return Err(BitVectorError::IndexOutOfRange {
                index: i,
                len: self.bits,
            });
        }
        let (idx, bp) = bytepos!(i);
        Ok((idx, 1 << bp))
    }

    /// Sets the bit at `i` to 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `i >= self.bit_len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8)?;
    /// bits.set(0)?.set(7)?;
    /// assert_eq!(bits.to_string(), "10000001");
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn set(&mut self, i: usize) -> Result<&mut Self> {
        let (idx, mask) = self.locate(i)?;
        self.bytes[idx] |= mask;
        Ok(self)
    }

    /// Clears the bit at `i` to 0.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `i >= self.bit_len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8)?;
    /// bits.set_all().unset(0)?;
    /// assert_eq!(bits.to_string(), "11111110");
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn unset(&mut self, i: usize) -> Result<&mut Self> {
        let (idx, mask) = self.locate(i)?;
        self.bytes[idx] &= !mask;
        Ok(self)
    }

    /// Writes `value` to the bit at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `i >= self.bit_len()`.
    #[inline]
    pub fn assign(&mut self, i: usize, value: bool) -> Result<&mut Self> {
        if value { self.set(i) } else { self.unset(i) }
    }

    /// Flips the bit at `i`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `i >= self.bit_len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8)?;
    /// bits.toggle(2)?;
    /// assert!(bits.test(2)?);
    /// bits.toggle(2)?;
    /// assert!(!bits.test(2)?);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    pub fn toggle(&mut self, i: usize) -> Result<&mut Self> {
        let (idx, mask) = self.locate(i)?;
        self.bytes[idx] ^= mask;
        Ok(self)
    }

    /// Returns whether the bit at `i` is 1.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::IndexOutOfRange`] if `i >= self.bit_len()`.
    #[inline]
    pub fn test(&self, i: usize) -> Result<bool> {
        let (idx, mask) = self.locate(i)?;
        Ok(self.bytes[idx] & mask != 0)
    }

    /// Sets every bit to 1.
    pub fn set_all(&mut self) -> &mut Self {
        self.bytes.fill(0xFF);
        self
    }

    /// Clears every bit to 0.
    pub fn unset_all(&mut self) -> &mut Self {
        self.bytes.fill(0);
        self
    }

    /// Returns `true` if at least one bit is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(64)?;
    /// assert!(!bits.any());
    /// bits.set(63)?;
    /// assert!(bits.any());
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn any(&self) -> bool {
        self.bytes.iter().any(|&b| b != 0)
    }

    /// Returns `true` if every bit is set.
    #[must_use]
    pub fn all(&self) -> bool {
        self.bytes.iter().all(|&b| b == 0xFF)
    }

    /// Returns the number of set bits.
    #[must_use]
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Returns the number of clear bits.
    #[must_use]
    pub fn count_zeros(&self) -> usize {
        self.bits - self.count_ones()
    }

    /// Returns an iterator over every bit value, bit 0 first.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let bits = BitVector::from_bytes(vec![0b0000_0101])?;
    /// let values: Vec<bool> = bits.iter().take(4).collect();
    /// assert_eq!(values, [true, false, true, false]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(self)
    }

    /// Returns an iterator over the indices of set bits in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(24)?;
    /// bits.set(1)?.set(9)?.set(23)?;
    ///
    /// let ones: Vec<usize> = bits.iter_ones().collect();
    /// assert_eq!(ones, [1, 9, 23]);
    /// let rev: Vec<usize> = bits.iter_ones().rev().collect();
    /// assert_eq!(rev, [23, 9, 1]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[must_use]
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones::new(&self.bytes)
    }

    /// Fails with [`BitVectorError::LengthMismatch`] unless `other` has the
    /// same bit length.
    #[inline]
    pub(crate) fn check_same_len(&self, other: &Self) -> Result<()> {
        if self.bits != other.bits {
            return Err(BitVectorError::LengthMismatch {
                expected: self.bits,
                actual: other.bits,
            });
        }
        Ok(())
    }
}
