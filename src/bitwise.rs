//! Length-checked bitwise algebra for `BitVector`.

use crate::{BitVector, traits::Result};

impl BitVector {
    /// Applies `f` to each byte of `self` paired with the matching byte of
    /// `other`, after checking that both have the same bit length.
    #[inline(always)]
    fn zip_with(&mut self, other: &Self, f: impl Fn(u8, u8) -> u8) -> Result<&mut Self> {
        self.check_same_len(other)?;
        for (dst, &src) in self.bytes.iter_mut().zip(&other.bytes) {
            *dst = f(*dst, src);
        }
        Ok(self)
    }

    /// Performs a bitwise AND with `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ; `self` is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut a = BitVector::from_bytes(vec![0b1100])?;
    /// let b = BitVector::from_bytes(vec![0b1010])?;
    /// a.and(&b)?;
    /// assert_eq!(a.as_bytes(), &[0b1000]);
    ///
    /// let c = BitVector::new(16)?;
    /// assert!(a.and(&c).is_err());
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn and(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with(other, |a, b| a & b)
    }

    /// Performs a bitwise OR with `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ.
    pub fn or(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with(other, |a, b| a | b)
    }

    /// Performs a bitwise XOR with `other` in place.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ.
    pub fn xor(&mut self, other: &Self) -> Result<&mut Self> {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// Replaces `self` with `!(self & other)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ.
    pub fn nand(&mut self, other: &Self) -> Result<&mut Self> {
        Ok(self.and(other)?.complement())
    }

    /// Replaces `self` with `!(self | other)`.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut a = BitVector::from_bytes(vec![0b0000_1100])?;
    /// let b = BitVector::from_bytes(vec![0b0000_1010])?;
    /// a.nor(&b)?;
    /// assert_eq!(a.as_bytes(), &[0b1111_0001]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn nor(&mut self, other: &Self) -> Result<&mut Self> {
        Ok(self.or(other)?.complement())
    }

    /// Flips every bit in place (bitwise NOT).
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::from_bytes(vec![0x0F, 0x00])?;
    /// bits.complement();
    /// assert_eq!(bits.as_bytes(), &[0xF0, 0xFF]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn complement(&mut self) -> &mut Self {
        for byte in &mut self.bytes {
            *byte = !*byte;
        }
        self
    }

    /// Compares two vectors of the same length bit for bit.
    ///
    /// Unlike `==`, which reports vectors of different lengths as unequal,
    /// this treats a length difference as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BitVectorError::LengthMismatch`](crate::BitVectorError::LengthMismatch)
    /// if the bit lengths differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let a = BitVector::from_bytes(vec![0x01])?;
    /// let mut b = BitVector::new(8)?;
    /// assert!(!a.equal(&b)?);
    /// b.set(0)?;
    /// assert!(a.equal(&b)?);
    /// assert!(a.equal(&BitVector::new(16)?).is_err());
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn equal(&self, other: &Self) -> Result<bool> {
        self.check_same_len(other)?;
        Ok(self.bytes == other.bytes)
    }
}
