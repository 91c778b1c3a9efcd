//! Logical shifts for `BitVector`.
//!
//! A shift by `n` bits is split into a move of `n / 8` whole bytes followed by
//! a carry chain that moves the remaining `n % 8` bits across each byte
//! boundary. Bits shifted past either end are discarded and vacated bits are
//! zero; the bit length never changes.

use core::ops::{ShlAssign, ShrAssign};

use crate::{
    BitVector,
    macros::bytepos,
    storage::{BITS_PER_BYTE, HIGH_MASKS, LOW_MASKS},
};

impl BitVector {
    /// Shifts the bits by `n` positions.
    ///
    /// A positive `n` moves bits toward higher indices (a left shift), a
    /// negative `n` toward lower indices (a right shift). Zero is a no-op;
    /// use `shift(1)` for a single-step left shift.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(16)?;
    /// bits.set(0)?.set(7)?;
    ///
    /// bits.shift(3);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), [3, 10]);
    ///
    /// bits.shift(-10);
    /// assert_eq!(bits.iter_ones().collect::<Vec<_>>(), [0]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn shift(&mut self, n: isize) -> &mut Self {
        if n < 0 {
            self.shr(n.unsigned_abs())
        } else {
            self.shl(n.unsigned_abs())
        }
    }

    /// Shifts all bits toward higher indices by `n` positions.
    ///
    /// Bits that would move past the last index are lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::from_bytes(vec![0b1000_0001, 0x00])?;
    /// bits.shl(1);
    /// assert_eq!(bits.as_bytes(), &[0b0000_0010, 0b0000_0001]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn shl(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        log::trace!("shifting {}-bit vector left by {}", self.bits, n);

        let len = self.bytes.len();
        let (nbytes, nbits) = bytepos!(n);
        if nbytes >= len {
            self.bytes.fill(0);
            return self;
        }

        if nbytes > 0 {
            self.bytes.copy_within(..len - nbytes, nbytes);
            self.bytes[..nbytes].fill(0);
        }

        if nbits > 0 {
            let mask = HIGH_MASKS[nbits];
            let back = (BITS_PER_BYTE - nbits) as u32;
            let mut carry = 0u8;
            for byte in &mut self.bytes[nbytes..] {
                let out = (*byte & mask) >> back;
                *byte = (*byte << nbits) | carry;
                carry = out;
            }
        }

        self
    }

    /// Shifts all bits toward lower indices by `n` positions.
    ///
    /// Bits that would move below index 0 are lost.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::from_bytes(vec![0x00, 0b0000_0011])?;
    /// bits.shr(1);
    /// assert_eq!(bits.as_bytes(), &[0b1000_0000, 0b0000_0001]);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    pub fn shr(&mut self, n: usize) -> &mut Self {
        if n == 0 {
            return self;
        }
        log::trace!("shifting {}-bit vector right by {}", self.bits, n);

        let len = self.bytes.len();
        let (nbytes, nbits) = bytepos!(n);
        if nbytes >= len {
            self.bytes.fill(0);
            return self;
        }

        let kept = len - nbytes;
        if nbytes > 0 {
            self.bytes.copy_within(nbytes.., 0);
            self.bytes[kept..].fill(0);
        }

        if nbits > 0 {
            let mask = LOW_MASKS[nbits];
            let back = (BITS_PER_BYTE - nbits) as u32;
            let mut carry = 0u8;
            for byte in self.bytes[..kept].iter_mut().rev() {
                let out = (*byte & mask) << back;
                *byte = (*byte >> nbits) | carry;
                carry = out;
            }
        }

        self
    }
}

impl ShlAssign<usize> for BitVector {
    /// Shifts the bits toward higher indices in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagged_bitvec::BitVector;
    ///
    /// let mut bits = BitVector::new(8)?;
    /// bits.set(1)?;
    /// bits <<= 2;
    /// assert!(bits.test(3)?);
    /// # Ok::<(), tagged_bitvec::BitVectorError>(())
    /// ```
    #[inline]
    fn shl_assign(&mut self, n: usize) {
        self.shl(n);
    }
}

impl ShrAssign<usize> for BitVector {
    /// Shifts the bits toward lower indices in place.
    #[inline]
    fn shr_assign(&mut self, n: usize) {
        self.shr(n);
    }
}
