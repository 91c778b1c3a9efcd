//! Iterator implementations for `BitVector`.

use core::iter::FusedIterator;

use crate::{BitVector, macros::bytepos, storage::BITS_PER_BYTE};

/// An iterator over the values of every bit in a [`BitVector`], bit 0 first.
///
/// This struct is created by the [`iter`](BitVector::iter) method.
#[derive(Clone, Debug)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    front: usize,
    back: usize,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(bits: &'a BitVector) -> Self {
        Self {
            bytes: bits.as_bytes(),
            front: 0,
            back: bits.bit_len(),
        }
    }

    #[inline]
    fn bit(&self, i: usize) -> bool {
        let (idx, bp) = bytepos!(i);
        (self.bytes[idx] >> bp) & 1 != 0
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    #[inline]
    fn next(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        let v = self.bit(self.front);
        self.front += 1;
        Some(v)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Bits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<bool> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        Some(self.bit(self.back))
    }
}

impl ExactSizeIterator for Bits<'_> {}
impl FusedIterator for Bits<'_> {}

/// An iterator over the indices of set bits in a [`BitVector`].
///
/// This struct is created by the [`iter_ones`](BitVector::iter_ones) method.
/// It yields indices in ascending order, or descending order when driven from
/// the back.
#[derive(Clone, Debug)]
pub struct Ones<'a> {
    bytes: &'a [u8],
    /// Byte offset of `head` within the vector.
    head_idx: usize,
    /// Remaining set bits of the front byte.
    head: u8,
    /// Byte offset of `tail` within the vector.
    tail_idx: usize,
    /// Remaining set bits of the back byte.
    tail: u8,
}

impl<'a> Ones<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        match bytes {
            [] => Self {
                bytes,
                head_idx: 0,
                head: 0,
                tail_idx: 0,
                tail: 0,
            },
            [first, .., last] => Self {
                bytes: &bytes[1..bytes.len() - 1],
                head_idx: 0,
                head: *first,
                tail_idx: bytes.len() - 1,
                tail: *last,
            },
            [only] => Self {
                bytes: &[],
                head_idx: 0,
                head: *only,
                tail_idx: 0,
                tail: 0,
            },
        }
    }
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.head != 0 {
                let bit = self.head.trailing_zeros() as usize;
                self.head &= self.head - 1;
                return Some(self.head_idx * BITS_PER_BYTE + bit);
            }
            if let [next, rest @ ..] = self.bytes {
                self.head = *next;
                self.head_idx += 1;
                self.bytes = rest;
                continue;
            }
            // Only the back byte is left; take it over.
            if self.tail == 0 {
                return None;
            }
            self.head = self.tail;
            self.head_idx = self.tail_idx;
            self.tail = 0;
        }
    }
}

impl DoubleEndedIterator for Ones<'_> {
    fn next_back(&mut self) -> Option<usize> {
        loop {
            if self.tail != 0 {
                let bit = 7 - self.tail.leading_zeros() as usize;
                self.tail &= !(1 << bit);
                return Some(self.tail_idx * BITS_PER_BYTE + bit);
            }
            if let [rest @ .., prev] = self.bytes {
                self.tail = *prev;
                self.tail_idx -= 1;
                self.bytes = rest;
                continue;
            }
            if self.head == 0 {
                return None;
            }
            self.tail = self.head;
            self.tail_idx = self.head_idx;
            self.head = 0;
        }
    }
}

impl FusedIterator for Ones<'_> {}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
