//! A fixed-length, byte-packed bit vector with self-describing text encodings.
//!
//! This crate provides [`BitVector`], a bit vector whose length is chosen at
//! construction and only changes through an explicit
//! [`resize`](BitVector::resize). Lengths are always a positive multiple of 8,
//! so every stored bit is a logical bit and there is no padding to mask.
//!
//! # Features
//!
//! - **Index-level access** with strict range checks
//! - **In-place bitwise algebra** (`and`, `or`, `xor`, `nand`, `nor`, `not`)
//!   that refuses operands of a different length
//! - **Logical shifts** in either direction across byte boundaries
//! - **Tagged text encodings** (binary digits, hexadecimal, base64) that carry
//!   the bit length and parse back to an equal vector
//! - **Serialization support** via serde and rkyv (optional)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use tagged_bitvec::{BitVector, Format};
//!
//! let mut bits = BitVector::new(16)?;
//! bits.set(0)?.set(1)?.set(8)?.set(15)?;
//!
//! assert_eq!(bits.stringify(Format::Binary), "BitVector:01(16):1000000100000011");
//! assert_eq!(bits.stringify(Format::Hex), "BitVector:HEX(16):8103");
//! assert_eq!(bits.stringify(Format::Base64), "BitVector:BASE64(16):A4E=");
//!
//! let parsed = BitVector::parse("BitVector:HEX(16):8103")?;
//! assert!(parsed.equal(&bits)?);
//!
//! // Mutating methods return the receiver so calls chain.
//! let mut mask = BitVector::new(16)?;
//! mask.set_all().shift(-4);
//! bits.and(&mask)?.complement();
//! assert_eq!(bits.to_string(), "1111111011111100");
//! # Ok::<(), tagged_bitvec::BitVectorError>(())
//! ```
//!
//! # Bit Layout
//!
//! Bit `n` lives in byte `n / 8` under mask `1 << (n % 8)`. Byte 0 therefore
//! holds bits 0 through 7, with bit 0 in its least significant position. The
//! text forms print the highest bit first, which makes the digit string read
//! like an ordinary binary number.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
mod bitvector;
mod bitwise;
mod codec;
mod iter;
mod macros;
mod shift;
pub mod storage;
pub mod traits;

#[cfg(feature = "rkyv")]
pub mod rkyv;

#[cfg(feature = "rkyv")]
pub use rkyv::{ArchivedBitVector, BitVectorResolver};

#[cfg(feature = "serde")]
pub mod serde;

// Re-exports
pub use bitvector::BitVector;
pub use codec::Format;
pub use iter::{Bits, Ones};
pub use traits::{BitVectorError, Result};
