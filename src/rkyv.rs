//! Rkyv implementation for `BitVector`.
//!
//! A vector archives as its storage bytes; the bit length is implied by the
//! byte count.

use rkyv::{
    Archive, Deserialize, Place, Serialize,
    rancor::{Fallible, Source},
    ser::{Allocator, Writer},
    vec::ArchivedVec,
};

use crate::BitVector;

/// The archived version of `BitVector`.
pub type ArchivedBitVector = ArchivedVec<<u8 as rkyv::Archive>::Archived>;

/// The resolver for `BitVector`.
pub type BitVectorResolver = rkyv::vec::VecResolver;

impl Archive for BitVector {
    type Archived = ArchivedBitVector;
    type Resolver = BitVectorResolver;

    fn resolve(&self, resolver: Self::Resolver, out: Place<Self::Archived>) {
        ArchivedVec::resolve_from_slice(self.as_bytes(), resolver, out);
    }
}

impl<S: Fallible + Allocator + Writer + ?Sized> Serialize<S> for BitVector {
    #[inline]
    fn serialize(&self, serializer: &mut S) -> Result<Self::Resolver, S::Error> {
        ArchivedVec::<u8>::serialize_from_slice(self.as_bytes(), serializer)
    }
}

// An archive that validates can still hold zero bytes, which is not a valid
// bit vector, so deserialization reports it through the deserializer's error.
impl<D> Deserialize<BitVector, D> for ArchivedBitVector
where
    D: Fallible + ?Sized,
    D::Error: Source,
{
    #[inline]
    fn deserialize(&self, _deserializer: &mut D) -> Result<BitVector, D::Error> {
        BitVector::from_bytes(self.as_slice()).map_err(D::Error::new)
    }
}

// ============================================================================
// Tests
// ============================================================================
