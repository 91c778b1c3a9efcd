//! Serde implementations for `BitVector`.
//!
//! The default implementation writes the tagged base64 text form to
//! human-readable formats and the raw storage bytes to binary formats. The
//! submodules offer other representations for use with
//! `#[serde(with = "...")]`.

use super::{BitVector, Format};
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

/// Serde implementation serializing the bitmap as its storage bytes.
///
/// Human-readable formats receive the bytes as untagged base64 text; binary
/// formats receive them as a byte string.
pub mod bytes {
    use super::*;

    /// Serialize the [`BitVector`] as its storage bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the serializer fails.
    pub fn serialize<S>(b: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(&data_encoding::BASE64.encode(b.as_bytes()))
        } else {
            serializer.serialize_bytes(b.as_bytes())
        }
    }

    /// Deserialize a [`BitVector`] from its storage bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty, is not valid base64 in a
    /// human-readable format, or if deserialization fails.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            struct Base64Visitor;

            impl Visitor<'_> for Base64Visitor {
                type Value = BitVector;

                fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                    formatter.write_str("base64 encoded bytes of a bit vector")
                }

                fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
                where
                    E: de::Error,
                {
                    let decoded = data_encoding::BASE64
                        .decode(v.as_bytes())
                        .map_err(E::custom)?;
                    BitVector::from_bytes(decoded).map_err(E::custom)
                }
            }

            deserializer.deserialize_str(Base64Visitor)
        } else {
            deserializer.deserialize_bytes(BytesVisitor)
        }
    }
}

/// Macro to implement tagged-text serialization and deserialization for
/// [`BitVector`].
macro_rules! impl_text {
    ($mod:ident, $format:expr, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Deserialization accepts any of the text forms, not only the one
        /// this module writes.
        pub mod $mod {
            use super::*;

            /// Serialize the [`BitVector`] as text.
            ///
            /// # Errors
            ///
            /// Returns an error if the serializer fails to serialize the string.
            pub fn serialize<S>(b: &BitVector, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&b.stringify($format))
            }

            /// Deserialize a [`BitVector`] from text.
            ///
            /// # Errors
            ///
            /// Returns an error if the text does not parse as a bit vector.
            pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVector, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_str(TextVisitor)
            }
        }
    };
}

impl_text!(
    digits,
    Format::Digits,
    "Serialize and deserialize [`BitVector`] as untagged `0`/`1` digits."
);
impl_text!(
    binary,
    Format::Binary,
    "Serialize and deserialize [`BitVector`] as tagged `0`/`1` digits."
);
impl_text!(
    hex,
    Format::Hex,
    "Serialize and deserialize [`BitVector`] as tagged hexadecimal text."
);
impl_text!(
    base64,
    Format::Base64,
    "Serialize and deserialize [`BitVector`] as tagged base64 text."
);

impl Serialize for BitVector {
    /// Serialize the [`BitVector`] as tagged base64 text in human-readable
    /// formats and as raw bytes otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            base64::serialize(self, serializer)
        } else {
            serializer.serialize_bytes(self.as_bytes())
        }
    }
}

impl<'de> Deserialize<'de> for BitVector {
    /// Deserialize a [`BitVector`] from any text form in human-readable
    /// formats and from raw bytes otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_str(TextVisitor)
        } else {
            deserializer.deserialize_bytes(BytesVisitor)
        }
    }
}

/// Parses any text form with [`BitVector::parse`].
struct TextVisitor;

impl Visitor<'_> for TextVisitor {
    type Value = BitVector;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a bit vector in text form")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BitVector::parse(v).map_err(E::custom)
    }
}

/// Wraps raw storage bytes with [`BitVector::from_bytes`].
struct BytesVisitor;

impl<'de> Visitor<'de> for BytesVisitor {
    type Value = BitVector;

    fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        formatter.write_str("a non-empty byte string")
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_empty() {
            return Err(de::Error::invalid_length(0, &self));
        }
        BitVector::from_bytes(v).map_err(E::custom)
    }

    fn visit_byte_buf<E>(self, v: alloc::vec::Vec<u8>) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        if v.is_empty() {
            return Err(de::Error::invalid_length(0, &self));
        }
        BitVector::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut bytes = alloc::vec::Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(byte) = seq.next_element::<u8>()? {
            bytes.push(byte);
        }
        self.visit_byte_buf(bytes)
    }
}
