// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Challenge and transport serialization.
//!
//! Every value that crosses the proof boundary (elements, scalars,
//! [wide][`crate::groups::productgroup::Wide`] values, keys, ciphertexts and
//! proofs) implements [`VSerializable`] and [`VDeserializable`]. The encoding
//! is deterministic, so it doubles as the challenge input of the
//! [Fiat-Shamir transform][`crate::zkp::sigma`].
//!
//! Composite values are a sequence of fields, each field prefixed with its
//! length as a 4-byte big-endian integer. Deserialization of elements and
//! scalars validates group membership and canonical encoding.
//!
//! * NOTE: Changes to implementations break challenge computation. **In particular,
//!   serialization inconsistencies cause otherwise valid proofs to fail.**
//!
//! # Examples
//! ```
//! use elgamal_writein::context::Context;
//! use elgamal_writein::context::RistrettoCtx as Ctx;
//! use elgamal_writein::utils::serialization::{VDeserializable, VSerializable};
//! use elgamal_writein::utils::serialization::{deser_fields, ser_fields};
//! use rand::rngs::OsRng;
//!
//! let element = Ctx::random_element(&mut OsRng).unwrap();
//! let scalar = Ctx::random_scalar(&mut OsRng).unwrap();
//!
//! let bytes = ser_fields(&[&element.ser(), &scalar.ser()]);
//! let fields = deser_fields(&bytes, 2).unwrap();
//!
//! let element_back = <Ctx as Context>::Element::deser(fields[0]).unwrap();
//! let scalar_back = <Ctx as Context>::Scalar::deser(fields[1]).unwrap();
//! assert_eq!(element, element_back);
//! assert_eq!(scalar, scalar_back);
//! ```
//!
//! If the `serde` feature is enabled this module also provides an
//! adapter implementation of serde traits, based on these
//! serialization implementations.

use crate::utils::error::Error;

#[cfg(feature = "serde")]
/// Serde implementations built on `VSerializable` traits
pub mod serde;

/// Size in bytes of the length prefix of each field.
pub const LENGTH_PREFIX_BYTES: usize = 4;

/**
 * Types that can be serialized into a deterministic byte sequence.
 */
pub trait VSerializable {
    /// Serialize this value.
    fn ser(&self) -> Vec<u8>;
}

/**
 * Types that can be parsed back from the output of [`VSerializable::ser`].
 */
pub trait VDeserializable: Sized {
    /// Deserialize a value, validating it.
    ///
    /// # Errors
    ///
    /// - `DeserializationError` if the bytes are not a valid encoding
    /// - `DeserializationLengthError` if the bytes have the wrong length
    fn deser(buffer: &[u8]) -> Result<Self, Error>;
}

/// Append a length prefixed field to the buffer.
pub fn write_field(buffer: &mut Vec<u8>, field: &[u8]) {
    // fields are group encodings and small composites, far below 4 GiB
    #[allow(clippy::cast_possible_truncation)]
    let len = field.len() as u32;
    buffer.extend_from_slice(&len.to_be_bytes());
    buffer.extend_from_slice(field);
}

/// Serialize a sequence of fields, each with its length prefix.
pub fn ser_fields(fields: &[&[u8]]) -> Vec<u8> {
    let total: usize = fields
        .iter()
        .map(|f| f.len().saturating_add(LENGTH_PREFIX_BYTES))
        .sum();
    let mut buffer = Vec::with_capacity(total);
    for field in fields {
        write_field(&mut buffer, field);
    }

    buffer
}

/// Parse the field starting at `offset`, returning the field and the offset past it.
fn read_field(buffer: &[u8], offset: usize) -> Result<(&[u8], usize), Error> {
    let prefix_end = offset
        .checked_add(LENGTH_PREFIX_BYTES)
        .ok_or_else(|| Error::DeserializationError("Field offset overflow".into()))?;
    let prefix = get_slice(buffer, offset..prefix_end)?;
    let len = u32::from_be_bytes(<[u8; LENGTH_PREFIX_BYTES]>::try_from(prefix)?);
    let len = usize::try_from(len)?;

    let end = prefix_end
        .checked_add(len)
        .ok_or_else(|| Error::DeserializationError("Field length overflow".into()))?;
    let field = get_slice(buffer, prefix_end..end)?;

    Ok((field, end))
}

/// Parse every length prefixed field in the buffer.
///
/// # Errors
///
/// - `DeserializationError` if a field is truncated
pub fn deser_all_fields(buffer: &[u8]) -> Result<Vec<&[u8]>, Error> {
    let mut fields = vec![];
    let mut offset = 0;
    while offset < buffer.len() {
        let (field, next) = read_field(buffer, offset)?;
        fields.push(field);
        offset = next;
    }

    Ok(fields)
}

/// Parse exactly `count` length prefixed fields.
///
/// # Errors
///
/// - `DeserializationError` if a field is truncated, or the number of fields is not `count`
pub fn deser_fields(buffer: &[u8], count: usize) -> Result<Vec<&[u8]>, Error> {
    let fields = deser_all_fields(buffer)?;
    if fields.len() != count {
        return Err(Error::DeserializationError(format!(
            "Expected {count} fields, found {}",
            fields.len()
        )));
    }

    Ok(fields)
}

/// Helper to get a slice from a buffer, returning an error if the range is out of bounds
///
/// If we were to instead use raw slice indexing (e.g., `&buffer[start..end]`) it would panic
/// if the range is out of bounds. This function returns a proper error instead.
pub(crate) fn get_slice(buffer: &[u8], range: std::ops::Range<usize>) -> Result<&[u8], Error> {
    buffer.get(range).ok_or_else(|| {
        Error::DeserializationError("Input bytes too short to contain length prefix".into())
    })
}
