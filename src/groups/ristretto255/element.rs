// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement implementations for the Ristretto255 group

use crate::groups::ristretto255::scalar::RistrettoScalar;
use crate::traits::groups::GroupElement;
use crate::utils::error::Error;
use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use curve25519_dalek::traits::Identity;

/**
 * A [`GroupElement`] implementation for the [Ristretto](https://docs.rs/curve25519-dalek/latest/curve25519_dalek/ristretto/index.html) group.
 */
#[derive(Copy, Clone, Debug)]
pub struct RistrettoElement(pub RistrettoPoint);

impl RistrettoElement {
    /// Create a new `RistrettoElement` from a dalek point.
    #[must_use]
    pub fn new(point: RistrettoPoint) -> Self {
        RistrettoElement(point)
    }
}

// curve arithmetic
#[allow(clippy::arithmetic_side_effects)]
impl GroupElement for RistrettoElement {
    type Scalar = RistrettoScalar;

    #[inline]
    fn one() -> Self {
        RistrettoElement(RistrettoPoint::identity())
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        RistrettoElement(self.0 + other.0)
    }

    #[inline]
    fn inv(&self) -> Self {
        RistrettoElement(-self.0)
    }

    #[inline]
    fn exp(&self, scalar: &Self::Scalar) -> Self {
        RistrettoElement(self.0 * scalar.0)
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq for RistrettoElement {
    fn eq(&self, other: &Self) -> bool {
        GroupElement::equals(self, other)
    }
}

impl Eq for RistrettoElement {}

use crate::utils::serialization::{VDeserializable, VSerializable};

impl VSerializable for RistrettoElement {
    fn ser(&self) -> Vec<u8> {
        self.0.compress().to_bytes().to_vec()
    }
}

impl VDeserializable for RistrettoElement {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let compressed = CompressedRistretto::from_slice(buffer)?;
        let point = compressed.decompress().ok_or_else(|| {
            Error::DeserializationError(
                "Failed to decompress Ristretto point".to_string(),
            )
        })?;

        Ok(RistrettoElement(point))
    }
}
