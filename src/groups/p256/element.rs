// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement implementations for P-256 group

use crate::groups::p256::scalar::P256Scalar;
use crate::traits::groups::GroupElement;
use crate::utils::error::Error;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{AffinePoint, EncodedPoint, ProjectivePoint};

/**
 * A [`GroupElement`] implementation for the P-256 group.
 */
#[derive(Debug, Clone, Copy)]
pub struct P256Element(pub ProjectivePoint);

impl P256Element {
    /// Create a new `P256Element` from a p256 [`ProjectivePoint`].
    #[must_use]
    pub fn new(point: ProjectivePoint) -> Self {
        P256Element(point)
    }
}

#[allow(clippy::arithmetic_side_effects)]
impl GroupElement for P256Element {
    type Scalar = P256Scalar;

    fn one() -> Self {
        P256Element(ProjectivePoint::IDENTITY)
    }

    fn mul(&self, other: &Self) -> Self {
        P256Element(self.0 + other.0)
    }

    fn inv(&self) -> Self {
        P256Element(-self.0)
    }

    fn exp(&self, scalar: &Self::Scalar) -> Self {
        P256Element(self.0 * scalar.0)
    }

    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialEq for P256Element {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
impl Eq for P256Element {}

use crate::utils::serialization::{VDeserializable, VSerializable};

/// Compressed SEC1 encoding; the identity encodes as a single zero byte.
impl VSerializable for P256Element {
    fn ser(&self) -> Vec<u8> {
        self.0.to_affine().to_encoded_point(true).as_bytes().to_vec()
    }
}

impl VDeserializable for P256Element {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let encoded = EncodedPoint::from_bytes(buffer).map_err(|e| {
            Error::DeserializationError(format!("Invalid SEC1 encoding: {e}"))
        })?;

        let point: Option<AffinePoint> = AffinePoint::from_encoded_point(&encoded).into();
        let point = point.ok_or_else(|| {
            Error::DeserializationError("Point is not on curve P-256".to_string())
        })?;

        Ok(P256Element(ProjectivePoint::from(point)))
    }
}
