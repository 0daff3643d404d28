// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Scalars modulo the P-256 group order

use std::ops::Neg;

use p256::Scalar;
use p256::elliptic_curve::PrimeField;
use p256::elliptic_curve::bigint::U256;
use p256::elliptic_curve::ops::Reduce;

use crate::traits::groups::GroupScalar;
use crate::utils::error::Error;
use crate::utils::serialization::{VDeserializable, VSerializable};

/**
 * A [`GroupScalar`] of the P-256 group.
 *
 * Encoded as 32 canonical big-endian bytes.
 */
#[derive(Debug, Clone, Copy)]
pub struct P256Scalar(pub Scalar);

#[allow(clippy::arithmetic_side_effects)]
impl GroupScalar for P256Scalar {
    fn zero() -> Self {
        P256Scalar(Scalar::ZERO)
    }

    fn one() -> Self {
        P256Scalar(Scalar::ONE)
    }

    fn add(&self, other: &Self) -> Self {
        P256Scalar(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        P256Scalar(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        P256Scalar(self.0 * other.0)
    }

    fn neg(&self) -> Self {
        P256Scalar(self.0.neg())
    }

    fn inv(&self) -> Option<Self> {
        let inverted: Option<Scalar> = self.0.invert().into();
        inverted.map(P256Scalar)
    }

    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Reduces 32 byte chunks with the curve's reduction, combining them
    /// with the generic big-endian accumulation.
    fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        // 2^256 mod n
        let shift = Scalar::reduce(U256::MAX) + Scalar::ONE;

        let pad = (32 - bytes.len() % 32) % 32;
        let mut padded = vec![0u8; pad];
        padded.extend_from_slice(bytes);

        let reduced = padded.chunks_exact(32).fold(Scalar::ZERO, |acc, chunk| {
            let chunk = Scalar::reduce(U256::from_be_slice(chunk));
            acc * shift + chunk
        });

        P256Scalar(reduced)
    }
}

impl From<u32> for P256Scalar {
    fn from(u: u32) -> P256Scalar {
        P256Scalar(Scalar::from(u64::from(u)))
    }
}

impl PartialEq for P256Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for P256Scalar {}

impl VSerializable for P256Scalar {
    fn ser(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl VDeserializable for P256Scalar {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 32]>::try_from(buffer)?;

        let scalar: Option<Scalar> = Scalar::from_repr(bytes.into()).into();
        scalar.map(P256Scalar).ok_or_else(|| {
            Error::DeserializationError("P-256 scalar is not canonical".to_string())
        })
    }
}
