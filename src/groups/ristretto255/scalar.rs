// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Scalars modulo the Ristretto255 group order

use curve25519_dalek::scalar::Scalar;
use sha3::digest::Digest;
use sha3::digest::typenum::U64;

use crate::traits::groups::GroupScalar;
use crate::utils::error::Error;
use crate::utils::serialization::{VDeserializable, VSerializable};

/**
 * A [`GroupScalar`] of the Ristretto255 group.
 *
 * Encoded as 32 canonical little-endian bytes.
 */
#[derive(Copy, Clone, Debug)]
pub struct RistrettoScalar(pub Scalar);

impl RistrettoScalar {
    /// Reduce a 64 byte digest modulo the group order.
    pub fn from_hash<D: Digest<OutputSize = U64>>(hasher: D) -> Self {
        RistrettoScalar(Scalar::from_hash::<D>(hasher))
    }
}

// curve arithmetic
#[allow(clippy::arithmetic_side_effects)]
impl GroupScalar for RistrettoScalar {
    fn zero() -> Self {
        RistrettoScalar(Scalar::ZERO)
    }

    fn one() -> Self {
        RistrettoScalar(Scalar::ONE)
    }

    fn add(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 + other.0)
    }

    fn sub(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 - other.0)
    }

    fn mul(&self, other: &Self) -> Self {
        RistrettoScalar(self.0 * other.0)
    }

    fn neg(&self) -> Self {
        RistrettoScalar(-self.0)
    }

    fn inv(&self) -> Option<Self> {
        (self.0 != Scalar::ZERO).then(|| RistrettoScalar(self.0.invert()))
    }

    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    /// Wide reduction of up to 64 bytes, falling back to the generic
    /// reduction for longer inputs.
    fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        if bytes.len() > 64 {
            let base = Self::from(256u32);
            return bytes.iter().fold(Self::zero(), |acc, byte| {
                acc.mul(&base).add(&Self::from(u32::from(*byte)))
            });
        }

        // big-endian input, little-endian wide buffer
        let mut wide = [0u8; 64];
        for (dst, src) in wide.iter_mut().zip(bytes.iter().rev()) {
            *dst = *src;
        }

        RistrettoScalar(Scalar::from_bytes_mod_order_wide(&wide))
    }
}

impl From<u32> for RistrettoScalar {
    fn from(u: u32) -> RistrettoScalar {
        RistrettoScalar(Scalar::from(u))
    }
}

impl PartialEq for RistrettoScalar {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for RistrettoScalar {}

impl VSerializable for RistrettoScalar {
    fn ser(&self) -> Vec<u8> {
        self.0.to_bytes().to_vec()
    }
}

impl VDeserializable for RistrettoScalar {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 32]>::try_from(buffer)?;

        let scalar: Option<Scalar> = Scalar::from_canonical_bytes(bytes).into();
        scalar.map(RistrettoScalar).ok_or_else(|| {
            Error::DeserializationError("Ristretto scalar is not canonical".to_string())
        })
    }
}
