// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupScalar implementations for the modular group

use crate::groups::modp::{Q, mul_mod, pow_mod};
use crate::traits::groups::GroupScalar;
use crate::utils::error::Error as CryptographyError;

/**
 * A [`GroupScalar`] implementation for the [modular group][`crate::groups::modp`].
 *
 * The wrapped value is always reduced, `0 <= value < q`.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModPScalar(pub(crate) u64);

impl ModPScalar {
    /// Create a new `ModPScalar`, reducing the value modulo `q`.
    #[must_use]
    pub fn new(value: u64) -> Self {
        #[allow(clippy::arithmetic_side_effects)]
        ModPScalar(value % Q)
    }

    /// Returns the reduced value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

// operands are reduced below q < 2^62, so sums cannot overflow
#[allow(clippy::arithmetic_side_effects)]
impl GroupScalar for ModPScalar {
    #[inline]
    fn zero() -> Self {
        ModPScalar(0)
    }

    #[inline]
    fn one() -> Self {
        ModPScalar(1)
    }

    #[inline]
    fn add(&self, other: &Self) -> Self {
        ModPScalar((self.0 + other.0) % Q)
    }

    #[inline]
    fn sub(&self, other: &Self) -> Self {
        ModPScalar((self.0 + Q - other.0) % Q)
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        ModPScalar(mul_mod(self.0, other.0, Q))
    }

    #[inline]
    fn neg(&self) -> Self {
        ModPScalar((Q - self.0) % Q)
    }

    fn inv(&self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(ModPScalar(pow_mod(self.0, Q - 2, Q)))
        }
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for ModPScalar {
    fn from(u: u32) -> ModPScalar {
        ModPScalar(u64::from(u))
    }
}

use crate::utils::serialization::{VDeserializable, VSerializable};

impl VSerializable for ModPScalar {
    fn ser(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }
}

impl VDeserializable for ModPScalar {
    fn deser(buffer: &[u8]) -> Result<Self, CryptographyError> {
        let bytes = <[u8; 8]>::try_from(buffer)?;
        let value = u64::from_be_bytes(bytes);
        if value >= Q {
            return Err(CryptographyError::DeserializationError(
                "Modular scalar is not reduced".to_string(),
            ));
        }

        Ok(ModPScalar(value))
    }
}
