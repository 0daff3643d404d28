// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement implementations for the modular group

use crate::groups::modp::scalar::ModPScalar;
use crate::groups::modp::{P, Q, mul_mod, pow_mod};
use crate::traits::groups::GroupElement;
use crate::utils::error::Error;

/**
 * A [`GroupElement`] implementation for the [modular group][`crate::groups::modp`].
 *
 * The wrapped value is a quadratic residue in `[1, p)`.
 */
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModPElement(pub(crate) u64);

impl ModPElement {
    /// Returns the residue representing this element.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns true if the value is an element of the order `q` subgroup.
    #[must_use]
    pub fn is_member(value: u64) -> bool {
        value != 0 && value < P && pow_mod(value, Q, P) == 1
    }
}

#[allow(clippy::arithmetic_side_effects)]
impl GroupElement for ModPElement {
    type Scalar = ModPScalar;

    #[inline]
    fn one() -> Self {
        ModPElement(1)
    }

    #[inline]
    fn mul(&self, other: &Self) -> Self {
        ModPElement(mul_mod(self.0, other.0, P))
    }

    #[inline]
    fn inv(&self) -> Self {
        // Fermat inverse in Z_p^*
        ModPElement(pow_mod(self.0, P - 2, P))
    }

    #[inline]
    fn exp(&self, scalar: &Self::Scalar) -> Self {
        ModPElement(pow_mod(self.0, scalar.0, P))
    }

    #[inline]
    fn equals(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

use crate::utils::serialization::{VDeserializable, VSerializable};

impl VSerializable for ModPElement {
    fn ser(&self) -> Vec<u8> {
        self.0.to_be_bytes().to_vec()
    }
}

impl VDeserializable for ModPElement {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let bytes = <[u8; 8]>::try_from(buffer)?;
        let value = u64::from_be_bytes(bytes);
        if !Self::is_member(value) {
            return Err(Error::DeserializationError(
                "Value is not an element of the modular group".to_string(),
            ));
        }

        Ok(ModPElement(value))
    }
}
