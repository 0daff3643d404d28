// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CryptographicGroup implementations for the modular group

use crate::groups::modp::element::ModPElement;
use crate::groups::modp::scalar::ModPScalar;
use crate::groups::modp::{GENERATOR, ORDER_BITS};
use crate::traits::groups::CryptographicGroup;
use crate::traits::groups::GroupElement;
use crate::traits::groups::GroupScalar;

use crate::utils::error::Error;
use crate::utils::hash::{self, Hasher, update_hasher};
use sha3::Digest;

/// Modular implementation of [`CryptographicGroup`]
pub struct ModPGroup;

impl CryptographicGroup for ModPGroup {
    type Element = ModPElement;
    type Scalar = ModPScalar;
    type Hasher = hash::Hasher256;

    const ORDER_BITS: u32 = ORDER_BITS;
    const NAME: &'static str = "modp-63";

    fn generator() -> Self::Element {
        ModPElement(GENERATOR)
    }

    fn g_exp(scalar: &Self::Scalar) -> Self::Element {
        Self::generator().exp(scalar)
    }

    /// Reduces a 256 bit digest modulo the 62 bit order.
    fn hash_to_scalar(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<Self::Scalar, Error> {
        let mut hasher = Self::Hasher::hasher();
        update_hasher(&mut hasher, input_slices, ds_tags);
        let digest = hasher.finalize();

        Ok(ModPScalar::from_bytes_mod_order(&digest))
    }
}
