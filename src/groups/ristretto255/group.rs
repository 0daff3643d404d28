// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CryptographicGroup implementations for the Ristretto255 group

use crate::groups::ristretto255::element::RistrettoElement;
use crate::groups::ristretto255::scalar::RistrettoScalar;
use crate::traits::groups::CryptographicGroup;

use curve25519_dalek::constants::{RISTRETTO_BASEPOINT_POINT, RISTRETTO_BASEPOINT_TABLE};

use crate::utils::error::Error;
use crate::utils::hash::{self, Hasher, update_hasher};

/// Ristretto implementation of [`CryptographicGroup`]
pub struct Ristretto255Group;

impl CryptographicGroup for Ristretto255Group {
    type Element = RistrettoElement;
    type Scalar = RistrettoScalar;
    type Hasher = hash::Hasher512;

    const ORDER_BITS: u32 = 253;
    const NAME: &'static str = "ristretto255";

    fn generator() -> Self::Element {
        RistrettoElement(RISTRETTO_BASEPOINT_POINT)
    }

    fn g_exp(scalar: &Self::Scalar) -> Self::Element {
        RistrettoElement(RISTRETTO_BASEPOINT_TABLE * &scalar.0)
    }

    fn hash_to_scalar(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<Self::Scalar, Error> {
        let mut hasher = Self::Hasher::hasher();
        update_hasher(&mut hasher, input_slices, ds_tags);

        Ok(RistrettoScalar::from_hash(hasher))
    }
}
