// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! CryptographicGroup implementations for the P-256 group

use crate::groups::p256::element::P256Element;
use crate::groups::p256::scalar::P256Scalar;
use crate::traits::groups::CryptographicGroup;

use p256::NistP256;
use p256::ProjectivePoint;
use p256::elliptic_curve::hash2curve::{ExpandMsgXmd, GroupDigest};

use crate::utils::error::Error;
use crate::utils::hash::{self, frame_inputs};

/// Domain separation tag for hashing to scalars.
const HASH_TO_SCALAR_DST: &[u8] = b"elgamal_writein_p256_hash_to_scalar";

/// P-256 implementation of [`CryptographicGroup`]
pub struct P256Group;

#[allow(clippy::arithmetic_side_effects)]
impl CryptographicGroup for P256Group {
    type Element = P256Element;
    type Scalar = P256Scalar;
    type Hasher = hash::Hasher256;

    const ORDER_BITS: u32 = 256;
    const NAME: &'static str = "p256";

    fn generator() -> Self::Element {
        P256Element::new(ProjectivePoint::GENERATOR)
    }

    fn g_exp(scalar: &Self::Scalar) -> Self::Element {
        P256Element::new(ProjectivePoint::GENERATOR * scalar.0)
    }

    /// `NistP256::hash_to_scalar` concatenates its inputs, so they are
    /// framed first and hashed under a single tag.
    ///
    /// # Errors
    ///
    /// - `HashToScalarError` if `NistP256::hash_to_scalar` returns error
    fn hash_to_scalar(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<Self::Scalar, Error> {
        let framed = frame_inputs(input_slices, ds_tags);
        let ret = NistP256::hash_to_scalar::<ExpandMsgXmd<Self::Hasher>>(
            &[framed.as_slice()],
            &[HASH_TO_SCALAR_DST],
        );

        Ok(P256Scalar(ret?))
    }
}
