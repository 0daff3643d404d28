// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

use super::*;
use crate::traits::groups::{CryptographicGroup, GroupElement, GroupScalar};
use crate::utils::error::Error;
use crate::utils::serialization::{VDeserializable, VSerializable};
use curve25519_dalek::scalar::Scalar as DalekScalar;

#[test]
fn test_wide_reduction_matches_generic() {
    let bytes: Vec<u8> = (0u8..38).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();

    let base = RistrettoScalar::from(256u32);
    let generic = bytes.iter().fold(RistrettoScalar::zero(), |acc, byte| {
        acc.mul(&base).add(&RistrettoScalar::from(u32::from(*byte)))
    });

    assert_eq!(RistrettoScalar::from_bytes_mod_order(&bytes), generic);
}

#[test]
fn test_g_exp_matches_exp() {
    let s = RistrettoScalar::from(123_456u32);
    let g = Ristretto255Group::generator();

    assert_eq!(Ristretto255Group::g_exp(&s), g.exp(&s));
}

#[test]
fn test_element_deser_rejects_invalid() {
    // not a canonical Ristretto encoding
    let bytes = [0xffu8; 32];
    let result = RistrettoElement::deser(&bytes);
    assert!(matches!(result, Err(Error::DeserializationError(_))));

    let short = RistrettoElement::deser(&[0u8; 31]);
    assert!(matches!(short, Err(Error::DeserializationLengthError(_))));

    let g = Ristretto255Group::generator();
    assert_eq!(RistrettoElement::deser(&g.ser()).unwrap(), g);
}

#[test]
fn test_scalar_deser_rejects_non_canonical() {
    let bytes = [0xffu8; 32];
    let result = RistrettoScalar::deser(&bytes);
    assert!(matches!(result, Err(Error::DeserializationError(_))));

    let short = RistrettoScalar::deser(&[0u8; 31]);
    assert!(matches!(short, Err(Error::DeserializationLengthError(_))));

    let s = RistrettoScalar(DalekScalar::from(7u64));
    assert_eq!(RistrettoScalar::deser(&s.ser()).unwrap(), s);
}
