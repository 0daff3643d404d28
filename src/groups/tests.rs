// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

use crate::context::Context;
use crate::context::ModPCtx as MCtx;
use crate::context::P256Ctx as PCtx;
use crate::context::RistrettoCtx as RCtx;
use crate::traits::groups::{CryptographicGroup, GroupElement, GroupScalar};
use crate::utils::serialization::{VDeserializable, VSerializable};
use rand::rngs::OsRng;

#[test]
fn test_group_laws_modp() {
    test_group_laws::<MCtx>();
}

#[test]
fn test_group_laws_ristretto() {
    test_group_laws::<RCtx>();
}

#[test]
fn test_group_laws_p256() {
    test_group_laws::<PCtx>();
}

#[test]
fn test_scalar_laws_modp() {
    test_scalar_laws::<MCtx>();
}

#[test]
fn test_scalar_laws_ristretto() {
    test_scalar_laws::<RCtx>();
}

#[test]
fn test_scalar_laws_p256() {
    test_scalar_laws::<PCtx>();
}

#[test]
fn test_serialization_modp() {
    test_serialization::<MCtx>();
}

#[test]
fn test_serialization_ristretto() {
    test_serialization::<RCtx>();
}

#[test]
fn test_serialization_p256() {
    test_serialization::<PCtx>();
}

#[test]
fn test_hash_to_scalar_modp() {
    test_hash_to_scalar::<MCtx>();
}

#[test]
fn test_hash_to_scalar_ristretto() {
    test_hash_to_scalar::<RCtx>();
}

#[test]
fn test_hash_to_scalar_p256() {
    test_hash_to_scalar::<PCtx>();
}

fn test_group_laws<C: Context>() {
    let g = C::generator();
    let a = C::random_scalar(&mut OsRng).unwrap();
    let b = C::random_scalar(&mut OsRng).unwrap();

    // g^a * g^b = g^(a + b)
    let lhs = g.exp(&a).mul(&g.exp(&b));
    assert_eq!(lhs, C::G::g_exp(&a.add(&b)));

    // (g^a)^b = g^(ab)
    assert_eq!(g.exp(&a).exp(&b), C::G::g_exp(&a.mul(&b)));

    // g^a * g^-a = 1
    let one = g.exp(&a).mul(&g.exp(&a).inv());
    assert!(one.equals(&C::Element::one()));
    assert_eq!(g.exp(&a.neg()), g.exp(&a).inv());

    // g^0 = 1, g^1 = g
    assert_eq!(C::G::g_exp(&C::Scalar::zero()), C::Element::one());
    assert_eq!(C::G::g_exp(&C::Scalar::one()), g);
}

fn test_scalar_laws<C: Context>() {
    let a = C::random_scalar(&mut OsRng).unwrap();
    let b = C::random_scalar(&mut OsRng).unwrap();

    assert_eq!(a.add(&b).sub(&b), a);
    assert_eq!(a.add(&a.neg()), C::Scalar::zero());
    assert_eq!(a.mul(&C::Scalar::one()), a);
    assert_eq!(a.mul(&b), b.mul(&a));

    let a_inv = a.inv().unwrap();
    assert_eq!(a.mul(&a_inv), C::Scalar::one());
    assert!(C::Scalar::zero().inv().is_none());

    assert_eq!(
        C::Scalar::from(6u32),
        C::Scalar::from(2u32).mul(&C::Scalar::from(3u32))
    );
}

fn test_serialization<C: Context>() {
    let e = C::random_element(&mut OsRng).unwrap();
    let s = C::random_scalar(&mut OsRng).unwrap();

    assert_eq!(C::Element::deser(&e.ser()).unwrap(), e);
    assert_eq!(C::Scalar::deser(&s.ser()).unwrap(), s);
    assert_eq!(C::Element::deser(&C::Element::one().ser()).unwrap(), C::Element::one());

    assert!(C::Element::deser(&[]).is_err());
    assert!(C::Scalar::deser(&[1u8; 3]).is_err());
}

fn test_hash_to_scalar<C: Context>() {
    let one = C::G::hash_to_scalar(&[b"input"], &[b"tag"]).unwrap();
    let two = C::G::hash_to_scalar(&[b"input"], &[b"tag"]).unwrap();
    let other_tag = C::G::hash_to_scalar(&[b"input"], &[b"other"]).unwrap();
    let other_input = C::G::hash_to_scalar(&[b"inpuT"], &[b"tag"]).unwrap();

    assert_eq!(one, two);
    assert_ne!(one, other_tag);
    assert_ne!(one, other_input);
}
