// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Schnorr proof of knowledge of discrete logarithm.

use crate::context::Context;
use crate::traits::groups::CryptographicGroup;
use crate::traits::groups::GroupElement;
use crate::traits::groups::GroupScalar;
use crate::utils::error::Error;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::VSerializable;
use crate::utils::serialization::ser_fields;
use crate::zkp::sigma::SigmaAdapter;

/**
 * Public values of a Schnorr proof: a base `g` and `y = g^x`.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct SchnorrInstance<C: Context> {
    g: C::Element,
    y: C::Element,
}

impl<C: Context> SchnorrInstance<C> {
    /// Construct an instance for base `g` and value `y`.
    pub fn new(g: C::Element, y: C::Element) -> Self {
        SchnorrInstance { g, y }
    }

    /// The base.
    pub fn g(&self) -> &C::Element {
        &self.g
    }

    /// The value whose discrete logarithm is proven.
    pub fn y(&self) -> &C::Element {
        &self.y
    }
}

impl<C: Context> VSerializable for SchnorrInstance<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&self.g.ser(), &self.y.ser()])
    }
}

/**
 * Schnorr proof of knowledge of discrete logarithm.
 *
 * Given public values `y` and `g`, and a secret `secret_x`
 * proves knowledge of `secret_x` such that `y = g^secret_x`
 *
 * - commitment `A = g^a` for a fresh `a`
 * - response `k = a + v * secret_x` for challenge `v`
 * - check `g^k = A * y^v`
 *
 * See `EVS`: Protocol 10.1
 *
 * # Examples
 * ```
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::P256Ctx as PCtx;
 * use elgamal_writein::traits::groups::GroupElement;
 * use elgamal_writein::zkp::schnorr::{SchnorrAdapter, SchnorrInstance};
 * use elgamal_writein::zkp::sigma::SigmaProtocol;
 * use rand::rngs::OsRng;
 *
 * let g = PCtx::generator();
 * let secret_x = PCtx::random_scalar(&mut OsRng).unwrap();
 * let public_y = g.exp(&secret_x);
 * let instance = SchnorrInstance::<PCtx>::new(g, public_y);
 *
 * // Set to some relevant context value
 * let proof_context = b"context";
 * let engine = SigmaProtocol::<PCtx, SchnorrAdapter>::new(SchnorrAdapter, 50);
 * let proof = engine.prove(proof_context, &instance, &secret_x, &mut OsRng).unwrap();
 *
 * let ok = engine.verify(proof_context, &instance, &proof).unwrap();
 * assert!(ok);
 * ```
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchnorrAdapter;

impl<C: Context> SigmaAdapter<C> for SchnorrAdapter {
    type Instance = SchnorrInstance<C>;
    type Witness = C::Scalar;
    type Commitment = C::Element;
    type Blinding = C::Scalar;
    type Response = C::Scalar;

    const DOMAIN: &'static [u8] = b"schnorr";

    fn check_instance(&self, instance: &Self::Instance) -> Result<(), Error> {
        if instance.g.equals(&C::Element::one()) {
            return Err(Error::MalformedInstanceError(
                "Schnorr base must not be the identity".to_string(),
            ));
        }

        Ok(())
    }

    fn commit<R: RandomSource + ?Sized>(
        &self,
        instance: &Self::Instance,
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<(Self::Commitment, Self::Blinding), Error> {
        let a = C::G::random_scalar(rng, stat_dist)?;
        let big_a = instance.g.exp(&a);

        Ok((big_a, a))
    }

    fn respond(
        &self,
        _instance: &Self::Instance,
        secret_x: &Self::Witness,
        a: &Self::Blinding,
        v: &C::Scalar,
    ) -> Result<Self::Response, Error> {
        Ok(a.add(&v.mul(secret_x)))
    }

    fn check_equation(
        &self,
        instance: &Self::Instance,
        big_a: &Self::Commitment,
        v: &C::Scalar,
        k: &Self::Response,
    ) -> Result<bool, Error> {
        let g_k = instance.g.exp(k);
        let y_v_big_a = instance.y.exp(v).mul(big_a);

        Ok(y_v_big_a.equals(&g_k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ModPCtx as MCtx;
    use crate::context::P256Ctx as PCtx;
    use crate::context::RistrettoCtx as RCtx;
    use crate::zkp::sigma::{Proof, SigmaProtocol};
    use rand::rngs::OsRng;

    #[test]
    fn test_schnorr_proof_valid_modp() {
        test_schnorr_proof_valid::<MCtx>();
    }

    #[test]
    fn test_schnorr_proof_valid_ristretto() {
        test_schnorr_proof_valid::<RCtx>();
    }

    #[test]
    fn test_schnorr_proof_valid_p256() {
        test_schnorr_proof_valid::<PCtx>();
    }

    #[test]
    fn test_schnorr_proof_invalid_ristretto() {
        test_schnorr_proof_invalid::<RCtx>();
    }

    #[test]
    fn test_schnorr_proof_invalid_p256() {
        test_schnorr_proof_invalid::<PCtx>();
    }

    #[test]
    fn test_schnorr_identity_base() {
        let engine = SigmaProtocol::<MCtx, SchnorrAdapter>::new(SchnorrAdapter, 50);
        let one = <MCtx as Context>::Element::one();
        let instance = SchnorrInstance::<MCtx>::new(one.clone(), one);
        let x = <MCtx as Context>::Scalar::one();

        assert!(matches!(
            engine.prove(b"", &instance, &x, &mut OsRng),
            Err(Error::MalformedInstanceError(_))
        ));
    }

    fn test_schnorr_proof_valid<Ctx: Context>() {
        let engine = SigmaProtocol::<Ctx, SchnorrAdapter>::new(SchnorrAdapter, 50);
        // any base works, not only the generator
        let g = Ctx::random_element(&mut OsRng).unwrap();
        let secret_x = Ctx::random_scalar(&mut OsRng).unwrap();
        let instance = SchnorrInstance::<Ctx>::new(g.clone(), g.exp(&secret_x));

        let proof = engine.prove(&[], &instance, &secret_x, &mut OsRng).unwrap();
        assert!(
            engine.verify(&[], &instance, &proof).unwrap(),
            "Verification of a valid proof should succeed"
        );
    }

    fn test_schnorr_proof_invalid<Ctx: Context>() {
        let engine = SigmaProtocol::<Ctx, SchnorrAdapter>::new(SchnorrAdapter, 50);
        let g = Ctx::generator();
        let secret_x = Ctx::random_scalar(&mut OsRng).unwrap();
        let instance = SchnorrInstance::<Ctx>::new(g.clone(), g.exp(&secret_x));

        let proof = engine.prove(&[], &instance, &secret_x, &mut OsRng).unwrap();

        let one = <Ctx as Context>::Scalar::one();
        let tampered_k = proof.response().add(&one);
        let tampered_proof = Proof::new(proof.commitment().clone(), tampered_k);
        assert!(
            !engine.verify(&[], &instance, &tampered_proof).unwrap(),
            "Verification of a proof with tampered 'k' should fail"
        );

        // a proof for the wrong secret
        let wrong_x = secret_x.add(&one);
        let proof = engine.prove(&[], &instance, &wrong_x, &mut OsRng).unwrap();
        assert!(!engine.verify(&[], &instance, &proof).unwrap());
    }
}
