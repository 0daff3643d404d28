// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Write-in proof of knowledge of the encryption randomness.
//!
//! Proves that the sender of an `ElGamal` ciphertext knows the randomness
//! used to form it, and therefore the plaintext, without restricting the
//! plaintext in any way.
//!
//! Let `b_i` be the randomizer base of component `i`: `g` under the
//! [standard][`Convention::Standard`] convention and `y_i` under the
//! [variant][`Convention::Variant`] convention, so that `u_i = b_i^(r_i)`.
//!
//! - commitment `A_i = b_i^(a_i)` for fresh `a_i`
//! - response `k_i = a_i + c * r_i` for challenge `c`
//! - check `b_i^(k_i) = A_i * u_i^c`
//!
//! The mask half `v` is bound through the instance encoding that feeds the
//! challenge. It is never committed to: revealing `y^(a_i)` together with
//! `k_i` would reveal `y^(r_i)` and with it the plaintext.

use crate::context::Context;
use crate::cryptosystem::elgamal::{Ciphertext, Convention, PublicKey};
use crate::cryptosystem::zkpok::ProofAdapter;
use crate::groups::productgroup::Wide;
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::VSerializable;
use crate::utils::serialization::ser_fields;
use crate::zkp::sigma::SigmaAdapter;

/**
 * The public statement of a write-in proof.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct WriteInInstance<C: Context> {
    convention: Convention,
    public_key: PublicKey<C>,
    ciphertext: Ciphertext<C>,
}

impl<C: Context> WriteInInstance<C> {
    /// Construct an instance for a ciphertext formed under `public_key`.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the ciphertext width differs from the key width
    pub fn new(
        convention: Convention,
        public_key: PublicKey<C>,
        ciphertext: Ciphertext<C>,
    ) -> Result<Self, Error> {
        let instance = WriteInInstance {
            convention,
            public_key,
            ciphertext,
        };
        instance.check()?;

        Ok(instance)
    }

    fn check(&self) -> Result<(), Error> {
        let key = self.public_key.y().width();
        let u = self.ciphertext.u().width();
        let v = self.ciphertext.v().width();
        if key != u || key != v {
            return Err(Error::MalformedInstanceError(format!(
                "Ciphertext of width ({u}, {v}) does not match key of width {key}"
            )));
        }

        Ok(())
    }

    /// The ciphertext convention.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// The public key the ciphertext was formed under.
    pub fn public_key(&self) -> &PublicKey<C> {
        &self.public_key
    }

    /// The ciphertext.
    pub fn ciphertext(&self) -> &Ciphertext<C> {
        &self.ciphertext
    }

    /// Number of components.
    pub fn width(&self) -> usize {
        self.public_key.y().width()
    }

    /// Raise the randomizer bases to `exponents`, `(b_1^(e_1), b_2^(e_2), ...)`.
    fn randomize(&self, exponents: &Wide<C::Scalar>) -> Result<Wide<C::Element>, Error> {
        match self.convention {
            Convention::Standard => {
                exponents.check_width(self.width())?;
                Ok(C::G::g_exp_wide(exponents))
            }
            Convention::Variant => self.public_key.y().exp(exponents),
        }
    }
}

impl<C: Context> VSerializable for WriteInInstance<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[
            &self.convention.ser(),
            &self.public_key.ser(),
            &self.ciphertext.ser(),
        ])
    }
}

/**
 * The witness of a write-in proof: the encryption randomness.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct WriteInWitness<C: Context>(Wide<C::Scalar>);

impl<C: Context> WriteInWitness<C> {
    /// Wrap the encryption randomness.
    pub fn new(r: Wide<C::Scalar>) -> Self {
        WriteInWitness(r)
    }

    /// The encryption randomness.
    pub fn r(&self) -> &Wide<C::Scalar> {
        &self.0
    }
}

/**
 * Adapter proving knowledge of the randomness of an `ElGamal` ciphertext.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::ModPCtx as Ctx;
 * use elgamal_writein::cryptosystem::elgamal::{Convention, ElGamal};
 * use elgamal_writein::cryptosystem::zkpok::ProofAdapter;
 * use elgamal_writein::traits::groups::CryptographicGroup;
 * use elgamal_writein::zkp::sigma::SigmaProtocol;
 * use elgamal_writein::zkp::writein::WriteInAdapter;
 * use rand::rngs::OsRng;
 *
 * let elgamal = ElGamal::<Ctx>::new(Convention::Standard, 1, 50).unwrap();
 * let keypair = elgamal.generate(&mut OsRng).unwrap();
 * let pk = elgamal.wide_public_key(&keypair.pkey, 2).unwrap();
 *
 * let message = <Ctx as Context>::G::random_elements(2, &mut OsRng, 50).unwrap();
 * let r = elgamal.sample_randomness(&pk, &mut OsRng).unwrap();
 * let ciphertext = elgamal.encrypt_with_r(&pk, &message, &r).unwrap();
 *
 * let adapter = WriteInAdapter;
 * let instance = adapter.build_instance(Convention::Standard, &pk, &ciphertext).unwrap();
 * let witness = <WriteInAdapter as ProofAdapter<Ctx>>::build_witness(&adapter, &r);
 *
 * let engine = SigmaProtocol::<Ctx, WriteInAdapter>::new(adapter, 50);
 * let proof = engine.prove(b"label", &instance, &witness, &mut OsRng).unwrap();
 * assert!(engine.verify(b"label", &instance, &proof).unwrap());
 * ```
 */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteInAdapter;

impl<C: Context> SigmaAdapter<C> for WriteInAdapter {
    type Instance = WriteInInstance<C>;
    type Witness = WriteInWitness<C>;
    type Commitment = Wide<C::Element>;
    type Blinding = Wide<C::Scalar>;
    type Response = Wide<C::Scalar>;

    const DOMAIN: &'static [u8] = b"elgamal_writein";

    fn check_instance(&self, instance: &Self::Instance) -> Result<(), Error> {
        instance.check()
    }

    fn commit<R: RandomSource + ?Sized>(
        &self,
        instance: &Self::Instance,
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<(Self::Commitment, Self::Blinding), Error> {
        let a = C::G::random_scalars(instance.width(), rng, stat_dist)?;
        let big_a = instance.randomize(&a)?;

        Ok((big_a, a))
    }

    fn respond(
        &self,
        instance: &Self::Instance,
        witness: &Self::Witness,
        a: &Self::Blinding,
        c: &C::Scalar,
    ) -> Result<Self::Response, Error> {
        witness.r().check_width(instance.width())?;

        a.add(&witness.r().dist_mul(c))
    }

    fn check_equation(
        &self,
        instance: &Self::Instance,
        big_a: &Self::Commitment,
        c: &C::Scalar,
        k: &Self::Response,
    ) -> Result<bool, Error> {
        let width = instance.width();
        if big_a.width() != width || k.width() != width {
            return Ok(false);
        }

        let lhs = instance.randomize(k)?;
        let rhs = big_a.mul(&instance.ciphertext().u().dist_exp(c))?;

        Ok(lhs.equals(&rhs))
    }
}

impl<C: Context> ProofAdapter<C> for WriteInAdapter {
    fn build_instance(
        &self,
        convention: Convention,
        public_key: &PublicKey<C>,
        ciphertext: &Ciphertext<C>,
    ) -> Result<Self::Instance, Error> {
        WriteInInstance::new(convention, public_key.clone(), ciphertext.clone())
    }

    fn build_witness(&self, r: &Wide<C::Scalar>) -> Self::Witness {
        WriteInWitness::new(r.clone())
    }
}
