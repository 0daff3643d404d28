// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Sigma protocols made non-interactive with the Fiat-Shamir transform.
//!
//! A [`SigmaProtocol`] drives the three moves of a proof of knowledge:
//!
//! 1. The [adapter][`SigmaAdapter`] samples blinding randomness and outputs a commitment.
//! 2. The challenge is computed as a hash of the adapter domain, the label,
//!    the encoded instance and the encoded commitment.
//! 3. The adapter computes the response from the witness, the blinding and the challenge.
//!
//! The resulting [`Proof`] holds only the commitment and the response. The
//! verifier recomputes the challenge and asks the adapter to check its
//! verification equation. Everything specific to the proven relation lives
//! in the adapter, the engine only realizes the Fiat-Shamir binding.

use std::fmt::Debug;
use std::marker::PhantomData;

use tracing::{debug, warn};

use crate::context::Context;
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::{VDeserializable, VSerializable};
use crate::utils::serialization::{deser_fields, ser_fields};

/**
 * The relation specific half of a Sigma protocol.
 *
 * An adapter defines the public instance, the secret witness and the algebra
 * of the three moves. It never computes challenges, those come from the
 * [`SigmaProtocol`] engine.
 */
pub trait SigmaAdapter<C: Context>: Debug + Clone + Send + Sync {
    /// Public statement.
    type Instance: VSerializable;
    /// Secret known to the prover.
    type Witness;
    /// First prover message.
    type Commitment: VSerializable + VDeserializable + Debug + Clone + PartialEq;
    /// Prover state kept between commitment and response, never transmitted.
    type Blinding;
    /// Final prover message.
    type Response: VSerializable + VDeserializable + Debug + Clone + PartialEq;

    /// Domain separation prefix of this adapter's challenges.
    const DOMAIN: &'static [u8];

    /// Structural checks on the instance, run before any cryptographic check.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the instance is not well formed
    fn check_instance(&self, instance: &Self::Instance) -> Result<(), Error>;

    /// Sample the blinding and compute the commitment.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    fn commit<R: RandomSource + ?Sized>(
        &self,
        instance: &Self::Instance,
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<(Self::Commitment, Self::Blinding), Error>;

    /// Compute the response to the challenge.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the witness does not match the instance
    fn respond(
        &self,
        instance: &Self::Instance,
        witness: &Self::Witness,
        blinding: &Self::Blinding,
        challenge: &C::Scalar,
    ) -> Result<Self::Response, Error>;

    /// Check the verification equation.
    ///
    /// Commitments or responses of the wrong shape do not verify.
    ///
    /// # Errors
    ///
    /// Only for failures unrelated to the validity of the proof.
    fn check_equation(
        &self,
        instance: &Self::Instance,
        commitment: &Self::Commitment,
        challenge: &C::Scalar,
        response: &Self::Response,
    ) -> Result<bool, Error>;
}

/**
 * A non-interactive Sigma protocol transcript.
 *
 * The challenge is not part of the transcript, the verifier always recomputes it.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Proof<Cm, Rs> {
    commitment: Cm,
    response: Rs,
}

impl<Cm, Rs> Proof<Cm, Rs> {
    /// Construct a proof from its parts.
    pub fn new(commitment: Cm, response: Rs) -> Self {
        Proof {
            commitment,
            response,
        }
    }

    /// The prover commitment.
    pub fn commitment(&self) -> &Cm {
        &self.commitment
    }

    /// The prover response.
    pub fn response(&self) -> &Rs {
        &self.response
    }
}

impl<Cm: VSerializable, Rs: VSerializable> VSerializable for Proof<Cm, Rs> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&self.commitment.ser(), &self.response.ser()])
    }
}

impl<Cm: VDeserializable, Rs: VDeserializable> VDeserializable for Proof<Cm, Rs> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let [commitment, response] = <[&[u8]; 2]>::try_from(deser_fields(buffer, 2)?)
            .map_err(|_| Error::DeserializationError("Expected 2 fields".to_string()))?;

        Ok(Proof::new(Cm::deser(commitment)?, Rs::deser(response)?))
    }
}

/// The transcript type produced by adapter `A`.
pub type ProofOf<C, A> =
    Proof<<A as SigmaAdapter<C>>::Commitment, <A as SigmaAdapter<C>>::Response>;

/**
 * Fiat-Shamir Sigma protocol engine for adapter `A`.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::RistrettoCtx as RCtx;
 * use elgamal_writein::traits::groups::GroupElement;
 * use elgamal_writein::zkp::schnorr::{SchnorrAdapter, SchnorrInstance};
 * use elgamal_writein::zkp::sigma::SigmaProtocol;
 * use rand::rngs::OsRng;
 *
 * let g = RCtx::generator();
 * let secret_x = RCtx::random_scalar(&mut OsRng).unwrap();
 * let instance = SchnorrInstance::<RCtx>::new(g.clone(), g.exp(&secret_x));
 *
 * let engine = SigmaProtocol::<RCtx, SchnorrAdapter>::new(SchnorrAdapter, 50);
 * let proof = engine.prove(b"label", &instance, &secret_x, &mut OsRng).unwrap();
 *
 * assert!(engine.verify(b"label", &instance, &proof).unwrap());
 * assert!(!engine.verify(b"other label", &instance, &proof).unwrap());
 * ```
 */
#[derive(Debug, Clone)]
pub struct SigmaProtocol<C: Context, A: SigmaAdapter<C>> {
    adapter: A,
    stat_dist: u32,
    context: PhantomData<C>,
}

impl<C: Context, A: SigmaAdapter<C>> SigmaProtocol<C, A> {
    /// Domain separation tags for the challenge input
    const DS_TAGS: [&'static [u8]; 4] = [b"adapter_domain", b"label", b"instance", b"commitment"];

    /// Construct the engine. Blindings are sampled within statistical distance `2^-stat_dist` of uniform.
    pub fn new(adapter: A, stat_dist: u32) -> Self {
        SigmaProtocol {
            adapter,
            stat_dist,
            context: PhantomData,
        }
    }

    /// The adapter driving this engine.
    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Prove knowledge of `witness` for `instance`, bound to `label`.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the instance is not well formed
    /// - `WidthMismatchError` if the witness does not match the instance
    /// - `InsufficientRandomnessError` if the source fails
    /// - `HashToScalarError` if challenge generation fails
    pub fn prove<R: RandomSource + ?Sized>(
        &self,
        label: &[u8],
        instance: &A::Instance,
        witness: &A::Witness,
        rng: &mut R,
    ) -> Result<ProofOf<C, A>, Error> {
        self.adapter.check_instance(instance)?;
        debug!(group = C::G::NAME, label_len = label.len(), "generating proof");

        let (commitment, blinding) = self.adapter.commit(instance, rng, self.stat_dist)?;
        let challenge = self.challenge(label, instance, &commitment)?;
        let response = self
            .adapter
            .respond(instance, witness, &blinding, &challenge)?;

        Ok(Proof::new(commitment, response))
    }

    /// Verify `proof` for `instance` and `label`.
    ///
    /// Returns `true` if the proof is valid, `false` otherwise.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the instance is not well formed
    /// - `HashToScalarError` if challenge generation fails
    pub fn verify(
        &self,
        label: &[u8],
        instance: &A::Instance,
        proof: &ProofOf<C, A>,
    ) -> Result<bool, Error> {
        if let Err(e) = self.adapter.check_instance(instance) {
            warn!(group = C::G::NAME, error = %e, "rejecting malformed proof instance");
            return Err(e);
        }
        debug!(group = C::G::NAME, label_len = label.len(), "verifying proof");

        let challenge = self.challenge(label, instance, &proof.commitment)?;
        let ok = self
            .adapter
            .check_equation(instance, &proof.commitment, &challenge, &proof.response)?;
        if !ok {
            warn!(group = C::G::NAME, "proof failed verification");
        }

        Ok(ok)
    }

    /// Computes the Fiat-Shamir challenge.
    ///
    /// Every input is length prefixed and carries its own tag, so no two
    /// distinct transcripts share a hash input.
    fn challenge(
        &self,
        label: &[u8],
        instance: &A::Instance,
        commitment: &A::Commitment,
    ) -> Result<C::Scalar, Error> {
        let instance = instance.ser();
        let commitment = commitment.ser();
        let input: [&[u8]; 4] = [A::DOMAIN, label, &instance, &commitment];

        C::G::hash_to_scalar(&input, &Self::DS_TAGS)
    }
}
