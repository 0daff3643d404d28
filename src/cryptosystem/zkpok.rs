// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! `ElGamal` encryption with a proof of knowledge
//!
//! Every ciphertext travels with a [Sigma protocol proof][`crate::zkp::sigma`]
//! bound to a caller supplied label. Decryption verifies the proof first and
//! never computes a plaintext for a ciphertext whose proof fails.

use tracing::warn;

use crate::config::CryptosystemConfig;
use crate::context::Context;
use crate::cryptosystem::elgamal::{Ciphertext, Convention, ElGamal, KeyPair, PrivateKey, PublicKey};
use crate::groups::productgroup::Wide;
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::rng::{RandomSource, seeded_rng};
use crate::utils::serialization::VSerializable;
use crate::zkp::sigma::{ProofOf, SigmaAdapter, SigmaProtocol};
use crate::zkp::writein::WriteInAdapter;

/**
 * A [`SigmaAdapter`] whose statement is built from an `ElGamal` encryption.
 */
pub trait ProofAdapter<C: Context>: SigmaAdapter<C> + Default {
    /// Package the public values of an encryption.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the key and ciphertext do not fit together
    fn build_instance(
        &self,
        convention: Convention,
        public_key: &PublicKey<C>,
        ciphertext: &Ciphertext<C>,
    ) -> Result<Self::Instance, Error>;

    /// Wrap the encryption randomness as a witness.
    fn build_witness(&self, r: &Wide<C::Scalar>) -> Self::Witness;
}

/// Write-in `ElGamal` with proof of knowledge, placing no restriction on the plaintext.
pub type ElGamalZkPokWriteIn<C> = ElGamalZkPok<C, WriteInAdapter>;

/**
 * `ElGamal` encryption where each ciphertext carries a proof of knowledge
 * produced by adapter `A`.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::config::CryptosystemConfig;
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::P256Ctx as PCtx;
 * use elgamal_writein::cryptosystem::zkpok::ElGamalZkPokWriteIn;
 * use elgamal_writein::traits::groups::CryptographicGroup;
 * use rand::rngs::OsRng;
 *
 * let cryptosystem = ElGamalZkPokWriteIn::<PCtx>::new(&CryptosystemConfig::default()).unwrap();
 * let keypair = cryptosystem.generate(&mut OsRng).unwrap();
 * let pk = cryptosystem.wide_public_key(&keypair.pkey, 2).unwrap();
 * let sk = cryptosystem.wide_private_key(&keypair.skey, 2).unwrap();
 *
 * let message = <PCtx as Context>::G::random_elements(2, &mut OsRng, 50).unwrap();
 * let (ciphertext, proof) = cryptosystem.encrypt(b"ballot 7", &pk, &message, &mut OsRng).unwrap();
 *
 * let decrypted = cryptosystem.decrypt(&sk, b"ballot 7", &ciphertext, &proof).unwrap();
 * assert_eq!(message, decrypted);
 *
 * // the proof does not verify under another label, so nothing is decrypted
 * assert!(cryptosystem.decrypt(&sk, b"ballot 8", &ciphertext, &proof).is_err());
 * ```
 */
#[derive(Debug, Clone)]
pub struct ElGamalZkPok<C: Context, A: ProofAdapter<C>> {
    elgamal: ElGamal<C>,
    engine: SigmaProtocol<C, A>,
}

impl<C: Context, A: ProofAdapter<C>> ElGamalZkPok<C, A> {
    /// Domain separation tags for the blinding seed of deterministic encryption
    const BLINDING_DS_TAGS: [&'static [u8]; 3] = [b"blinding_r", b"blinding_label", b"blinding_instance"];

    /// Construct the cryptosystem with the default adapter.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if the configured key width is zero
    pub fn new(config: &CryptosystemConfig) -> Result<Self, Error> {
        Self::with_adapter(config, A::default())
    }

    /// Construct the cryptosystem with the given adapter.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if the configured key width is zero
    pub fn with_adapter(config: &CryptosystemConfig, adapter: A) -> Result<Self, Error> {
        config.validate()?;

        Ok(ElGamalZkPok {
            elgamal: ElGamal::from_config(config)?,
            engine: SigmaProtocol::new(adapter, config.stat_dist),
        })
    }

    /// The underlying `ElGamal` cryptosystem.
    pub fn elgamal(&self) -> &ElGamal<C> {
        &self.elgamal
    }

    /// The ciphertext convention.
    pub fn convention(&self) -> Convention {
        self.elgamal.convention()
    }

    /// Generate a fresh base key pair.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<KeyPair<C>, Error> {
        self.elgamal.generate(rng)
    }

    /// Lift a base public key to width `width`.
    ///
    /// # Errors
    ///
    /// See [`ElGamal::wide_public_key`]
    pub fn wide_public_key(&self, pk: &PublicKey<C>, width: usize) -> Result<PublicKey<C>, Error> {
        self.elgamal.wide_public_key(pk, width)
    }

    /// Lift a base private key to width `width`.
    ///
    /// # Errors
    ///
    /// See [`ElGamal::wide_private_key`]
    pub fn wide_private_key(
        &self,
        sk: &PrivateKey<C>,
        width: usize,
    ) -> Result<PrivateKey<C>, Error> {
        self.elgamal.wide_private_key(sk, width)
    }

    /// Encrypt `message` under `pk` and prove knowledge of it, bound to `label`.
    ///
    /// Draws the encryption randomness and then the proof blinding from `rng`.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the message width differs from the key width
    /// - `InsufficientRandomnessError` if the source fails
    /// - `HashToScalarError` if challenge generation fails
    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        label: &[u8],
        pk: &PublicKey<C>,
        message: &Wide<C::Element>,
        rng: &mut R,
    ) -> Result<(Ciphertext<C>, ProofOf<C, A>), Error> {
        message.check_width(pk.y().width())?;
        let r = self.elgamal.sample_randomness(pk, rng)?;
        let ciphertext = self.elgamal.encrypt_with_r(pk, message, &r)?;

        let adapter = self.engine.adapter();
        let instance = adapter.build_instance(self.convention(), pk, &ciphertext)?;
        let witness = adapter.build_witness(&r);
        let proof = self.engine.prove(label, &instance, &witness, rng)?;

        Ok((ciphertext, proof))
    }

    /// Encrypt `message` under `pk` with the given randomness and prove knowledge of it.
    ///
    /// The proof blinding is derived from `r`, `label` and the proof instance,
    /// so equal inputs give equal ciphertexts and equal proofs. The blinding
    /// is only as secret as `r`.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the message or randomness width differs from the key width
    /// - `HashToScalarError` if challenge generation fails
    pub fn encrypt_with_r(
        &self,
        label: &[u8],
        pk: &PublicKey<C>,
        message: &Wide<C::Element>,
        r: &Wide<C::Scalar>,
    ) -> Result<(Ciphertext<C>, ProofOf<C, A>), Error> {
        let ciphertext = self.elgamal.encrypt_with_r(pk, message, r)?;

        let adapter = self.engine.adapter();
        let instance = adapter.build_instance(self.convention(), pk, &ciphertext)?;
        let witness = adapter.build_witness(r);

        let seed = [r.ser(), label.to_vec(), instance.ser()];
        let seed: Vec<&[u8]> = seed.iter().map(Vec::as_slice).collect();
        let mut rng = seeded_rng::<C::Hasher>(&seed, &Self::BLINDING_DS_TAGS);
        let proof = self.engine.prove(label, &instance, &witness, &mut rng)?;

        Ok((ciphertext, proof))
    }

    /// Verify that `proof` shows knowledge of the plaintext of `ciphertext` under `pk` and `label`.
    ///
    /// # Errors
    ///
    /// - `MalformedInstanceError` if the key and ciphertext do not fit together
    /// - `HashToScalarError` if challenge generation fails
    pub fn verify(
        &self,
        label: &[u8],
        pk: &PublicKey<C>,
        ciphertext: &Ciphertext<C>,
        proof: &ProofOf<C, A>,
    ) -> Result<bool, Error> {
        let instance = self
            .engine
            .adapter()
            .build_instance(self.convention(), pk, ciphertext)?;

        self.engine.verify(label, &instance, proof)
    }

    /// Verify the proof and, only if it is valid, decrypt the ciphertext.
    ///
    /// The public key is recomputed from `sk`, so the proof is checked
    /// against the key that decrypts.
    ///
    /// # Errors
    ///
    /// - `VerificationError` if the proof is not valid
    /// - `MalformedInstanceError` if the key and ciphertext do not fit together
    /// - `InvalidKeyError` if a private key component is not invertible (variant only)
    pub fn decrypt(
        &self,
        sk: &PrivateKey<C>,
        label: &[u8],
        ciphertext: &Ciphertext<C>,
        proof: &ProofOf<C, A>,
    ) -> Result<Wide<C::Element>, Error> {
        let pk = sk.public_key();
        if !self.verify(label, &pk, ciphertext, proof)? {
            warn!(group = C::G::NAME, "refusing to decrypt ciphertext with invalid proof");
            return Err(Error::VerificationError(
                "Proof of knowledge does not verify".to_string(),
            ));
        }

        self.elgamal.decrypt(sk, ciphertext)
    }
}
