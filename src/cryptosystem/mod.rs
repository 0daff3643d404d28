// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Public key cryptosystems.
//!
//! # [`ElGamal`][`crate::cryptosystem::elgamal`]
//!
//! The `ElGamal` cryptosystem over wide keys, in its standard and variant
//! conventions. Decryption performs no validation.
//!
//! See `EVS`: Definition 11.15
//!
//! # [`ElGamal` with proof of knowledge][`crate::cryptosystem::zkpok`]
//!
//! An augmentation of `ElGamal` where every ciphertext carries a label bound
//! [proof][`crate::zkp::sigma`] that its sender knows the plaintext. The
//! proven statement is defined by a [`ProofAdapter`][`crate::cryptosystem::zkpok::ProofAdapter`];
//! the [write-in][`crate::zkp::writein`] adapter places no restriction on
//! the plaintext. Ciphertexts are decrypted only after their proof verifies.
//!
//! # Examples
//!
//! ```
//! use elgamal_writein::config::CryptosystemConfig;
//! use elgamal_writein::context::Context;
//! use elgamal_writein::context::RistrettoCtx as RCtx;
//! use elgamal_writein::cryptosystem::elgamal::Convention;
//! use elgamal_writein::cryptosystem::zkpok::ElGamalZkPokWriteIn;
//! use elgamal_writein::traits::groups::CryptographicGroup;
//! use rand::rngs::OsRng;
//!
//! let config = CryptosystemConfig {
//!     convention: Convention::Variant,
//!     key_width: 2,
//!     ..CryptosystemConfig::default()
//! };
//! let cryptosystem = ElGamalZkPokWriteIn::<RCtx>::new(&config).unwrap();
//! let keypair = cryptosystem.generate(&mut OsRng).unwrap();
//!
//! // a width 3 key encrypts 3 * 2 components
//! let pk = cryptosystem.wide_public_key(&keypair.pkey, 3).unwrap();
//! let sk = cryptosystem.wide_private_key(&keypair.skey, 3).unwrap();
//! let message = <RCtx as Context>::G::random_elements(6, &mut OsRng, 50).unwrap();
//!
//! // Set to some relevant context value
//! let label = b"election 2025, contest 3";
//! let (ciphertext, proof) = cryptosystem.encrypt(label, &pk, &message, &mut OsRng).unwrap();
//!
//! // anyone holding the public key can check the proof
//! assert!(cryptosystem.verify(label, &pk, &ciphertext, &proof).unwrap());
//!
//! // decryption checks it again before recovering the plaintext
//! let decrypted = cryptosystem.decrypt(&sk, label, &ciphertext, &proof).unwrap();
//! assert_eq!(message, decrypted);
//! ```

/// `ElGamal` cryptosystem.
pub mod elgamal;

/// `ElGamal` with proof of knowledge.
pub mod zkpok;
