// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Zero knowledge proofs
//!
//! # [Sigma protocols][`crate::zkp::sigma`]
//!
//! Generic commit, challenge, response engine made non-interactive with the
//! Fiat-Shamir transform. The proven relation is supplied by an adapter.
//!
//! # [Write-in][`crate::zkp::writein`]
//!
//! Proves knowledge of the randomness, and hence the plaintext, of an
//! `ElGamal` ciphertext, with no restriction on the plaintext.
//!
//! This proof is used by the [`ElGamalZkPokWriteIn`][`crate::cryptosystem::zkpok::ElGamalZkPokWriteIn`]
//! cryptosystem, which verifies it before every decryption.
//!
//! # [Schnorr][`crate::zkp::schnorr`]
//!
//! Proves knowledge of a discrete logarithm.
//!
//! See `EVS`: Protocol 10.1

/// Schnorr knowledge of discrete logarithm proofs.
pub mod schnorr;

/// Fiat-Shamir Sigma protocol engine.
pub mod sigma;

/// Write-in proofs of knowledge for `ElGamal` ciphertexts.
pub mod writein;
