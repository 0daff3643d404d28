// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Error type for this library

use thiserror::Error;

/**
 * Error type for the crate.
 *
 * This error type is used to represent all possible errors that can occur
 * within the crate. None of them are retried internally.
 */
#[derive(Error, Debug)]
pub enum Error {
    /// A width or key width is not at least one, or a key cannot be widened
    #[error("{0}")]
    DimensionError(String),

    /// Widths of keys, plaintexts, randomness or ciphertexts disagree
    #[error("Width mismatch: expected {expected} components, found {found}")]
    WidthMismatchError {
        /// number of components required by the key or instance
        expected: usize,
        /// number of components supplied
        found: usize,
    },

    /// A [proof instance][`crate::zkp::sigma::SigmaAdapter::check_instance`] references
    /// values of the wrong shape, checked before any cryptographic verification
    #[error("{0}")]
    MalformedInstanceError(String),

    /// A [proof][`crate::zkp::sigma::Proof`] failed to verify, the plaintext is not released
    #[error("{0}")]
    VerificationError(String),

    /// The [random source][`crate::utils::rng::RandomSource`] could not supply the requested bytes
    #[error("{0}")]
    InsufficientRandomnessError(String),

    /// A private key component cannot be used for the requested operation
    #[error("{0}")]
    InvalidKeyError(String),

    /// Deserialization error for [`crate::utils::serialization`] functionality
    #[error("{0}")]
    DeserializationError(String),

    /// Occurs when deserializing with invalid length prefixes in [`crate::utils::serialization`] functionality
    #[error("Try from slice error: {0}")]
    DeserializationLengthError(#[from] std::array::TryFromSliceError),

    /// Occurs when deserializing with invalid length prefixes in [`crate::utils::serialization`] functionality
    #[error("Try from int error: {0}")]
    DeserializationLengthIntError(#[from] std::num::TryFromIntError),

    /// Occurs when a hash to scalar error occurs in `p256`
    #[error("{0}")]
    HashToScalarError(#[from] p256::elliptic_curve::Error),

    /// A [round trip][`crate::correctness`] did not recover its plaintext
    #[error("{0}")]
    RoundTripFailure(String),
}
