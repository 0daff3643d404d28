// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Generalized El Gamal with a non-interactive proof of knowledge of the plaintext

#![doc = include_str!("../README.md")]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// final pass
// #![warn(clippy::restriction)]

/// Encryption benchmarks over groups and widths.
pub mod bench;
/// Runtime configuration for cryptosystems and benchmarks.
pub mod config;
/// Defines implementation choices for key cryptographic functionalities.
pub mod context;
/// Randomized round-trip checks over groups, widths and conventions.
pub mod correctness;
pub mod cryptosystem;
pub mod groups;
/// Abstractions for curve arithmetic, groups, elements and scalars.
pub mod traits;
/// Utilities such as random number generation, hashing and serialization.
pub mod utils;
pub mod zkp;

pub use utils::Error;
