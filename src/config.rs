// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Runtime configuration
//!
//! The group, its elements, scalars and hash function are fixed at compile
//! time by the [`Context`][`crate::context::Context`] type parameter. Everything
//! else is passed explicitly at construction.
//!
//! # Examples
//!
//! ```
//! use elgamal_writein::config::{CryptosystemConfig, GroupChoice};
//! use elgamal_writein::cryptosystem::elgamal::Convention;
//!
//! let config = CryptosystemConfig::default();
//! assert_eq!(config.convention, Convention::Standard);
//! assert_eq!(config.key_width, 1);
//!
//! let variant = CryptosystemConfig { convention: Convention::Variant, ..config };
//! assert!(variant.validate().is_ok());
//!
//! assert_eq!(GroupChoice::ALL.len(), 3);
//! ```

use std::fmt;

use crate::context::DEFAULT_STAT_DIST;
use crate::cryptosystem::elgamal::Convention;
use crate::utils::error::Error;

/**
 * Configuration of an [`ElGamal`][`crate::cryptosystem::elgamal::ElGamal`] or
 * [`ElGamalZkPok`][`crate::cryptosystem::zkpok::ElGamalZkPok`] cryptosystem.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CryptosystemConfig {
    /// The ciphertext convention.
    pub convention: Convention,
    /// Number of components of a base key.
    pub key_width: usize,
    /// Sampled values are within statistical distance `2^-stat_dist` of uniform.
    pub stat_dist: u32,
}

impl CryptosystemConfig {
    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if the key width is zero
    pub fn validate(&self) -> Result<(), Error> {
        if self.key_width == 0 {
            return Err(Error::DimensionError(
                "Key width must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for CryptosystemConfig {
    fn default() -> Self {
        CryptosystemConfig {
            convention: Convention::Standard,
            key_width: 1,
            stat_dist: DEFAULT_STAT_DIST,
        }
    }
}

/**
 * Configuration of an encryption benchmark sweep.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchConfig {
    /// The ciphertext convention.
    pub convention: Convention,
    /// Number of components of a base key.
    pub key_width: usize,
    /// Widths `1..=max_width` are measured.
    pub max_width: usize,
    /// Number of encryptions timed per width; values below 1 are raised to 1.
    pub min_samples: usize,
    /// Sampled values are within statistical distance `2^-stat_dist` of uniform.
    pub stat_dist: u32,
}

impl BenchConfig {
    /// The configuration of the cryptosystem under measurement.
    #[must_use]
    pub fn cryptosystem(&self) -> CryptosystemConfig {
        CryptosystemConfig {
            convention: self.convention,
            key_width: self.key_width,
            stat_dist: self.stat_dist,
        }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if the key width or the maximum width is zero
    pub fn validate(&self) -> Result<(), Error> {
        self.cryptosystem().validate()?;
        if self.max_width == 0 {
            return Err(Error::DimensionError(
                "Maximum width must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            convention: Convention::Standard,
            key_width: 1,
            max_width: 4,
            min_samples: 10,
            stat_dist: DEFAULT_STAT_DIST,
        }
    }
}

/**
 * A group selected at runtime, mapping to one of the [contexts][`crate::context`].
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupChoice {
    /// [`ModPCtx`][`crate::context::ModPCtx`]
    ModP,
    /// [`RistrettoCtx`][`crate::context::RistrettoCtx`]
    Ristretto255,
    /// [`P256Ctx`][`crate::context::P256Ctx`]
    P256,
}

impl GroupChoice {
    /// Every supported group.
    pub const ALL: [GroupChoice; 3] = [GroupChoice::ModP, GroupChoice::Ristretto255, GroupChoice::P256];
}

impl fmt::Display for GroupChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GroupChoice::ModP => "modp-63",
            GroupChoice::Ristretto255 => "ristretto255",
            GroupChoice::P256 => "p256",
        };
        f.pad(name)
    }
}
