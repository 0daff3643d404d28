// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Randomized round-trip checks
//!
//! A round trip generates a key pair, lifts it to a width, encrypts a random
//! message with proof, then verifies and decrypts. A sweep covers both
//! conventions, key widths `1..=3`, widths `1..=4`, and both sampled and
//! caller supplied randomness.
//!
//! The first round trip that does not give back its message is reported as
//! `RoundTripFailure`, with every parameter and intermediate value hex encoded.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//!
//! use elgamal_writein::config::GroupChoice;
//! use elgamal_writein::correctness::check_groups;
//! use rand::rngs::OsRng;
//!
//! // a zero duration still runs one full sweep per group
//! let trials = check_groups(&[GroupChoice::ModP], Duration::ZERO, 50, &mut OsRng).unwrap();
//! assert_eq!(trials, 48);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{CryptosystemConfig, GroupChoice};
use crate::context::{Context, ModPCtx, P256Ctx, RistrettoCtx};
use crate::cryptosystem::elgamal::Convention;
use crate::cryptosystem::zkpok::ElGamalZkPokWriteIn;
use crate::groups::productgroup::Wide;
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::VSerializable;

/// Key widths covered by a sweep.
pub const KEY_WIDTHS: std::ops::RangeInclusive<usize> = 1..=3;

/// Widths covered by a sweep.
pub const WIDTHS: std::ops::RangeInclusive<usize> = 1..=4;

/// Label bound into every proof of a sweep.
const CHECK_LABEL: &[u8] = b"round trip";

/**
 * Parameters of one round trip.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    /// The ciphertext convention.
    pub convention: Convention,
    /// Number of components of the base key.
    pub key_width: usize,
    /// Number of base key copies.
    pub width: usize,
    /// Whether the randomness is supplied by the caller.
    pub supplied_r: bool,
}

/// Run one round trip with a fresh key pair.
///
/// # Errors
///
/// - `RoundTripFailure` if decryption fails or does not return the message
/// - `DimensionError` if the key width or width is zero
/// - `InsufficientRandomnessError` if the source fails
pub fn check_round_trip<C: Context, R: RandomSource + ?Sized>(
    trial: Trial,
    stat_dist: u32,
    rng: &mut R,
) -> Result<(), Error> {
    let config = CryptosystemConfig {
        convention: trial.convention,
        key_width: trial.key_width,
        stat_dist,
    };
    let cryptosystem = ElGamalZkPokWriteIn::<C>::new(&config)?;
    let keypair = cryptosystem.generate(rng)?;
    let pk = cryptosystem.wide_public_key(&keypair.pkey, trial.width)?;
    let sk = cryptosystem.wide_private_key(&keypair.skey, trial.width)?;
    let message = C::G::random_elements(pk.y().width(), rng, stat_dist)?;

    let (r, (ciphertext, proof)) = if trial.supplied_r {
        let r = cryptosystem.elgamal().sample_randomness(&pk, rng)?;
        let encrypted = cryptosystem.encrypt_with_r(CHECK_LABEL, &pk, &message, &r)?;
        (Some(r), encrypted)
    } else {
        (None, cryptosystem.encrypt(CHECK_LABEL, &pk, &message, rng)?)
    };

    let decrypted = cryptosystem.decrypt(&sk, CHECK_LABEL, &ciphertext, &proof);
    match decrypted {
        Ok(ref d) if *d == message => Ok(()),
        _ => {
            let values = [
                ("keypair", keypair.ser()),
                ("wide public key", pk.ser()),
                ("wide private key", sk.ser()),
                ("message", message.ser()),
                ("ciphertext", ciphertext.ser()),
                ("proof", proof.ser()),
            ];
            Err(round_trip_failure::<C>(
                trial,
                &values,
                r.as_ref(),
                decrypted.map_err(|e| e.to_string()),
            ))
        }
    }
}

/// Describe a failed round trip.
fn round_trip_failure<C: Context>(
    trial: Trial,
    values: &[(&str, Vec<u8>)],
    r: Option<&Wide<C::Scalar>>,
    decrypted: Result<Wide<C::Element>, String>,
) -> Error {
    let mut report = format!(
        "group = {}, convention = {:?}, key_width = {}, width = {}, label = {}",
        C::G::NAME,
        trial.convention,
        trial.key_width,
        trial.width,
        hex::encode(CHECK_LABEL),
    );
    for (name, bytes) in values {
        report.push_str(&format!(", {name} = {}", hex::encode(bytes)));
    }
    match r {
        Some(r) => report.push_str(&format!(", r = {}", hex::encode(r.ser()))),
        None => report.push_str(", r = sampled"),
    }
    match decrypted {
        Ok(d) => report.push_str(&format!(", decrypted = {}", hex::encode(d.ser()))),
        Err(e) => report.push_str(&format!(", decryption error = {e}")),
    }

    Error::RoundTripFailure(report)
}

/// Run one full sweep in the group of `C`, returning the number of round trips.
///
/// # Errors
///
/// - `RoundTripFailure` for the first round trip that fails
/// - `InsufficientRandomnessError` if the source fails
pub fn check_round_trips<C: Context, R: RandomSource + ?Sized>(
    stat_dist: u32,
    rng: &mut R,
) -> Result<usize, Error> {
    let mut trials = 0usize;
    for convention in Convention::ALL {
        for key_width in KEY_WIDTHS {
            for width in WIDTHS {
                for supplied_r in [true, false] {
                    let trial = Trial {
                        convention,
                        key_width,
                        width,
                        supplied_r,
                    };
                    check_round_trip::<C, R>(trial, stat_dist, rng)?;
                    trials = trials.saturating_add(1);
                }
            }
        }
    }
    debug!(group = C::G::NAME, trials, "round trip sweep passed");

    Ok(trials)
}

/// Sweep the given groups in turn until `min_duration` has elapsed, and at
/// least once each. Returns the number of round trips.
///
/// # Errors
///
/// - `DimensionError` if `groups` is empty
/// - `RoundTripFailure` for the first round trip that fails
/// - `InsufficientRandomnessError` if the source fails
pub fn check_groups<R: RandomSource + ?Sized>(
    groups: &[GroupChoice],
    min_duration: Duration,
    stat_dist: u32,
    rng: &mut R,
) -> Result<usize, Error> {
    if groups.is_empty() {
        return Err(Error::DimensionError(
            "At least one group must be checked".to_string(),
        ));
    }

    let start = Instant::now();
    let mut trials = 0usize;
    let mut sweeps = 0usize;
    while sweeps < groups.len() || start.elapsed() < min_duration {
        let group = groups.get(sweeps % groups.len()).ok_or_else(|| {
            Error::DimensionError("Group index out of range".to_string())
        })?;
        let count = match group {
            GroupChoice::ModP => check_round_trips::<ModPCtx, R>(stat_dist, rng)?,
            GroupChoice::Ristretto255 => check_round_trips::<RistrettoCtx, R>(stat_dist, rng)?,
            GroupChoice::P256 => check_round_trips::<P256Ctx, R>(stat_dist, rng)?,
        };
        trials = trials.saturating_add(count);
        sweeps = sweeps.saturating_add(1);
    }
    info!(trials, sweeps, elapsed = ?start.elapsed(), "round trip checks passed");

    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cryptosystem::elgamal::ElGamal;
    use crate::utils::rng::tests::DrainedRng;
    use rand::rngs::OsRng;

    #[test]
    fn test_round_trips_modp() {
        assert_eq!(check_round_trips::<ModPCtx, _>(50, &mut OsRng).unwrap(), 48);
    }

    #[test]
    fn test_round_trips_ristretto() {
        assert_eq!(check_round_trips::<RistrettoCtx, _>(50, &mut OsRng).unwrap(), 48);
    }

    #[test]
    fn test_round_trips_p256() {
        assert_eq!(check_round_trips::<P256Ctx, _>(50, &mut OsRng).unwrap(), 48);
    }

    #[test]
    fn test_check_groups() {
        let trials = check_groups(&GroupChoice::ALL, Duration::ZERO, 50, &mut OsRng).unwrap();
        assert_eq!(trials, 3 * 48);

        assert!(matches!(
            check_groups(&[], Duration::ZERO, 50, &mut OsRng),
            Err(Error::DimensionError(_))
        ));
    }

    #[test]
    fn test_check_drained_source() {
        let trial = Trial {
            convention: Convention::Standard,
            key_width: 1,
            width: 1,
            supplied_r: false,
        };
        assert!(matches!(
            check_round_trip::<ModPCtx, _>(trial, 50, &mut DrainedRng),
            Err(Error::InsufficientRandomnessError(_))
        ));
    }

    #[test]
    fn test_failure_report() {
        let elgamal = ElGamal::<ModPCtx>::new(Convention::Variant, 1, 50).unwrap();
        let keypair = elgamal.generate(&mut OsRng).unwrap();

        let trial = Trial {
            convention: Convention::Variant,
            key_width: 1,
            width: 2,
            supplied_r: true,
        };
        let r = <ModPCtx as Context>::G::random_scalars(2, &mut OsRng, 50).unwrap();
        let pk = elgamal.wide_public_key(&keypair.pkey, 2).unwrap();
        let sk = elgamal.wide_private_key(&keypair.skey, 2).unwrap();
        let values = [
            ("keypair", keypair.ser()),
            ("wide public key", pk.ser()),
            ("wide private key", sk.ser()),
        ];

        let error = round_trip_failure::<ModPCtx>(
            trial,
            &values,
            Some(&r),
            Err("Proof of knowledge does not verify".to_string()),
        );
        let Error::RoundTripFailure(report) = error else {
            panic!("expected a round trip failure");
        };
        assert!(report.contains("group = modp-63"));
        assert!(report.contains("convention = Variant"));
        assert!(report.contains("key_width = 1, width = 2"));
        assert!(report.contains(&format!("keypair = {}", hex::encode(keypair.ser()))));
        assert!(report.contains(&format!("wide public key = {}", hex::encode(pk.ser()))));
        assert!(report.contains(&format!("wide private key = {}", hex::encode(sk.ser()))));
        assert!(report.contains(&format!("r = {}", hex::encode(r.ser()))));
        assert!(report.contains("decryption error = Proof of knowledge does not verify"));
    }
}
