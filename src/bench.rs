// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Encryption benchmarks
//!
//! Measures the mean wall-clock cost of [encryption with proof][`crate::cryptosystem::zkpok::ElGamalZkPok::encrypt`]
//! in milliseconds per operation. The message, every component equal to the
//! generator, is encrypted repeatedly under a random label and a public key
//! freshly lifted to the measured width.
//!
//! Results of [`bench_encrypt`] are indexed `[group][width - 1]`, following
//! the order of the requested groups.
//!
//! # Examples
//!
//! ```
//! use elgamal_writein::bench::bench_encrypt;
//! use elgamal_writein::config::{BenchConfig, GroupChoice};
//! use rand::rngs::OsRng;
//!
//! let config = BenchConfig {
//!     max_width: 2,
//!     min_samples: 1,
//!     ..BenchConfig::default()
//! };
//! let results = bench_encrypt(&[GroupChoice::ModP, GroupChoice::Ristretto255], &config, &mut OsRng).unwrap();
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].len(), 2);
//! ```

use std::time::Instant;

use tracing::info;

use crate::config::{BenchConfig, GroupChoice};
use crate::context::{Context, ModPCtx, P256Ctx, RistrettoCtx};
use crate::cryptosystem::elgamal::KeyPair;
use crate::cryptosystem::zkpok::ElGamalZkPokWriteIn;
use crate::groups::productgroup::Wide;
use crate::traits::groups::CryptographicGroup;
use crate::utils::error::Error;
use crate::utils::rng::RandomSource;

/// Length in bytes of the random label of a benchmark run.
const BENCH_LABEL_LEN: usize = 10;

/// Mean milliseconds per encryption at width `width`, over at least one sample.
///
/// # Errors
///
/// - `DimensionError` if `width` is zero
/// - `InsufficientRandomnessError` if the source fails
pub fn bench_encrypt_width<C: Context, R: RandomSource + ?Sized>(
    cryptosystem: &ElGamalZkPokWriteIn<C>,
    keypair: &KeyPair<C>,
    width: usize,
    min_samples: usize,
    rng: &mut R,
) -> Result<f64, Error> {
    let samples = min_samples.max(1);
    let pk = cryptosystem.wide_public_key(&keypair.pkey, width)?;
    let components = width.saturating_mul(cryptosystem.elgamal().key_width());
    let message = Wide::repeat(&C::G::generator(), components)?;
    let label = rng.get_bytes(BENCH_LABEL_LEN)?;

    let start = Instant::now();
    for _ in 0..samples {
        cryptosystem.encrypt(&label, &pk, &message, rng)?;
    }
    let elapsed = start.elapsed();

    // sample counts are far below 2^52
    #[allow(clippy::cast_precision_loss)]
    let ms = elapsed.as_secs_f64() * 1000.0 / samples as f64;
    info!(group = C::G::NAME, width, samples, ms_per_op = ms, "encryption benchmark");

    Ok(ms)
}

/// Mean milliseconds per encryption for widths `1..=max_width` in the group of `C`.
///
/// # Errors
///
/// - `DimensionError` if the key width or the maximum width is zero
/// - `InsufficientRandomnessError` if the source fails
pub fn bench_encrypt_group<C: Context, R: RandomSource + ?Sized>(
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Vec<f64>, Error> {
    config.validate()?;
    let cryptosystem = ElGamalZkPokWriteIn::<C>::new(&config.cryptosystem())?;
    let keypair = cryptosystem.generate(rng)?;

    (1..=config.max_width)
        .map(|width| bench_encrypt_width(&cryptosystem, &keypair, width, config.min_samples, rng))
        .collect()
}

/// Mean milliseconds per encryption for every group in `groups` and every width `1..=max_width`.
///
/// # Errors
///
/// - `DimensionError` if the key width or the maximum width is zero
/// - `InsufficientRandomnessError` if the source fails
pub fn bench_encrypt<R: RandomSource + ?Sized>(
    groups: &[GroupChoice],
    config: &BenchConfig,
    rng: &mut R,
) -> Result<Vec<Vec<f64>>, Error> {
    groups
        .iter()
        .map(|group| match group {
            GroupChoice::ModP => bench_encrypt_group::<ModPCtx, R>(config, rng),
            GroupChoice::Ristretto255 => bench_encrypt_group::<RistrettoCtx, R>(config, rng),
            GroupChoice::P256 => bench_encrypt_group::<P256Ctx, R>(config, rng),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cryptosystem::elgamal::Convention;
    use crate::utils::rng::tests::DrainedRng;
    use rand::rngs::OsRng;

    fn small_config() -> BenchConfig {
        BenchConfig {
            convention: Convention::Variant,
            key_width: 2,
            max_width: 3,
            min_samples: 2,
            stat_dist: 50,
        }
    }

    #[test]
    fn test_bench_encrypt_shape() {
        let results = bench_encrypt(&GroupChoice::ALL, &small_config(), &mut OsRng).unwrap();

        assert_eq!(results.len(), 3);
        for timings in &results {
            assert_eq!(timings.len(), 3);
            assert!(timings.iter().all(|ms| ms.is_finite() && *ms >= 0.0));
        }
    }

    #[test]
    fn test_bench_zero_samples() {
        let config = BenchConfig {
            min_samples: 0,
            max_width: 1,
            ..BenchConfig::default()
        };
        let results = bench_encrypt_group::<ModPCtx, _>(&config, &mut OsRng).unwrap();

        assert_eq!(results.len(), 1);
        assert!(results[0].is_finite());
    }

    #[test]
    fn test_bench_sample_count_stable() {
        let config = BenchConfig::default();
        let cryptosystem = ElGamalZkPokWriteIn::<ModPCtx>::new(&config.cryptosystem()).unwrap();
        let keypair = cryptosystem.generate(&mut OsRng).unwrap();

        let few = bench_encrypt_width(&cryptosystem, &keypair, 2, 5, &mut OsRng).unwrap();
        let many = bench_encrypt_width(&cryptosystem, &keypair, 2, 50, &mut OsRng).unwrap();

        assert!(few.is_finite() && few >= 0.0);
        assert!(many.is_finite() && many >= 0.0);
        // the mean per operation does not scale with the sample count
        let floor = 1e-6;
        assert!(few.max(floor) <= 20.0 * many.max(floor), "{few} ms vs {many} ms");
        assert!(many.max(floor) <= 20.0 * few.max(floor), "{few} ms vs {many} ms");
    }

    #[test]
    fn test_bench_no_groups() {
        let results = bench_encrypt(&[], &small_config(), &mut OsRng).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_bench_invalid_config() {
        let config = BenchConfig {
            max_width: 0,
            ..BenchConfig::default()
        };
        assert!(matches!(
            bench_encrypt(&[GroupChoice::P256], &config, &mut OsRng),
            Err(Error::DimensionError(_))
        ));

        assert!(matches!(
            bench_encrypt(&[GroupChoice::Ristretto255], &small_config(), &mut DrainedRng),
            Err(Error::InsufficientRandomnessError(_))
        ));
    }
}
