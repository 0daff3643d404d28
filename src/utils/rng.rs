// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Random number generation
//!
//! All sampling in this crate is expressed in terms of [`RandomSource::get_bytes`]
//! plus a caller supplied statistical distance, see
//! [`CryptographicGroup::random_scalar`][`crate::traits::groups::CryptographicGroup::random_scalar`].

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::{ChaCha20Core, ChaCha20Rng};

use crate::utils::error::Error;
use crate::utils::hash::{Hasher, update_hasher};

/**
 * Marker trait to require a cryptographically secure random number generator.
 */
pub trait CRng: RngCore + CryptoRng {}

/**
 * `OsRng` is a cryptographically secure random number generator.
 */
impl CRng for OsRng {}

/**
 * A source of raw random bytes.
 *
 * Every [`CRng`] is a random source. A source that cannot supply
 * the requested bytes returns `InsufficientRandomnessError`; callers
 * decide whether to retry.
 */
pub trait RandomSource {
    /// Returns `len` random bytes.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source cannot supply the bytes
    fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>, Error>;
}

impl<R: CRng> RandomSource for R {
    fn get_bytes(&mut self, len: usize) -> Result<Vec<u8>, Error> {
        let mut bytes = vec![0u8; len];
        self.try_fill_bytes(&mut bytes).map_err(|e| {
            Error::InsufficientRandomnessError(format!(
                "Random source failed to supply {len} bytes: {e}"
            ))
        })?;

        Ok(bytes)
    }
}

/**
 * Deterministic generator seeded with the hash of domain separated inputs.
 *
 * The inputs are framed with [`update_hasher`], the first 32 bytes of the
 * digest seed a `ChaCha20` generator. The output is as unpredictable as the
 * secret part of the seed inputs.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::utils::hash::Hasher256;
 * use elgamal_writein::utils::rng::{RandomSource, seeded_rng};
 *
 * let mut one = seeded_rng::<Hasher256>(&[b"seed"], &[b"example"]);
 * let mut two = seeded_rng::<Hasher256>(&[b"seed"], &[b"example"]);
 *
 * assert_eq!(one.get_bytes(100).unwrap(), two.get_bytes(100).unwrap());
 * ```
 */
pub fn seeded_rng<H: Hasher>(seed_inputs: &[&[u8]], ds_tags: &[&[u8]]) -> ChaCha20Rng {
    let mut hasher = H::hasher();
    update_hasher(&mut hasher, seed_inputs, ds_tags);
    let digest = hasher.finalize();

    let mut seed = [0u8; 32];
    for (s, d) in seed.iter_mut().zip(digest.iter()) {
        *s = *d;
    }

    ChaCha20Rng::from(ChaCha20Core::from_seed(seed))
}

/**
 * `ChaCha20Rng` is a cryptographically secure random number generator.
 */
impl CRng for ChaCha20Rng {}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::utils::hash::{Hasher256, Hasher512};

    /// A source that has run dry.
    pub(crate) struct DrainedRng;

    impl RngCore for DrainedRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new("entropy pool drained"))
        }
    }
    impl CryptoRng for DrainedRng {}
    impl CRng for DrainedRng {}

    #[test]
    fn test_os_rng_source() {
        let bytes = OsRng.get_bytes(64).unwrap();
        assert_eq!(bytes.len(), 64);

        let empty = OsRng.get_bytes(0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_drained_source() {
        let result = DrainedRng.get_bytes(16);
        assert!(matches!(
            result,
            Err(Error::InsufficientRandomnessError(_))
        ));
    }

    #[test]
    fn test_seeded_rng_deterministic() {
        let mut one = seeded_rng::<Hasher512>(&[b"seed"], &[b"test"]);
        let mut two = seeded_rng::<Hasher512>(&[b"seed"], &[b"test"]);

        // split reads see the same stream
        let a = [one.get_bytes(7).unwrap(), one.get_bytes(100).unwrap()].concat();
        let b = two.get_bytes(107).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_rng_seed_separation() {
        let mut one = seeded_rng::<Hasher256>(&[b"seed"], &[b"test"]);
        let mut two = seeded_rng::<Hasher256>(&[b"seed"], &[b"other"]);
        let mut three = seeded_rng::<Hasher256>(&[b"seed2"], &[b"test"]);

        let a = one.get_bytes(32).unwrap();
        assert_ne!(a, two.get_bytes(32).unwrap());
        assert_ne!(a, three.get_bytes(32).unwrap());
    }

    #[test]
    fn test_seeded_rng_stream_advances() {
        let mut prg = seeded_rng::<Hasher256>(&[b"seed"], &[b"test"]);
        let a = prg.get_bytes(32).unwrap();
        let b = prg.get_bytes(32).unwrap();

        assert_ne!(a, b);
    }
}
