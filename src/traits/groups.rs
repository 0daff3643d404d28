// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group, element and scalar abstractions.
//!
//! Wide (product) versions of elements and scalars are provided by
//! [`Wide`][`crate::groups::productgroup::Wide`].

use std::fmt::Debug;

use crate::groups::productgroup::Wide;
use crate::utils::error::Error;
use crate::utils::hash::Hasher;
use crate::utils::rng::RandomSource;

/// Number of redraws before a source producing only zero scalars is declared broken.
const NONZERO_ATTEMPTS: usize = 8;

/**
 * An element of a prime order group, written multiplicatively.
 */
pub trait GroupElement: Debug + Clone + PartialEq + Send + Sync {
    /// The exponent ring of the group.
    type Scalar: GroupScalar;

    /// The identity element.
    fn one() -> Self;

    /// The group operation.
    fn mul(&self, other: &Self) -> Self;

    /// The inverse element.
    fn inv(&self) -> Self;

    /// Exponentiation by a scalar.
    fn exp(&self, scalar: &Self::Scalar) -> Self;

    /// Element equality.
    fn equals(&self, other: &Self) -> bool;
}

/**
 * An element of the exponent ring `Z_q` of a prime order group.
 */
pub trait GroupScalar: Debug + Clone + PartialEq + Send + Sync + From<u32> {
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Addition modulo the group order.
    fn add(&self, other: &Self) -> Self;

    /// Subtraction modulo the group order.
    fn sub(&self, other: &Self) -> Self;

    /// Multiplication modulo the group order.
    fn mul(&self, other: &Self) -> Self;

    /// Additive inverse.
    fn neg(&self) -> Self;

    /// Multiplicative inverse, `None` for zero.
    fn inv(&self) -> Option<Self>;

    /// Scalar equality.
    fn equals(&self, other: &Self) -> bool;

    /// Interpret the bytes as a big-endian integer and reduce it modulo the group order.
    fn from_bytes_mod_order(bytes: &[u8]) -> Self {
        let base = Self::from(256u32);
        bytes.iter().fold(Self::zero(), |acc, byte| {
            acc.mul(&base).add(&Self::from(u32::from(*byte)))
        })
    }
}

/**
 * A prime order group together with its generator, exponent ring and
 * the hash function used to derive challenges.
 */
pub trait CryptographicGroup {
    /// The group element type.
    type Element: GroupElement<Scalar = Self::Scalar>;

    /// The group scalar type.
    type Scalar: GroupScalar;

    /// The hashing function.
    type Hasher: Hasher;

    /// Bit length of the group order.
    const ORDER_BITS: u32;

    /// Human readable name of the group, used in diagnostics.
    const NAME: &'static str;

    /// Returns the default group generator.
    fn generator() -> Self::Element;

    /// Returns the generator raised to the given scalar.
    fn g_exp(scalar: &Self::Scalar) -> Self::Element;

    /// Returns the generator raised to each of the given scalars, `(g^s1, g^s2, ...)`.
    fn g_exp_wide(scalars: &Wide<Self::Scalar>) -> Wide<Self::Element> {
        scalars.par_map(Self::g_exp)
    }

    /// Hash the given inputs, each with its domain separation tag, to a scalar.
    ///
    /// # Errors
    ///
    /// - `HashToScalarError` if the backend hash to scalar fails
    fn hash_to_scalar(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Result<Self::Scalar, Error>;

    /// Number of random bytes drawn for one scalar at the given statistical distance.
    fn scalar_sample_bytes(stat_dist: u32) -> usize {
        let bits = Self::ORDER_BITS.saturating_add(stat_dist);
        bits.div_ceil(8) as usize
    }

    /// Sample a scalar within statistical distance `2^-stat_dist` of uniform.
    ///
    /// Draws `ORDER_BITS + stat_dist` bits (rounded up to whole bytes) and
    /// reduces them modulo the group order `q`. The distance from uniform is
    /// at most `q / 2^(8 * len) <= 2^-stat_dist`.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    fn random_scalar<R: RandomSource + ?Sized>(
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<Self::Scalar, Error> {
        let bytes = rng.get_bytes(Self::scalar_sample_bytes(stat_dist))?;

        Ok(Self::Scalar::from_bytes_mod_order(&bytes))
    }

    /// Sample a non-zero scalar within statistical distance `2^-stat_dist` of uniform.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails or only yields zero
    fn random_nonzero_scalar<R: RandomSource + ?Sized>(
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<Self::Scalar, Error> {
        let zero = Self::Scalar::zero();
        for _ in 0..NONZERO_ATTEMPTS {
            let scalar = Self::random_scalar(rng, stat_dist)?;
            if !scalar.equals(&zero) {
                return Ok(scalar);
            }
        }

        Err(Error::InsufficientRandomnessError(
            "Random source repeatedly produced a zero scalar".to_string(),
        ))
    }

    /// Sample `width` independent scalars.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero
    /// - `InsufficientRandomnessError` if the source fails
    fn random_scalars<R: RandomSource + ?Sized>(
        width: usize,
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<Wide<Self::Scalar>, Error> {
        let scalars: Result<Vec<Self::Scalar>, Error> = (0..width)
            .map(|_| Self::random_scalar(rng, stat_dist))
            .collect();

        Wide::new(scalars?)
    }

    /// Sample an element as `g^r` for a scalar `r` within statistical distance `2^-stat_dist` of uniform.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    fn random_element<R: RandomSource + ?Sized>(
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<Self::Element, Error> {
        let r = Self::random_scalar(rng, stat_dist)?;

        Ok(Self::g_exp(&r))
    }

    /// Sample `width` independent elements.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero
    /// - `InsufficientRandomnessError` if the source fails
    fn random_elements<R: RandomSource + ?Sized>(
        width: usize,
        rng: &mut R,
        stat_dist: u32,
    ) -> Result<Wide<Self::Element>, Error> {
        let elements: Result<Vec<Self::Element>, Error> = (0..width)
            .map(|_| Self::random_element(rng, stat_dist))
            .collect();

        Wide::new(elements?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use crate::context::ModPCtx as MCtx;
    use crate::context::P256Ctx as PCtx;
    use crate::context::RistrettoCtx as RCtx;
    use crate::utils::rng::tests::DrainedRng;
    use rand::rngs::OsRng;

    #[test]
    fn test_from_bytes_mod_order_modp() {
        test_from_bytes_mod_order::<MCtx>();
    }

    #[test]
    fn test_from_bytes_mod_order_ristretto() {
        test_from_bytes_mod_order::<RCtx>();
    }

    #[test]
    fn test_from_bytes_mod_order_p256() {
        test_from_bytes_mod_order::<PCtx>();
    }

    #[test]
    fn test_sample_bytes() {
        assert_eq!(<MCtx as Context>::G::scalar_sample_bytes(0), 8);
        assert_eq!(<MCtx as Context>::G::scalar_sample_bytes(50), 14);
        assert_eq!(<RCtx as Context>::G::scalar_sample_bytes(50), 38);
        assert_eq!(<PCtx as Context>::G::scalar_sample_bytes(64), 40);
    }

    #[test]
    fn test_random_scalar_drained_source() {
        let result = <RCtx as Context>::G::random_scalar(&mut DrainedRng, 50);
        assert!(matches!(
            result,
            Err(Error::InsufficientRandomnessError(_))
        ));
    }

    #[test]
    fn test_random_scalars_width() {
        let scalars = <MCtx as Context>::G::random_scalars(3, &mut OsRng, 50).unwrap();
        assert_eq!(scalars.width(), 3);

        let empty = <MCtx as Context>::G::random_scalars(0, &mut OsRng, 50);
        assert!(matches!(empty, Err(Error::DimensionError(_))));
    }

    fn test_from_bytes_mod_order<C: Context>() {
        let bytes = [0x01u8, 0x02, 0x03];
        let expected = C::Scalar::from(0x0001_0203u32);
        assert_eq!(C::Scalar::from_bytes_mod_order(&bytes), expected);

        // leading zeros do not change the value
        let padded = [0u8, 0, 0x01, 0x02, 0x03];
        assert_eq!(C::Scalar::from_bytes_mod_order(&padded), expected);

        assert_eq!(C::Scalar::from_bytes_mod_order(&[]), C::Scalar::zero());
    }
}
