// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! A cryptographic context instantiates a set of interdependent functionalities
//! suitable for some application.

use crate::groups::ModPGroup;
use crate::groups::P256Group;
use crate::groups::Ristretto255Group;
use crate::traits::groups::CryptographicGroup;
use crate::traits::groups::GroupElement;
use crate::traits::groups::GroupScalar;
use crate::utils::error::Error;
use crate::utils::hash::Hasher;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::{VDeserializable, VSerializable};

/// Statistical distance used by the sampling shortcuts of [`Context`].
pub const DEFAULT_STAT_DIST: u32 = 50;

/**
 * A cryptographic context instantiates a set of interdependent functionalities
 * suitable for some application.
 *
 * Provides
 * - An underlying [prime order group][`crate::traits::groups::CryptographicGroup`],
 *   with [elements][`crate::traits::groups::GroupElement`] and
 *   [scalars][`crate::traits::groups::GroupScalar`] and their
 *   [wide products][`crate::groups::productgroup::Wide`].
 *
 * - A [hashing function][`crate::utils::hash`], as instantiated by the group.
 *
 * The [El Gamal cryptosystem][`crate::cryptosystem::elgamal`] and the
 * [proof engine][`crate::zkp::sigma`] are built on top of this context.
 * Randomness is not part of the context, every randomized operation takes
 * its [random source][`crate::utils::rng::RandomSource`] as an argument.
 *
 * # Examples
 *
 * ```ignore
 * // Defines the Ristretto context, with
 * // - Ristreto255 as the underlying group
 * // - Sha3-512 as the hashing function
 * pub struct RistrettoCtx;
 * impl Context for RistrettoCtx {
 *   type Element = <Self::G as CryptographicGroup>::Element;
 *   type Scalar = <Self::G as CryptographicGroup>::Scalar;
 *   type Hasher = <Self::G as CryptographicGroup>::Hasher;
 *
 *   type G = Ristretto255Group;
 * }
 * ```
 */
pub trait Context: private::Sealed + std::fmt::Debug + PartialEq + Clone + Send + Sync + 'static {
    /// The group element type.
    type Element: GroupElement<Scalar = Self::Scalar> + VSerializable + VDeserializable;

    /// The group scalar type.
    type Scalar: GroupScalar + VSerializable + VDeserializable;

    /// The hashing function.
    type Hasher: Hasher;

    /// The underlying group.
    type G: CryptographicGroup<Element = Self::Element, Scalar = Self::Scalar, Hasher = Self::Hasher>;

    /// Returns a hasher instance.
    #[inline]
    #[must_use]
    fn get_hasher() -> Self::Hasher {
        Self::Hasher::hasher()
    }

    /// Returns a random group element, at the default statistical distance.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    #[inline]
    fn random_element<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self::Element, Error> {
        Self::G::random_element(rng, DEFAULT_STAT_DIST)
    }

    /// Returns a random scalar, at the default statistical distance.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    #[inline]
    fn random_scalar<R: RandomSource + ?Sized>(rng: &mut R) -> Result<Self::Scalar, Error> {
        Self::G::random_scalar(rng, DEFAULT_STAT_DIST)
    }

    /// Returns the default group generator.
    #[inline]
    #[must_use]
    fn generator() -> Self::Element {
        Self::G::generator()
    }
}

/**
 * Defines the modular context.
 *
 * Sets
 * - the order `q` subgroup of `Z_p^*` for a 63 bit safe prime `p` as the underlying group.
 * - `Sha3-256` as the hashing function.
 *
 * The group is small enough to be fast and trivially inspectable. It offers no
 * meaningful security and exists for testing and benchmarking.
 */
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct ModPCtx;

impl Context for ModPCtx {
    type Element = <Self::G as CryptographicGroup>::Element;
    type Scalar = <Self::G as CryptographicGroup>::Scalar;
    type Hasher = <Self::G as CryptographicGroup>::Hasher;

    type G = ModPGroup;
}

/**
 * Defines the P256 context.
 *
 * Sets
 * - `p256` as the underlying curve.
 * - `Sha3-256` as the hashing function.
 */
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct P256Ctx;

impl Context for P256Ctx {
    type Element = <Self::G as CryptographicGroup>::Element;
    type Scalar = <Self::G as CryptographicGroup>::Scalar;
    type Hasher = <Self::G as CryptographicGroup>::Hasher;

    type G = P256Group;
}
/**
 * Defines the Ristretto context.
 *
 * Sets
 * - `Ristretto255` as the underlying group.
 * - `Sha3-512` as the hashing function.
 */
#[derive(Debug, PartialEq, Clone, Hash)]
pub struct RistrettoCtx;

impl Context for RistrettoCtx {
    type Element = <Self::G as CryptographicGroup>::Element;
    type Scalar = <Self::G as CryptographicGroup>::Scalar;
    type Hasher = <Self::G as CryptographicGroup>::Hasher;

    type G = Ristretto255Group;
}

/// Seals the [Context] trait to prevent external implementations.
mod private {
    /// Sealed traits implement this.
    #[allow(unnameable_types)]
    pub trait Sealed {}
}

impl private::Sealed for ModPCtx {}
impl private::Sealed for RistrettoCtx {}
impl private::Sealed for P256Ctx {}
