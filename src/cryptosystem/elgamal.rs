// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! ElGamal cryptosystem
//!
//! Keys, plaintexts and ciphertexts are [wide][`crate::groups::productgroup::Wide`]
//! values. A base key has `key_width` components; lifting it to width `w`
//! gives a key of `w * key_width` components, which encrypts plaintexts of
//! exactly that many components.
//!
//! Two conventions combine the key, the randomness and the plaintext. With
//! generator `g`, public key `y = g^x` and randomness `r`, componentwise:
//!
//! | | `u` | `v` | decryption |
//! |---|---|---|---|
//! | [`Convention::Standard`] | `g^r` | `y^r * m` | `v * u^(-x)` |
//! | [`Convention::Variant`] | `y^r` | `g^r * m` | `v * u^(-1/x)` |

use std::marker::PhantomData;

use crate::config::CryptosystemConfig;
use crate::context::Context;
use crate::groups::productgroup::Wide;
use crate::traits::groups::CryptographicGroup;
use crate::utils::Error;
use crate::utils::rng::RandomSource;
use crate::utils::serialization::{VDeserializable, VSerializable};
use crate::utils::serialization::{deser_fields, ser_fields};

/**
 * The algebraic arrangement of an `ElGamal` ciphertext.
 *
 * Both parties of an encryption must use the same convention.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Convention {
    /// `(u, v) = (g^r, y^r * m)`
    #[default]
    Standard,
    /// `(u, v) = (y^r, g^r * m)`
    Variant,
}

impl Convention {
    /// Both conventions, in a fixed order.
    pub const ALL: [Convention; 2] = [Convention::Standard, Convention::Variant];

    /// Returns true for [`Convention::Standard`].
    #[must_use]
    pub fn is_standard(&self) -> bool {
        matches!(self, Convention::Standard)
    }
}

impl VSerializable for Convention {
    fn ser(&self) -> Vec<u8> {
        match self {
            Convention::Standard => vec![0],
            Convention::Variant => vec![1],
        }
    }
}

impl VDeserializable for Convention {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        match buffer {
            [0] => Ok(Convention::Standard),
            [1] => Ok(Convention::Variant),
            _ => Err(Error::DeserializationError(
                "Unknown ElGamal convention".to_string(),
            )),
        }
    }
}

/// Serialize a key width as a 4 byte big-endian integer.
fn ser_key_width(key_width: usize) -> [u8; 4] {
    // key widths are bounded by the number of components in memory
    #[allow(clippy::cast_possible_truncation)]
    (key_width as u32).to_be_bytes()
}

/// Parse a key width, which must divide `components`.
fn deser_key_width(buffer: &[u8], components: usize) -> Result<usize, Error> {
    let key_width = usize::try_from(u32::from_be_bytes(<[u8; 4]>::try_from(buffer)?))?;
    if key_width == 0 || components % key_width != 0 {
        return Err(Error::DeserializationError(format!(
            "Key width {key_width} does not divide {components} components"
        )));
    }

    Ok(key_width)
}

/// Check that `key_width` is a valid key width for `components` components.
fn check_key_width(key_width: usize, components: usize) -> Result<(), Error> {
    if key_width == 0 || components % key_width != 0 {
        return Err(Error::DimensionError(format!(
            "Key width {key_width} does not divide {components} components"
        )));
    }

    Ok(())
}

/**
 * An `ElGamal` public key.
 *
 * Holds the group elements `y_i = g^(x_i)`. A base key has exactly
 * `key_width` components; a wide key is a base key replicated `w` times.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::cryptosystem::elgamal::{ElGamal, Convention};
 * use elgamal_writein::context::RistrettoCtx as RCtx;
 * use rand::rngs::OsRng;
 *
 * let elgamal = ElGamal::<RCtx>::new(Convention::Standard, 2, 50).unwrap();
 * let keypair = elgamal.generate(&mut OsRng).unwrap();
 *
 * let wide = elgamal.wide_public_key(&keypair.pkey, 3).unwrap();
 * assert_eq!(keypair.pkey.y().width(), 2);
 * assert_eq!(wide.y().width(), 6);
 * assert_eq!(wide.width(), 3);
 * ```
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey<C: Context> {
    y: Wide<C::Element>,
    key_width: usize,
}

impl<C: Context> PublicKey<C> {
    /// Construct a public key from its components.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `key_width` is zero or does not divide the number of components
    pub fn new(y: Wide<C::Element>, key_width: usize) -> Result<Self, Error> {
        check_key_width(key_width, y.width())?;

        Ok(PublicKey { y, key_width })
    }

    /// The public key components.
    #[must_use]
    pub fn y(&self) -> &Wide<C::Element> {
        &self.y
    }

    /// The number of components of the base key.
    #[must_use]
    pub fn key_width(&self) -> usize {
        self.key_width
    }

    /// The number of base key copies in this key.
    #[must_use]
    pub fn width(&self) -> usize {
        self.y.width().checked_div(self.key_width).unwrap_or_default()
    }
}

impl<C: Context> VSerializable for PublicKey<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&ser_key_width(self.key_width), &self.y.ser()])
    }
}

impl<C: Context> VDeserializable for PublicKey<C> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let [key_width, y] = <[&[u8]; 2]>::try_from(deser_fields(buffer, 2)?)
            .map_err(|_| Error::DeserializationError("Expected 2 fields".to_string()))?;
        let y = Wide::<C::Element>::deser(y)?;
        let key_width = deser_key_width(key_width, y.width())?;

        Ok(PublicKey { y, key_width })
    }
}

/**
 * An `ElGamal` private key.
 *
 * Holds the scalars `x_i`, with the same shape as its [`PublicKey`].
 */
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateKey<C: Context> {
    x: Wide<C::Scalar>,
    key_width: usize,
}

impl<C: Context> PrivateKey<C> {
    /// Construct a private key from its components.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `key_width` is zero or does not divide the number of components
    pub fn new(x: Wide<C::Scalar>, key_width: usize) -> Result<Self, Error> {
        check_key_width(key_width, x.width())?;

        Ok(PrivateKey { x, key_width })
    }

    /// The private key components.
    #[must_use]
    pub fn x(&self) -> &Wide<C::Scalar> {
        &self.x
    }

    /// The number of components of the base key.
    #[must_use]
    pub fn key_width(&self) -> usize {
        self.key_width
    }

    /// The number of base key copies in this key.
    #[must_use]
    pub fn width(&self) -> usize {
        self.x.width().checked_div(self.key_width).unwrap_or_default()
    }

    /// Computes the matching public key, `y_i = g^(x_i)`.
    #[must_use]
    pub fn public_key(&self) -> PublicKey<C> {
        PublicKey {
            y: C::G::g_exp_wide(&self.x),
            key_width: self.key_width,
        }
    }
}

impl<C: Context> VSerializable for PrivateKey<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&ser_key_width(self.key_width), &self.x.ser()])
    }
}

impl<C: Context> VDeserializable for PrivateKey<C> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let [key_width, x] = <[&[u8]; 2]>::try_from(deser_fields(buffer, 2)?)
            .map_err(|_| Error::DeserializationError("Expected 2 fields".to_string()))?;
        let x = Wide::<C::Scalar>::deser(x)?;
        let key_width = deser_key_width(key_width, x.width())?;

        Ok(PrivateKey { x, key_width })
    }
}

/**
 * An `ElGamal` key pair.
 */
#[derive(Debug, PartialEq, Clone)]
pub struct KeyPair<C: Context> {
    /// the private key
    pub skey: PrivateKey<C>,
    /// the public key
    pub pkey: PublicKey<C>,
}

impl<C: Context> KeyPair<C> {
    /// Construct a key pair from a private key, computing its public key.
    #[must_use]
    pub fn from_private_key(skey: PrivateKey<C>) -> Self {
        let pkey = skey.public_key();

        KeyPair { skey, pkey }
    }
}

impl<C: Context> VSerializable for KeyPair<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&self.skey.ser(), &self.pkey.ser()])
    }
}

impl<C: Context> VDeserializable for KeyPair<C> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let [skey, pkey] = <[&[u8]; 2]>::try_from(deser_fields(buffer, 2)?)
            .map_err(|_| Error::DeserializationError("Expected 2 fields".to_string()))?;
        let skey = PrivateKey::<C>::deser(skey)?;
        let pkey = PublicKey::<C>::deser(pkey)?;

        if skey.public_key() != pkey {
            return Err(Error::DeserializationError(
                "Public key does not match private key".to_string(),
            ));
        }

        Ok(KeyPair { skey, pkey })
    }
}

/**
 * An `ElGamal` ciphertext.
 *
 * A pair `(u, v)` of wide values of equal width. `u` carries the
 * randomization and `v` the masked plaintext.
 */
#[derive(Debug, PartialEq, Clone)]
pub struct Ciphertext<C: Context> {
    u: Wide<C::Element>,
    v: Wide<C::Element>,
}

impl<C: Context> Ciphertext<C> {
    /// Construct a ciphertext with given values `u` and `v`.
    ///
    /// Use [`ElGamal::encrypt`] to encrypt a message.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if `u` and `v` have different widths
    pub fn new(u: Wide<C::Element>, v: Wide<C::Element>) -> Result<Self, Error> {
        v.check_width(u.width())?;

        Ok(Ciphertext { u, v })
    }

    /// Obtain a reference to the first element of the ciphertext, `u`.
    #[must_use]
    pub fn u(&self) -> &Wide<C::Element> {
        &self.u
    }

    /// Obtain a reference to the second element of the ciphertext, `v`.
    #[must_use]
    pub fn v(&self) -> &Wide<C::Element> {
        &self.v
    }

    /// The number of components of each half.
    #[must_use]
    pub fn width(&self) -> usize {
        self.u.width()
    }
}

impl<C: Context> VSerializable for Ciphertext<C> {
    fn ser(&self) -> Vec<u8> {
        ser_fields(&[&self.u.ser(), &self.v.ser()])
    }
}

impl<C: Context> VDeserializable for Ciphertext<C> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let [u, v] = <[&[u8]; 2]>::try_from(deser_fields(buffer, 2)?)
            .map_err(|_| Error::DeserializationError("Expected 2 fields".to_string()))?;
        let u = Wide::<C::Element>::deser(u)?;
        let v = Wide::<C::Element>::deser(v)?;

        Ciphertext::new(u, v)
    }
}

/**
 * The `ElGamal` cryptosystem over the group of context `C`.
 *
 * Fixes the [`Convention`], the base key width and the statistical
 * distance used for sampling.
 *
 * Encryption and decryption perform no validation beyond width checks;
 * decrypting a ciphertext that was never checked yields an unrelated
 * plaintext. See [`ElGamalZkPok`][`crate::cryptosystem::zkpok::ElGamalZkPok`]
 * for encryption bound to a proof.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::cryptosystem::elgamal::{ElGamal, Convention};
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::RistrettoCtx as RCtx;
 * use elgamal_writein::traits::groups::CryptographicGroup;
 * use rand::rngs::OsRng;
 *
 * let elgamal = ElGamal::<RCtx>::new(Convention::Variant, 1, 50).unwrap();
 * let keypair = elgamal.generate(&mut OsRng).unwrap();
 * let pk = elgamal.wide_public_key(&keypair.pkey, 2).unwrap();
 * let sk = elgamal.wide_private_key(&keypair.skey, 2).unwrap();
 *
 * // encrypt a message of width 2
 * let message = <RCtx as Context>::G::random_elements(2, &mut OsRng, 50).unwrap();
 * let ciphertext = elgamal.encrypt(&pk, &message, &mut OsRng).unwrap();
 * let decrypted = elgamal.decrypt(&sk, &ciphertext).unwrap();
 *
 * assert_eq!(message, decrypted);
 * ```
 */
#[derive(Debug, Clone, PartialEq)]
pub struct ElGamal<C: Context> {
    convention: Convention,
    key_width: usize,
    stat_dist: u32,
    context: PhantomData<C>,
}

impl<C: Context> ElGamal<C> {
    /// Construct the cryptosystem.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `key_width` is zero
    pub fn new(convention: Convention, key_width: usize, stat_dist: u32) -> Result<Self, Error> {
        if key_width == 0 {
            return Err(Error::DimensionError(
                "Key width must be at least 1".to_string(),
            ));
        }

        Ok(ElGamal {
            convention,
            key_width,
            stat_dist,
            context: PhantomData,
        })
    }

    /// Construct the cryptosystem from a configuration.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if the configured key width is zero
    pub fn from_config(config: &CryptosystemConfig) -> Result<Self, Error> {
        Self::new(config.convention, config.key_width, config.stat_dist)
    }

    /// The convention of this cryptosystem.
    #[must_use]
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// The base key width of this cryptosystem.
    #[must_use]
    pub fn key_width(&self) -> usize {
        self.key_width
    }

    /// The statistical distance used for sampling.
    #[must_use]
    pub fn stat_dist(&self) -> u32 {
        self.stat_dist
    }

    /// Generate a fresh base key pair of `key_width` components.
    ///
    /// Private key components are non-zero, so the variant convention can always invert them.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<KeyPair<C>, Error> {
        let x: Result<Vec<C::Scalar>, Error> = (0..self.key_width)
            .map(|_| C::G::random_nonzero_scalar(rng, self.stat_dist))
            .collect();
        let skey = PrivateKey::new(Wide::new(x?)?, self.key_width)?;

        Ok(KeyPair::from_private_key(skey))
    }

    /// Lift a base public key to width `width`.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero or the key is already wide
    /// - `WidthMismatchError` if the key width differs from this cryptosystem's
    pub fn wide_public_key(&self, pk: &PublicKey<C>, width: usize) -> Result<PublicKey<C>, Error> {
        self.check_base_key(pk.key_width, pk.y.width())?;

        PublicKey::new(pk.y.replicate(width)?, self.key_width)
    }

    /// Lift a base private key to width `width`.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero or the key is already wide
    /// - `WidthMismatchError` if the key width differs from this cryptosystem's
    pub fn wide_private_key(
        &self,
        sk: &PrivateKey<C>,
        width: usize,
    ) -> Result<PrivateKey<C>, Error> {
        self.check_base_key(sk.key_width, sk.x.width())?;

        PrivateKey::new(sk.x.replicate(width)?, self.key_width)
    }

    fn check_base_key(&self, key_width: usize, components: usize) -> Result<(), Error> {
        if key_width != self.key_width {
            return Err(Error::WidthMismatchError {
                expected: self.key_width,
                found: key_width,
            });
        }
        if components != key_width {
            return Err(Error::DimensionError(format!(
                "Key of {components} components is already wide"
            )));
        }

        Ok(())
    }

    /// Sample encryption randomness matching the width of `pk`.
    ///
    /// # Errors
    ///
    /// - `InsufficientRandomnessError` if the source fails
    pub fn sample_randomness<R: RandomSource + ?Sized>(
        &self,
        pk: &PublicKey<C>,
        rng: &mut R,
    ) -> Result<Wide<C::Scalar>, Error> {
        C::G::random_scalars(pk.y.width(), rng, self.stat_dist)
    }

    /// Encrypt the message under `pk` with fresh randomness.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the message width differs from the key width
    /// - `InsufficientRandomnessError` if the source fails
    pub fn encrypt<R: RandomSource + ?Sized>(
        &self,
        pk: &PublicKey<C>,
        message: &Wide<C::Element>,
        rng: &mut R,
    ) -> Result<Ciphertext<C>, Error> {
        message.check_width(pk.y.width())?;
        let r = self.sample_randomness(pk, rng)?;

        self.encrypt_with_r(pk, message, &r)
    }

    /// Encrypt the message under `pk` with the given randomness.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the message or randomness width differs from the key width
    pub fn encrypt_with_r(
        &self,
        pk: &PublicKey<C>,
        message: &Wide<C::Element>,
        r: &Wide<C::Scalar>,
    ) -> Result<Ciphertext<C>, Error> {
        let width = pk.y.width();
        message.check_width(width)?;
        r.check_width(width)?;

        let g_r = C::G::g_exp_wide(r);
        let y_r = pk.y.exp(r)?;

        let (u, mask) = match self.convention {
            Convention::Standard => (g_r, y_r),
            Convention::Variant => (y_r, g_r),
        };
        let v = message.mul(&mask)?;

        Ciphertext::new(u, v)
    }

    /// Decrypt the ciphertext with `sk`.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the ciphertext width differs from the key width
    /// - `InvalidKeyError` if a private key component is not invertible (variant only)
    pub fn decrypt(
        &self,
        sk: &PrivateKey<C>,
        ciphertext: &Ciphertext<C>,
    ) -> Result<Wide<C::Element>, Error> {
        ciphertext.u.check_width(sk.x.width())?;

        let exponent = match self.convention {
            Convention::Standard => sk.x.neg(),
            Convention::Variant => sk
                .x
                .invert()
                .ok_or_else(|| {
                    Error::InvalidKeyError("Private key component is not invertible".to_string())
                })?
                .neg(),
        };
        let unmask = ciphertext.u.exp(&exponent)?;

        ciphertext.v.mul(&unmask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::P256Ctx as PCtx;
    use crate::context::RistrettoCtx as RCtx;
    use crate::context::{Context, ModPCtx as MCtx};
    use crate::utils::rng::tests::DrainedRng;
    use rand::rngs::OsRng;

    #[test]
    fn test_elgamal_modp() {
        test_elgamal::<MCtx>();
    }

    #[test]
    fn test_elgamal_ristretto() {
        test_elgamal::<RCtx>();
    }

    #[test]
    fn test_elgamal_p256() {
        test_elgamal::<PCtx>();
    }

    #[test]
    fn test_conventions_differ_modp() {
        test_conventions_differ::<MCtx>();
    }

    #[test]
    fn test_conventions_differ_ristretto() {
        test_conventions_differ::<RCtx>();
    }

    #[test]
    fn test_wide_keys_modp() {
        test_wide_keys::<MCtx>();
    }

    #[test]
    fn test_wide_keys_p256() {
        test_wide_keys::<PCtx>();
    }

    #[test]
    fn test_width_mismatch_modp() {
        test_width_mismatch::<MCtx>();
    }

    #[test]
    fn test_width_mismatch_ristretto() {
        test_width_mismatch::<RCtx>();
    }

    #[test]
    fn test_serialization_modp() {
        test_serialization::<MCtx>();
    }

    #[test]
    fn test_serialization_ristretto() {
        test_serialization::<RCtx>();
    }

    #[test]
    fn test_serialization_p256() {
        test_serialization::<PCtx>();
    }

    #[test]
    fn test_variant_zero_key() {
        let elgamal = ElGamal::<MCtx>::new(Convention::Variant, 1, 50).unwrap();
        let zero = Wide::<<MCtx as Context>::Scalar>::zero(1).unwrap();
        let sk = PrivateKey::<MCtx>::new(zero, 1).unwrap();
        let pk = sk.public_key();

        let m = Wide::new(vec![MCtx::generator()]).unwrap();
        let ct = elgamal.encrypt(&pk, &m, &mut OsRng).unwrap();
        assert!(matches!(
            elgamal.decrypt(&sk, &ct),
            Err(Error::InvalidKeyError(_))
        ));
    }

    #[test]
    fn test_generate_drained_source() {
        let elgamal = ElGamal::<RCtx>::new(Convention::Standard, 2, 50).unwrap();
        assert!(matches!(
            elgamal.generate(&mut DrainedRng),
            Err(Error::InsufficientRandomnessError(_))
        ));
    }

    #[test]
    fn test_zero_key_width() {
        assert!(matches!(
            ElGamal::<MCtx>::new(Convention::Standard, 0, 50),
            Err(Error::DimensionError(_))
        ));
    }

    fn test_elgamal<Ctx: Context>() {
        for convention in Convention::ALL {
            for key_width in 1..=3 {
                let elgamal = ElGamal::<Ctx>::new(convention, key_width, 50).unwrap();
                let keypair = elgamal.generate(&mut OsRng).unwrap();
                assert_eq!(keypair.pkey.y().width(), key_width);
                assert_eq!(keypair.skey.public_key(), keypair.pkey);

                for width in 1..=4 {
                    let pk = elgamal.wide_public_key(&keypair.pkey, width).unwrap();
                    let sk = elgamal.wide_private_key(&keypair.skey, width).unwrap();
                    let message =
                        Ctx::G::random_elements(width * key_width, &mut OsRng, 50).unwrap();

                    let ciphertext = elgamal.encrypt(&pk, &message, &mut OsRng).unwrap();
                    assert_eq!(ciphertext.width(), width * key_width);
                    let decrypted = elgamal.decrypt(&sk, &ciphertext).unwrap();
                    assert_eq!(message, decrypted);

                    let r = elgamal.sample_randomness(&pk, &mut OsRng).unwrap();
                    let ciphertext = elgamal.encrypt_with_r(&pk, &message, &r).unwrap();
                    let again = elgamal.encrypt_with_r(&pk, &message, &r).unwrap();
                    assert_eq!(ciphertext, again);
                    let decrypted = elgamal.decrypt(&sk, &ciphertext).unwrap();
                    assert_eq!(message, decrypted);
                }
            }
        }
    }

    fn test_conventions_differ<Ctx: Context>() {
        let standard = ElGamal::<Ctx>::new(Convention::Standard, 1, 50).unwrap();
        let variant = ElGamal::<Ctx>::new(Convention::Variant, 1, 50).unwrap();
        let keypair = standard.generate(&mut OsRng).unwrap();

        let message = Ctx::G::random_elements(1, &mut OsRng, 50).unwrap();
        let r = Wide::new(vec![Ctx::random_scalar(&mut OsRng).unwrap()]).unwrap();

        let s = standard.encrypt_with_r(&keypair.pkey, &message, &r).unwrap();
        let v = variant.encrypt_with_r(&keypair.pkey, &message, &r).unwrap();

        // standard u = g^r, variant u = y^r = (g^r)^x
        assert_eq!(s.u(), &Wide::repl_exp(&Ctx::generator(), &r));
        let x = keypair.skey.x().project(0).unwrap();
        assert_eq!(v.u(), &s.u().dist_exp(x));
        assert_ne!(s, v);

        // decrypting under the other convention does not recover the message
        let wrong = variant.decrypt(&keypair.skey, &s).unwrap();
        assert_ne!(wrong, message);
    }

    fn test_wide_keys<Ctx: Context>() {
        let elgamal = ElGamal::<Ctx>::new(Convention::Standard, 2, 50).unwrap();
        let keypair = elgamal.generate(&mut OsRng).unwrap();

        for width in 1..=5 {
            let pk = elgamal.wide_public_key(&keypair.pkey, width).unwrap();
            let sk = elgamal.wide_private_key(&keypair.skey, width).unwrap();
            assert_eq!(pk.width(), width);
            assert_eq!(sk.width(), width);
            assert_eq!(sk.public_key(), pk);
        }

        assert!(matches!(
            elgamal.wide_public_key(&keypair.pkey, 0),
            Err(Error::DimensionError(_))
        ));
        assert!(matches!(
            elgamal.wide_private_key(&keypair.skey, 0),
            Err(Error::DimensionError(_))
        ));

        // lifting twice is rejected
        let wide = elgamal.wide_public_key(&keypair.pkey, 2).unwrap();
        assert!(matches!(
            elgamal.wide_public_key(&wide, 2),
            Err(Error::DimensionError(_))
        ));

        // keys of another cryptosystem are rejected
        let other = ElGamal::<Ctx>::new(Convention::Standard, 1, 50).unwrap();
        assert!(matches!(
            other.wide_public_key(&keypair.pkey, 2),
            Err(Error::WidthMismatchError { .. })
        ));
    }

    fn test_width_mismatch<Ctx: Context>() {
        let elgamal = ElGamal::<Ctx>::new(Convention::Standard, 1, 50).unwrap();
        let keypair = elgamal.generate(&mut OsRng).unwrap();
        let pk = elgamal.wide_public_key(&keypair.pkey, 3).unwrap();
        let sk = elgamal.wide_private_key(&keypair.skey, 2).unwrap();

        let message = Ctx::G::random_elements(2, &mut OsRng, 50).unwrap();
        assert!(matches!(
            elgamal.encrypt(&pk, &message, &mut OsRng),
            Err(Error::WidthMismatchError {
                expected: 3,
                found: 2
            })
        ));

        let message = Ctx::G::random_elements(3, &mut OsRng, 50).unwrap();
        let r = Ctx::G::random_scalars(2, &mut OsRng, 50).unwrap();
        assert!(matches!(
            elgamal.encrypt_with_r(&pk, &message, &r),
            Err(Error::WidthMismatchError { .. })
        ));

        let ciphertext = elgamal.encrypt(&pk, &message, &mut OsRng).unwrap();
        assert!(matches!(
            elgamal.decrypt(&sk, &ciphertext),
            Err(Error::WidthMismatchError { .. })
        ));
    }

    fn test_serialization<Ctx: Context>() {
        let elgamal = ElGamal::<Ctx>::new(Convention::Standard, 2, 50).unwrap();
        let keypair = elgamal.generate(&mut OsRng).unwrap();
        let pk = elgamal.wide_public_key(&keypair.pkey, 2).unwrap();

        let back = KeyPair::<Ctx>::deser(&keypair.ser()).unwrap();
        assert_eq!(keypair, back);

        let back = PublicKey::<Ctx>::deser(&pk.ser()).unwrap();
        assert_eq!(pk, back);
        assert_eq!(back.key_width(), 2);

        let message = Ctx::G::random_elements(4, &mut OsRng, 50).unwrap();
        let ciphertext = elgamal.encrypt(&pk, &message, &mut OsRng).unwrap();
        let back = Ciphertext::<Ctx>::deser(&ciphertext.ser()).unwrap();
        assert_eq!(ciphertext, back);

        // a key pair whose halves do not match is rejected
        let other = elgamal.generate(&mut OsRng).unwrap();
        let mismatched = KeyPair {
            skey: keypair.skey.clone(),
            pkey: other.pkey,
        };
        assert!(KeyPair::<Ctx>::deser(&mismatched.ser()).is_err());

        // a ciphertext with halves of different widths is rejected
        let short = Ctx::G::random_elements(3, &mut OsRng, 50).unwrap();
        let bytes = ser_fields(&[&ciphertext.u().ser(), &short.ser()]);
        assert!(Ciphertext::<Ctx>::deser(&bytes).is_err());

        assert_eq!(Convention::deser(&Convention::Variant.ser()).unwrap(), Convention::Variant);
        assert!(Convention::deser(&[2]).is_err());
    }
}
