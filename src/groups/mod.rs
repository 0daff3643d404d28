// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Group backends and generic product groups
//!
//! # [`modp`]
//!
//! Prime order subgroup of `Z_p^*` for a 63 bit safe prime, with native `u64` arithmetic
//!
//! # [`p256`]
//!
//! Group over curve P-256, backed by the [p256](https://github.com/RustCrypto/elliptic-curves/tree/master/p256) crate
//!
//! # [`ristretto255`]
//!
//! Group over the Ristretto group, backed by the [curve25519-dalek](https://github.com/dalek-cryptography/curve25519-dalek) crate
//!
//! # [`productgroup`]
//!
//! Width `w` products of [`GroupElement`][`crate::traits::groups::GroupElement`]s and
//! [`GroupScalar`][`crate::traits::groups::GroupScalar`]s, represented as
//! [`Wide`][`crate::groups::productgroup::Wide`].
//!
//! # Examples
//!
//! ```
//! use elgamal_writein::context::Context;
//! use elgamal_writein::context::ModPCtx as Ctx;
//! use elgamal_writein::groups::productgroup::Wide;
//! use elgamal_writein::traits::groups::{CryptographicGroup, GroupElement};
//! use rand::rngs::OsRng;
//!
//! let r = Ctx::random_scalar(&mut OsRng).unwrap();
//! let g = Ctx::generator();
//!
//! // a base key replicated to width 3
//! let y = Wide::new(vec![g.exp(&r)]).unwrap();
//! let wide = y.replicate(3).unwrap();
//! assert_eq!(wide.width(), 3);
//! assert_eq!(wide.project(2).unwrap(), &<Ctx as Context>::G::g_exp(&r));
//! ```

/// Prime order subgroup of `Z_p^*`, for a 63 bit safe prime `p`
pub mod modp;

/// Group over curve P-256, backed by the [p256](https://github.com/RustCrypto/elliptic-curves/tree/master/p256) crate
pub mod p256;

/// Generic product groups for elements and scalars
pub mod productgroup;

/// Group over the Ristretto group, backed by the [curve25519-dalek](https://github.com/dalek-cryptography/curve25519-dalek) crate
pub mod ristretto255;

pub use modp::ModPGroup;
pub use p256::P256Group;
pub use ristretto255::Ristretto255Group;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests;
