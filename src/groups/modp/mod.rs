// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Prime order subgroup of the multiplicative group modulo a safe prime
//!
//! With `p = 2q + 1` for primes `p` and `q`, the squares modulo `p` form a
//! group of prime order `q`, generated by `4 = 2^2`. Elements are
//! represented by their residue in `[1, p)`, scalars by their residue
//! in `[0, q)`.
//!
//! The modulus is 63 bits, so all arithmetic fits `u64` with `u128`
//! intermediate products. The group offers no meaningful security.

pub use element::ModPElement;
pub use group::ModPGroup;
pub use scalar::ModPScalar;

/// Modular implementation of [`GroupElement`](crate::traits::groups::GroupElement)
pub mod element;

/// Modular implementation of [`CryptographicGroup`](crate::traits::groups::CryptographicGroup)
pub mod group;

/// Modular implementation of [`GroupScalar`](crate::traits::groups::GroupScalar)
pub mod scalar;


/// The safe prime modulus `p = 2q + 1`.
pub const P: u64 = 9_223_372_036_854_771_239;

/// The prime group order `q = (p - 1) / 2`.
pub const Q: u64 = 4_611_686_018_427_385_619;

/// Generator of the order `q` subgroup.
pub const GENERATOR: u64 = 4;

/// Bit length of `q`.
pub const ORDER_BITS: u32 = 62;

/// `a * b mod m`
#[allow(clippy::arithmetic_side_effects)]
#[allow(clippy::cast_possible_truncation)]
#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `base ^ exp mod m`, square and multiply.
#[allow(clippy::arithmetic_side_effects)]
pub(crate) fn pow_mod(base: u64, exp: u64, m: u64) -> u64 {
    let mut result = 1 % m;
    let mut base = base % m;
    let mut exp = exp;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }

    result
}
