// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The Ristretto255 prime order group
//!
//! Elements are encoded as 32 byte compressed Ristretto points and scalars
//! as 32 canonical little-endian bytes; decoding rejects anything else.
//! Hashing to a scalar reduces a 64 byte SHA-3 digest of the framed inputs.

pub use element::RistrettoElement;
pub use group::Ristretto255Group;
pub use scalar::RistrettoScalar;

/// Compressed Ristretto points.
pub mod element;

/// The group, its generator and hash to scalar.
pub mod group;

/// Scalars modulo the group order.
pub mod scalar;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests;
