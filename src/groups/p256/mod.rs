// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! The NIST P-256 curve group
//!
//! Elements are encoded as 33 byte compressed SEC1 points, and decoding
//! checks that the point lies on the curve. Scalars are 32 canonical
//! big-endian bytes. Hashing to a scalar uses `hash2curve` `hash_to_scalar` over the
//! framed inputs under a single domain separation tag.

pub use element::P256Element;
pub use group::P256Group;
pub use scalar::P256Scalar;

/// Points on the curve.
pub mod element;

/// The group, its generator and hash to scalar.
pub mod group;

/// Scalars modulo the curve order.
pub mod scalar;
