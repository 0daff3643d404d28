// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Hashing

use sha3::Digest;
use sha3::{Sha3_256, Sha3_512};

/**
 * Hashing [context][`crate::context::Context`] dependency.
 *
 * Allows retrieving a fresh hasher instance in some [Context][`crate::context::Context`].
 */
pub trait Hasher: Digest + Clone + Send + Sync {
    /// Returns a fresh hasher instance.
    fn hasher() -> Self;
}

/// 256 bit output hasher.
pub type Hasher256 = Sha3_256;

/// 512 bit output hasher.
pub type Hasher512 = Sha3_512;

impl Hasher for Sha3_256 {
    fn hasher() -> Self {
        Sha3_256::new()
    }
}

impl Hasher for Sha3_512 {
    fn hasher() -> Self {
        Sha3_512::new()
    }
}

/**
 * Feed the given inputs, each paired with its domain separation tag, to the hasher.
 *
 * Tags and inputs are length prefixed, so distinct sequences of inputs never
 * produce the same byte stream. Inputs without a matching tag are hashed
 * with an empty tag.
 */
pub fn update_hasher<H: Digest>(hasher: &mut H, input_slices: &[&[u8]], ds_tags: &[&[u8]]) {
    for (i, input) in input_slices.iter().enumerate() {
        let tag: &[u8] = ds_tags.get(i).copied().unwrap_or_default();
        hasher.update((tag.len() as u64).to_be_bytes());
        hasher.update(tag);
        hasher.update((input.len() as u64).to_be_bytes());
        hasher.update(input);
    }
}

/**
 * Returns the byte stream [`update_hasher`] feeds to the hasher.
 *
 * Used by backends whose hash to scalar primitive concatenates its inputs.
 */
#[must_use]
pub fn frame_inputs(input_slices: &[&[u8]], ds_tags: &[&[u8]]) -> Vec<u8> {
    let mut framed = vec![];
    for (i, input) in input_slices.iter().enumerate() {
        let tag: &[u8] = ds_tags.get(i).copied().unwrap_or_default();
        framed.extend_from_slice(&(tag.len() as u64).to_be_bytes());
        framed.extend_from_slice(tag);
        framed.extend_from_slice(&(input.len() as u64).to_be_bytes());
        framed.extend_from_slice(input);
    }

    framed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest(inputs: &[&[u8]], tags: &[&[u8]]) -> Vec<u8> {
        let mut hasher = Hasher256::hasher();
        update_hasher(&mut hasher, inputs, tags);
        hasher.finalize().to_vec()
    }

    #[test]
    fn test_update_hasher_is_framed() {
        let tags: &[&[u8]] = &[b"a", b"b"];
        let one = digest(&[b"ab", b"c"], tags);
        let two = digest(&[b"a", b"bc"], tags);

        assert_ne!(one, two);
    }

    #[test]
    fn test_update_hasher_tags_separate() {
        let one = digest(&[b"data"], &[b"tag_one"]);
        let two = digest(&[b"data"], &[b"tag_two"]);

        assert_ne!(one, two);
        assert_eq!(one, digest(&[b"data"], &[b"tag_one"]));
    }

    #[test]
    fn test_frame_inputs_matches_hasher() {
        let inputs: &[&[u8]] = &[b"first", b"second"];
        let tags: &[&[u8]] = &[b"one", b"two"];

        let mut hasher = Hasher256::hasher();
        hasher.update(frame_inputs(inputs, tags));

        assert_eq!(hasher.finalize().to_vec(), digest(inputs, tags));
    }
}
