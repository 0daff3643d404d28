// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupScalar operations for products

use crate::groups::productgroup::Wide;
use crate::traits::groups::GroupScalar;
use crate::utils::error::Error;

impl<T: GroupScalar> Wide<T> {
    /// The additive identity of the width `width` product ring.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero
    pub fn zero(width: usize) -> Result<Self, Error> {
        Wide::repeat(&T::zero(), width)
    }

    /// Componentwise addition.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the widths differ
    pub fn add(&self, other: &Self) -> Result<Self, Error> {
        other.check_width(self.width())?;

        Ok(Wide(
            self.iter().zip(other.iter()).map(|(a, b)| a.add(b)).collect(),
        ))
    }

    /// Componentwise subtraction.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the widths differ
    pub fn sub(&self, other: &Self) -> Result<Self, Error> {
        other.check_width(self.width())?;

        Ok(Wide(
            self.iter().zip(other.iter()).map(|(a, b)| a.sub(b)).collect(),
        ))
    }

    /// Multiply every component by the same scalar.
    #[must_use]
    pub fn dist_mul(&self, scalar: &T) -> Self {
        Wide(self.iter().map(|a| a.mul(scalar)).collect())
    }

    /// Componentwise additive inverse.
    #[must_use]
    pub fn neg(&self) -> Self {
        Wide(self.iter().map(GroupScalar::neg).collect())
    }

    /// Componentwise multiplicative inverse, `None` if any component is zero.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let components: Option<Vec<T>> = self.iter().map(GroupScalar::inv).collect();

        components.map(Wide)
    }
}
