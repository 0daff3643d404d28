// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! GroupElement operations for products

use rayon::prelude::*;

use crate::groups::productgroup::Wide;
use crate::traits::groups::GroupElement;
use crate::utils::error::Error;

impl<T: GroupElement> Wide<T> {
    /// The identity of the width `width` product group.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero
    pub fn one(width: usize) -> Result<Self, Error> {
        Wide::repeat(&T::one(), width)
    }

    /// Componentwise group operation.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the widths differ
    pub fn mul(&self, other: &Self) -> Result<Self, Error> {
        other.check_width(self.width())?;
        let components = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| a.mul(b))
            .collect();

        Ok(Wide(components))
    }

    /// Componentwise inverse.
    #[must_use]
    pub fn inv(&self) -> Self {
        Wide(self.iter().map(GroupElement::inv).collect())
    }

    /// Componentwise exponentiation, `(e1^s1, e2^s2, ...)`.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the widths differ
    pub fn exp(&self, scalars: &Wide<T::Scalar>) -> Result<Self, Error> {
        scalars.check_width(self.width())?;
        let components = self
            .as_slice()
            .par_iter()
            .zip(scalars.as_slice().par_iter())
            .map(|(e, s)| e.exp(s))
            .collect();

        Ok(Wide(components))
    }

    /// Raise every component to the same scalar, `(e1^s, e2^s, ...)`.
    #[must_use]
    pub fn dist_exp(&self, scalar: &T::Scalar) -> Self {
        Wide(self.as_slice().par_iter().map(|e| e.exp(scalar)).collect())
    }

    /// Raise one base to every scalar, `(b^s1, b^s2, ...)`.
    #[must_use]
    pub fn repl_exp(base: &T, scalars: &Wide<T::Scalar>) -> Self {
        Wide(scalars.as_slice().par_iter().map(|s| base.exp(s)).collect())
    }

    /// Equality of all components; values of different widths are never equal.
    #[must_use]
    pub fn equals(&self, other: &Self) -> bool {
        self.width() == other.width() && self.iter().zip(other.iter()).all(|(a, b)| a.equals(b))
    }
}
