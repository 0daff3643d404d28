// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Generic product groups for elements and scalars
//!
//! A [`Wide`] value is a non-empty vector of components, an element of the
//! `w`-fold product of a group (or of its exponent ring). Operations act
//! componentwise; operations on two wide values require equal widths and
//! fail with `WidthMismatchError` otherwise.

use rayon::prelude::*;

use crate::utils::error::Error;
use crate::utils::serialization::{VDeserializable, VSerializable};
use crate::utils::serialization::{deser_all_fields, ser_fields};

/// Product group for elements
pub mod element;

/// Product group for scalars
pub mod scalar;


/**
 * An element of a width `w >= 1` product group.
 *
 * # Examples
 *
 * ```
 * use elgamal_writein::context::Context;
 * use elgamal_writein::context::RistrettoCtx as Ctx;
 * use elgamal_writein::groups::productgroup::Wide;
 * use elgamal_writein::traits::groups::CryptographicGroup;
 * use rand::rngs::OsRng;
 *
 * // some random scalars and elements
 * let rs = <Ctx as Context>::G::random_scalars(3, &mut OsRng, 50).unwrap();
 * let es = <Ctx as Context>::G::random_elements(3, &mut OsRng, 50).unwrap();
 *
 * // compute `es^rs = (e1^r1, e2^r2, e3^r3)`
 * let es_rs = es.exp(&rs).unwrap();
 *
 * // compute `g^rs = (g^r1, g^r2, g^r3)`
 * let g_rs = Wide::repl_exp(&Ctx::generator(), &rs);
 * assert_eq!(g_rs.width(), 3);
 *
 * // the width is part of the contract
 * let narrow = <Ctx as Context>::G::random_scalars(2, &mut OsRng, 50).unwrap();
 * assert!(es.exp(&narrow).is_err());
 * # let _ = es_rs;
 * ```
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Wide<T>(Vec<T>);

impl<T> Wide<T> {
    /// Construct a wide value from its components.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `components` is empty
    pub fn new(components: Vec<T>) -> Result<Self, Error> {
        if components.is_empty() {
            return Err(Error::DimensionError(
                "Wide values must have at least one component".to_string(),
            ));
        }

        Ok(Wide(components))
    }

    /// Number of components.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns the component at `index`.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `index` is out of range
    pub fn project(&self, index: usize) -> Result<&T, Error> {
        self.0.get(index).ok_or_else(|| {
            Error::DimensionError(format!(
                "Component {index} out of range for width {}",
                self.width()
            ))
        })
    }

    /// Returns the components.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Iterate over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Consume the value, returning its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    /// Apply `f` to every component.
    pub fn map<U, F: FnMut(&T) -> U>(&self, f: F) -> Wide<U> {
        Wide(self.0.iter().map(f).collect())
    }

    /// Apply `f` to every component, in parallel.
    pub fn par_map<U, F>(&self, f: F) -> Wide<U>
    where
        T: Sync,
        U: Send,
        F: Fn(&T) -> U + Sync + Send,
    {
        Wide(self.0.par_iter().map(f).collect())
    }

    /// Check that this value has exactly `expected` components.
    ///
    /// # Errors
    ///
    /// - `WidthMismatchError` if the width differs
    pub fn check_width(&self, expected: usize) -> Result<(), Error> {
        if self.width() == expected {
            Ok(())
        } else {
            Err(Error::WidthMismatchError {
                expected,
                found: self.width(),
            })
        }
    }
}

impl<T: Clone> Wide<T> {
    /// A value of the given width with every component equal to `item`.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `width` is zero
    pub fn repeat(item: &T, width: usize) -> Result<Self, Error> {
        Wide::new(vec![item.clone(); width])
    }

    /// Concatenate `times` copies of this value, giving width `times * self.width()`.
    ///
    /// # Errors
    ///
    /// - `DimensionError` if `times` is zero
    pub fn replicate(&self, times: usize) -> Result<Self, Error> {
        if times == 0 {
            return Err(Error::DimensionError(
                "Replication count must be at least 1".to_string(),
            ));
        }
        let components: Vec<T> = std::iter::repeat_n(self.0.as_slice(), times)
            .flatten()
            .cloned()
            .collect();

        Wide::new(components)
    }
}

impl<'a, T> IntoIterator for &'a Wide<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: VSerializable> VSerializable for Wide<T> {
    fn ser(&self) -> Vec<u8> {
        let components: Vec<Vec<u8>> = self.0.iter().map(VSerializable::ser).collect();
        let fields: Vec<&[u8]> = components.iter().map(Vec::as_slice).collect();

        ser_fields(&fields)
    }
}

impl<T: VDeserializable> VDeserializable for Wide<T> {
    fn deser(buffer: &[u8]) -> Result<Self, Error> {
        let components: Result<Vec<T>, Error> = deser_all_fields(buffer)?
            .into_iter()
            .map(T::deser)
            .collect();

        Wide::new(components?)
    }
}
