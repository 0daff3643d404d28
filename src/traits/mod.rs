// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Abstractions for curve arithmetic, groups, elements and scalars.

pub mod groups;
