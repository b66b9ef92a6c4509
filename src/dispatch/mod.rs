/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Validation and dispatch of repacking configurations.
//!
//! A [`Packer`] is built from an input width and endianness and an output
//! width and endianness. Construction fails with a
//! [`ConfigError`](crate::error::ConfigError) unless the widths are legal and
//! one of them divides the other; otherwise, the packer selects one of the
//! algorithms of the [`impls`](crate::impls) module and drives streams
//! through it:
//!
//! - [`Packer::pack`] returns a new vector;
//! - [`Packer::pack_into`] writes into a caller-provided slice, and it is
//!   available also in `no_std` environments;
//! - [`Packer::iter`] returns a lazy [`PackIter`] that buffers at most one
//!   group;
//! - [`Packer::pack_par`] splits the input in group-aligned slices and
//!   repacks them on the rayon thread pool.
//!
//! When imploding, the input length must be a multiple of the group size;
//! a [`TrailingPolicy`] decides whether a partial trailing group is rejected
//! (the default), zero padded, or dropped.
//!
//! The free functions [`pack`] and [`pack_words`] are shorthands for the
//! common case.

mod packer;
pub use packer::*;

mod iter;
pub use iter::PackIter;
