/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits and vocabulary types.

[`Endianness`] names one of the four combinations of a [`UnitOrder`] and a
[`BitOrder`]; [`Word`] abstracts over the unsigned integer types used to store
chunks.

*/

mod endianness;
pub use endianness::*;

mod words;
pub use words::*;
