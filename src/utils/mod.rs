/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Bit-twiddling primitives.

[`reverse_units`] and [`reverse_bits_per_unit`] reverse, respectively, the
order of the units of a chunk and the order of the bits inside each unit;
[`Reversal`] selects which of them are needed to move between two
[`Endianness`](crate::traits::Endianness) values.

[`ShiftResolver`] computes where each narrow chunk lives inside a wide one.

*/

mod reverse;
pub use reverse::*;

mod shift;
pub use shift::*;
