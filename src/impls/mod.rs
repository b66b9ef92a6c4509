/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementations of the three repacking algorithms.

All of them work on `u128` lanes and are stateless: they are configured once
and then applied to independent groups (or chunks), so they can be used from
several threads at the same time.

- [`EqualSize`] converts chunks 1:1 when input and output widths are equal.
- [`Imploder`] combines `k` narrow input chunks into a wide output chunk.
- [`Exploder`] splits a wide input chunk into `k` narrow output chunks.

Usually you do not use them directly, but rather through a
[`Packer`](crate::dispatch::Packer), which validates the configuration and
drives the whole stream through the right algorithm.

*/

mod equal;
pub use equal::EqualSize;

mod imploder;
pub use imploder::Imploder;

mod exploder;
pub use exploder::Exploder;
