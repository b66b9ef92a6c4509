/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Endianness;
use crate::utils::{Reversal, ShiftResolver};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Combines groups of narrow chunks into single wide chunks.
///
/// Each input chunk is first moved to the output endianness (reversing units
/// and/or bits at the input width) and then or-ed into the accumulator at the
/// position given by [`ShiftResolver::imploder`].
///
/// # Examples
///
/// ```
/// use word_repack::prelude::*;
///
/// // Two 16-bit chunks with little units become one big-unit 32-bit chunk
/// let imploder = Imploder::new(16, LITTLE_UNIT_BIG_BIT, 32, BIG_UNIT_BIG_BIT, 8);
/// assert_eq!(imploder.group_size(), 2);
/// assert_eq!(imploder.implode([0x1234, 0x5678]), 0x34127856);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Imploder {
    input_width: u32,
    unit_bits: u32,
    reversal: Reversal,
    shifts: ShiftResolver,
}

impl Imploder {
    /// Create an imploder; `output_width` must be a multiple of
    /// `input_width`.
    pub fn new(
        input_width: u32,
        input_endianness: Endianness,
        output_width: u32,
        output_endianness: Endianness,
        unit_bits: u32,
    ) -> Self {
        Self {
            input_width,
            unit_bits,
            reversal: Reversal::between(&input_endianness, &output_endianness),
            shifts: ShiftResolver::imploder(input_width, output_width, output_endianness),
        }
    }

    /// The number of input chunks combined into an output chunk.
    #[inline(always)]
    pub fn group_size(&self) -> usize {
        self.shifts.group_size()
    }

    /// Combine a group of input chunks into an output chunk.
    ///
    /// The group must contain at most [`group_size`](Imploder::group_size)
    /// chunks; missing chunks at the end are treated as zeros.
    #[inline]
    pub fn implode(&self, group: impl IntoIterator<Item = u128>) -> u128 {
        group
            .into_iter()
            .enumerate()
            .fold(0, |acc, (i, value)| acc | self.place(value, i))
    }

    /// Return the bits contributed to the output chunk by the input chunk of
    /// index `index` in its group.
    #[inline(always)]
    pub fn place(&self, value: u128, index: usize) -> u128 {
        let tmp = self.reversal.apply(value, self.input_width, self.unit_bits);
        tmp << self.shifts.shift(index)
    }
}
