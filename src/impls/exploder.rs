/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Endianness;
use crate::utils::{Reversal, ShiftResolver, mask};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Splits wide chunks into groups of narrow chunks.
///
/// The bit window given by [`ShiftResolver::exploder`] is extracted from the
/// input chunk, masked to the output width, and then moved to the output
/// endianness (reversing units and/or bits at the output width). Every input
/// chunk yields exactly [`group_size`](Exploder::group_size) output chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Exploder {
    output_width: u32,
    unit_bits: u32,
    reversal: Reversal,
    shifts: ShiftResolver,
}

impl Exploder {
    /// Create an exploder; `input_width` must be a multiple of
    /// `output_width`.
    pub fn new(
        input_width: u32,
        input_endianness: Endianness,
        output_width: u32,
        output_endianness: Endianness,
        unit_bits: u32,
    ) -> Self {
        Self {
            output_width,
            unit_bits,
            reversal: Reversal::between(&input_endianness, &output_endianness),
            shifts: ShiftResolver::exploder(input_width, output_width, input_endianness),
        }
    }

    /// The number of output chunks generated by an input chunk.
    #[inline(always)]
    pub fn group_size(&self) -> usize {
        self.shifts.group_size()
    }

    /// Extract the output chunk of index `index` from an input chunk.
    #[inline]
    pub fn extract(&self, value: u128, index: usize) -> u128 {
        let tmp = (value >> self.shifts.shift(index)) & mask(self.output_width);
        self.reversal.apply(tmp, self.output_width, self.unit_bits)
    }

    /// Return the output chunks generated by an input chunk, in order.
    pub fn explode(&self, value: u128) -> impl Iterator<Item = u128> + '_ {
        (0..self.group_size()).map(move |i| self.extract(value, i))
    }
}
