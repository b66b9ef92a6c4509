/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Endianness;
use crate::utils::Reversal;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Converts chunks between two endiannesses without changing their width.
///
/// Chunk order is never altered: only the bits inside each chunk move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct EqualSize {
    width: u32,
    unit_bits: u32,
    reversal: Reversal,
}

impl EqualSize {
    pub fn new(
        width: u32,
        input_endianness: Endianness,
        output_endianness: Endianness,
        unit_bits: u32,
    ) -> Self {
        Self {
            width,
            unit_bits,
            reversal: Reversal::between(&input_endianness, &output_endianness),
        }
    }

    #[inline(always)]
    pub fn convert(&self, value: u128) -> u128 {
        self.reversal.apply(value, self.width, self.unit_bits)
    }
}
