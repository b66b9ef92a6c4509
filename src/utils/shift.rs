/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::Endianness;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Computes the position of the narrow chunks inside a wide chunk.
///
/// A group is made of `wide / narrow` narrow chunks. For the narrow chunk of
/// index `i` the number of already-processed bits is `p = i * narrow`, and
/// the shift is `p` if the wide chunk has little units, or
/// `wide - (narrow + p)` otherwise. The imploder uses the shift to place a
/// narrow chunk into the output accumulator; the exploder uses it to select
/// the bit window to extract from the input chunk.
///
/// Placement depends only on the unit order of the wide side: a big-unit
/// stream with little bits still puts its first narrow chunk in the most
/// significant position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct ShiftResolver {
    wide: u32,
    narrow: u32,
    little_unit: bool,
}

impl ShiftResolver {
    /// The resolver for combining `input_width`-bit chunks into
    /// `output_width`-bit chunks with the given output endianness.
    pub fn imploder(input_width: u32, output_width: u32, output_endianness: Endianness) -> Self {
        debug_assert!(input_width > 0 && output_width % input_width == 0);
        Self {
            wide: output_width,
            narrow: input_width,
            little_unit: output_endianness.is_little_unit(),
        }
    }

    /// The resolver for splitting `input_width`-bit chunks with the given
    /// input endianness into `output_width`-bit chunks.
    pub fn exploder(input_width: u32, output_width: u32, input_endianness: Endianness) -> Self {
        debug_assert!(output_width > 0 && input_width % output_width == 0);
        Self {
            wide: input_width,
            narrow: output_width,
            little_unit: input_endianness.is_little_unit(),
        }
    }

    /// The number of narrow chunks in a wide chunk.
    #[inline(always)]
    pub fn group_size(&self) -> usize {
        (self.wide / self.narrow) as usize
    }

    #[inline(always)]
    pub fn processed_bits(&self, index: usize) -> u32 {
        debug_assert!(index < self.group_size());
        index as u32 * self.narrow
    }

    #[inline(always)]
    pub fn shift(&self, index: usize) -> u32 {
        let processed = self.processed_bits(index);
        if self.little_unit {
            processed
        } else {
            self.wide - (self.narrow + processed)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::*;

    #[test]
    fn test_imploder_shifts() {
        let big = ShiftResolver::imploder(16, 64, BIG_UNIT_BIG_BIT);
        assert_eq!(big.group_size(), 4);
        assert_eq!(
            (0..4).map(|i| big.shift(i)).collect::<Vec<_>>(),
            vec![48, 32, 16, 0]
        );
        let little = ShiftResolver::imploder(16, 64, LITTLE_UNIT_LITTLE_BIT);
        assert_eq!(
            (0..4).map(|i| little.shift(i)).collect::<Vec<_>>(),
            vec![0, 16, 32, 48]
        );
        // Bit order does not matter
        let big_little_bit = ShiftResolver::imploder(16, 64, BIG_UNIT_LITTLE_BIT);
        assert_eq!(big_little_bit, big);
    }

    #[test]
    fn test_exploder_shifts() {
        let big = ShiftResolver::exploder(32, 8, BIG_UNIT_BIG_BIT);
        assert_eq!(big.group_size(), 4);
        assert_eq!(big.processed_bits(3), 24);
        assert_eq!(big.shift(0), 24);
        assert_eq!(big.shift(3), 0);
        let little = ShiftResolver::exploder(32, 8, LITTLE_UNIT_BIG_BIT);
        assert_eq!(little.shift(0), 0);
        assert_eq!(little.shift(3), 24);
    }

    #[test]
    fn test_single() {
        let r = ShiftResolver::imploder(128, 128, BIG_UNIT_BIG_BIT);
        assert_eq!(r.group_size(), 1);
        assert_eq!(r.shift(0), 0);
    }
}
