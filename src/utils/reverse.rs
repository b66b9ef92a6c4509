/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Unit and bit reversal of chunks held in `u128` lanes.
//!
//! Units have a fixed size (8 bits unless otherwise configured) and their
//! boundaries do not depend on the width of the chunk: reversing the bits of a
//! 32-bit chunk with 8-bit units reverses four independent bytes, it does not
//! reverse the chunk as a whole.

use crate::traits::{Endianness, MAX_WIDTH};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// `BIT_REVERSE_TABLE[b]` is `b` with its eight bits in reverse order.
pub const BIT_REVERSE_TABLE: [u8; 256] = {
    let mut table = [0_u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = (i as u8).reverse_bits();
        i += 1;
    }
    table
};

/// Return a mask with the lowest `width` bits set.
#[inline(always)]
pub const fn mask(width: u32) -> u128 {
    if width >= MAX_WIDTH {
        u128::MAX
    } else {
        (1 << width) - 1
    }
}

/// Reverse the order of the `chunk_width / unit_bits` units of `value`,
/// leaving the bits of each unit untouched.
///
/// This is the identity if `chunk_width` is equal to `unit_bits`.
#[inline]
pub fn reverse_units(value: u128, chunk_width: u32, unit_bits: u32) -> u128 {
    debug_assert!(chunk_width > 0 && chunk_width <= MAX_WIDTH);
    debug_assert!(chunk_width % unit_bits == 0);
    let value = value & mask(chunk_width);
    if chunk_width <= unit_bits {
        return value;
    }
    if unit_bits == 8 {
        return value.swap_bytes() >> (MAX_WIDTH - chunk_width);
    }

    let units = chunk_width / unit_bits;
    let unit_mask = mask(unit_bits);
    let mut result = 0;
    for i in 0..units {
        let unit = (value >> (i * unit_bits)) & unit_mask;
        result |= unit << ((units - 1 - i) * unit_bits);
    }
    result
}

/// Reverse the order of the bits inside each `unit_bits`-wide unit of
/// `value`, leaving the order of the units untouched.
///
/// Bytes are reversed using [`BIT_REVERSE_TABLE`].
#[inline]
pub fn reverse_bits_per_unit(value: u128, chunk_width: u32, unit_bits: u32) -> u128 {
    debug_assert!(chunk_width > 0 && chunk_width <= MAX_WIDTH);
    debug_assert!(chunk_width % unit_bits == 0);
    let value = value & mask(chunk_width);
    if unit_bits == 8 {
        let mut bytes = value.to_le_bytes();
        for byte in &mut bytes[..(chunk_width / 8) as usize] {
            *byte = BIT_REVERSE_TABLE[*byte as usize];
        }
        return u128::from_le_bytes(bytes);
    }

    let unit_mask = mask(unit_bits);
    let mut result = 0;
    for i in 0..chunk_width / unit_bits {
        let unit = (value >> (i * unit_bits)) & unit_mask;
        result |= (unit.reverse_bits() >> (MAX_WIDTH - unit_bits)) << (i * unit_bits);
    }
    result
}

/// The reversals needed to move a chunk from an endianness to another.
///
/// Both reversals are involutions and they commute, so the same value
/// describes the conversion in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum Reversal {
    None,
    Bits,
    Units,
    UnitsAndBits,
}

/// Indexed by "unit orders differ" and then by "bit orders differ".
const REVERSALS: [[Reversal; 2]; 2] = [
    [Reversal::None, Reversal::Bits],
    [Reversal::Units, Reversal::UnitsAndBits],
];

impl Reversal {
    pub fn between(from: &Endianness, to: &Endianness) -> Self {
        REVERSALS[!from.same_unit_order(to) as usize][!from.same_bit_order(to) as usize]
    }

    /// Apply the reversals to a chunk of width `chunk_width`.
    #[inline(always)]
    pub fn apply(self, value: u128, chunk_width: u32, unit_bits: u32) -> u128 {
        match self {
            Reversal::None => value,
            Reversal::Bits => reverse_bits_per_unit(value, chunk_width, unit_bits),
            Reversal::Units => reverse_units(value, chunk_width, unit_bits),
            Reversal::UnitsAndBits => reverse_bits_per_unit(
                reverse_units(value, chunk_width, unit_bits),
                chunk_width,
                unit_bits,
            ),
        }
    }
}
