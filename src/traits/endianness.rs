/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Display, Formatter};
use core::str::FromStr;

use crate::error::ParseEndiannessError;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

/// Order of the units (bytes, by default) inside a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum UnitOrder {
    /// The first unit in buffer order is the most significant one.
    BigUnit,
    /// The first unit in buffer order is the least significant one.
    LittleUnit,
}

/// Order of the bits inside a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum BitOrder {
    /// MSB to LSB.
    BigBit,
    /// LSB to MSB.
    LittleBit,
}

/// The endianness of a chunk stream: a unit order together with a bit order.
///
/// There are just four values, available as associated constants
/// (and as the module-level aliases [`BIG_UNIT_BIG_BIT`],
/// [`LITTLE_UNIT_BIG_BIT`], [`BIG_UNIT_LITTLE_BIT`], and
/// [`LITTLE_UNIT_LITTLE_BIT`]).
///
/// [`Endianness::BIG_UNIT_BIG_BIT`] is the reference form: repacking a stream
/// from and to it never reorders bits or units, it only changes grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct Endianness {
    pub unit_order: UnitOrder,
    pub bit_order: BitOrder,
}

impl Endianness {
    pub const BIG_UNIT_BIG_BIT: Self = Self::new(UnitOrder::BigUnit, BitOrder::BigBit);
    pub const LITTLE_UNIT_BIG_BIT: Self = Self::new(UnitOrder::LittleUnit, BitOrder::BigBit);
    pub const BIG_UNIT_LITTLE_BIT: Self = Self::new(UnitOrder::BigUnit, BitOrder::LittleBit);
    pub const LITTLE_UNIT_LITTLE_BIT: Self =
        Self::new(UnitOrder::LittleUnit, BitOrder::LittleBit);

    /// All the possible values.
    pub const ALL: [Self; 4] = [
        Self::BIG_UNIT_BIG_BIT,
        Self::LITTLE_UNIT_BIG_BIT,
        Self::BIG_UNIT_LITTLE_BIT,
        Self::LITTLE_UNIT_LITTLE_BIT,
    ];

    pub const fn new(unit_order: UnitOrder, bit_order: BitOrder) -> Self {
        Self {
            unit_order,
            bit_order,
        }
    }

    /// The byte order of the target platform, with MSB-to-LSB bits.
    pub const fn native() -> Self {
        #[cfg(target_endian = "little")]
        {
            Self::LITTLE_UNIT_BIG_BIT
        }
        #[cfg(target_endian = "big")]
        {
            Self::BIG_UNIT_BIG_BIT
        }
    }

    #[inline(always)]
    pub fn same_unit_order(&self, other: &Self) -> bool {
        self.unit_order == other.unit_order
    }

    #[inline(always)]
    pub fn same_bit_order(&self, other: &Self) -> bool {
        self.bit_order == other.bit_order
    }

    #[inline(always)]
    pub fn is_little_unit(&self) -> bool {
        self.unit_order == UnitOrder::LittleUnit
    }

    /// Whether this is [`Endianness::BIG_UNIT_BIG_BIT`].
    #[inline(always)]
    pub fn is_canonical(&self) -> bool {
        *self == Self::BIG_UNIT_BIG_BIT
    }

    /// The canonical snake-case name, as accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match (self.unit_order, self.bit_order) {
            (UnitOrder::BigUnit, BitOrder::BigBit) => "big_unit_big_bit",
            (UnitOrder::LittleUnit, BitOrder::BigBit) => "little_unit_big_bit",
            (UnitOrder::BigUnit, BitOrder::LittleBit) => "big_unit_little_bit",
            (UnitOrder::LittleUnit, BitOrder::LittleBit) => "little_unit_little_bit",
        }
    }
}

/// Alias for [`Endianness::BIG_UNIT_BIG_BIT`]
pub const BIG_UNIT_BIG_BIT: Endianness = Endianness::BIG_UNIT_BIG_BIT;
/// Alias for [`Endianness::LITTLE_UNIT_BIG_BIT`]
pub const LITTLE_UNIT_BIG_BIT: Endianness = Endianness::LITTLE_UNIT_BIG_BIT;
/// Alias for [`Endianness::BIG_UNIT_LITTLE_BIT`]
pub const BIG_UNIT_LITTLE_BIT: Endianness = Endianness::BIG_UNIT_LITTLE_BIT;
/// Alias for [`Endianness::LITTLE_UNIT_LITTLE_BIT`]
pub const LITTLE_UNIT_LITTLE_BIT: Endianness = Endianness::LITTLE_UNIT_LITTLE_BIT;

impl Default for Endianness {
    fn default() -> Self {
        Self::BIG_UNIT_BIG_BIT
    }
}

impl Display for Endianness {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endianness {
    type Err = ParseEndiannessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == s)
            .ok_or(ParseEndiannessError)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(BIG_UNIT_BIG_BIT.same_unit_order(&BIG_UNIT_LITTLE_BIT));
        assert!(!BIG_UNIT_BIG_BIT.same_bit_order(&BIG_UNIT_LITTLE_BIT));
        assert!(LITTLE_UNIT_BIG_BIT.same_bit_order(&BIG_UNIT_BIG_BIT));
        assert!(!LITTLE_UNIT_BIG_BIT.same_unit_order(&BIG_UNIT_BIG_BIT));
        assert!(BIG_UNIT_BIG_BIT.is_canonical());
        assert!(LITTLE_UNIT_LITTLE_BIT.is_little_unit());
        assert_eq!(Endianness::default(), BIG_UNIT_BIG_BIT);
    }

    #[test]
    fn test_names() {
        for e in Endianness::ALL {
            assert_eq!(e.name().parse::<Endianness>(), Ok(e));
        }
        assert_eq!("middle_endian".parse::<Endianness>(), Err(ParseEndiannessError));
    }

    #[test]
    fn test_native() {
        let native = Endianness::native();
        assert_eq!(native.bit_order, BitOrder::BigBit);
        assert_eq!(
            native.is_little_unit(),
            u16::from_ne_bytes([1, 0]) == 1
        );
    }
}
