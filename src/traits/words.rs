/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::Debug;

use num_traits::{AsPrimitive, PrimInt, Unsigned};

/// The largest chunk width we can handle, that is, the width of the lanes
/// used internally.
pub const MAX_WIDTH: u32 = u128::BITS;

/// This is a trait alias for all the properties that we need from the
/// storage type of the chunks read and written by a
/// [`Packer`](crate::dispatch::Packer).
///
/// Chunks are moved to and from `u128` lanes, so the width of a chunk can be
/// smaller than the width of its storage type, but not larger.
pub trait Word: PrimInt + Unsigned + Debug + Send + Sync + 'static {
    /// The number of bits of the storage type.
    const BITS: u32;

    /// Widen to a lane.
    fn to_lane(self) -> u128;

    /// Narrow a lane; the lane must fit in [`Word::BITS`] bits.
    fn from_lane(lane: u128) -> Self;
}

impl<W> Word for W
where
    W: PrimInt + Unsigned + AsPrimitive<u128> + Debug + Send + Sync + 'static,
    u128: AsPrimitive<W>,
{
    const BITS: u32 = (core::mem::size_of::<W>() * 8) as u32;

    #[inline(always)]
    fn to_lane(self) -> u128 {
        self.as_()
    }

    #[inline(always)]
    fn from_lane(lane: u128) -> Self {
        debug_assert!(
            Self::BITS == MAX_WIDTH || lane >> Self::BITS == 0,
            "Lane {:#x} does not fit in {} bits",
            lane,
            Self::BITS
        );
        lane.as_()
    }
}
