/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::error::{ConfigError, PackError};
use crate::impls::{EqualSize, Exploder, Imploder};
use crate::traits::*;
use crate::utils::mask;
#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};

use super::PackIter;

/// The default unit size: a byte.
pub const DEFAULT_UNIT_BITS: u32 = 8;

/// What to do with a trailing group shorter than the imploder group size.
///
/// The policy has no effect when the output width is not larger than the
/// input width, as in that case there are no partial groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum TrailingPolicy {
    /// Fail with [`PackError::IncompleteGroup`].
    #[default]
    Reject,
    /// Complete the group with zero chunks.
    ZeroPad,
    /// Drop the chunks of the partial group.
    Truncate,
}

/// The algorithm selected by a [`Packer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub enum Algorithm {
    EqualSize(EqualSize),
    Implode(Imploder),
    Explode(Exploder),
}

/// A validated repacking configuration.
///
/// A [`Packer`] converts streams of `input_width`-bit chunks with a given
/// endianness into streams of `output_width`-bit chunks with another
/// endianness. At construction time the widths are validated and one of the
/// three algorithms is selected: [`EqualSize`] if the widths are equal,
/// [`Imploder`] if the input width divides the output width, or [`Exploder`]
/// if the output width divides the input width.
///
/// Chunks are read from and written to slices (or iterators) of any
/// [`Word`] type large enough to hold them. Input chunks are masked to the
/// input width; with the `checks` feature, chunks that do not fit are
/// rejected instead.
///
/// A [`Packer`] holds no state, so the same instance can be used for any
/// number of streams, possibly from different threads.
///
/// # Examples
///
/// ```
/// use word_repack::prelude::*;
///
/// let packer = Packer::new(16, BIG_UNIT_BIG_BIT, 64, BIG_UNIT_BIG_BIT)?;
/// let words: Vec<u64> = packer.pack(&[0x1234_u16, 0x5678, 0x90ab, 0xcdef])?;
/// assert_eq!(words, [0x1234567890abcdef]);
///
/// // And back
/// let back = Packer::new(64, BIG_UNIT_BIG_BIT, 16, BIG_UNIT_BIG_BIT)?;
/// assert_eq!(back.pack::<u64, u16>(&words)?, [0x1234, 0x5678, 0x90ab, 0xcdef]);
///
/// // Widths must divide each other
/// assert!(Packer::new(24, BIG_UNIT_BIG_BIT, 16, BIG_UNIT_BIG_BIT).is_err());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "mem_dbg", mem_size(flat))]
pub struct Packer {
    input_width: u32,
    input_endianness: Endianness,
    output_width: u32,
    output_endianness: Endianness,
    unit_bits: u32,
    trailing: TrailingPolicy,
    algorithm: Algorithm,
}

fn check_width(width: u32, unit_bits: u32) -> Result<(), ConfigError> {
    if width > MAX_WIDTH {
        return Err(ConfigError::WidthTooLarge {
            width,
            max: MAX_WIDTH,
        });
    }
    // Sub-byte widths are allowed only for single-unit chunks
    if width % unit_bits != 0 || (width % 8 != 0 && width != unit_bits) {
        return Err(ConfigError::MisalignedWidth { width, unit_bits });
    }
    Ok(())
}

impl Packer {
    /// Create a packer with 8-bit units.
    pub fn new(
        input_width: u32,
        input_endianness: Endianness,
        output_width: u32,
        output_endianness: Endianness,
    ) -> Result<Self, ConfigError> {
        Self::with_unit_bits(
            DEFAULT_UNIT_BITS,
            input_width,
            input_endianness,
            output_width,
            output_endianness,
        )
    }

    /// Create a packer with units of `unit_bits` bits, which must be a power
    /// of two between 1 and 64.
    ///
    /// Both widths must be multiples of the unit size; widths that are not a
    /// multiple of 8 are accepted only if they are equal to the unit size.
    pub fn with_unit_bits(
        unit_bits: u32,
        input_width: u32,
        input_endianness: Endianness,
        output_width: u32,
        output_endianness: Endianness,
    ) -> Result<Self, ConfigError> {
        if input_width == 0 || output_width == 0 {
            return Err(ConfigError::ZeroWidth {
                input_width,
                output_width,
            });
        }
        if !unit_bits.is_power_of_two() || unit_bits > 64 {
            return Err(ConfigError::InvalidUnit { unit_bits });
        }
        check_width(input_width, unit_bits)?;
        check_width(output_width, unit_bits)?;

        let algorithm = if input_width == output_width {
            Algorithm::EqualSize(EqualSize::new(
                input_width,
                input_endianness,
                output_endianness,
                unit_bits,
            ))
        } else if output_width % input_width == 0 {
            Algorithm::Implode(Imploder::new(
                input_width,
                input_endianness,
                output_width,
                output_endianness,
                unit_bits,
            ))
        } else if input_width % output_width == 0 {
            Algorithm::Explode(Exploder::new(
                input_width,
                input_endianness,
                output_width,
                output_endianness,
                unit_bits,
            ))
        } else {
            return Err(ConfigError::Indivisible {
                input_width,
                output_width,
            });
        };

        log::debug!(
            "Repacking {}-bit {} chunks into {}-bit {} chunks ({}-bit units) with {:?}",
            input_width,
            input_endianness,
            output_width,
            output_endianness,
            unit_bits,
            algorithm
        );

        Ok(Self {
            input_width,
            input_endianness,
            output_width,
            output_endianness,
            unit_bits,
            trailing: TrailingPolicy::default(),
            algorithm,
        })
    }

    /// A packer turning a raw byte buffer into `output_width`-bit chunks.
    ///
    /// Bytes are taken in buffer order with MSB-to-LSB bits, so for
    /// [`LITTLE_UNIT_BIG_BIT`] and [`BIG_UNIT_BIG_BIT`] every output chunk is
    /// the result of `from_le_bytes` and `from_be_bytes`, respectively.
    pub fn from_bytes(
        output_width: u32,
        output_endianness: Endianness,
    ) -> Result<Self, ConfigError> {
        Self::new(8, BIG_UNIT_BIG_BIT, output_width, output_endianness)
    }

    /// A packer turning `input_width`-bit chunks into a raw byte buffer; this
    /// is the inverse of [`Packer::from_bytes`].
    pub fn to_bytes(input_width: u32, input_endianness: Endianness) -> Result<Self, ConfigError> {
        Self::new(input_width, input_endianness, 8, BIG_UNIT_BIG_BIT)
    }

    /// Set the policy for trailing partial groups.
    #[must_use]
    pub fn with_trailing(mut self, trailing: TrailingPolicy) -> Self {
        self.trailing = trailing;
        self
    }

    pub fn input_width(&self) -> u32 {
        self.input_width
    }

    pub fn input_endianness(&self) -> Endianness {
        self.input_endianness
    }

    pub fn output_width(&self) -> u32 {
        self.output_width
    }

    pub fn output_endianness(&self) -> Endianness {
        self.output_endianness
    }

    pub fn unit_bits(&self) -> u32 {
        self.unit_bits
    }

    pub fn trailing_policy(&self) -> TrailingPolicy {
        self.trailing
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The number of input chunks consumed and of output chunks produced by
    /// a single step of the algorithm.
    pub fn group_shape(&self) -> (usize, usize) {
        match self.algorithm {
            Algorithm::EqualSize(_) => (1, 1),
            Algorithm::Implode(imploder) => (imploder.group_size(), 1),
            Algorithm::Explode(exploder) => (1, exploder.group_size()),
        }
    }

    /// Return the number of output chunks generated by `input_len` input
    /// chunks, taking into account the trailing policy.
    pub fn output_len(&self, input_len: usize) -> Result<usize, PackError> {
        match self.algorithm {
            Algorithm::EqualSize(_) => Ok(input_len),
            Algorithm::Explode(exploder) => Ok(input_len * exploder.group_size()),
            Algorithm::Implode(imploder) => {
                let group_size = imploder.group_size();
                let full = input_len / group_size;
                if input_len % group_size == 0 {
                    return Ok(full);
                }
                match self.trailing {
                    TrailingPolicy::Reject => Err(PackError::IncompleteGroup {
                        len: input_len,
                        group_size,
                    }),
                    TrailingPolicy::ZeroPad => Ok(full + 1),
                    TrailingPolicy::Truncate => Ok(full),
                }
            }
        }
    }

    /// Check that the storage types can hold chunks of the configured widths.
    pub fn check_storage<I: Word, O: Word>(&self) -> Result<(), ConfigError> {
        if I::BITS < self.input_width {
            return Err(ConfigError::StorageTooNarrow {
                width: self.input_width,
                storage_bits: I::BITS,
            });
        }
        if O::BITS < self.output_width {
            return Err(ConfigError::StorageTooNarrow {
                width: self.output_width,
                storage_bits: O::BITS,
            });
        }
        Ok(())
    }

    /// Move an input chunk to a lane, masking it to the input width.
    #[inline(always)]
    fn lane<I: Word>(&self, value: I) -> u128 {
        value.to_lane() & mask(self.input_width)
    }

    /// Like [`lane`](Packer::lane), but with the `checks` feature chunks that
    /// do not fit the input width are rejected.
    #[inline(always)]
    pub(crate) fn load<I: Word>(&self, value: I, index: usize) -> Result<u128, PackError> {
        #[cfg(feature = "checks")]
        {
            if value.to_lane() & !mask(self.input_width) != 0 {
                return Err(PackError::ValueTooWide {
                    index,
                    width: self.input_width,
                });
            }
        }
        #[cfg(not(feature = "checks"))]
        let _ = index;
        Ok(self.lane(value))
    }

    #[inline(always)]
    fn check_values<I: Word>(&self, input: &[I]) -> Result<(), PackError> {
        #[cfg(feature = "checks")]
        {
            for (index, &value) in input.iter().enumerate() {
                self.load(value, index)?;
            }
        }
        #[cfg(not(feature = "checks"))]
        let _ = input;
        Ok(())
    }

    /// Repack `input` into `output`, returning the number of chunks written.
    ///
    /// The output slice must contain at least
    /// [`output_len(input.len())`](Packer::output_len) chunks; chunks past
    /// that point are left untouched. This method does not allocate.
    pub fn pack_into<I: Word, O: Word>(
        &self,
        input: &[I],
        output: &mut [O],
    ) -> Result<usize, PackError> {
        self.check_storage::<I, O>()?;
        let len = self.output_len(input.len())?;
        if output.len() < len {
            return Err(PackError::OutputTooShort {
                needed: len,
                available: output.len(),
            });
        }
        self.check_values(input)?;
        let output = &mut output[..len];

        match self.algorithm {
            Algorithm::EqualSize(equal) => {
                for (&src, dst) in input.iter().zip(output.iter_mut()) {
                    *dst = O::from_lane(equal.convert(self.lane(src)));
                }
            }
            Algorithm::Implode(imploder) => {
                let group_size = imploder.group_size();
                if input.len() % group_size != 0 {
                    log::trace!(
                        "Trailing group of {} chunks handled with {:?}",
                        input.len() % group_size,
                        self.trailing
                    );
                }
                // A partial trailing group is zero padded; if truncating, the
                // output slice is one chunk shorter and the zip drops it
                for (group, dst) in input.chunks(group_size).zip(output.iter_mut()) {
                    let lanes = group.iter().map(|&value| self.lane(value));
                    *dst = O::from_lane(imploder.implode(lanes));
                }
            }
            Algorithm::Explode(exploder) => {
                let group_size = exploder.group_size();
                for (&src, dst) in input.iter().zip(output.chunks_exact_mut(group_size)) {
                    let lane = self.lane(src);
                    for (j, d) in dst.iter_mut().enumerate() {
                        *d = O::from_lane(exploder.extract(lane, j));
                    }
                }
            }
        }
        Ok(len)
    }

    /// Repack `input` into a newly allocated vector.
    #[cfg(feature = "alloc")]
    pub fn pack<I: Word, O: Word>(&self, input: &[I]) -> Result<Vec<O>, PackError> {
        self.check_storage::<I, O>()?;
        let mut output = vec![O::zero(); self.output_len(input.len())?];
        self.pack_into(input, &mut output)?;
        Ok(output)
    }

    /// Return an iterator lazily repacking the chunks returned by `input`.
    ///
    /// The iterator buffers at most one group; see [`PackIter`].
    pub fn iter<I: Word, O: Word, It: IntoIterator<Item = I>>(
        &self,
        input: It,
    ) -> Result<PackIter<O, It::IntoIter>, ConfigError> {
        self.check_storage::<I, O>()?;
        Ok(PackIter::new(*self, input.into_iter()))
    }

    /// Repack `input` in parallel on the current [`rayon`] thread pool.
    ///
    /// Small inputs are repacked on the current thread.
    #[cfg(feature = "rayon")]
    pub fn pack_par<I: Word, O: Word>(&self, input: &[I]) -> Result<Vec<O>, PackError> {
        let threads = rayon::current_num_threads();
        let (_, out_group) = self.group_shape();
        let groups = self.output_len(input.len())? / out_group;
        let tasks = threads.min(groups / MIN_PAR_GROUPS).max(1);
        self.pack_par_with_tasks(input, tasks)
    }

    /// Repack `input` splitting the work in (at most) `tasks` slices of
    /// whole groups, each repacked by a [`rayon`] task.
    ///
    /// Every task writes the output positions of its own groups, so the
    /// result does not depend on the order of completion.
    #[cfg(feature = "rayon")]
    pub fn pack_par_with_tasks<I: Word, O: Word>(
        &self,
        input: &[I],
        tasks: usize,
    ) -> Result<Vec<O>, PackError> {
        use rayon::prelude::*;

        self.check_storage::<I, O>()?;
        let len = self.output_len(input.len())?;
        if tasks <= 1 || len == 0 {
            return self.pack(input);
        }
        self.check_values(input)?;

        let (in_group, out_group) = self.group_shape();
        let groups_per_task = (len / out_group).div_ceil(tasks);
        let mut output = vec![O::zero(); len];
        input
            .par_chunks(groups_per_task * in_group)
            .zip(output.par_chunks_mut(groups_per_task * out_group))
            .try_for_each(|(src, dst)| self.pack_into(src, dst).map(|_| ()))?;
        Ok(output)
    }
}

/// The minimum number of groups assigned to a task by
/// [`Packer::pack_par`].
#[cfg(feature = "rayon")]
pub const MIN_PAR_GROUPS: usize = 1 << 16;

/// Repack a stream of `input_width`-bit chunks with endianness
/// `input_endianness` into a stream of `output_width`-bit chunks with
/// endianness `output_endianness`.
///
/// This is a shorthand for [`Packer::new`] followed by [`Packer::pack`];
/// trailing partial groups are rejected.
///
/// # Examples
///
/// ```
/// use word_repack::prelude::*;
///
/// // Each byte has its bits reversed, then pairs are concatenated
/// let words = pack::<u8, u16>(
///     &[0x12, 0x34, 0x56, 0x78],
///     8,
///     BIG_UNIT_LITTLE_BIT,
///     16,
///     BIG_UNIT_BIG_BIT,
/// )?;
/// assert_eq!(words, [0x482c, 0x6a1e]);
/// # Ok::<(), PackError>(())
/// ```
#[cfg(feature = "alloc")]
pub fn pack<I: Word, O: Word>(
    input: &[I],
    input_width: u32,
    input_endianness: Endianness,
    output_width: u32,
    output_endianness: Endianness,
) -> Result<Vec<O>, PackError> {
    Packer::new(input_width, input_endianness, output_width, output_endianness)?.pack(input)
}

/// Like [`pack`], but using the widths of the storage types.
#[cfg(feature = "alloc")]
pub fn pack_words<I: Word, O: Word>(
    input: &[I],
    input_endianness: Endianness,
    output_endianness: Endianness,
) -> Result<Vec<O>, PackError> {
    pack(
        input,
        I::BITS,
        input_endianness,
        O::BITS,
        output_endianness,
    )
}
