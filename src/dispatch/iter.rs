/*
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::iter::FusedIterator;
use core::marker::PhantomData;

use super::{Algorithm, Packer, TrailingPolicy};
use crate::error::PackError;
use crate::traits::Word;

/// An iterator lazily repacking the chunks returned by another iterator.
///
/// Instances are returned by [`Packer::iter`]. At most one group is pending
/// at any time: the imploder accumulates its output chunk while reading the
/// group, and the exploder keeps just the current input chunk.
///
/// Errors are returned in place of the output chunk that could not be
/// computed; after an error the iterator always returns `None`.
///
/// # Examples
///
/// ```
/// use word_repack::prelude::*;
///
/// let packer = Packer::new(32, LITTLE_UNIT_BIG_BIT, 8, BIG_UNIT_BIG_BIT)?;
/// let bytes = packer
///     .iter::<u32, u8, _>((0..2).map(|i| 0x04030201 + i * 0x04040404))?
///     .collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(bytes, [1, 2, 3, 4, 5, 6, 7, 8]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct PackIter<O: Word, It: Iterator> {
    packer: Packer,
    input: It,
    /// Number of input chunks read so far.
    consumed: usize,
    /// The current input chunk of the exploder.
    current: u128,
    /// The number of output chunks still to extract from `current`.
    pending: usize,
    done: bool,
    _marker: PhantomData<O>,
}

impl<O: Word, It: Iterator> PackIter<O, It> {
    pub(crate) fn new(packer: Packer, input: It) -> Self {
        Self {
            packer,
            input,
            consumed: 0,
            current: 0,
            pending: 0,
            done: false,
            _marker: PhantomData,
        }
    }

    /// Return the number of input chunks read so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn into_inner(self) -> It {
        self.input
    }

    fn fail(&mut self, e: PackError) -> Option<Result<O, PackError>> {
        self.done = true;
        Some(Err(e))
    }
}

impl<O: Word, It: Iterator> PackIter<O, It>
where
    It::Item: Word,
{
    /// Read the next input chunk into a lane.
    fn pull(&mut self) -> Option<Result<u128, PackError>> {
        let value = self.input.next()?;
        let lane = self.packer.load(value, self.consumed);
        self.consumed += 1;
        Some(lane)
    }
}

impl<O: Word, It: Iterator> Iterator for PackIter<O, It>
where
    It::Item: Word,
{
    type Item = Result<O, PackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.packer.algorithm() {
            Algorithm::EqualSize(equal) => match self.pull() {
                None => {
                    self.done = true;
                    None
                }
                Some(Ok(lane)) => Some(Ok(O::from_lane(equal.convert(lane)))),
                Some(Err(e)) => self.fail(e),
            },
            Algorithm::Explode(exploder) => {
                if self.pending == 0 {
                    match self.pull() {
                        None => {
                            self.done = true;
                            return None;
                        }
                        Some(Ok(lane)) => {
                            self.current = lane;
                            self.pending = exploder.group_size();
                        }
                        Some(Err(e)) => return self.fail(e),
                    }
                }
                let index = exploder.group_size() - self.pending;
                self.pending -= 1;
                Some(Ok(O::from_lane(exploder.extract(self.current, index))))
            }
            Algorithm::Implode(imploder) => {
                let group_size = imploder.group_size();
                let mut acc = 0;
                let mut read = 0;
                while read < group_size {
                    match self.pull() {
                        None => break,
                        Some(Ok(lane)) => acc |= imploder.place(lane, read),
                        Some(Err(e)) => return self.fail(e),
                    }
                    read += 1;
                }

                if read < group_size {
                    self.done = true;
                    if read == 0 {
                        return None;
                    }
                    log::trace!(
                        "Trailing group of {} chunks handled with {:?}",
                        read,
                        self.packer.trailing_policy()
                    );
                    match self.packer.trailing_policy() {
                        TrailingPolicy::Reject => {
                            return Some(Err(PackError::IncompleteGroup {
                                len: self.consumed,
                                group_size,
                            }));
                        }
                        TrailingPolicy::Truncate => return None,
                        TrailingPolicy::ZeroPad => {}
                    }
                }
                Some(Ok(O::from_lane(acc)))
            }
        }
    }
}

impl<O: Word, It: Iterator> FusedIterator for PackIter<O, It> where It::Item: Word {}

#[cfg(test)]
mod test {
    use crate::prelude::*;

    #[test]
    fn test_equal() {
        let packer = Packer::new(16, LITTLE_UNIT_BIG_BIT, 16, BIG_UNIT_BIG_BIT).unwrap();
        let out: Result<Vec<u16>, _> = packer
            .iter::<u16, u16, _>([0x1234_u16, 0xabcd])
            .unwrap()
            .collect();
        assert_eq!(out, Ok(vec![0x3412, 0xcdab]));
    }

    #[test]
    fn test_explode() {
        let packer = Packer::new(64, BIG_UNIT_BIG_BIT, 16, BIG_UNIT_BIG_BIT).unwrap();
        let mut iter = packer.iter::<u64, u16, _>([0x1234567890abcdef]).unwrap();
        assert_eq!(iter.next(), Some(Ok(0x1234)));
        assert_eq!(iter.consumed(), 1);
        assert_eq!(iter.next(), Some(Ok(0x5678)));
        assert_eq!(iter.next(), Some(Ok(0x90ab)));
        assert_eq!(iter.next(), Some(Ok(0xcdef)));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_implode_trailing() {
        let packer = Packer::new(8, BIG_UNIT_BIG_BIT, 32, BIG_UNIT_BIG_BIT).unwrap();
        let input = [0x11_u8, 0x22, 0x33, 0x44, 0x55];

        let mut iter = packer.iter::<u8, u32, _>(input).unwrap();
        assert_eq!(iter.next(), Some(Ok(0x11223344)));
        assert_eq!(
            iter.next(),
            Some(Err(PackError::IncompleteGroup {
                len: 5,
                group_size: 4
            }))
        );
        assert_eq!(iter.next(), None);

        let padded: Vec<_> = packer
            .with_trailing(TrailingPolicy::ZeroPad)
            .iter::<u8, u32, _>(input)
            .unwrap()
            .collect();
        assert_eq!(padded, vec![Ok(0x11223344), Ok(0x55000000)]);

        let truncated: Vec<_> = packer
            .with_trailing(TrailingPolicy::Truncate)
            .iter::<u8, u32, _>(input)
            .unwrap()
            .collect();
        assert_eq!(truncated, vec![Ok(0x11223344)]);
    }

    #[test]
    fn test_storage() {
        let packer = Packer::new(8, BIG_UNIT_BIG_BIT, 32, BIG_UNIT_BIG_BIT).unwrap();
        assert!(packer.iter::<u8, u16, _>([0_u8; 4]).is_err());
    }
}
