/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors returned by [`Packer`](crate::dispatch::Packer) and friends.
//!
//! All errors are caller errors: the transform is a pure function of its
//! input, so nothing here is ever transient.

use core::fmt::{Display, Formatter};

/// An invalid combination of widths, unit size, or storage types.
///
/// Configuration errors are detected once, before any chunk is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The input or the output width is zero.
    ZeroWidth { input_width: u32, output_width: u32 },
    /// A width exceeds the largest supported chunk.
    WidthTooLarge { width: u32, max: u32 },
    /// The unit size is not a power of two between 1 and 64.
    InvalidUnit { unit_bits: u32 },
    /// A width is not a multiple of the unit size, or it is a sub-byte width
    /// different from the unit size.
    MisalignedWidth { width: u32, unit_bits: u32 },
    /// Neither width divides the other.
    Indivisible { input_width: u32, output_width: u32 },
    /// The storage type cannot hold chunks of the requested width.
    StorageTooNarrow { width: u32, storage_bits: u32 },
}

impl core::error::Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroWidth {
                input_width,
                output_width,
            } => write!(
                f,
                "Widths must be positive (input width {}, output width {})",
                input_width, output_width
            ),
            ConfigError::WidthTooLarge { width, max } => {
                write!(f, "Width {} exceeds the maximum width of {} bits", width, max)
            }
            ConfigError::InvalidUnit { unit_bits } => write!(
                f,
                "Unit size {} is not a power of two between 1 and 64",
                unit_bits
            ),
            ConfigError::MisalignedWidth { width, unit_bits } => write!(
                f,
                "Width {} is not compatible with units of {} bits",
                width, unit_bits
            ),
            ConfigError::Indivisible {
                input_width,
                output_width,
            } => write!(
                f,
                "Neither the input width {} nor the output width {} divides the other",
                input_width, output_width
            ),
            ConfigError::StorageTooNarrow {
                width,
                storage_bits,
            } => write!(
                f,
                "A {}-bit storage type cannot hold {}-bit chunks",
                storage_bits, width
            ),
        }
    }
}

/// The error returned by the packing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// The input length is not a multiple of the imploder group size and the
    /// trailing policy is [`Reject`](crate::dispatch::TrailingPolicy::Reject).
    IncompleteGroup { len: usize, group_size: usize },
    /// An input chunk does not fit the input width (only with the `checks`
    /// feature).
    ValueTooWide { index: usize, width: u32 },
    /// The output slice passed to
    /// [`pack_into`](crate::dispatch::Packer::pack_into) is too short.
    OutputTooShort { needed: usize, available: usize },
}

impl From<ConfigError> for PackError {
    fn from(e: ConfigError) -> Self {
        PackError::Config(e)
    }
}

impl core::error::Error for PackError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            PackError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl Display for PackError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            PackError::Config(e) => write!(f, "Invalid configuration: {}", e),
            PackError::IncompleteGroup { len, group_size } => write!(
                f,
                "Input length {} is not a multiple of the group size {}",
                len, group_size
            ),
            PackError::ValueTooWide { index, width } => {
                write!(f, "Input chunk at index {} does not fit in {} bits", index, width)
            }
            PackError::OutputTooShort { needed, available } => write!(
                f,
                "Output slice too short: {} chunks needed, {} available",
                needed, available
            ),
        }
    }
}

/// The error returned when parsing an [`Endianness`](crate::traits::Endianness)
/// from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseEndiannessError;

impl core::error::Error for ParseEndiannessError {}

impl Display for ParseEndiannessError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(concat!(
            "Unknown endianness; expected one of big_unit_big_bit, ",
            "little_unit_big_bit, big_unit_little_bit, little_unit_little_bit"
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_source() {
        use core::error::Error;
        let e: PackError = ConfigError::Indivisible {
            input_width: 24,
            output_width: 16,
        }
        .into();
        assert!(e.source().is_some());
        assert!(
            PackError::IncompleteGroup {
                len: 5,
                group_size: 4
            }
            .source()
            .is_none()
        );
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_display() {
        use alloc::string::ToString;
        let e = ConfigError::StorageTooNarrow {
            width: 32,
            storage_bits: 16,
        };
        assert_eq!(
            e.to_string(),
            "A 16-bit storage type cannot hold 32-bit chunks"
        );
        assert!(
            PackError::from(e)
                .to_string()
                .starts_with("Invalid configuration")
        );
    }
}
