/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */
#![cfg(feature = "std")]

use std::error::Error;
use word_repack::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_identity_regrouping() -> Result<(), Box<dyn Error>> {
    init();
    let words = pack::<u16, u64>(
        &[0x1234, 0x5678, 0x90ab, 0xcdef],
        16,
        BIG_UNIT_BIG_BIT,
        64,
        BIG_UNIT_BIG_BIT,
    )?;
    assert_eq!(words, vec![0x1234567890abcdef]);
    Ok(())
}

#[test]
fn test_unit_order_reversal() -> Result<(), Box<dyn Error>> {
    init();
    let words = pack::<u16, u32>(
        &[0x1234, 0x5678],
        16,
        LITTLE_UNIT_BIG_BIT,
        32,
        BIG_UNIT_BIG_BIT,
    )?;
    assert_eq!(words, vec![0x34127856]);
    Ok(())
}

#[test]
fn test_bit_order_reversal() -> Result<(), Box<dyn Error>> {
    init();
    let words = pack::<u8, u16>(
        &[0x12, 0x34, 0x56, 0x78],
        8,
        BIG_UNIT_LITTLE_BIT,
        16,
        BIG_UNIT_BIG_BIT,
    )?;
    assert_eq!(words, vec![0x482c, 0x6a1e]);
    Ok(())
}

#[test]
fn test_divisibility_failure() {
    init();
    for e in Endianness::ALL {
        for f in Endianness::ALL {
            assert_eq!(
                Packer::new(24, e, 16, f),
                Err(ConfigError::Indivisible {
                    input_width: 24,
                    output_width: 16
                })
            );
            for len in 0..4 {
                assert_eq!(
                    pack::<u32, u16>(&vec![0; len], 24, e, 16, f),
                    Err(PackError::Config(ConfigError::Indivisible {
                        input_width: 24,
                        output_width: 16
                    }))
                );
            }
        }
    }
}

#[test]
fn test_trailing_group() -> Result<(), Box<dyn Error>> {
    init();
    let input = [1_u8, 2, 3, 4, 5];
    assert_eq!(
        pack::<u8, u32>(&input, 8, BIG_UNIT_BIG_BIT, 32, BIG_UNIT_BIG_BIT),
        Err(PackError::IncompleteGroup {
            len: 5,
            group_size: 4
        })
    );

    let packer = Packer::new(8, BIG_UNIT_BIG_BIT, 32, BIG_UNIT_BIG_BIT)?;
    assert_eq!(
        packer
            .with_trailing(TrailingPolicy::ZeroPad)
            .pack::<u8, u32>(&input)?,
        vec![0x01020304, 0x05000000]
    );
    assert_eq!(
        packer
            .with_trailing(TrailingPolicy::Truncate)
            .pack::<u8, u32>(&input)?,
        vec![0x01020304]
    );

    // Little units pad the most significant side
    let packer = Packer::new(8, BIG_UNIT_BIG_BIT, 32, LITTLE_UNIT_BIG_BIT)?
        .with_trailing(TrailingPolicy::ZeroPad);
    assert_eq!(packer.pack::<u8, u32>(&input)?, vec![0x04030201, 0x00000005]);
    Ok(())
}

#[test]
fn test_exploder_has_no_partial_groups() -> Result<(), Box<dyn Error>> {
    init();
    let packer = Packer::new(32, BIG_UNIT_BIG_BIT, 8, BIG_UNIT_BIG_BIT)?;
    for len in 0..10 {
        let output = packer.pack::<u32, u8>(&vec![0xdeadbeef; len])?;
        assert_eq!(output.len(), len * 4);
        assert!(output.chunks(4).all(|c| c == [0xde, 0xad, 0xbe, 0xef]));
    }
    Ok(())
}

#[test]
fn test_equal_size() -> Result<(), Box<dyn Error>> {
    init();
    let input = [0x0123456789abcdef_u64, 0xfedcba9876543210];
    assert_eq!(
        pack::<u64, u64>(&input, 64, LITTLE_UNIT_BIG_BIT, 64, BIG_UNIT_BIG_BIT)?,
        input.iter().map(|w| w.swap_bytes()).collect::<Vec<_>>()
    );
    assert_eq!(
        pack::<u64, u64>(&input, 64, LITTLE_UNIT_LITTLE_BIT, 64, BIG_UNIT_BIG_BIT)?,
        input.iter().map(|w| w.reverse_bits()).collect::<Vec<_>>()
    );
    assert_eq!(
        pack::<u64, u64>(&input, 64, BIG_UNIT_LITTLE_BIT, 64, BIG_UNIT_BIG_BIT)?,
        input
            .iter()
            .map(|w| w.reverse_bits().swap_bytes())
            .collect::<Vec<_>>()
    );
    Ok(())
}

#[test]
fn test_sub_byte_units() -> Result<(), Box<dyn Error>> {
    init();
    // Nibbles into bytes
    let packer = Packer::with_unit_bits(4, 4, BIG_UNIT_BIG_BIT, 8, BIG_UNIT_BIG_BIT)?;
    assert_eq!(packer.pack::<u8, u8>(&[0x1, 0x2, 0xa, 0xb])?, vec![0x12, 0xab]);
    let packer = Packer::with_unit_bits(4, 4, BIG_UNIT_BIG_BIT, 8, LITTLE_UNIT_BIG_BIT)?;
    assert_eq!(packer.pack::<u8, u8>(&[0x1, 0x2, 0xa, 0xb])?, vec![0x21, 0xba]);
    // Each nibble has its bits reversed
    let packer = Packer::with_unit_bits(4, 4, BIG_UNIT_LITTLE_BIT, 8, BIG_UNIT_BIG_BIT)?;
    assert_eq!(packer.pack::<u8, u8>(&[0x1, 0x2])?, vec![0x84]);
    Ok(())
}
