/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use alloc::vec::Vec;
use arbitrary::Arbitrary;

const WIDTHS: [u32; 8] = [8, 16, 24, 32, 40, 48, 56, 64];

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    input_width: u8,
    input_endianness: Endianness,
    output_width: u8,
    output_endianness: Endianness,
    trailing: TrailingPolicy,
    data: Vec<u64>,
}

pub fn harness(data: FuzzCase) {
    let input_width = WIDTHS[data.input_width as usize % WIDTHS.len()];
    let output_width = WIDTHS[data.output_width as usize % WIDTHS.len()];
    let input: Vec<u64> = data
        .data
        .iter()
        .map(|&v| (v as u128 & mask(input_width)) as u64)
        .collect();

    let packer = match Packer::new(
        input_width,
        data.input_endianness,
        output_width,
        data.output_endianness,
    ) {
        Ok(packer) => packer.with_trailing(data.trailing),
        Err(ConfigError::Indivisible { .. }) => {
            assert!(input_width % output_width != 0 && output_width % input_width != 0);
            return;
        }
        Err(e) => panic!("Unexpected error {}", e),
    };

    let packed = packer.pack::<u64, u64>(&input);
    let lazy = packer
        .iter::<u64, u64, _>(input.iter().copied())
        .unwrap()
        .collect::<Result<Vec<_>, _>>();
    assert_eq!(packed, lazy);

    let Ok(packed) = packed else {
        return;
    };
    for &word in &packed {
        assert_eq!(word as u128 & !mask(output_width), 0);
    }

    // Round trip, unless a trailing group was padded or dropped
    if input.len() * input_width as usize == packed.len() * output_width as usize {
        let back = Packer::new(
            output_width,
            data.output_endianness,
            input_width,
            data.input_endianness,
        )
        .unwrap()
        .pack::<u64, u64>(&packed)
        .unwrap();
        assert_eq!(back, input);
    }
}
