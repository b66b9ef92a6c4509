#![no_main]

use libfuzzer_sys::fuzz_target;
use word_repack::fuzz::repack::*;

fuzz_target!(|data: FuzzCase| harness(data));
