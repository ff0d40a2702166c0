// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

#![no_main]
use libfuzzer_sys::fuzz_target;

mod fuzzlib;
use fuzzlib::fuzz_dispatch_hob;

fuzz_target!(|data: &[u8]| {
    fuzz_dispatch_hob(data);
});
