// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use r_efi::efi::Guid;
use tracehub::{
    FixedConfig, Severity, SystContext, SystEncoder, SystError, TraceHubDispatcher,
    MAX_TRACE_HUB_DEBUG_INSTANCE, SYST_PARAM_MAX,
};

const DRIVER_GUID: Guid = Guid::from_fields(
    0xedfd2b6d,
    0x7fa9,
    0x455b,
    0x9e,
    0xa1,
    &[0x4c, 0xa0, 0xb9, 0xec, 0x1, 0xa8],
);

#[derive(Default)]
struct CountingEncoder {
    writes: u32,
}

impl CountingEncoder {
    fn write(&mut self, context: &SystContext) -> Result<(), SystError> {
        assert!(!(context.tag.et_guid && context.tag.et_modunit != 0));
        assert!(context.param_count as usize <= SYST_PARAM_MAX);
        self.writes += 1;
        Ok(())
    }
}

impl SystEncoder for CountingEncoder {
    fn init_context(&mut self, _context: &mut SystContext) -> Result<(), SystError> {
        Ok(())
    }

    fn write_debug(
        &mut self,
        context: &SystContext,
        _severity: Severity,
        _payload: &[u8],
    ) -> Result<(), SystError> {
        self.write(context)
    }

    fn write_catalog(
        &mut self,
        context: &SystContext,
        _severity: Severity,
        _id: u64,
    ) -> Result<(), SystError> {
        self.write(context)
    }
}

pub fn fuzz_dispatch_hob(data: &[u8]) {
    let mut encoder = CountingEncoder::default();
    let mut dispatcher = TraceHubDispatcher::new(Some(data), FixedConfig::BUILD_TIME, &mut encoder);

    let _ = dispatcher.emit_debug_string(Severity::Debug, Some(b"fuzz".as_slice()));
    let _ = dispatcher.emit_catalog(Severity::Error, 0x1, Some(&DRIVER_GUID));
    let _ = dispatcher.emit_catalog_with_params(Severity::Normal, 0x2, &[1, 2, 3]);

    assert!(encoder.writes <= 3 * MAX_TRACE_HUB_DEBUG_INSTANCE);
}
