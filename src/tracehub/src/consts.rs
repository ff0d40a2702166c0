// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use bitflags::bitflags;
use r_efi::efi::Guid;

// {F88C9C23-6A57-4C49-B72B-08440F241248}
pub const TRACE_HUB_DEBUG_INFO_HOB_GUID: Guid = Guid::from_fields(
    0xf88c9c23,
    0x6a57,
    0x4c49,
    0xb7,
    0x2b,
    &[0x08, 0x44, 0x0f, 0x24, 0x12, 0x48],
);

/// Upper bound of Trace Hub debug instances walked per message
pub const MAX_TRACE_HUB_DEBUG_INSTANCE: u32 = 5;

/// Number of catalog parameter slots in a SyS-T handle
pub const SYST_PARAM_MAX: usize = 6;

/// Module/unit tag value used when a catalog message carries no GUID
pub const SYST_MODUNIT_DEFAULT: u8 = 2;

/// First debug-info HOB revision that carries a message type mask
pub const TRACE_HUB_DEBUG_INFO_REVISION_TYPES: u16 = 2;

/// Build-time MMIO address of the fixed Trace Hub instance
pub const FIXED_TRACE_HUB_MMIO_ADDRESS: u64 = 0xFE10_0000;

bitflags! {
    // Trace Hub message types
    pub struct TraceHubTypes: u8 {
        const DEBUG = 1;
        const CATALOG = 1 << 1;
    }
}
