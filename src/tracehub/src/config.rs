// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use core::mem::size_of;
use zerocopy::{AsBytes, FromBytes, FromZeroes};

use crate::{
    TraceHubDebugLevel, TraceHubTypes, FIXED_TRACE_HUB_MMIO_ADDRESS,
    TRACE_HUB_DEBUG_INFO_REVISION_TYPES,
};

/// Trace Hub debug-info HOB payload as produced by the earlier boot stage.
#[repr(C, packed)]
#[derive(AsBytes, FromBytes, FromZeroes, Debug, Clone, Copy)]
pub struct TraceHubDebugInfoHob {
    pub revision: u16,
    pub flag: u8,
    pub debug_level: u8,
    // Reserved before revision 2
    pub types: u8,
    pub reserved: [u8; 3],
    pub mmio_address: u64,
}

pub const TRACE_HUB_DEBUG_INFO_HOB_SIZE: usize = size_of::<TraceHubDebugInfoHob>();

/// Configuration of one Trace Hub debug instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceHubInstance {
    pub enabled: bool,
    pub debug_level: TraceHubDebugLevel,
    pub types: TraceHubTypes,
    pub mmio_address: u64,
}

impl TraceHubInstance {
    pub const DISABLED: TraceHubInstance = TraceHubInstance {
        enabled: false,
        debug_level: TraceHubDebugLevel::Error,
        types: TraceHubTypes::empty(),
        mmio_address: 0,
    };

    /// Parse a debug-info HOB payload. `None` if it is too short or the
    /// debug level is unknown.
    pub fn from_hob_data(data: &[u8]) -> Option<Self> {
        let info = TraceHubDebugInfoHob::read_from_prefix(data)?;
        let debug_level = TraceHubDebugLevel::try_from(info.debug_level).ok()?;
        let revision = info.revision;
        let types = if revision >= TRACE_HUB_DEBUG_INFO_REVISION_TYPES {
            TraceHubTypes::from_bits_truncate(info.types)
        } else {
            TraceHubTypes::all()
        };

        Some(TraceHubInstance {
            enabled: info.flag != 0,
            debug_level,
            types,
            mmio_address: info.mmio_address,
        })
    }
}

/// Configuration applied when no debug-info HOB exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedConfig {
    pub enabled: bool,
    pub debug_level: TraceHubDebugLevel,
    pub types: TraceHubTypes,
    pub mmio_address: u64,
}

impl FixedConfig {
    pub const BUILD_TIME: FixedConfig = FixedConfig {
        enabled: cfg!(feature = "fixed-enable"),
        debug_level: fixed_debug_level(),
        types: TraceHubTypes::all(),
        mmio_address: FIXED_TRACE_HUB_MMIO_ADDRESS,
    };

    pub fn instance(&self) -> TraceHubInstance {
        TraceHubInstance {
            enabled: self.enabled,
            debug_level: self.debug_level,
            types: self.types,
            mmio_address: self.mmio_address,
        }
    }
}

impl Default for FixedConfig {
    fn default() -> Self {
        FixedConfig::BUILD_TIME
    }
}

// The most verbose level feature wins
const fn fixed_debug_level() -> TraceHubDebugLevel {
    if cfg!(feature = "fixed-level-verbose") {
        TraceHubDebugLevel::ErrorWarningInfoVerbose
    } else if cfg!(feature = "fixed-level-error-warning-info") {
        TraceHubDebugLevel::ErrorWarningInfo
    } else if cfg!(feature = "fixed-level-error-warning") {
        TraceHubDebugLevel::ErrorWarning
    } else {
        TraceHubDebugLevel::Error
    }
}
