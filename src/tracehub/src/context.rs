// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

//! SyS-T message context, built per (message, instance) pair.

use r_efi::efi::Guid;

use crate::{Severity, TraceHubInstance, SYST_MODUNIT_DEFAULT, SYST_PARAM_MAX};

const ZERO_GUID: Guid = Guid::from_fields(0, 0, 0, 0, 0, &[0; 6]);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystHeader {
    pub version: u8,
}

/// Message tag. `et_guid` and a non-zero `et_modunit` never appear together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystTag {
    pub et_guid: bool,
    pub et_modunit: u8,
    pub et_severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystPlatform {
    pub mmio_address: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystContext {
    pub header: SystHeader,
    pub tag: SystTag,
    pub guid: Guid,
    pub param_count: u32,
    pub params: [u32; SYST_PARAM_MAX],
    pub platform: SystPlatform,
}

impl SystContext {
    pub const fn zeroed() -> Self {
        SystContext {
            header: SystHeader { version: 0 },
            tag: SystTag {
                et_guid: false,
                et_modunit: 0,
                et_severity: Severity::Max,
            },
            guid: ZERO_GUID,
            param_count: 0,
            params: [0; SYST_PARAM_MAX],
            platform: SystPlatform { mmio_address: 0 },
        }
    }

    /// Context for a debug string sent to `instance`.
    ///
    /// `base` is the zeroed context after the encoder initialized it. It is
    /// copied as is; only the severity and target address are set on top.
    pub fn debug(base: &SystContext, instance: &TraceHubInstance, severity: Severity) -> Self {
        SystContext::for_instance(base, instance, severity)
    }

    /// Catalog context, GUID-tagged when `guid` is given and module/unit
    /// tagged otherwise.
    pub fn catalog(
        base: &SystContext,
        instance: &TraceHubInstance,
        severity: Severity,
        guid: Option<&Guid>,
    ) -> Self {
        let mut context = SystContext::for_instance(base, instance, severity);
        match guid {
            Some(guid) => {
                context.guid = swap_bytes_guid(guid);
                context.tag.et_guid = true;
                context.tag.et_modunit = 0;
            }
            None => {
                context.tag.et_guid = false;
                context.tag.et_modunit = SYST_MODUNIT_DEFAULT;
            }
        }
        context
    }

    /// Catalog context carrying `params` in call order. The tag is left as
    /// the encoder initialized it.
    ///
    /// `None` if `params` does not fit the parameter slots.
    pub fn catalog_with_params(
        base: &SystContext,
        instance: &TraceHubInstance,
        severity: Severity,
        params: &[u32],
    ) -> Option<Self> {
        if params.len() > SYST_PARAM_MAX {
            return None;
        }

        let mut context = SystContext::for_instance(base, instance, severity);
        context.params[..params.len()].copy_from_slice(params);
        context.param_count = params.len() as u32;
        Some(context)
    }

    fn for_instance(base: &SystContext, instance: &TraceHubInstance, severity: Severity) -> Self {
        let mut context = *base;
        context.tag.et_severity = severity;
        context.platform.mmio_address = instance.mmio_address;
        context
    }
}

/// Convert a GUID to the byte order SyS-T expects on the wire: the first
/// three fields are byte swapped, the trailing eight bytes are kept.
pub fn swap_bytes_guid(guid: &Guid) -> Guid {
    let (time_low, time_mid, time_hi_and_version, clk_seq_hi_res, clk_seq_low, node) =
        guid.as_fields();
    Guid::from_fields(
        time_low.swap_bytes(),
        time_mid.swap_bytes(),
        time_hi_and_version.swap_bytes(),
        clk_seq_hi_res,
        clk_seq_low,
        node,
    )
}
