// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use r_efi::efi::Guid;

use crate::filter::should_emit;
use crate::hob::HobList;
use crate::resolver::{DescriptorSource, InstanceResolver};
use crate::{
    FixedConfig, Result, Severity, SystContext, SystEncoder, SystError, TraceHubError,
    TraceHubInstance, TraceHubTypes, SYST_PARAM_MAX, TRACE_HUB_DEBUG_INFO_HOB_GUID,
};

#[derive(Debug, Clone, Copy)]
pub enum MessageRequest<'m> {
    DebugString {
        severity: Severity,
        payload: &'m [u8],
    },
    Catalog {
        severity: Severity,
        id: u64,
        guid: Option<&'m Guid>,
    },
    CatalogWithParams {
        severity: Severity,
        id: u64,
        params: &'m [u32],
    },
}

impl<'m> MessageRequest<'m> {
    pub fn severity(&self) -> Severity {
        match *self {
            MessageRequest::DebugString { severity, .. }
            | MessageRequest::Catalog { severity, .. }
            | MessageRequest::CatalogWithParams { severity, .. } => severity,
        }
    }

    pub fn message_type(&self) -> TraceHubTypes {
        match self {
            MessageRequest::DebugString { .. } => TraceHubTypes::DEBUG,
            MessageRequest::Catalog { .. } | MessageRequest::CatalogWithParams { .. } => {
                TraceHubTypes::CATALOG
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            // SyS-T carries a 16-bit payload length
            MessageRequest::DebugString { payload, .. }
                if payload.is_empty() || payload.len() > u16::MAX as usize =>
            {
                Err(TraceHubError::InvalidArgument)
            }
            MessageRequest::CatalogWithParams { params, .. } if params.len() > SYST_PARAM_MAX => {
                Err(TraceHubError::InvalidArgument)
            }
            _ => Ok(()),
        }
    }

    fn write<E: SystEncoder>(
        &self,
        encoder: &mut E,
        base: &SystContext,
        instance: &TraceHubInstance,
    ) -> core::result::Result<(), SystError> {
        match *self {
            MessageRequest::DebugString { severity, payload } => {
                let context = SystContext::debug(base, instance, severity);
                encoder.write_debug(&context, severity, payload)
            }
            MessageRequest::Catalog { severity, id, guid } => {
                let context = SystContext::catalog(base, instance, severity, guid);
                encoder.write_catalog(&context, severity, id)
            }
            MessageRequest::CatalogWithParams {
                severity,
                id,
                params,
            } => {
                let context = SystContext::catalog_with_params(base, instance, severity, params)
                    .ok_or(SystError::InvalidParameter)?;
                encoder.write_catalog(&context, severity, id)
            }
        }
    }
}

/// Send `request` to every instance `resolver` yields, in order.
///
/// Arguments are checked and the encoder context initialized before the
/// descriptor source is consulted. The first encoder failure ends the
/// dispatch.
pub fn dispatch<S, E>(
    resolver: &InstanceResolver<S>,
    fixed: &FixedConfig,
    encoder: &mut E,
    request: &MessageRequest,
) -> Result<()>
where
    S: DescriptorSource,
    E: SystEncoder,
{
    request.validate()?;

    let mut base = SystContext::zeroed();
    encoder
        .init_context(&mut base)
        .map_err(TraceHubError::InitFailure)?;

    let severity = request.severity();
    let message_type = request.message_type();

    let count = resolver.count();
    let mut cursor = resolver.first();
    for index in 0..count {
        let descriptor = cursor.as_ref().map(|entry| resolver.describe(entry));

        if should_emit(descriptor.as_ref(), fixed, severity, message_type) {
            let instance = descriptor.unwrap_or_else(|| fixed.instance());
            request.write(encoder, &base, &instance).map_err(|e| {
                log::trace!("Trace Hub instance {} write failed: {}\n", index, e);
                TraceHubError::EncodeFailure(e)
            })?;
        }

        if let Some(entry) = cursor {
            cursor = resolver.next(&entry);
            if cursor.is_none() {
                break;
            }
        }
    }

    Ok(())
}

/// Dispatches trace messages to the Trace Hub instances described by the
/// hand-off block list, falling back to the fixed configuration.
pub struct TraceHubDispatcher<'h, E> {
    hob_list: Option<&'h [u8]>,
    fixed: FixedConfig,
    encoder: E,
}

impl<'h, E: SystEncoder> TraceHubDispatcher<'h, E> {
    pub fn new(hob_list: Option<&'h [u8]>, fixed: FixedConfig, encoder: E) -> Self {
        TraceHubDispatcher {
            hob_list,
            fixed,
            encoder,
        }
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Write a debug string. An absent or empty buffer is rejected.
    pub fn emit_debug_string(&mut self, severity: Severity, buffer: Option<&[u8]>) -> Result<()> {
        let payload = buffer.ok_or(TraceHubError::InvalidArgument)?;
        self.dispatch(&MessageRequest::DebugString { severity, payload })
    }

    /// Write a catalog status code, tagged with `guid` when given.
    pub fn emit_catalog(&mut self, severity: Severity, id: u64, guid: Option<&Guid>) -> Result<()> {
        self.dispatch(&MessageRequest::Catalog { severity, id, guid })
    }

    /// Write a catalog message with up to `SYST_PARAM_MAX` parameters.
    pub fn emit_catalog_with_params(
        &mut self,
        severity: Severity,
        id: u64,
        params: &[u32],
    ) -> Result<()> {
        self.dispatch(&MessageRequest::CatalogWithParams {
            severity,
            id,
            params,
        })
    }

    pub fn dispatch(&mut self, request: &MessageRequest) -> Result<()> {
        // Descriptors are located again on every call
        let source = self
            .hob_list
            .and_then(|hob| HobList::try_locate(hob, TRACE_HUB_DEBUG_INFO_HOB_GUID));
        let resolver = InstanceResolver::new(source);
        dispatch(&resolver, &self.fixed, &mut self.encoder, request)
    }
}
