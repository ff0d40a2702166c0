// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use core::fmt::{self, Display};

use crate::{Severity, SystContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystError {
    /// The handle or message is not acceptable to the encoder
    InvalidParameter,
    /// Transport cannot take the message
    DeviceError,
    /// Message kind is not supported by the encoder
    Unsupported,
}

impl Display for SystError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SystError::InvalidParameter => write!(f, "InvalidParameter"),
            SystError::DeviceError => write!(f, "DeviceError"),
            SystError::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// MIPI SyS-T message encoder and Trace Hub transport.
///
/// The encoder owns the wire framing and the MMIO writes to
/// `SystContext::platform.mmio_address`.
pub trait SystEncoder {
    /// Initialize a zeroed context. Every field set here carries into the
    /// context built for each instance.
    fn init_context(&mut self, context: &mut SystContext) -> Result<(), SystError>;

    fn write_debug(
        &mut self,
        context: &SystContext,
        severity: Severity,
        payload: &[u8],
    ) -> Result<(), SystError>;

    fn write_catalog(
        &mut self,
        context: &SystContext,
        severity: Severity,
        id: u64,
    ) -> Result<(), SystError>;
}

impl<E: SystEncoder + ?Sized> SystEncoder for &mut E {
    fn init_context(&mut self, context: &mut SystContext) -> Result<(), SystError> {
        (**self).init_context(context)
    }

    fn write_debug(
        &mut self,
        context: &SystContext,
        severity: Severity,
        payload: &[u8],
    ) -> Result<(), SystError> {
        (**self).write_debug(context, severity, payload)
    }

    fn write_catalog(
        &mut self,
        context: &SystContext,
        severity: Severity,
        id: u64,
    ) -> Result<(), SystError> {
        (**self).write_catalog(context, severity, id)
    }
}
