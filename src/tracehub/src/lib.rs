// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

//! Trace Hub debug message dispatch over MIPI SyS-T.
//!
//! Messages are emitted to every Trace Hub debug instance that accepts them.
//! Instances are described by Trace Hub debug-info HOBs when an earlier boot
//! stage produced them, otherwise by the build-time [`FixedConfig`].

#![cfg_attr(not(test), no_std)]

pub mod config;
mod consts;
pub mod context;
pub mod dispatch;
pub mod encoder;
pub mod filter;
pub mod hob;
pub mod logger;
pub mod resolver;
pub mod severity;

pub use config::*;
pub use consts::*;
pub use context::{swap_bytes_guid, SystContext, SystTag};
pub use dispatch::{MessageRequest, TraceHubDispatcher};
pub use encoder::{SystEncoder, SystError};
pub use severity::{Severity, TraceHubDebugLevel};

use core::fmt::{self, Display};

pub type Result<T> = core::result::Result<T, TraceHubError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceHubError {
    /// Caller supplied data violates a precondition
    InvalidArgument,
    /// The SyS-T handle could not be initialized
    InitFailure(SystError),
    /// The encoder rejected a write for one instance
    EncodeFailure(SystError),
}

impl Display for TraceHubError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TraceHubError::InvalidArgument => write!(f, "InvalidArgument"),
            TraceHubError::InitFailure(e) => write!(f, "InitFailure: {e}"),
            TraceHubError::EncodeFailure(e) => write!(f, "EncodeFailure: {e}"),
        }
    }
}
