// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use log::Level;

/// SyS-T message severity. A higher value is more verbose.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Max = 0,
    Fatal = 1,
    Error = 2,
    Warning = 3,
    Normal = 4,
    User1 = 5,
    User2 = 6,
    Debug = 7,
}

/// Verbosity threshold of a Trace Hub instance. A higher value lets more
/// severities through.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceHubDebugLevel {
    Error = 0,
    ErrorWarning = 1,
    ErrorWarningInfo = 2,
    ErrorWarningInfoVerbose = 3,
}

impl Severity {
    /// The lowest instance level that still emits this severity.
    pub fn debug_level(self) -> TraceHubDebugLevel {
        match self {
            Severity::Fatal | Severity::Error => TraceHubDebugLevel::Error,
            Severity::Warning => TraceHubDebugLevel::ErrorWarning,
            Severity::Normal => TraceHubDebugLevel::ErrorWarningInfo,
            // Max carries no assigned severity
            Severity::Max | Severity::User1 | Severity::User2 | Severity::Debug => {
                TraceHubDebugLevel::ErrorWarningInfoVerbose
            }
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, u8> {
        match value {
            0 => Ok(Severity::Max),
            1 => Ok(Severity::Fatal),
            2 => Ok(Severity::Error),
            3 => Ok(Severity::Warning),
            4 => Ok(Severity::Normal),
            5 => Ok(Severity::User1),
            6 => Ok(Severity::User2),
            7 => Ok(Severity::Debug),
            _ => Err(value),
        }
    }
}

impl TryFrom<u8> for TraceHubDebugLevel {
    type Error = u8;

    fn try_from(value: u8) -> core::result::Result<Self, u8> {
        match value {
            0 => Ok(TraceHubDebugLevel::Error),
            1 => Ok(TraceHubDebugLevel::ErrorWarning),
            2 => Ok(TraceHubDebugLevel::ErrorWarningInfo),
            3 => Ok(TraceHubDebugLevel::ErrorWarningInfoVerbose),
            _ => Err(value),
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warning,
            Level::Info => Severity::Normal,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

impl From<TraceHubDebugLevel> for Level {
    fn from(level: TraceHubDebugLevel) -> Self {
        match level {
            TraceHubDebugLevel::Error => Level::Error,
            TraceHubDebugLevel::ErrorWarning => Level::Warn,
            TraceHubDebugLevel::ErrorWarningInfo => Level::Info,
            TraceHubDebugLevel::ErrorWarningInfoVerbose => Level::Trace,
        }
    }
}
