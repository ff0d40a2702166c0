// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

//! `log` backend that prints records to Trace Hub as SyS-T debug strings.

use conquer_once::spin::OnceCell;
use core::fmt::{self, Display, Write};
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use log::{Level, LevelFilter, Log, Metadata, Record};
use spin::Mutex;

use crate::{FixedConfig, Severity, SystEncoder, TraceHubDispatcher};

/// Longest debug string sent for one record; longer text is cut.
pub const MAX_DEBUG_MESSAGE_LENGTH: usize = 0x100;

type StaticEncoder = &'static mut (dyn SystEncoder + Send);

static LOGGER: OnceCell<TraceHubLogger<StaticEncoder>> = OnceCell::uninit();

#[derive(Debug, PartialEq, Eq)]
pub enum LoggerError {
    AlreadyInitialized,
}

impl Display for LoggerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoggerError::AlreadyInitialized => write!(f, "AlreadyInitialized"),
        }
    }
}

/// Install the Trace Hub logger as the global `log` backend.
pub fn init(
    hob_list: Option<&'static [u8]>,
    encoder: StaticEncoder,
    max_level: LevelFilter,
) -> Result<(), LoggerError> {
    LOGGER
        .try_init_once(|| {
            TraceHubLogger::new(hob_list, FixedConfig::BUILD_TIME, encoder, max_level)
        })
        .map_err(|_| LoggerError::AlreadyInitialized)?;
    let logger = LOGGER
        .try_get()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    log::set_logger(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    log::set_max_level(max_level);
    Ok(())
}

/// Install the logger with its level taken from the build-time fixed
/// configuration.
pub fn init_with_fixed_level(
    hob_list: Option<&'static [u8]>,
    encoder: StaticEncoder,
) -> Result<(), LoggerError> {
    init(hob_list, encoder, fixed_max_level(&FixedConfig::BUILD_TIME))
}

fn fixed_max_level(fixed: &FixedConfig) -> LevelFilter {
    if fixed.enabled {
        Level::from(fixed.debug_level).to_level_filter()
    } else {
        LevelFilter::Off
    }
}

/// Records that could not be delivered by the global logger.
pub fn dropped_records() -> u32 {
    LOGGER
        .try_get()
        .map(|logger| logger.dropped())
        .unwrap_or(0)
}

pub struct TraceHubLogger<E> {
    hob_list: Option<&'static [u8]>,
    fixed: FixedConfig,
    encoder: Mutex<E>,
    max_level: LevelFilter,
    // Set while a record is being dispatched
    busy: AtomicBool,
    dropped: AtomicU32,
}

impl<E: SystEncoder> TraceHubLogger<E> {
    pub fn new(
        hob_list: Option<&'static [u8]>,
        fixed: FixedConfig,
        encoder: E,
        max_level: LevelFilter,
    ) -> Self {
        TraceHubLogger {
            hob_list,
            fixed,
            encoder: Mutex::new(encoder),
            max_level,
            busy: AtomicBool::new(false),
            dropped: AtomicU32::new(0),
        }
    }

    pub fn dropped(&self) -> u32 {
        self.dropped.load(Ordering::SeqCst)
    }

    fn write_record(&self, record: &Record) -> crate::Result<()> {
        let mut message = MessageBuffer::new();
        // Overlong messages are cut, not rejected
        let _ = write!(message, "{}", record.args());

        let mut encoder = self.encoder.lock();
        let mut dispatcher = TraceHubDispatcher::new(self.hob_list, self.fixed, &mut *encoder);
        dispatcher.emit_debug_string(Severity::from(record.level()), Some(message.as_bytes()))
    }
}

impl<E: SystEncoder + Send> Log for TraceHubLogger<E> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Records logged from inside the dispatch path cannot be printed
        if self.busy.swap(true, Ordering::SeqCst) {
            self.dropped.fetch_add(1, Ordering::SeqCst);
            return;
        }

        if self.write_record(record).is_err() {
            self.dropped.fetch_add(1, Ordering::SeqCst);
        }

        self.busy.store(false, Ordering::SeqCst);
    }

    fn flush(&self) {}
}

struct MessageBuffer {
    data: [u8; MAX_DEBUG_MESSAGE_LENGTH],
    len: usize,
}

impl MessageBuffer {
    fn new() -> Self {
        MessageBuffer {
            data: [0; MAX_DEBUG_MESSAGE_LENGTH],
            len: 0,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }
}

impl Write for MessageBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let room = MAX_DEBUG_MESSAGE_LENGTH - self.len;
        let count = s.len().min(room);
        self.data[self.len..self.len + count].copy_from_slice(&s.as_bytes()[..count]);
        self.len += count;
        if count < s.len() {
            Err(fmt::Error)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::encoder::test::{RecordingEncoder, Write as EncoderWrite};
    use crate::{TraceHubDebugLevel, TraceHubTypes};

    const FIXED_VERBOSE: FixedConfig = FixedConfig {
        enabled: true,
        debug_level: TraceHubDebugLevel::ErrorWarningInfoVerbose,
        types: TraceHubTypes::all(),
        mmio_address: 0xFE10_0000,
    };

    fn logger(max_level: LevelFilter) -> TraceHubLogger<RecordingEncoder> {
        TraceHubLogger::new(None, FIXED_VERBOSE, RecordingEncoder::default(), max_level)
    }

    #[test]
    fn test_log_record() {
        let logger = logger(LevelFilter::Trace);
        logger.log(
            &Record::builder()
                .args(format_args!("PEI phase {}", 2))
                .level(Level::Warn)
                .build(),
        );

        let encoder = logger.encoder.lock();
        assert_eq!(encoder.writes.len(), 1);
        match &encoder.writes[0] {
            EncoderWrite::Debug {
                severity, payload, ..
            } => {
                assert_eq!(*severity, Severity::Warning);
                assert_eq!(payload.as_slice(), b"PEI phase 2");
            }
            other => panic!("unexpected write {:?}", other),
        }
        assert_eq!(logger.dropped(), 0);
    }

    #[test]
    fn test_level_filter() {
        let logger = logger(LevelFilter::Warn);
        logger.log(
            &Record::builder()
                .args(format_args!("verbose"))
                .level(Level::Debug)
                .build(),
        );
        assert!(logger.encoder.lock().writes.is_empty());
        assert_eq!(logger.dropped(), 0);
    }

    #[test]
    fn test_reentrant_record_dropped() {
        let logger = logger(LevelFilter::Trace);
        logger.busy.store(true, Ordering::SeqCst);
        logger.log(
            &Record::builder()
                .args(format_args!("nested"))
                .level(Level::Error)
                .build(),
        );
        assert!(logger.encoder.lock().writes.is_empty());
        assert_eq!(logger.dropped(), 1);
    }

    #[test]
    fn test_empty_and_failed_records_counted() {
        let logger = logger(LevelFilter::Trace);
        logger.log(
            &Record::builder()
                .args(format_args!(""))
                .level(Level::Error)
                .build(),
        );
        assert_eq!(logger.dropped(), 1);

        logger.encoder.lock().fail_write_at = Some(0);
        logger.log(
            &Record::builder()
                .args(format_args!("lost"))
                .level(Level::Error)
                .build(),
        );
        assert_eq!(logger.dropped(), 2);
        assert!(!logger.busy.load(Ordering::SeqCst));
    }

    #[test]
    fn test_fixed_max_level() {
        assert_eq!(fixed_max_level(&FIXED_VERBOSE), LevelFilter::Trace);

        let mut fixed = FIXED_VERBOSE;
        fixed.debug_level = TraceHubDebugLevel::ErrorWarning;
        assert_eq!(fixed_max_level(&fixed), LevelFilter::Warn);

        fixed.enabled = false;
        assert_eq!(fixed_max_level(&fixed), LevelFilter::Off);
    }

    #[test]
    fn test_message_truncated() {
        let mut message = MessageBuffer::new();
        let long = [b'a'; MAX_DEBUG_MESSAGE_LENGTH + 10];
        let long = core::str::from_utf8(&long).unwrap();
        assert!(write!(message, "{}", long).is_err());
        assert_eq!(message.as_bytes().len(), MAX_DEBUG_MESSAGE_LENGTH);
    }
}
