// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use crate::{TraceHubInstance, MAX_TRACE_HUB_DEBUG_INSTANCE};

/// Ordered list of raw Trace Hub descriptors discovered at runtime.
pub trait DescriptorSource {
    type Entry: Copy;

    fn first_entry(&self) -> Option<Self::Entry>;
    fn next_entry(&self, entry: &Self::Entry) -> Option<Self::Entry>;
    fn entry_data(&self, entry: &Self::Entry) -> &[u8];
}

/// Resolves the Trace Hub instances a message is dispatched to.
///
/// Without a descriptor source there is exactly one instance, configured by
/// the fixed configuration.
pub struct InstanceResolver<S> {
    source: Option<S>,
}

impl<S: DescriptorSource> InstanceResolver<S> {
    pub fn new(source: Option<S>) -> Self {
        InstanceResolver { source }
    }

    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    pub fn count(&self) -> u32 {
        let source = match &self.source {
            Some(source) => source,
            None => return 1,
        };

        let mut count = 0;
        let mut entry = source.first_entry();
        while let Some(current) = entry {
            count += 1;
            if count == MAX_TRACE_HUB_DEBUG_INSTANCE {
                break;
            }
            entry = source.next_entry(&current);
        }

        count.max(1)
    }

    pub fn first(&self) -> Option<S::Entry> {
        self.source.as_ref()?.first_entry()
    }

    pub fn next(&self, entry: &S::Entry) -> Option<S::Entry> {
        self.source.as_ref()?.next_entry(entry)
    }

    /// A record that cannot be parsed resolves to a disabled instance.
    pub fn describe(&self, entry: &S::Entry) -> TraceHubInstance {
        let data = match &self.source {
            Some(source) => source.entry_data(entry),
            None => return TraceHubInstance::DISABLED,
        };

        TraceHubInstance::from_hob_data(data).unwrap_or_else(|| {
            log::warn!("Malformed Trace Hub debug info ({} bytes)\n", data.len());
            TraceHubInstance::DISABLED
        })
    }
}
