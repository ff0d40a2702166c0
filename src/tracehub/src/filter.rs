// Copyright (c) 2023 Intel Corporation
//
// SPDX-License-Identifier: BSD-2-Clause-Patent

use crate::{FixedConfig, Severity, TraceHubInstance, TraceHubTypes};

/// Whether an instance accepts a message of `severity` and `message_type`.
///
/// A `None` descriptor means no runtime configuration exists and `fixed`
/// applies. A message passes when the instance is enabled, its type mask
/// contains `message_type` and the severity is no more verbose than the
/// instance's debug level.
pub fn should_emit(
    descriptor: Option<&TraceHubInstance>,
    fixed: &FixedConfig,
    severity: Severity,
    message_type: TraceHubTypes,
) -> bool {
    let instance = match descriptor {
        Some(instance) => *instance,
        None => fixed.instance(),
    };

    instance.enabled
        && instance.types.contains(message_type)
        && severity.debug_level() <= instance.debug_level
}
