// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;

/// The largest message protobuf implementations are required to accept.
pub const MAX_PROFILE_SIZE: usize = i32::MAX as usize;

/// Tunables for one [crate::ProfileBuilder]. Missing fields take their
/// default when deserializing, so `{}` is a valid configuration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// The first id handed out for functions, mappings and locations. Zero
    /// means "unset" on the wire, so it can't be used.
    pub id_base: NonZeroU32,
    /// Bytes reserved up front for the encoded profile.
    pub initial_buffer_capacity: usize,
    /// Encoding fails with [crate::Error::ProfileTooLarge] rather than
    /// produce a larger profile.
    pub max_profile_size: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            id_base: NonZeroU32::MIN,
            initial_buffer_capacity: 32 * 1024,
            max_profile_size: MAX_PROFILE_SIZE,
        }
    }
}
