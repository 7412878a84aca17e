// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{impl_message, Record, StringOffset, NO_OPT_ZERO, OPT_ZERO};

/// The loaded artifact a frame's code came from. Interpreted code has no
/// address ranges, so only the file and its optional build id are written.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Mapping {
    pub id: Record<u64, 1, NO_OPT_ZERO>,
    pub filename: Record<StringOffset, 5, OPT_ZERO>,
    /// Offset of the hex-encoded GNU build id, or zero when it is unknown.
    pub build_id: Record<StringOffset, 6, OPT_ZERO>,
}

impl_message!(Mapping { id, filename, build_id });
