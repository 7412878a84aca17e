// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{impl_message, Record, StringOffset, NO_OPT_ZERO, OPT_ZERO};

/// A source-level function: the frame label and the file it lives in.
/// `system_name` and `start_line` are never written.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Function {
    pub id: Record<u64, 1, NO_OPT_ZERO>,
    pub name: Record<StringOffset, 2, OPT_ZERO>,
    pub filename: Record<StringOffset, 4, OPT_ZERO>,
}

impl_message!(Function { id, name, filename });
