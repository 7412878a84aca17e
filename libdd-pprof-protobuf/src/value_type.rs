// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{impl_message, Record, StringOffset, OPT_ZERO};

/// Names one column of sample values, such as ("cpu-time", "nanoseconds").
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct ValueType {
    pub r#type: Record<StringOffset, 1, OPT_ZERO>,
    pub unit: Record<StringOffset, 2, OPT_ZERO>,
}

impl ValueType {
    #[inline]
    pub fn new(r#type: StringOffset, unit: StringOffset) -> Self {
        Self {
            r#type: r#type.into(),
            unit: unit.into(),
        }
    }
}

impl_message!(ValueType { r#type, unit });
