// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{impl_message, Record, StringOffset, Value, WireType, OPT_ZERO};
use std::io::{self, Write};

/// A sample label. pprof allows a label to hold both a string and a number,
/// but consumers only honor one of them, so the two kinds are kept apart.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub enum Label {
    Str {
        key: StringOffset,
        str: StringOffset,
    },
    Num {
        key: StringOffset,
        num: i64,
        /// Zero when the number has no unit.
        num_unit: StringOffset,
    },
}

impl Label {
    pub fn key(&self) -> StringOffset {
        match self {
            Label::Str { key, .. } | Label::Num { key, .. } => *key,
        }
    }

    fn fields(&self) -> Fields {
        match *self {
            Label::Str { key, str } => Fields {
                key: key.into(),
                str: str.into(),
                ..Fields::default()
            },
            Label::Num { key, num, num_unit } => Fields {
                key: key.into(),
                num: num.into(),
                num_unit: num_unit.into(),
                ..Fields::default()
            },
        }
    }
}

/// An empty string label. Only exists to satisfy [Value]; a label with a
/// zero key is meaningless and is never written by a builder.
impl Default for Label {
    fn default() -> Self {
        Label::Str {
            key: StringOffset::ZERO,
            str: StringOffset::ZERO,
        }
    }
}

/// The label as laid out on the wire.
#[derive(Default, Eq, PartialEq)]
struct Fields {
    key: Record<StringOffset, 1, OPT_ZERO>,
    str: Record<StringOffset, 2, OPT_ZERO>,
    num: Record<i64, 3, OPT_ZERO>,
    num_unit: Record<StringOffset, 4, OPT_ZERO>,
}

impl_message!(Fields { key, str, num, num_unit });

impl Value for Label {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        self.fields().proto_len()
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.fields().encode(writer)
    }
}
