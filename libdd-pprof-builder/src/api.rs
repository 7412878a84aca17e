// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Borrowed inputs of the builder. Their strings are interned when they are
//! handed over, so callers can reuse their buffers right away.

/// A label attached to a sample, such as the id of the thread it was taken
/// on. Holds either a string or a number, never both.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Label<'a> {
    Str {
        key: &'a str,
        value: &'a str,
    },
    Num {
        key: &'a str,
        value: i64,
        /// Empty when the number has no unit. Otherwise something like
        /// "nanoseconds", or a custom count unit such as "requests".
        unit: &'a str,
    },
}

impl<'a> Label<'a> {
    pub const fn str(key: &'a str, value: &'a str) -> Self {
        Label::Str { key, value }
    }

    pub const fn num(key: &'a str, value: i64, unit: &'a str) -> Self {
        Label::Num { key, value, unit }
    }

    pub const fn key(&self) -> &'a str {
        match self {
            Label::Str { key, .. } | Label::Num { key, .. } => key,
        }
    }
}
