// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::Error;
use std::fmt;

/// One frame of a sampled stack. Frames are compared by value: two frames
/// with the same path, line and label resolve to the same location.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct BacktraceFrame {
    path: Box<str>,
    lineno: i64,
    label: Box<str>,
}

impl BacktraceFrame {
    pub fn new(path: impl Into<Box<str>>, lineno: i64, label: impl Into<Box<str>>) -> Self {
        Self {
            path: path.into(),
            lineno,
            label: label.into(),
        }
    }

    /// Builds a frame from raw bytes as handed over by a sampler, which may
    /// not have validated them.
    pub fn from_utf8(path: &[u8], lineno: i64, label: &[u8]) -> Result<Self, Error> {
        let path = std::str::from_utf8(path).map_err(|source| Error::InvalidUtf8 {
            field: "path",
            source,
        })?;
        let label = std::str::from_utf8(label).map_err(|source| Error::InvalidUtf8 {
            field: "label",
            source,
        })?;
        Ok(Self::new(path, lineno, label))
    }

    /// The placeholder frame that stands in for `count` frames which the
    /// sampler dropped, e.g. "1 frame omitted" or "12 frames omitted".
    pub fn omitted(count: usize) -> Self {
        let desc = if count == 1 {
            "frame omitted"
        } else {
            "frames omitted"
        };
        Self::new("", 0, format!("{count} {desc}"))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn lineno(&self) -> i64 {
        self.lineno
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for BacktraceFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:in '{}'", self.path, self.lineno, self.label)
    }
}
