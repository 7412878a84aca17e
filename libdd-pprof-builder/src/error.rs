// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::time::SystemTime;

/// Failures which abort the current window. None of them are retried: the
/// input is deterministic, so a retry would fail the same way. The caller
/// should drop the builder and start a new window.
///
/// Caller mistakes such as a wrong number of sample values are not reported
/// here; they panic.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An id space ran out, e.g. more than [u32::MAX] strings were interned.
    #[error("{0} is full")]
    StorageFull(&'static str),

    /// Raw bytes handed to the builder were not valid UTF-8.
    #[error("invalid UTF-8 in {field}: {source}")]
    InvalidUtf8 {
        field: &'static str,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The window can't be written as pprof's i64 nanosecond start time and
    /// duration.
    #[error("profile window {start:?} to {finish:?} is out of the i64 nanosecond range")]
    TimeOutOfRange {
        start: SystemTime,
        finish: SystemTime,
    },

    /// The encoded profile would exceed the configured size limit.
    #[error("encoded profile exceeds the limit of {limit} bytes")]
    ProfileTooLarge { limit: usize },

    #[error("failed to encode profile: {0}")]
    Io(#[from] io::Error),
}

impl From<indexmap::TryReserveError> for Error {
    fn from(_: indexmap::TryReserveError) -> Error {
        Error::Io(io::ErrorKind::OutOfMemory.into())
    }
}
