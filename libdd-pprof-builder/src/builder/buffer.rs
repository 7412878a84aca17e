// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::io;

/// The output of one encoding pass. Holds at most `limit` bytes; a write
/// that would cross the limit fails with [io::ErrorKind::StorageFull] and
/// writes nothing. Allocation failures are reported, not aborted on.
#[derive(Debug)]
pub struct ProfileBuffer {
    bytes: Vec<u8>,
    limit: usize,
}

impl ProfileBuffer {
    pub fn new(initial_capacity: usize, limit: usize) -> Self {
        let mut bytes = Vec::new();
        // a failure here resurfaces on the first write
        let _ = bytes.try_reserve(initial_capacity.min(limit));
        Self { bytes, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// How many more bytes fit.
    pub fn remaining(&self) -> usize {
        self.limit.saturating_sub(self.bytes.len())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl io::Write for ProfileBuffer {
    fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
        if chunk.len() > self.remaining() {
            return Err(io::ErrorKind::StorageFull.into());
        }
        self.bytes.try_reserve(chunk.len())?;
        self.bytes.extend_from_slice(chunk);
        Ok(chunk.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rejected_write_leaves_contents_alone() -> anyhow::Result<()> {
        let mut buffer = ProfileBuffer::new(2, 5);
        buffer.write_all(b"pprof")?;
        assert_eq!(0, buffer.remaining());

        let err = buffer.write_all(b"!").unwrap_err();
        assert_eq!(io::ErrorKind::StorageFull, err.kind());
        assert_eq!(b"pprof".to_vec(), buffer.into_bytes());
        Ok(())
    }

    #[test]
    fn empty_writes_always_fit() {
        let mut buffer = ProfileBuffer::new(1024, 0);
        assert_eq!(0, buffer.limit());
        assert!(buffer.write_all(&[]).is_ok());
        assert!(buffer.write_all(&[0]).is_err());
        assert!(buffer.as_bytes().is_empty());
    }
}
