// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! [Base 128 varints], plus the [Value] impls of the integer types.
//!
//! [Base 128 varints]: https://protobuf.dev/programming-guides/encoding/#varints

use crate::{StringOffset, Value, Varint, WireType};
use std::io::{self, Write};

/// The longest varint, which is what a u64 with the top bit set takes.
const MAX_LEN: usize = 10;

/// The number of bytes `value` takes as a varint, from 1 to 10.
#[inline]
pub fn proto_len(value: u64) -> u64 {
    let bits = u64::BITS - (value | 1).leading_zeros();
    u64::from(bits.div_ceil(7))
}

/// Writes `value` as a varint in one call to the writer.
#[inline]
pub fn encode<W: Write>(mut value: u64, writer: &mut W) -> io::Result<()> {
    let mut bytes = [0u8; MAX_LEN];
    let mut len = 0;
    while value >= 0x80 {
        bytes[len] = (value as u8 & 0x7f) | 0x80;
        value >>= 7;
        len += 1;
    }
    bytes[len] = value as u8;
    writer.write_all(&bytes[..=len])
}

impl Value for u64 {
    const WIRE_TYPE: WireType = WireType::Varint;

    fn proto_len(&self) -> u64 {
        proto_len(*self)
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        encode(*self, writer)
    }
}

/// pprof uses `int64` rather than `sint64`, so negative numbers are written
/// as their two's complement and always take 10 bytes.
impl Value for i64 {
    const WIRE_TYPE: WireType = WireType::Varint;

    fn proto_len(&self) -> u64 {
        proto_len(*self as u64)
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        encode(*self as u64, writer)
    }
}

// SAFETY: all of these are written as a single varint.
unsafe impl Varint for u64 {}
unsafe impl Varint for i64 {}
unsafe impl Varint for StringOffset {}

/// A packed repeated field: the varints back to back, with the total byte
/// length as the prefix.
impl<T: Varint> Value for &'_ [T] {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        self.iter().map(Value::proto_len).sum()
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.iter().try_for_each(|value| value.encode(writer))
    }
}
