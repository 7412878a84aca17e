// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{varint, Value, WireType};
use std::io::{self, Write};

/// A string table entry. `&str` is already UTF-8, so the bytes go out as-is.
impl Value for &str {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        self.len() as u64
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.as_bytes())
    }
}

/// An index into the string table. Offset 0 is the empty string, which also
/// stands for "no string".
///
/// 32 bits are plenty: each entry costs at least two bytes on the wire, and
/// a whole profile must stay under 2 GiB.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct StringOffset(u32);

impl StringOffset {
    pub const ZERO: Self = Self(0);

    #[inline]
    pub const fn new(offset: u32) -> Self {
        Self(offset)
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Value for StringOffset {
    const WIRE_TYPE: WireType = WireType::Varint;

    fn proto_len(&self) -> u64 {
        varint::proto_len(self.0.into())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        varint::encode(self.0.into(), writer)
    }
}

impl TryFrom<usize> for StringOffset {
    type Error = std::num::TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(Self)
    }
}

impl From<StringOffset> for usize {
    fn from(offset: StringOffset) -> Self {
        offset.0 as usize
    }
}

impl From<StringOffset> for u64 {
    fn from(offset: StringOffset) -> Self {
        offset.0.into()
    }
}

/// The prost messages use `int64` for string indices.
impl From<StringOffset> for i64 {
    fn from(offset: StringOffset) -> Self {
        offset.0.into()
    }
}
