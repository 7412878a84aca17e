// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unimplemented))]

//! Writes the messages of a [pprof profile] straight to an [`io::Write`],
//! without building an intermediate message tree.
//!
//! Only the parts of the schema that a sampled interpreter stack needs are
//! modeled: [ValueType], [Sample] with its [Label]s, [Mapping],
//! [Location] with exactly one [Line], [Function], and string table entries.
//! The `Profile` message itself has no type here. It is a sequence of
//! top-level [Record]s, so a caller emits each table entry as it walks its
//! own storage.
//!
//! String table indices are [StringOffset]s, which are 32-bit. Ids are 64-bit
//! on the wire.
//!
//! [pprof profile]: https://github.com/google/pprof/blob/main/proto/profile.proto

mod function;
mod label;
mod location;
mod mapping;
mod sample;
mod string;
mod value_type;
pub mod varint;

#[cfg(any(test, feature = "prost_impls"))]
pub mod prost_impls;

pub use function::*;
pub use label::*;
pub use location::*;
pub use mapping::*;
pub use sample::*;
pub use string::*;
pub use value_type::*;

use std::fmt;
use std::io::{self, Write};

/// Field `N` of a message holding a `T`. When `O` is [OPT_ZERO], a field
/// holding the default value is not written at all, which is how proto3
/// represents an unset scalar.
#[derive(Copy, Clone, Default, Eq, Hash, PartialEq)]
#[repr(transparent)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Record<T: Value, const N: u32, const O: bool> {
    pub value: T,
}

/// Skip the field when it holds its default value.
pub const OPT_ZERO: bool = true;

/// Always write the field. Used for ids, which must be present, and for
/// repeated entries, where an empty entry still takes up a slot (the empty
/// string at index 0 of the string table, for instance).
pub const NO_OPT_ZERO: bool = false;

/// The two wire types pprof messages use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum WireType {
    Varint = 0,
    LengthDelimited = 2,
}

/// Something which can be the payload of a [Record].
pub trait Value: Default + Eq {
    const WIRE_TYPE: WireType;

    /// The encoded size of the payload, excluding the key and length prefix.
    fn proto_len(&self) -> u64;

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

/// Marks the types whose payload is a single varint.
///
/// # Safety
///
/// Implementors must have a [`Value::WIRE_TYPE`] of [`WireType::Varint`].
/// Slices of them are written as packed repeated fields, which would be
/// corrupt for any other wire type.
pub unsafe trait Varint: Value + Sized {}

impl<T: Value, const N: u32, const O: bool> From<T> for Record<T, N, O> {
    fn from(value: T) -> Self {
        Record { value }
    }
}

impl<T: Value, const N: u32, const O: bool> Record<T, N, O> {
    const KEY: u64 = key(N, T::WIRE_TYPE);

    #[inline]
    fn is_skipped(&self) -> bool {
        O && self.value == T::default()
    }

    /// The full encoded size of the field, including its key and, for
    /// length-delimited payloads, the length prefix.
    pub fn proto_len(&self) -> u64 {
        if self.is_skipped() {
            return 0;
        }
        let payload = self.value.proto_len();
        let prefix = match T::WIRE_TYPE {
            WireType::Varint => 0,
            WireType::LengthDelimited => varint::proto_len(payload),
        };
        varint::proto_len(Self::KEY) + prefix + payload
    }

    pub fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        if self.is_skipped() {
            return Ok(());
        }
        varint::encode(Self::KEY, writer)?;
        if T::WIRE_TYPE == WireType::LengthDelimited {
            varint::encode(self.value.proto_len(), writer)?;
        }
        self.value.encode(writer)
    }
}

impl<T: fmt::Debug + Value, const N: u32, const O: bool> fmt::Debug for Record<T, N, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{N} {:?}", self.value)
    }
}

/// The field key: the field number in the upper bits, and the wire type in
/// the lowest three.
const fn key(field: u32, wire_type: WireType) -> u64 {
    assert!(
        field >= 1 && field < (1 << 29),
        "invalid protobuf field number"
    );
    ((field as u64) << 3) | wire_type as u64
}

/// Implements [Value] for a message made only of [Record] fields, writing
/// them in the listed order.
macro_rules! impl_message {
    ($message:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::Value for $message {
            const WIRE_TYPE: $crate::WireType = $crate::WireType::LengthDelimited;

            fn proto_len(&self) -> u64 {
                0 $(+ self.$field.proto_len())+
            }

            fn encode<W: ::std::io::Write>(&self, writer: &mut W) -> ::std::io::Result<()> {
                $(self.$field.encode(writer)?;)+
                Ok(())
            }
        }
    };
}

pub(crate) use impl_message;

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded<T: Value, const N: u32, const O: bool>(record: Record<T, N, O>) -> Vec<u8> {
        let mut buffer = Vec::new();
        record.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len() as u64, record.proto_len());
        buffer
    }

    #[test]
    fn unset_fields_are_skipped() {
        assert!(encoded(Record::<i64, 10, OPT_ZERO>::from(0)).is_empty());
        assert_eq!(
            vec![0x50, 0x05],
            encoded(Record::<i64, 10, OPT_ZERO>::from(5))
        );
    }

    #[test]
    fn ids_are_always_written() {
        assert_eq!(
            vec![0x08, 0x00],
            encoded(Record::<u64, 1, NO_OPT_ZERO>::from(0))
        );
    }

    #[test]
    fn string_table_slot_zero() {
        // key of field 6 as length-delimited, then an empty payload
        assert_eq!(
            vec![0x32, 0x00],
            encoded(Record::<&str, 6, NO_OPT_ZERO>::from(""))
        );
        assert_eq!(
            vec![0x32, 0x03, b'c', b'p', b'u'],
            encoded(Record::<&str, 6, NO_OPT_ZERO>::from("cpu"))
        );
    }

    #[test]
    fn debug_shows_the_field_number() {
        let record = Record::<u64, 4, OPT_ZERO>::from(7);
        assert_eq!("#4 7", format!("{record:?}"));
    }
}
