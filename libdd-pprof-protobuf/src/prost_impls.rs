// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! [prost] mirrors of the pprof messages, for reading encoded profiles back
//! in tests. They carry some fields this crate never writes, so tests can
//! check those stay unset.

use prost::Message;

#[derive(Clone, Eq, PartialEq, Hash, Message)]
pub struct Profile {
    #[prost(message, repeated, tag = "1")]
    pub sample_types: Vec<ValueType>,
    #[prost(message, repeated, tag = "2")]
    pub samples: Vec<Sample>,
    #[prost(message, repeated, tag = "3")]
    pub mappings: Vec<Mapping>,
    #[prost(message, repeated, tag = "4")]
    pub locations: Vec<Location>,
    #[prost(message, repeated, tag = "5")]
    pub functions: Vec<Function>,
    #[prost(string, repeated, tag = "6")]
    pub string_table: Vec<String>,
    #[prost(int64, tag = "9")]
    pub time_nanos: i64,
    #[prost(int64, tag = "10")]
    pub duration_nanos: i64,
    #[prost(message, optional, tag = "11")]
    pub period_type: Option<ValueType>,
    #[prost(int64, tag = "12")]
    pub period: i64,
}

impl Profile {
    /// The string at `offset`, if the offset is in range.
    pub fn string(&self, offset: i64) -> Option<&str> {
        let index = usize::try_from(offset).ok()?;
        self.string_table.get(index).map(String::as_str)
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Message)]
pub struct ValueType {
    #[prost(int64, tag = "1")]
    pub r#type: i64,
    #[prost(int64, tag = "2")]
    pub unit: i64,
}

#[derive(Clone, Eq, PartialEq, Hash, PartialOrd, Ord, Message)]
pub struct Sample {
    #[prost(uint64, repeated, tag = "1")]
    pub location_ids: Vec<u64>,
    #[prost(int64, repeated, tag = "2")]
    pub values: Vec<i64>,
    #[prost(message, repeated, tag = "3")]
    pub labels: Vec<Label>,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Message)]
pub struct Label {
    #[prost(int64, tag = "1")]
    pub key: i64,
    #[prost(int64, tag = "2")]
    pub str: i64,
    #[prost(int64, tag = "3")]
    pub num: i64,
    #[prost(int64, tag = "4")]
    pub num_unit: i64,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Message)]
pub struct Mapping {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub memory_start: u64,
    #[prost(uint64, tag = "3")]
    pub memory_limit: u64,
    #[prost(uint64, tag = "4")]
    pub file_offset: u64,
    #[prost(int64, tag = "5")]
    pub filename: i64,
    #[prost(int64, tag = "6")]
    pub build_id: i64,
}

#[derive(Clone, Eq, PartialEq, Hash, Message)]
pub struct Location {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(uint64, tag = "2")]
    pub mapping_id: u64,
    #[prost(uint64, tag = "3")]
    pub address: u64,
    #[prost(message, repeated, tag = "4")]
    pub lines: Vec<Line>,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Message)]
pub struct Line {
    #[prost(uint64, tag = "1")]
    pub function_id: u64,
    #[prost(int64, tag = "2")]
    pub line: i64,
}

#[derive(Clone, Copy, Eq, PartialEq, Hash, Message)]
pub struct Function {
    #[prost(uint64, tag = "1")]
    pub id: u64,
    #[prost(int64, tag = "2")]
    pub name: i64,
    #[prost(int64, tag = "3")]
    pub system_name: i64,
    #[prost(int64, tag = "4")]
    pub filename: i64,
}

impl From<crate::ValueType> for ValueType {
    fn from(value_type: crate::ValueType) -> Self {
        Self {
            r#type: value_type.r#type.value.into(),
            unit: value_type.unit.value.into(),
        }
    }
}

impl From<crate::Label> for Label {
    fn from(label: crate::Label) -> Self {
        match label {
            crate::Label::Str { key, str } => Self {
                key: key.into(),
                str: str.into(),
                ..Self::default()
            },
            crate::Label::Num { key, num, num_unit } => Self {
                key: key.into(),
                num,
                num_unit: num_unit.into(),
                ..Self::default()
            },
        }
    }
}

impl From<crate::Sample<'_>> for Sample {
    fn from(sample: crate::Sample<'_>) -> Self {
        Self {
            location_ids: sample.location_ids.value.to_vec(),
            values: sample.values.value.to_vec(),
            labels: sample.labels.iter().copied().map(Label::from).collect(),
        }
    }
}

impl From<crate::Mapping> for Mapping {
    fn from(mapping: crate::Mapping) -> Self {
        Self {
            id: mapping.id.value,
            filename: mapping.filename.value.into(),
            build_id: mapping.build_id.value.into(),
            ..Self::default()
        }
    }
}

impl From<crate::Location> for Location {
    fn from(location: crate::Location) -> Self {
        let line = location.line.value;
        // a default line is skipped on the wire, so it decodes as no line
        let lines = if line == crate::Line::default() {
            Vec::new()
        } else {
            vec![Line {
                function_id: line.function_id.value,
                line: line.lineno.value,
            }]
        };
        Self {
            id: location.id.value,
            mapping_id: location.mapping_id.value,
            address: 0,
            lines,
        }
    }
}

impl From<crate::Function> for Function {
    fn from(function: crate::Function) -> Self {
        Self {
            id: function.id.value,
            name: function.name.value.into(),
            system_name: 0,
            filename: function.filename.value.into(),
        }
    }
}
