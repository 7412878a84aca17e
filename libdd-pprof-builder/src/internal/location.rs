// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

/// Where a frame was executing: which function, at which line, in which
/// loaded artifact.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Location {
    pub mapping_id: MappingId,
    pub function_id: FunctionId,
    pub line: i64,
}

impl Item for Location {
    type Id = LocationId;
}

impl Location {
    pub fn to_pprof(&self, id: LocationId) -> protobuf::Location {
        let line = protobuf::Line {
            function_id: self.function_id.to_raw_id().into(),
            lineno: self.line.into(),
        };
        protobuf::Location {
            id: id.to_raw_id().into(),
            mapping_id: self.mapping_id.to_raw_id().into(),
            line: line.into(),
        }
    }
}

non_zero_id!(
    /// Returned by [ProfileBuilder::build_locations](crate::ProfileBuilder::build_locations),
    /// and only meaningful to the builder which returned it.
    LocationId
);
