// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Mapping {
    pub filename: StringId,
    /// [StringId::ZERO] for source files, and for native code whose build
    /// id could not be read.
    pub build_id: StringId,
}

impl Item for Mapping {
    type Id = MappingId;
}

impl Mapping {
    pub fn to_pprof(&self, id: MappingId) -> protobuf::Mapping {
        protobuf::Mapping {
            id: id.to_raw_id().into(),
            filename: self.filename.into(),
            build_id: self.build_id.into(),
        }
    }
}

non_zero_id!(MappingId);
