// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ValueType {
    pub r#type: StringId,
    pub unit: StringId,
}

impl Item for ValueType {
    type Id = ValueTypeId;
}

impl ValueType {
    pub fn to_pprof(&self) -> protobuf::ValueType {
        protobuf::ValueType::new(self.r#type, self.unit)
    }
}

/// Which entry of every sample's values belongs to a value type. It is a
/// position rather than a wire id, so it starts at zero.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ValueTypeId(u32);

impl ValueTypeId {
    pub fn column(self) -> usize {
        self.0 as usize
    }
}

impl Id for ValueTypeId {
    fn from_raw_id(raw: u64) -> Option<Self> {
        u32::try_from(raw).ok().map(Self)
    }

    fn to_raw_id(self) -> u64 {
        self.0.into()
    }
}
