// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

/// A frame label in a source file. Two frames share a function when both
/// strings match, whatever their line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Function {
    pub name: StringId,
    pub filename: StringId,
}

impl Item for Function {
    type Id = FunctionId;
}

impl Function {
    pub fn to_pprof(&self, id: FunctionId) -> protobuf::Function {
        protobuf::Function {
            id: id.to_raw_id().into(),
            name: self.name.into(),
            filename: self.filename.into(),
        }
    }
}

non_zero_id!(FunctionId);
