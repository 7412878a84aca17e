// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::*;

/// A stored sample. Labels already hold string table offsets, so they are
/// kept in their wire form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sample {
    /// Leaf first.
    pub location_ids: Box<[LocationId]>,
    pub values: Box<[i64]>,
    pub labels: Box<[protobuf::Label]>,
}
