// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

pub mod identifiable;
pub mod message_set;
pub mod string_table;

pub use message_set::{Entry, MessageSet};
pub use string_table::StringTable;
