// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

//! Accumulates sampled stack traces for one collection window and encodes
//! them into a pprof [`Profile`] message.
//!
//! A [`ProfileBuilder`] owns every table of the window: the string table,
//! the function, mapping and sample type sets, the location cache and the
//! raw samples. Frames are turned into location ids with
//! [`ProfileBuilder::build_locations`], samples are appended with
//! [`ProfileBuilder::add_sample`], and [`ProfileBuilder::build_and_encode`]
//! serializes everything. A fresh builder is used for the next window.
//!
//! The builder is not synchronized. All calls for one window must come from
//! a single writer at a time.
//!
//! [`Profile`]: https://github.com/google/pprof/blob/main/proto/profile.proto

pub mod api;
mod backtrace;
mod builder;
pub mod code_identification;
pub mod collections;
mod config;
mod error;
pub mod internal;
mod location_cache;
pub mod time;

pub use backtrace::*;
pub use builder::*;
pub use config::*;
pub use error::*;
pub use location_cache::*;
