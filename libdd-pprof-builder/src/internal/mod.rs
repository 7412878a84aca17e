// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! What the builder stores per table entry. An entry's id lives in the
//! [MessageSet](crate::collections::MessageSet) holding it rather than in
//! the entry, and references between entries are 32-bit. The wire messages
//! of [libdd_pprof_protobuf] are only assembled while encoding.

/// Declares a 32-bit id which is never zero, since zero means "unset" for
/// pprof ids.
macro_rules! non_zero_id {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
        pub struct $name(NonZeroU32);

        impl Id for $name {
            fn from_raw_id(raw: u64) -> Option<Self> {
                small_non_zero_pprof_id(raw).map(Self)
            }

            fn to_raw_id(self) -> u64 {
                self.0.get().into()
            }
        }
    };
}

mod function;
mod location;
mod mapping;
mod sample;
mod value_type;

pub use function::*;
pub use location::*;
pub use mapping::*;
pub use sample::*;
pub use value_type::*;

use crate::collections::identifiable::*;
use libdd_pprof_protobuf as protobuf;
use std::num::NonZeroU32;
