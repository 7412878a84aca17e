// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use libdd_pprof_protobuf::StringOffset;
use std::fmt::Debug;
use std::hash::{BuildHasherDefault, Hash};
use std::num::NonZeroU32;

pub type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type FxIndexSet<K> = indexmap::IndexSet<K, BuildHasherDefault<rustc_hash::FxHasher>>;
pub type FxHashMap<K, V> = hashbrown::HashMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;

/// Index into the window's string table. 0 is always the empty string.
pub type StringId = StringOffset;

pub trait Id: Copy + Eq + Hash + Debug {
    /// Converts the numeric id used on the wire into the Id. Returns `None`
    /// if the number cannot be represented, e.g. it's zero for an id type
    /// which reserves zero as "unset", or it doesn't fit into 32 bits.
    fn from_raw_id(raw: u64) -> Option<Self>;

    /// The numeric id as written on the wire.
    fn to_raw_id(self) -> u64;
}

pub trait Item {
    /// The Id associated with this Item, e.g. Function -> FunctionId.
    type Id: Id;
}

impl Id for StringId {
    fn from_raw_id(raw: u64) -> Option<Self> {
        u32::try_from(raw).ok().map(StringOffset::new)
    }

    fn to_raw_id(self) -> u64 {
        u64::from(self)
    }
}

/// Creates a non-zero, 32-bit unsigned id from a wire id. Many pprof
/// collections do not allow an item with an id of zero, because zero means
/// "unset" in proto3.
#[inline]
pub fn small_non_zero_pprof_id(raw: u64) -> Option<NonZeroU32> {
    NonZeroU32::new(u32::try_from(raw).ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_non_zero_pprof_id() {
        assert_eq!(None, small_non_zero_pprof_id(0));
        assert_eq!(NonZeroU32::new(1), small_non_zero_pprof_id(1));
        assert_eq!(
            NonZeroU32::new(u32::MAX),
            small_non_zero_pprof_id(u32::MAX as u64)
        );
        assert_eq!(None, small_non_zero_pprof_id(u32::MAX as u64 + 1));
    }

    #[test]
    fn string_ids_allow_zero() {
        assert_eq!(Some(StringId::ZERO), StringId::from_raw_id(0));
        assert_eq!(7, StringId::new(7).to_raw_id());
    }
}
