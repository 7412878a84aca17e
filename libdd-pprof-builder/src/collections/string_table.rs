// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::identifiable::{FxIndexSet, StringId};
use crate::Error;

/// Interns the strings of one window. A string's [StringId] is its position
/// in the table, so ids are dense and handed out in first-seen order. The
/// empty string is always at [StringId::ZERO], as pprof requires.
pub struct StringTable {
    strings: FxIndexSet<Box<str>>,
}

impl Default for StringTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringTable {
    pub fn new() -> Self {
        let strings = FxIndexSet::from_iter([Box::<str>::from("")]);
        Self { strings }
    }

    /// The id of `str`, interning a copy of it on first sight.
    ///
    /// Fails with [Error::StorageFull] once ids no longer fit a [StringId].
    pub fn fetch(&mut self, str: &str) -> Result<StringId, Error> {
        if let Some(index) = self.strings.get_index_of(str) {
            return Self::id_at(index);
        }
        // only copy the string once it is known to be new
        let id = Self::id_at(self.strings.len())?;
        self.strings.try_reserve(1)?;
        self.strings.insert(str.into());
        Ok(id)
    }

    pub fn get(&self, id: StringId) -> Option<&str> {
        self.strings.get_index(usize::from(id)).map(|s| &**s)
    }

    /// Every string in id order, starting with the empty string.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.strings.iter().map(|s| &**s)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Never true, the empty string is always interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    fn id_at(index: usize) -> Result<StringId, Error> {
        StringId::try_from(index).map_err(|_| Error::StorageFull("string table"))
    }
}
