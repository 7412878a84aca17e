// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::identifiable::{FxIndexMap, Id, Item};
use crate::Error;
use indexmap::Equivalent;
use std::hash::Hash;

/// A deduplicating registry of pprof messages. Each distinct key is assigned
/// the next id, starting at `base`, the first time it's fetched. Ids are the
/// insertion index plus the base, so they are dense and never reused.
pub struct MessageSet<K, T: Item> {
    messages: FxIndexMap<K, T>,
    base: u64,
}

/// A borrowed view of one registered message.
#[derive(Debug)]
pub struct Entry<'a, K, T: Item> {
    pub id: T::Id,
    pub key: &'a K,
    pub message: &'a T,
}

impl<K, T: Item> Clone for Entry<'_, K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T: Item> Copy for Entry<'_, K, T> {}

impl<K: Hash + Eq, T: Item> Default for MessageSet<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, T: Item> MessageSet<K, T> {
    pub fn new() -> Self {
        Self::with_base(1)
    }

    pub fn with_base(base: u64) -> Self {
        Self {
            messages: FxIndexMap::default(),
            base,
        }
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the entry for `key`, calling `build` to make the message if
    /// the key has not been seen. `build` receives the id the new message is
    /// registered under. If `build` fails, nothing is registered and the id
    /// is not consumed.
    pub fn fetch<Q, E, F>(&mut self, key: &Q, build: F) -> Result<Entry<'_, K, T>, E>
    where
        Q: ?Sized + Hash + Equivalent<K> + ToOwned<Owned = K>,
        E: From<Error>,
        F: FnOnce(T::Id, &K) -> Result<T, E>,
    {
        let index = match self.messages.get_index_of(key) {
            Some(index) => index,
            None => {
                let index = self.messages.len();
                let id = self.id_at(index)?;
                let key = key.to_owned();
                let message = build(id, &key)?;
                self.messages.try_reserve(1).map_err(Error::from)?;
                let (index, _) = self.messages.insert_full(key, message);
                index
            }
        };
        Ok(self.entry(index)?)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<Entry<'_, K, T>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let index = self.messages.get_index_of(key)?;
        self.entry(index).ok()
    }

    /// Looks a message up by the id it was registered under.
    pub fn get_by_id(&self, id: T::Id) -> Option<Entry<'_, K, T>> {
        let index = id.to_raw_id().checked_sub(self.base)?;
        self.entry(usize::try_from(index).ok()?).ok()
    }

    /// The registered messages in first-registration order, which is also
    /// ascending id order.
    pub fn messages(&self) -> impl Iterator<Item = Entry<'_, K, T>> + '_ {
        (0..self.messages.len()).filter_map(|index| self.entry(index).ok())
    }

    fn id_at(&self, index: usize) -> Result<T::Id, Error> {
        u64::try_from(index)
            .ok()
            .and_then(|index| self.base.checked_add(index))
            .and_then(T::Id::from_raw_id)
            .ok_or(Error::StorageFull(std::any::type_name::<T>()))
    }

    fn entry(&self, index: usize) -> Result<Entry<'_, K, T>, Error> {
        let id = self.id_at(index)?;
        let (key, message) = self
            .messages
            .get_index(index)
            .ok_or(Error::StorageFull(std::any::type_name::<T>()))?;
        Ok(Entry { id, key, message })
    }
}
