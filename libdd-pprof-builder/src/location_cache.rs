// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::collections::identifiable::Id;
use crate::collections::MessageSet;
use crate::internal::{Location, LocationId};
use crate::{BacktraceFrame, Error};

/// Memoizes the [Location] built for each distinct [BacktraceFrame], so a
/// frame which shows up in many samples, or many times in one sample, is
/// stored once and always resolves to the same [LocationId].
pub struct LocationCache {
    locations: MessageSet<BacktraceFrame, Location>,
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationCache {
    pub fn new() -> Self {
        Self::with_base(1)
    }

    pub fn with_base(base: u64) -> Self {
        Self {
            locations: MessageSet::with_base(base),
        }
    }

    /// Returns the id of the location for `frame`, calling `build` only if
    /// the frame hasn't been seen in this window.
    pub fn location_for<F>(&mut self, frame: &BacktraceFrame, build: F) -> Result<LocationId, Error>
    where
        F: FnOnce(&BacktraceFrame) -> Result<Location, Error>,
    {
        let entry = self.locations.fetch(frame, |_id, frame| build(frame))?;
        Ok(entry.id)
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get_by_id(id).map(|entry| entry.message)
    }

    /// Whether `id` was handed out by this cache.
    pub fn contains(&self, id: LocationId) -> bool {
        let raw = id.to_raw_id();
        raw >= self.locations.base() && raw - self.locations.base() < self.len() as u64
    }

    /// The cached locations in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &BacktraceFrame, &Location)> + '_ {
        self.locations
            .messages()
            .map(|entry| (entry.id, entry.key, entry.message))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
