// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Attributes source paths to the artifact they were loaded from.
//!
//! Every distinct path gets one [MappingId] per window. When a
//! [BuildIdResolver] knows the build id of the artifact behind the path, it
//! becomes part of the mapping's identity. Otherwise the mapping is keyed by
//! the filename alone. A resolver that can't answer is never an error.

mod elf;

pub use elf::*;

use crate::collections::identifiable::FxHashMap;
use crate::internal::MappingId;
use crate::Error;

/// Finds the build id of the artifact at `path`, if there is one.
pub trait BuildIdResolver {
    fn build_id_for(&self, path: &str) -> Option<String>;
}

impl<F> BuildIdResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn build_id_for(&self, path: &str) -> Option<String> {
        self(path)
    }
}

/// Resolves nothing, so every mapping is identified by filename only.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoBuildIds;

impl BuildIdResolver for NoBuildIds {
    fn build_id_for(&self, _path: &str) -> Option<String> {
        None
    }
}

/// A registry of artifacts the runtime knows it has loaded, e.g. native
/// extensions, along with their build ids.
#[derive(Clone, Debug, Default)]
pub struct LoadedArtifacts {
    build_ids: FxHashMap<Box<str>, Box<str>>,
}

impl LoadedArtifacts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the build id of the artifact at `path`, replacing a previous
    /// one.
    pub fn insert(&mut self, path: impl Into<Box<str>>, build_id: impl Into<Box<str>>) {
        self.build_ids.insert(path.into(), build_id.into());
    }

    pub fn len(&self) -> usize {
        self.build_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.build_ids.is_empty()
    }
}

impl<P: Into<Box<str>>, B: Into<Box<str>>> FromIterator<(P, B)> for LoadedArtifacts {
    fn from_iter<I: IntoIterator<Item = (P, B)>>(iter: I) -> Self {
        let mut artifacts = Self::new();
        for (path, build_id) in iter {
            artifacts.insert(path, build_id);
        }
        artifacts
    }
}

impl BuildIdResolver for LoadedArtifacts {
    fn build_id_for(&self, path: &str) -> Option<String> {
        self.build_ids.get(path).map(|build_id| build_id.to_string())
    }
}

/// Caches the [MappingId] of each path seen during the window. The resolver
/// is consulted at most once per distinct path.
pub struct CodeIdentification {
    resolver: Box<dyn BuildIdResolver + Send>,
    mapping_ids: FxHashMap<Box<str>, MappingId>,
}

impl Default for CodeIdentification {
    fn default() -> Self {
        Self::new(Box::new(NoBuildIds))
    }
}

impl CodeIdentification {
    pub fn new(resolver: Box<dyn BuildIdResolver + Send>) -> Self {
        Self {
            resolver,
            mapping_ids: FxHashMap::default(),
        }
    }

    /// Uses `resolver` for the paths seen from now on. The mappings of paths
    /// already seen are kept, so a path never gets a second mapping.
    pub fn set_resolver(&mut self, resolver: Box<dyn BuildIdResolver + Send>) {
        self.resolver = resolver;
    }

    /// Returns the mapping for `path`. On the first call for a path, its
    /// build id is resolved and `register` is asked for the mapping id of
    /// the (filename, build id) pair. The empty path is a valid key.
    pub fn mapping_id_for<F>(&mut self, path: &str, register: F) -> Result<MappingId, Error>
    where
        F: FnOnce(&str, Option<&str>) -> Result<MappingId, Error>,
    {
        if let Some(id) = self.mapping_ids.get(path) {
            return Ok(*id);
        }
        let build_id = self.resolver.build_id_for(path);
        let id = register(path, build_id.as_deref())?;
        self.mapping_ids.insert(path.into(), id);
        Ok(id)
    }

    /// The number of distinct paths seen.
    pub fn len(&self) -> usize {
        self.mapping_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping_ids.is_empty()
    }
}
