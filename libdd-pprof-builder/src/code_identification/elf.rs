// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use super::BuildIdResolver;
use goblin::elf::{note, Elf};
use std::path::Path;
use tracing::debug;

/// Reads GNU build ids out of ELF shared objects on disk. Only paths
/// accepted by the predicate are opened; everything else, e.g. interpreted
/// source files, resolves to `None` without touching the filesystem.
#[derive(Clone, Copy, Debug)]
pub struct ElfBuildIds<P = fn(&str) -> bool> {
    is_native: P,
}

impl Default for ElfBuildIds {
    fn default() -> Self {
        Self::new()
    }
}

impl ElfBuildIds {
    pub fn new() -> Self {
        Self {
            is_native: is_native_extension,
        }
    }
}

impl<P: Fn(&str) -> bool> ElfBuildIds<P> {
    pub fn with_predicate(is_native: P) -> Self {
        Self { is_native }
    }
}

impl<P: Fn(&str) -> bool> BuildIdResolver for ElfBuildIds<P> {
    fn build_id_for(&self, path: &str) -> Option<String> {
        if !(self.is_native)(path) {
            return None;
        }
        match read_gnu_build_id(Path::new(path)) {
            Ok(build_id) => build_id,
            Err(err) => {
                debug!(path, %err, "could not read build id");
                None
            }
        }
    }
}

/// Whether `path` looks like a compiled artifact: `.so`, `.bundle` and
/// `.dylib` files, and versioned shared objects such as `libfoo.so.1.2`.
pub fn is_native_extension(path: &str) -> bool {
    let name = path.rsplit('/').next().unwrap_or(path);
    if name.ends_with(".so") || name.ends_with(".bundle") || name.ends_with(".dylib") {
        return true;
    }
    match name.split_once(".so.") {
        Some((_, version)) => {
            !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        }
        None => false,
    }
}

/// Returns the lowercase hex GNU build id of the ELF file at `path`, or
/// `None` if it's an ELF file without one.
pub fn read_gnu_build_id(path: &Path) -> Result<Option<String>, goblin::error::Error> {
    let bytes = std::fs::read(path)?;
    let elf = Elf::parse(&bytes)?;

    let from_segments = elf.iter_note_headers(&bytes);
    let from_sections = elf.iter_note_sections(&bytes, None);
    for notes in from_segments.into_iter().chain(from_sections) {
        for entry in notes {
            let entry = entry?;
            if entry.n_type == note::NT_GNU_BUILD_ID
                && entry.name.trim_end_matches('\0') == "GNU"
            {
                return Ok(Some(byte_slice_as_hex(entry.desc)));
            }
        }
    }
    Ok(None)
}

fn byte_slice_as_hex(bv: &[u8]) -> String {
    use std::fmt::Write;

    let mut s = String::with_capacity(bv.len() * 2);
    for byte in bv {
        let _ = write!(&mut s, "{byte:02x}");
    }
    s
}
