// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities

#![allow(dead_code)]

use anyhow::Context;
use libdd_pprof_builder::{BacktraceFrame, EncodedProfile};
use libdd_pprof_protobuf::prost_impls::{Function, Location, Profile, Sample};
use prost::Message;

pub fn decode(encoded: &EncodedProfile) -> anyhow::Result<Profile> {
    Profile::decode(encoded.buffer.as_slice()).context("failed to decode pprof")
}

pub fn sorted_samples(profile: &Profile) -> Vec<Sample> {
    let mut samples = profile.samples.clone();
    samples.sort_unstable();
    samples
}

#[track_caller]
pub fn string_table_fetch(profile: &Profile, id: i64) -> &str {
    profile
        .string(id)
        .unwrap_or_else(|| panic!("String {id} not found"))
}

#[track_caller]
pub fn location(profile: &Profile, id: u64) -> &Location {
    profile
        .locations
        .iter()
        .find(|location| location.id == id)
        .unwrap_or_else(|| panic!("Location {id} not found"))
}

#[track_caller]
pub fn function(profile: &Profile, id: u64) -> &Function {
    profile
        .functions
        .iter()
        .find(|function| function.id == id)
        .unwrap_or_else(|| panic!("Function {id} not found"))
}

/// The label of the function at location `id`.
#[track_caller]
pub fn location_label(profile: &Profile, id: u64) -> &str {
    let location = location(profile, id);
    assert_eq!(1, location.lines.len());
    let function = function(profile, location.lines[0].function_id);
    string_table_fetch(profile, function.name)
}

/// A worker thread and the request it is handling, leaf first.
pub fn request_stack() -> Vec<BacktraceFrame> {
    vec![
        BacktraceFrame::new("/app/lib/cache.rb", 88, "fetch"),
        BacktraceFrame::new("/app/app/controllers/users_controller.rb", 14, "show"),
        BacktraceFrame::new(
            "/gems/actionpack/lib/action_controller/metal.rb",
            227,
            "dispatch",
        ),
        BacktraceFrame::new(
            "/gems/puma/lib/puma/thread_pool.rb",
            155,
            "block in spawn_thread",
        ),
    ]
}

/// An idle thread, leaf first.
pub fn idle_stack() -> Vec<BacktraceFrame> {
    vec![
        BacktraceFrame::new("/usr/lib/libruby.so.3.3", 0, "sleep"),
        BacktraceFrame::new("/gems/puma/lib/puma/thread_pool.rb", 120, "wait"),
        BacktraceFrame::new(
            "/gems/puma/lib/puma/thread_pool.rb",
            155,
            "block in spawn_thread",
        ),
    ]
}

/// A little-endian ELF64 shared object with a single PT_NOTE segment holding
/// a GNU build id note, and no sections.
pub fn minimal_elf(build_id: &[u8]) -> Vec<u8> {
    const EHDR: u64 = 64;
    const PHDR: u64 = 56;
    const NT_GNU_BUILD_ID: u32 = 3;
    let note_len = 12 + 4 + build_id.len() as u64;

    let mut elf = Vec::new();
    elf.extend_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0]);
    elf.extend_from_slice(&[0; 8]);
    elf.extend_from_slice(&3u16.to_le_bytes()); // ET_DYN
    elf.extend_from_slice(&62u16.to_le_bytes()); // EM_X86_64
    elf.extend_from_slice(&1u32.to_le_bytes());
    elf.extend_from_slice(&0u64.to_le_bytes()); // e_entry
    elf.extend_from_slice(&EHDR.to_le_bytes()); // e_phoff
    elf.extend_from_slice(&0u64.to_le_bytes()); // e_shoff
    elf.extend_from_slice(&0u32.to_le_bytes());
    elf.extend_from_slice(&(EHDR as u16).to_le_bytes());
    elf.extend_from_slice(&(PHDR as u16).to_le_bytes());
    elf.extend_from_slice(&1u16.to_le_bytes()); // e_phnum
    elf.extend_from_slice(&64u16.to_le_bytes());
    elf.extend_from_slice(&0u16.to_le_bytes()); // e_shnum
    elf.extend_from_slice(&0u16.to_le_bytes());

    elf.extend_from_slice(&4u32.to_le_bytes()); // PT_NOTE
    elf.extend_from_slice(&4u32.to_le_bytes()); // PF_R
    for _ in 0..3 {
        elf.extend_from_slice(&(EHDR + PHDR).to_le_bytes());
    }
    elf.extend_from_slice(&note_len.to_le_bytes());
    elf.extend_from_slice(&note_len.to_le_bytes());
    elf.extend_from_slice(&4u64.to_le_bytes());

    elf.extend_from_slice(&4u32.to_le_bytes());
    elf.extend_from_slice(&(build_id.len() as u32).to_le_bytes());
    elf.extend_from_slice(&NT_GNU_BUILD_ID.to_le_bytes());
    elf.extend_from_slice(b"GNU\0");
    elf.extend_from_slice(build_id);
    elf
}
