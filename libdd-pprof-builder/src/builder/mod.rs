// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

mod buffer;

pub use buffer::*;

use crate::api;
use crate::code_identification::{BuildIdResolver, CodeIdentification, NoBuildIds};
use crate::collections::identifiable::{Id, StringId};
use crate::collections::{MessageSet, StringTable};
use crate::internal::{Function, Location, LocationId, Mapping, Sample, ValueType};
use crate::time::epoch_nanos;
use crate::{BacktraceFrame, BuilderConfig, Error, LocationCache};
use libdd_pprof_protobuf::{self as protobuf, Record, NO_OPT_ZERO, OPT_ZERO};
use std::io;
use std::time::SystemTime;
use tracing::{debug, warn};

/// Functions are identified by their (filename, name) pair.
pub type FunctionSet = MessageSet<(StringId, StringId), Function>;

/// Mappings are identified by their (filename, build id) pair.
pub type MappingSet = MessageSet<(StringId, StringId), Mapping>;

/// Value types are identified by their (type, unit) pair.
pub type ValueTypeSet = MessageSet<(StringId, StringId), ValueType>;

/// Accumulates the samples of one collection window. See the crate docs for
/// the lifecycle.
pub struct ProfileBuilder {
    config: BuilderConfig,
    strings: StringTable,
    functions: FunctionSet,
    mappings: MappingSet,
    sample_types: ValueTypeSet,
    code_identification: CodeIdentification,
    locations: LocationCache,
    samples: Vec<Sample>,
}

/// The encoded pprof bytes of one window, along with the window itself.
#[derive(Debug)]
pub struct EncodedProfile {
    pub start: SystemTime,
    pub end: SystemTime,
    pub buffer: Vec<u8>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Self {
        let base = u64::from(config.id_base.get());
        Self {
            config,
            strings: StringTable::new(),
            functions: MessageSet::with_base(base),
            mappings: MessageSet::with_base(base),
            // Value types are addressed by column, so they count from 0.
            sample_types: MessageSet::with_base(0),
            code_identification: CodeIdentification::new(Box::new(NoBuildIds)),
            locations: LocationCache::with_base(base),
            samples: Vec::new(),
        }
    }

    /// Replaces how build ids are looked up for the mappings of this window.
    /// Paths already seen keep the mapping they were given.
    pub fn with_resolver<R>(mut self, resolver: R) -> Self
    where
        R: BuildIdResolver + Send + 'static,
    {
        self.code_identification.set_resolver(Box::new(resolver));
        self
    }

    /// Declares the next column of sample values and returns its index.
    /// Declaring a (type, unit) pair again returns the existing column.
    ///
    /// # Panics
    /// Adding a new column once samples have been added, as existing samples
    /// would be missing that value.
    pub fn declare_value_type(&mut self, r#type: &str, unit: &str) -> Result<usize, Error> {
        let r#type = self.strings.fetch(r#type)?;
        let unit = self.strings.fetch(unit)?;
        let samples = self.samples.len();
        let entry = self.sample_types.fetch(&(r#type, unit), |_, _| {
            assert_eq!(
                0, samples,
                "value types must be declared before the first sample is added"
            );
            Ok::<_, Error>(ValueType { r#type, unit })
        })?;
        Ok(entry.id.column())
    }

    /// Converts a sampled stack, leaf first, into location ids. When the
    /// sampler captured fewer frames than `target_depth`, a placeholder
    /// location such as "2 frames omitted" is appended to mark the gap.
    pub fn build_locations(
        &mut self,
        frames: &[BacktraceFrame],
        target_depth: usize,
    ) -> Result<Vec<LocationId>, Error> {
        let omitted = target_depth.saturating_sub(frames.len());
        let mut location_ids = Vec::with_capacity(frames.len() + usize::from(omitted > 0));
        for frame in frames {
            location_ids.push(self.location_for(frame)?);
        }
        if omitted > 0 {
            location_ids.push(self.location_for(&BacktraceFrame::omitted(omitted))?);
        }
        Ok(location_ids)
    }

    /// Appends a sample. Samples are never merged.
    ///
    /// # Panics
    ///  1. If `values` doesn't have one value per declared value type.
    ///  2. If a location id wasn't returned by this builder's
    ///     [ProfileBuilder::build_locations].
    pub fn add_sample(
        &mut self,
        location_ids: &[LocationId],
        values: &[i64],
        labels: &[api::Label],
    ) -> Result<(), Error> {
        assert_eq!(
            self.sample_types.len(),
            values.len(),
            "sample must have one value per declared value type"
        );
        for id in location_ids {
            assert!(
                self.locations.contains(*id),
                "location id {} was not built by this profile builder",
                id.to_raw_id()
            );
        }

        let labels = labels
            .iter()
            .map(|label| Self::intern_label(&mut self.strings, label))
            .collect::<Result<Box<[_]>, _>>()?;

        self.samples.push(Sample {
            location_ids: location_ids.into(),
            values: values.into(),
            labels,
        });
        Ok(())
    }

    /// Serializes everything accumulated so far into a pprof profile for the
    /// window `[start, finish]`. Either the whole profile is produced, or
    /// nothing is. The builder is left untouched, so calling this twice
    /// yields identical bytes.
    ///
    /// Fails with [Error::TimeOutOfRange] when `start` or the window length
    /// doesn't fit the i64 nanoseconds of the wire format.
    ///
    /// # Panics
    /// If `finish` is earlier than `start`.
    pub fn build_and_encode(
        &self,
        start: SystemTime,
        finish: SystemTime,
    ) -> Result<EncodedProfile, Error> {
        let Ok(window) = finish.duration_since(start) else {
            panic!("profile window finishes before it starts: {start:?} > {finish:?}");
        };
        let out_of_range = || Error::TimeOutOfRange { start, finish };
        let time_nanos = epoch_nanos(start).ok_or_else(out_of_range)?;
        let duration_nanos = i64::try_from(window.as_nanos()).map_err(|_| out_of_range())?;

        let limit = self.config.max_profile_size;
        let mut buffer = ProfileBuffer::new(self.config.initial_buffer_capacity, limit);
        if let Err(err) = self.encode(&mut buffer, time_nanos, duration_nanos) {
            if err.kind() == io::ErrorKind::StorageFull {
                warn!(limit, "encoded profile exceeds the size limit, dropping it");
                return Err(Error::ProfileTooLarge { limit });
            }
            return Err(Error::Io(err));
        }

        debug!(
            samples = self.samples.len(),
            locations = self.locations.len(),
            functions = self.functions.len(),
            mappings = self.mappings.len(),
            strings = self.strings.len(),
            bytes = buffer.as_bytes().len(),
            duration_nanos,
            "encoded profile"
        );

        Ok(EncodedProfile {
            start,
            end: finish,
            buffer: buffer.into_bytes(),
        })
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn string_table(&self) -> &StringTable {
        &self.strings
    }

    pub fn functions(&self) -> &FunctionSet {
        &self.functions
    }

    pub fn mappings(&self) -> &MappingSet {
        &self.mappings
    }

    pub fn locations(&self) -> &LocationCache {
        &self.locations
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn sample_types(&self) -> &ValueTypeSet {
        &self.sample_types
    }
}

/// Private helper functions
impl ProfileBuilder {
    fn location_for(&mut self, frame: &BacktraceFrame) -> Result<LocationId, Error> {
        let Self {
            strings,
            functions,
            mappings,
            code_identification,
            locations,
            ..
        } = self;

        locations.location_for(frame, |frame| {
            let name = strings.fetch(frame.label())?;
            let filename = strings.fetch(frame.path())?;
            let function_id = functions
                .fetch(&(filename, name), |_, _| {
                    Ok::<_, Error>(Function { name, filename })
                })?
                .id;

            let mapping_id =
                code_identification.mapping_id_for(frame.path(), |filename, build_id| {
                    let filename = strings.fetch(filename)?;
                    let build_id = match build_id {
                        Some(build_id) => strings.fetch(build_id)?,
                        None => StringId::ZERO,
                    };
                    let entry = mappings.fetch(&(filename, build_id), |_, _| {
                        Ok::<_, Error>(Mapping { filename, build_id })
                    })?;
                    Ok(entry.id)
                })?;

            Ok(Location {
                mapping_id,
                function_id,
                line: frame.lineno(),
            })
        })
    }

    fn intern_label(
        strings: &mut StringTable,
        label: &api::Label,
    ) -> Result<protobuf::Label, Error> {
        let key = strings.fetch(label.key())?;
        Ok(match *label {
            api::Label::Str { value, .. } => protobuf::Label::Str {
                key,
                str: strings.fetch(value)?,
            },
            api::Label::Num { value, unit, .. } => protobuf::Label::Num {
                key,
                num: value,
                num_unit: strings.fetch(unit)?,
            },
        })
    }

    /// Writes the Profile message fields in field number order.
    fn encode<W: io::Write>(
        &self,
        writer: &mut W,
        time_nanos: i64,
        duration_nanos: i64,
    ) -> io::Result<()> {
        for entry in self.sample_types.messages() {
            Record::<_, 1, NO_OPT_ZERO>::from(entry.message.to_pprof()).encode(writer)?;
        }

        let mut location_ids = Vec::new();
        for sample in self.samples.iter() {
            location_ids.clear();
            location_ids.extend(sample.location_ids.iter().map(|id| id.to_raw_id()));

            let item = protobuf::Sample {
                location_ids: Record::from(location_ids.as_slice()),
                values: Record::from(&*sample.values),
                labels: &sample.labels,
            };
            Record::<_, 2, NO_OPT_ZERO>::from(item).encode(writer)?;
        }

        for entry in self.mappings.messages() {
            Record::<_, 3, NO_OPT_ZERO>::from(entry.message.to_pprof(entry.id)).encode(writer)?;
        }

        for (id, _frame, location) in self.locations.iter() {
            Record::<_, 4, NO_OPT_ZERO>::from(location.to_pprof(id)).encode(writer)?;
        }

        for entry in self.functions.messages() {
            Record::<_, 5, NO_OPT_ZERO>::from(entry.message.to_pprof(entry.id)).encode(writer)?;
        }

        for str in self.strings.iter() {
            Record::<_, 6, NO_OPT_ZERO>::from(str).encode(writer)?;
        }

        Record::<_, 9, OPT_ZERO>::from(time_nanos).encode(writer)?;
        Record::<_, 10, OPT_ZERO>::from(duration_nanos).encode(writer)
    }
}
