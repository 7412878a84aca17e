// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{Label, Record, Value, WireType, NO_OPT_ZERO, OPT_ZERO};
use std::io::{self, Write};

/// One observed stack. `location_ids` is leaf first, and `values` has one
/// entry per sample type of the profile, in declaration order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Sample<'a> {
    pub location_ids: Record<&'a [u64], 1, OPT_ZERO>,
    pub values: Record<&'a [i64], 2, OPT_ZERO>,
    pub labels: &'a [Label],
}

type LabelRecord = Record<Label, 3, NO_OPT_ZERO>;

impl Value for Sample<'_> {
    const WIRE_TYPE: WireType = WireType::LengthDelimited;

    fn proto_len(&self) -> u64 {
        let labels: u64 = self
            .labels
            .iter()
            .map(|label| LabelRecord::from(*label).proto_len())
            .sum();
        self.location_ids.proto_len() + self.values.proto_len() + labels
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.location_ids.encode(writer)?;
        self.values.encode(writer)?;
        for label in self.labels {
            LabelRecord::from(*label).encode(writer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{prost_impls, StringOffset};
    use prost::Message;

    fn decode(sample: &Sample) -> prost_impls::Sample {
        let mut buffer = Vec::new();
        sample.encode(&mut buffer).unwrap();
        assert_eq!(buffer.len() as u64, sample.proto_len());
        prost_impls::Sample::decode(buffer.as_slice()).unwrap()
    }

    #[test]
    fn empty_sample_encodes_to_nothing() {
        let mut buffer = Vec::new();
        Sample::default().encode(&mut buffer).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn stack_values_and_labels() {
        let labels = [
            Label::Num {
                key: StringOffset::new(1),
                num: 7,
                num_unit: StringOffset::ZERO,
            },
            Label::Str {
                key: StringOffset::new(2),
                str: StringOffset::new(3),
            },
        ];
        let location_ids = [4u64, 3, 2, 1];
        let values = [10_000_000i64, 1];
        let sample = Sample {
            location_ids: Record::from(location_ids.as_slice()),
            values: Record::from(values.as_slice()),
            labels: &labels,
        };
        let decoded = decode(&sample);
        assert_eq!(vec![4, 3, 2, 1], decoded.location_ids);
        assert_eq!(vec![10_000_000, 1], decoded.values);
        let expected: Vec<_> = labels.iter().copied().map(prost_impls::Label::from).collect();
        assert_eq!(expected, decoded.labels);
    }

    #[test]
    fn matches_prost() {
        bolero::check!()
            .with_type::<(Vec<u64>, Vec<i64>, Vec<Label>)>()
            .for_each(|(location_ids, values, labels)| {
                let sample = Sample {
                    location_ids: Record::from(location_ids.as_slice()),
                    values: Record::from(values.as_slice()),
                    labels,
                };
                assert_eq!(prost_impls::Sample::from(sample), decode(&sample));
            });
    }
}
