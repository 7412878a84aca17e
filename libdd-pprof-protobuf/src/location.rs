// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::{impl_message, Record, NO_OPT_ZERO, OPT_ZERO};

/// A frame position. Interpreted frames are never inlined, so a location
/// carries exactly one [Line] and no address.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Location {
    pub id: Record<u64, 1, NO_OPT_ZERO>,
    pub mapping_id: Record<u64, 2, OPT_ZERO>,
    pub line: Record<Line, 4, OPT_ZERO>,
}

#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(bolero::generator::TypeGenerator))]
pub struct Line {
    pub function_id: Record<u64, 1, OPT_ZERO>,
    /// Zero when the line is unknown.
    pub lineno: Record<i64, 2, OPT_ZERO>,
}

impl_message!(Location { id, mapping_id, line });
impl_message!(Line { function_id, lineno });

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prost_impls;
    use prost::Message;

    fn decode(location: &Location) -> prost_impls::Location {
        let mut buffer = Vec::new();
        crate::Value::encode(location, &mut buffer).unwrap();
        assert_eq!(buffer.len() as u64, crate::Value::proto_len(location));
        prost_impls::Location::decode(buffer.as_slice()).unwrap()
    }

    #[test]
    fn one_line_per_location() {
        let location = Location {
            id: 7.into(),
            mapping_id: 1.into(),
            line: Line {
                function_id: 2.into(),
                lineno: 120.into(),
            }
            .into(),
        };
        let decoded = decode(&location);
        assert_eq!(7, decoded.id);
        assert_eq!(1, decoded.mapping_id);
        assert_eq!(0, decoded.address);
        assert_eq!(1, decoded.lines.len());
        assert_eq!(2, decoded.lines[0].function_id);
        assert_eq!(120, decoded.lines[0].line);
    }

    #[test]
    fn matches_prost() {
        bolero::check!().with_type::<Location>().for_each(|location| {
            assert_eq!(prost_impls::Location::from(*location), decode(location));
        });
    }
}
