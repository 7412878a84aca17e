// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds since the Unix epoch, negative before it. Returns `None` for
/// instants roughly 292 years or more away from the epoch, which don't fit
/// the i64 pprof uses for timestamps.
pub fn epoch_nanos(time: SystemTime) -> Option<i64> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_nanos()).ok(),
        Err(before) => i64::try_from(before.duration().as_nanos())
            .ok()
            .map(|nanos| -nanos),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const YEAR: Duration = Duration::from_secs(365 * 24 * 60 * 60);

    #[test]
    fn epoch_is_zero() {
        assert_eq!(Some(0), epoch_nanos(UNIX_EPOCH));
    }

    #[test]
    fn after_epoch() {
        let t = UNIX_EPOCH + Duration::new(1_700_000_000, 123);
        assert_eq!(Some(1_700_000_000_000_000_123), epoch_nanos(t));
    }

    #[test]
    fn before_epoch() {
        let t = UNIX_EPOCH - Duration::from_secs(2);
        assert_eq!(Some(-2_000_000_000), epoch_nanos(t));
    }

    #[test]
    fn out_of_range_is_none() {
        assert!(epoch_nanos(UNIX_EPOCH + 290 * YEAR).is_some());
        assert_eq!(None, epoch_nanos(UNIX_EPOCH + 300 * YEAR));
        assert_eq!(None, epoch_nanos(UNIX_EPOCH - 300 * YEAR));
    }
}
