// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::time::Duration;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * SECS_PER_MINUTE;
const SECS_PER_DAY: u64 = 24 * SECS_PER_HOUR;

/// A seconds count split into calendar-free units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DurationBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl DurationBreakdown {
    pub fn from_seconds(total: u64) -> Self {
        Self {
            days: total / SECS_PER_DAY,
            hours: (total % SECS_PER_DAY) / SECS_PER_HOUR,
            minutes: (total % SECS_PER_HOUR) / SECS_PER_MINUTE,
            seconds: total % SECS_PER_MINUTE,
        }
    }

    /// Seconds represented by all four fields, or `None` if that overflows `u64`.
    pub fn total_seconds(&self) -> Option<u64> {
        self.days
            .checked_mul(SECS_PER_DAY)?
            .checked_add(self.hours.checked_mul(SECS_PER_HOUR)?)?
            .checked_add(self.minutes.checked_mul(SECS_PER_MINUTE)?)?
            .checked_add(self.seconds)
    }
}

/// Sub-second precision is dropped.
impl From<Duration> for DurationBreakdown {
    fn from(d: Duration) -> Self {
        Self::from_seconds(d.as_secs())
    }
}

impl fmt::Display for DurationBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&days_hours_minutes_seconds_to_human(
            self.days,
            self.hours,
            self.minutes,
            self.seconds,
        ))
    }
}

/// Render `[N day(s), ]HH:MM:SS`.
///
/// The day prefix is omitted when `days` is zero; fields wider than two
/// digits are printed in full.
pub fn days_hours_minutes_seconds_to_human(
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
) -> String {
    let prefix = match days {
        0 => String::new(),
        1 => "1 day, ".to_string(),
        n => format!("{} days, ", n),
    };

    format!("{}{:02}:{:02}:{:02}", prefix, hours, minutes, seconds)
}

/// ```
/// use sitekit::services::duration::seconds_to_human;
///
/// assert_eq!(seconds_to_human(3725), "01:02:05");
/// assert_eq!(seconds_to_human(90061), "1 day, 01:01:01");
/// ```
pub fn seconds_to_human(total: u64) -> String {
    DurationBreakdown::from_seconds(total).to_string()
}
