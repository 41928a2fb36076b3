// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Date-range filtering of record timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

use crate::error::{ReconError, Result};

/// An optional `[start, end]` day window evaluated in a fixed UTC offset.
///
/// When either bound is unset the window admits everything, including records
/// whose timestamp is missing or unparseable. When both are set, an instant
/// matches iff it is strictly after `start 00:00:00.000` and strictly before
/// `end 23:59:59.999`; unparseable timestamps never match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub offset: FixedOffset,
}

impl Default for DateWindow {
    fn default() -> Self {
        DateWindow::unbounded()
    }
}

impl DateWindow {
    pub fn unbounded() -> Self {
        DateWindow {
            start: None,
            end: None,
            offset: utc(),
        }
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>, offset: FixedOffset) -> Self {
        DateWindow { start, end, offset }
    }

    pub fn contains(&self, created_at: Option<&str>) -> bool {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return true;
        };
        let Some(at) = created_at.and_then(|s| parse_timestamp(s, self.offset)) else {
            return false;
        };
        let Some(lo) = start_of_day(start, self.offset) else {
            return false;
        };
        let Some(hi) = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .and_then(|t| local_instant(end, t, self.offset))
        else {
            return false;
        };
        at > lo && at < hi
    }
}

/// Date-range predicate in UTC. Identity when either bound is `None`.
pub fn in_range(created_at: Option<&str>, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    DateWindow::new(start, end, utc()).contains(created_at)
}

fn utc() -> FixedOffset {
    Utc.fix()
}

fn start_of_day(day: NaiveDate, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    NaiveTime::from_hms_opt(0, 0, 0).and_then(|t| local_instant(day, t, offset))
}

fn local_instant(day: NaiveDate, time: NaiveTime, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    offset.from_local_datetime(&day.and_time(time)).single()
}

/// RFC 3339 first, then naive date-times and bare dates read in `offset`.
pub fn parse_timestamp(raw: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return offset.from_local_datetime(&naive).single();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| start_of_day(d, offset))
}

/// Parses a `+HH:MM` / `-HH:MM` offset.
pub fn parse_offset(raw: &str) -> Result<FixedOffset> {
    raw.trim()
        .parse::<FixedOffset>()
        .map_err(|_| ReconError::InvalidOffset(raw.to_string()))
}

/// ISO date input; an empty string clears the bound.
pub fn parse_bound(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ReconError::InvalidDate(raw.to_string()))
}
