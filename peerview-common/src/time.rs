//! Timestamp utilities
//!
//! Every timestamp in the canonical schema is a civil time in a named IANA
//! zone, written with the offset in force at that instant
//! (`2023-01-05T08:00:00+08:00`). Legacy tables store either UNIX epoch
//! seconds or loosely formatted date strings whose wall-clock value is UTC.

use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Output layout for canonical timestamps
const CIVIL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Layouts accepted for legacy date-time strings, tried in order
const LEGACY_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Named zone that canonical timestamps are rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilZone {
    tz: Tz,
}

impl CivilZone {
    /// Resolve an IANA zone name such as `Asia/Singapore`
    pub fn from_name(name: &str) -> Result<Self> {
        let tz = name
            .parse::<Tz>()
            .map_err(|e| Error::Config(format!("Unknown time zone '{}': {}", name, e)))?;
        Ok(Self { tz })
    }

    /// Render a UNIX epoch timestamp (seconds) in this zone
    pub fn from_unix(&self, seconds: i64) -> Result<String> {
        let instant = DateTime::<Utc>::from_timestamp(seconds, 0)
            .ok_or_else(|| Error::Timestamp(format!("epoch seconds out of range: {}", seconds)))?;
        Ok(instant.with_timezone(&self.tz).format(CIVIL_FORMAT).to_string())
    }

    /// Render a legacy date or date-time string in this zone
    ///
    /// The legacy value carries no zone; its wall-clock time is taken as UTC.
    /// A bare date means midnight UTC.
    pub fn from_legacy_datetime(&self, raw: &str) -> Result<String> {
        let naive = parse_legacy_datetime(raw)?;
        let instant = Utc.from_utc_datetime(&naive);
        Ok(instant.with_timezone(&self.tz).format(CIVIL_FORMAT).to_string())
    }
}

fn parse_legacy_datetime(raw: &str) -> Result<NaiveDateTime> {
    let trimmed = raw.trim();

    for format in LEGACY_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::Timestamp(format!("unrecognised date-time '{}'", raw)))
}
