//! Timestamp normalizer for XBEL `added`/`modified`/`visited` attributes.
//!
//! The desktop-bookmark format writes every instant as
//! `YYYY-MM-DDTHH:MM:SS.ffffffZ`: six fractional digits and a literal `Z`.
//! Anything else is resolved to [`Timestamp::Unknown`] and reported to the
//! sink; no failure ever reaches the caller.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Timelike, Utc};
use regex::Regex;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::error::TimestampError;

/// chrono format used once the shape check has passed.
const XBEL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

static XBEL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{6}Z$")
        .expect("timestamp shape regex must compile")
});

/// A normalised instant, or the sentinel for an absent/unparseable value.
///
/// `Unknown` is distinct from the Unix epoch and is never coerced to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Timestamp {
    Known(DateTime<Utc>),
    #[default]
    Unknown,
}

impl Timestamp {
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Known(dt) => Some(*dt),
            Timestamp::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Timestamp::Unknown)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp::Known(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Micros, true)),
            Timestamp::Unknown => f.write_str("unknown"),
        }
    }
}

/// Parse one XBEL timestamp. The input is always UTC, so the result does not
/// depend on the local timezone of the process.
pub fn parse(raw: &str) -> Result<DateTime<Utc>, TimestampError> {
    if !XBEL_SHAPE.is_match(raw) {
        return Err(TimestampError::Shape(raw.to_string()));
    }
    let naive = NaiveDateTime::parse_from_str(raw, XBEL_FORMAT)?;
    // chrono folds second 60 into the nanosecond field.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(TimestampError::LeapSecond(raw.to_string()));
    }
    Ok(naive.and_utc())
}

/// Normalise an optional attribute value.
///
/// `None` maps to [`Timestamp::Unknown`] silently. A present but malformed
/// value maps to `Unknown` and records a [`Diagnostic::MalformedTimestamp`].
pub fn normalize<S>(raw: Option<&str>, sink: &mut S) -> Timestamp
where
    S: DiagnosticSink + ?Sized,
{
    let Some(raw) = raw else {
        return Timestamp::Unknown;
    };
    match parse(raw) {
        Ok(dt) => Timestamp::Known(dt),
        Err(error) => {
            sink.record(Diagnostic::MalformedTimestamp {
                raw: raw.to_string(),
                error,
            });
            Timestamp::Unknown
        }
    }
}
