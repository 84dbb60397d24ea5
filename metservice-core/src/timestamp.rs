//! Wire timestamps.
//!
//! MetService emits instants as RFC 3339 strings carrying the local New
//! Zealand offset, e.g. `2021-07-16T12:00:00+12:00`. Some feeds drop the
//! colon in the offset, so `+1200` is accepted too.

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Leading text of every timestamp decode failure. The decoder uses it to
/// tell timestamp failures apart from other schema mismatches.
pub(crate) const MALFORMED: &str = "malformed timestamp";

const COMPACT_OFFSET: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed timestamp {input:?}: {reason}")]
pub struct TimestampError {
    input: String,
    reason: String,
}

impl TimestampError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// An instant together with the offset it was reported in.
///
/// Equality and ordering compare the instant only, so the same moment
/// written with different offsets is equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        match DateTime::parse_from_rfc3339(input) {
            Ok(dt) => Ok(Self(dt)),
            Err(rfc_err) => DateTime::parse_from_str(input, COMPACT_OFFSET)
                .map(Self)
                .map_err(|_| TimestampError {
                    input: input.to_owned(),
                    reason: rfc_err.to_string(),
                }),
        }
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.fixed_offset())
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339_opts(SecondsFormat::AutoSi, false))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn nz() -> FixedOffset {
        FixedOffset::east_opt(12 * 3600).unwrap()
    }

    #[test]
    fn parses_offset_qualified_rfc3339() {
        let ts = Timestamp::parse("2021-07-16T12:00:00+12:00").unwrap();
        let want = nz().with_ymd_and_hms(2021, 7, 16, 12, 0, 0).unwrap();

        assert_eq!(ts.into_inner(), want);
        assert_eq!(ts.as_datetime().offset(), &nz());
    }

    #[test]
    fn parses_offset_without_colon() {
        let ts = Timestamp::parse("2021-07-16T09:09:00+1200").unwrap();
        assert_eq!(ts.to_string(), "2021-07-16T09:09:00+12:00");
    }

    #[test]
    fn keeps_fractional_seconds_on_display() {
        let ts = Timestamp::parse("2021-07-16T09:09:00.250+12:00").unwrap();
        assert_eq!(ts.to_string(), "2021-07-16T09:09:00.250+12:00");
        assert_eq!(Timestamp::parse(&ts.to_string()).unwrap(), ts);
    }

    #[test]
    fn display_parses_back_to_the_same_instant() {
        for raw in [
            "2021-07-16T00:00:00+12:00",
            "2021-01-02T03:04:05Z",
            "1999-12-31T23:59:59-03:30",
        ] {
            let ts = Timestamp::parse(raw).unwrap();
            assert_eq!(Timestamp::parse(&ts.to_string()).unwrap(), ts, "{raw}");
        }
    }

    #[test]
    fn rejects_missing_offset() {
        let err = Timestamp::parse("2021-07-16T12:00:00").unwrap_err();
        assert_eq!(err.input(), "2021-07-16T12:00:00");
        assert!(err.to_string().starts_with(MALFORMED));
    }

    #[test]
    fn rejects_human_readable_dates() {
        assert!("16 July 2021".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
    }

    #[test]
    fn serializes_as_json_string() {
        let raw = r#""2021-07-16T08:12:00+12:00""#;
        let ts: Timestamp = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&ts).unwrap(), raw);
    }

    #[test]
    fn deserialize_rejects_non_strings() {
        assert!(serde_json::from_str::<Timestamp>("1626383340000").is_err());
    }

    #[test]
    fn utc_conversion_keeps_the_instant() {
        let ts = Timestamp::parse("2021-07-16T12:00:00+12:00").unwrap();
        let want = Utc.with_ymd_and_hms(2021, 7, 16, 0, 0, 0).unwrap();

        assert_eq!(ts.to_utc(), want);
        assert_eq!(Timestamp::from(ts.to_utc()), ts);
    }
}
