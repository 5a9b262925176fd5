// Timestamp handling for the Carbon Intensity API.
//
// The API speaks minute-precision UTC timestamps with a trailing `Z` and no
// seconds (`2018-01-20T12:00Z`), both in response bodies and in URL path
// segments. Responses are parsed leniently (RFC 3339 and naive forms are
// accepted, naive input taken as UTC); output is always the canonical form.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Canonical wire format: minute precision, UTC, trailing `Z`.
const MINUTE_FORMAT: &str = "%Y-%m-%dT%H:%MZ";

/// Parse an API timestamp. Malformed input is an error, never a default.
pub(crate) fn parse_timestamp(input: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match NaiveDateTime::parse_from_str(input, MINUTE_FORMAT) {
        Ok(naive) => Ok(naive.and_utc()),
        Err(minute_err) => {
            if let Ok(fixed) = DateTime::parse_from_rfc3339(input) {
                return Ok(fixed.with_timezone(&Utc));
            }
            // Naive forms carry no offset -- assume UTC.
            for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
                if let Ok(naive) = NaiveDateTime::parse_from_str(input, fmt) {
                    return Ok(naive.and_utc());
                }
            }
            Err(minute_err)
        }
    }
}

/// Format a timestamp as a URL path segment (`YYYY-MM-DDTHH:MMZ`).
pub(crate) fn datetime_path(value: DateTime<Utc>) -> String {
    value.format(MINUTE_FORMAT).to_string()
}

/// Format a calendar date as a URL path segment (`YYYY-MM-DD`).
pub(crate) fn date_path(value: NaiveDate) -> String {
    value.format("%Y-%m-%d").to_string()
}

/// Serde `with`-module for API timestamp fields.
pub(crate) mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{MINUTE_FORMAT, parse_timestamp};

    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(MINUTE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_timestamp(&raw)
            .map_err(|e| serde::de::Error::custom(format_args!("invalid timestamp {raw:?}: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parses_minute_precision_form() {
        let parsed = parse_timestamp("2018-01-20T12:30Z").unwrap();
        assert_eq!(datetime_path(parsed), "2018-01-20T12:30Z");
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2018-01-20T13:00:00+01:00").unwrap();
        assert_eq!(datetime_path(parsed), "2018-01-20T12:00Z");
    }

    #[test]
    fn naive_input_assumes_utc() {
        let parsed = parse_timestamp("2018-01-20T12:30:00").unwrap();
        assert_eq!(datetime_path(parsed), "2018-01-20T12:30Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("not-a-date").is_err());
        assert!(parse_timestamp("2018-13-40T99:99Z").is_err());
    }

    #[test]
    fn date_segment_format() {
        let date = NaiveDate::from_ymd_opt(2018, 1, 20).unwrap();
        assert_eq!(date_path(date), "2018-01-20");
    }
}
