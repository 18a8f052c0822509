//! Offset-free show-time wire format.
//!
//! Show start times travel as `2019-05-21T21:30:00`: ISO-like, second
//! precision, no timezone offset. Form submissions also accept the
//! space-separated variant a plain datetime widget produces.

use chrono::NaiveDateTime;

use crate::error::{CoreError, Result};

/// Render format for start times, e.g. "2019-05-21T21:30:00"
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const FORM_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a start time in the wire format.
pub fn format_start_time(t: NaiveDateTime) -> String {
    t.format(WIRE_FORMAT).to_string()
}

/// Parse a submitted start time.
///
/// Accepts the wire format and the space-separated form variant.
pub fn parse_start_time(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    NaiveDateTime::parse_from_str(s, WIRE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, FORM_FORMAT))
        .map_err(|_| CoreError::invalid_start_time(s))
}

/// Wall-clock "now", captured once per classification call.
///
/// Naive local time, matching the offset-free storage of start times.
pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2019, 5, 21)
            .unwrap()
            .and_hms_opt(21, 30, 0)
            .unwrap()
    }

    #[test]
    fn formats_without_offset() {
        assert_eq!(format_start_time(sample()), "2019-05-21T21:30:00");
    }

    #[test]
    fn parses_wire_format() {
        assert_eq!(parse_start_time("2019-05-21T21:30:00").unwrap(), sample());
    }

    #[test]
    fn parses_form_variant() {
        assert_eq!(parse_start_time("2019-05-21 21:30:00").unwrap(), sample());
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(parse_start_time(" 2019-05-21T21:30:00 ").unwrap(), sample());
    }

    #[test]
    fn round_trip() {
        let rendered = format_start_time(sample());
        assert_eq!(parse_start_time(&rendered).unwrap(), sample());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_start_time("next tuesday").is_err());
        assert!(parse_start_time("").is_err());
        assert!(parse_start_time("2019-05-21").is_err());
    }
}
