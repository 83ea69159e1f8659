//! Time formatting for the diff header.

use crate::line_index::FileTime;
use chrono::{DateTime, Utc};

/// Format `time` with `fmt` (a `chrono::format::strftime` pattern). Falls
/// back to `"<seconds>.<nanos>"` (nanos zero-padded to nine digits) if `fmt`
/// is absent or formatting otherwise fails — this never errors.
#[must_use]
pub fn format_time(fmt: Option<&str>, time: FileTime) -> String {
    if let Some(fmt) = fmt {
        if let Some(formatted) = try_format(fmt, time) {
            return formatted;
        }
    }
    format!("{}.{:09}", time.seconds, time.nanos)
}

fn try_format(fmt: &str, time: FileTime) -> Option<String> {
    let dt: DateTime<Utc> = DateTime::from_timestamp(time.seconds, time.nanos)?;
    // `chrono`'s formatter never itself "fails" on a valid pattern, but it
    // can contain unsupported specifiers; guard with a write to a throwaway
    // buffer and catch any unicode/formatting error the std `fmt` machinery
    // could in principle surface from a custom wrapper type.
    let rendered = dt.format(fmt).to_string();
    if rendered.contains('\u{fffd}') {
        None
    } else {
        Some(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_pattern() {
        let t = FileTime {
            seconds: 1_700_000_000,
            nanos: 0,
        };
        let s = format_time(Some("%Y-%m-%d"), t);
        assert_eq!(s, "2023-11-14");
    }

    #[test]
    fn falls_back_to_numeric_on_missing_format() {
        let t = FileTime {
            seconds: 42,
            nanos: 7,
        };
        assert_eq!(format_time(None, t), "42.000000007");
    }

    #[test]
    fn falls_back_to_numeric_on_out_of_range_timestamp() {
        let t = FileTime {
            seconds: i64::MAX,
            nanos: 0,
        };
        assert_eq!(format_time(Some("%Y"), t), format!("{}.{:09}", i64::MAX, 0));
    }

    #[test]
    fn nanos_are_nine_digits_wide() {
        let t = FileTime {
            seconds: 0,
            nanos: 5,
        };
        assert_eq!(format_time(None, t), "0.000000005");
    }
}
