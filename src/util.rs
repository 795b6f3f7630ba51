use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Monday of the commit's ISO week, in UTC.
pub fn week_start(timestamp: &DateTime<Utc>) -> NaiveDate {
    let date = timestamp.date_naive();
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Parse the date field of a commit header line.
///
/// Accepts RFC3339, git `--date=iso`, git's default date format, and a
/// bare `YYYY-MM-DD` (midnight UTC). Returns `None` for anything else.
pub fn parse_commit_date(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    // --date=iso, e.g. "2024-01-01 12:30:00 +0100"
    if let Ok(dt) = DateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S %z") {
        return Some(dt.with_timezone(&Utc));
    }

    // git default, e.g. "Mon Jan 1 12:30:00 2024 +0100"
    if let Ok(dt) = DateTime::parse_from_str(input, "%a %b %e %H:%M:%S %Y %z") {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight: NaiveDateTime = date.and_hms_opt(0, 0, 0)?;
        return Some(Utc.from_utc_datetime(&midnight));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_start_is_monday() {
        // 2024-01-03 is a Wednesday
        let ts = parse_commit_date("2024-01-03").unwrap();
        assert_eq!(week_start(&ts), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        // a Monday maps to itself
        let ts = parse_commit_date("2024-01-08").unwrap();
        assert_eq!(week_start(&ts), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());

        // Sunday belongs to the week started 6 days earlier
        let ts = parse_commit_date("2024-01-07").unwrap();
        assert_eq!(week_start(&ts), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn accepts_common_git_date_formats() {
        assert!(parse_commit_date("2024-01-01T10:00:00+01:00").is_some());
        assert!(parse_commit_date("2024-01-01 10:00:00 +0100").is_some());
        assert!(parse_commit_date("Mon Jan 1 10:00:00 2024 +0100").is_some());
        assert!(parse_commit_date("2024-01-01").is_some());
        assert!(parse_commit_date("yesterday").is_none());
        assert!(parse_commit_date("").is_none());
    }

    #[test]
    fn offsets_normalize_to_utc() {
        let dt = parse_commit_date("2024-01-01 00:30:00 +0100").unwrap();
        assert_eq!(dt.to_rfc3339(), "2023-12-31T23:30:00+00:00");
    }
}
