//! Feed date parsing and formatting
//!
//! RSS uses RFC 822 dates, Atom and Dublin Core use the W3C profile of
//! ISO 8601. Both are accepted wherever a date appears, since feeds in the
//! wild mix them freely.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use tracing::warn;

use crate::{Result, SyndError};

const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const W3C_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Parses an RFC 822 date-time into a `DateTime<Utc>`
///
/// The day-of-week prefix is optional and not checked against the date.
/// `GMT`, `UT`, `UTC`, `Z` and the North American zone names are accepted
/// along with numeric offsets.
///
/// # Examples
///
/// ```
/// use synd_rs::date::parse_rfc822;
/// use chrono::Datelike;
///
/// let date = parse_rfc822("Mon, 01 Jan 2001 00:00:00 GMT").unwrap();
/// assert_eq!(date.year(), 2001);
///
/// // Mismatched weekday is tolerated
/// parse_rfc822("Mon, 02 Jan 2001 00:00:00 GMT").unwrap();
/// parse_rfc822("2 Jan 2001 10:30 -0500").unwrap();
/// ```
pub fn parse_rfc822(date_str: &str) -> Result<DateTime<Utc>> {
    let trimmed = date_str.trim();
    let without_weekday = match trimmed.split_once(',') {
        Some((weekday, rest)) if weekday.trim().chars().all(|c| c.is_ascii_alphabetic()) => rest.trim(),
        _ => trimmed,
    };

    if let Ok(dt) = DateTime::parse_from_rfc2822(without_weekday) {
        return Ok(dt.with_timezone(&Utc));
    }

    // Zone spellings chrono does not know about
    let normalized = match without_weekday.rsplit_once(' ') {
        Some((rest, "UTC" | "Z" | "z")) => format!("{} +0000", rest),
        _ => without_weekday.to_string(),
    };
    if let Ok(dt) = DateTime::parse_from_rfc2822(&normalized) {
        return Ok(dt.with_timezone(&Utc));
    }

    // No zone at all reads as UTC
    for format in ["%d %b %Y %H:%M:%S", "%d %b %Y %H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(without_weekday, format) {
            return Ok(naive.and_utc());
        }
    }

    Err(SyndError::InvalidDate(format!(
        "{} (expected RFC 822 format)",
        date_str
    )))
}

/// Parses a W3C date-time into a `DateTime<Utc>`
///
/// Accepts every granularity of the profile: year, year-month, date, and
/// date-time with or without seconds. Missing parts default to the start of
/// the period; a missing zone reads as UTC.
///
/// # Examples
///
/// ```
/// use synd_rs::date::parse_w3c;
/// use chrono::{Datelike, Timelike};
///
/// let date = parse_w3c("2003-12-13T18:30:02Z").unwrap();
/// assert_eq!(date.hour(), 18);
///
/// let date = parse_w3c("2003-12-13T18:30+01:00").unwrap();
/// assert_eq!(date.hour(), 17);
///
/// let date = parse_w3c("2003-12").unwrap();
/// assert_eq!((date.month(), date.day()), (12, 1));
/// ```
pub fn parse_w3c(date_str: &str) -> Result<DateTime<Utc>> {
    let s = date_str.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let with_offset = match s.strip_suffix('Z').or_else(|| s.strip_suffix('z')) {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };
    for format in [
        "%Y-%m-%dT%H:%M%:z",
        "%Y-%m-%dT%H:%M:%S%:z",
        "%Y-%m-%dT%H:%M:%S%.f%:z",
    ] {
        if let Ok(dt) = DateTime::parse_from_str(&with_offset, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.and_utc());
        }
    }

    let padded = match s.len() {
        4 => format!("{}-01-01", s),
        7 => format!("{}-01", s),
        _ => s.to_string(),
    };
    if let Ok(date) = NaiveDate::parse_from_str(&padded, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc());
        }
    }

    Err(SyndError::InvalidDate(format!(
        "{} (expected W3C date-time format)",
        date_str
    )))
}

/// Parses either an RFC 822 or a W3C date
pub fn parse_date(date_str: &str) -> Result<DateTime<Utc>> {
    parse_rfc822(date_str)
        .or_else(|_| parse_w3c(date_str))
        .map_err(|_| SyndError::InvalidDate(date_str.to_string()))
}

/// Like [`parse_date`], logging and dropping values that do not parse
pub fn parse_date_lenient(date_str: &str) -> Option<DateTime<Utc>> {
    match parse_date(date_str) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Dropping unparseable date: {}", e);
            None
        }
    }
}

/// Formats as an RFC 822 date in GMT
///
/// # Examples
///
/// ```
/// use synd_rs::date::{format_rfc822, parse_w3c};
///
/// let date = parse_w3c("2001-01-01").unwrap();
/// assert_eq!(format_rfc822(&date), "Mon, 01 Jan 2001 00:00:00 GMT");
/// ```
pub fn format_rfc822(date: &DateTime<Utc>) -> String {
    date.format(RFC822_FORMAT).to_string()
}

/// Formats as a W3C date-time in UTC
pub fn format_w3c(date: &DateTime<Utc>) -> String {
    date.format(W3C_FORMAT).to_string()
}
