//! Parser for the UTC timestamps found in schedule payloads.
//!
//! Accepted shape: `YYYY-MM-DDTHH:MM:SS[.fraction][Z]`. Numeric offsets such as
//! `+02:00` are not accepted.

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

/// Returned by [`parse`] when a timestamp is missing or malformed.
pub const SENTINEL: i64 = -1;

/// Convert a timestamp into epoch seconds, or [`SENTINEL`] on any failure.
pub fn parse(timestamp: Option<&str>) -> i64 {
    parse_opt(timestamp).unwrap_or(SENTINEL)
}

/// Same as [`parse`] but with `None` in place of the sentinel.
pub fn parse_opt(timestamp: Option<&str>) -> Option<i64> {
    let raw = timestamp?;
    match to_epoch_seconds(raw) {
        Ok(secs) => Some(secs),
        Err(reason) => {
            warn!(timestamp = %raw, reason = %reason, "Failed to parse timestamp");
            None
        }
    }
}

fn to_epoch_seconds(raw: &str) -> Result<i64, String> {
    let (date_part, time_part) = raw
        .split_once('T')
        .ok_or_else(|| "missing 'T' separator".to_string())?;

    let [year, month, day] = split_fields::<3>(date_part, '-')?;
    let year: i32 = parse_field(year, "year")?;
    let month: u32 = parse_field(month, "month")?;
    let day: u32 = parse_field(day, "day")?;

    let time_part = strip_suffixes(time_part)?;
    let [hour, minute, second] = split_fields::<3>(time_part, ':')?;
    let hour: u32 = parse_field(hour, "hour")?;
    let minute: u32 = parse_field(minute, "minute")?;
    let second: u32 = parse_field(second, "second")?;

    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| format!("date {}-{}-{} out of range", year, month, day))?;
    let time = NaiveTime::from_hms_opt(hour, minute, second)
        .ok_or_else(|| format!("time {}:{}:{} out of range", hour, minute, second))?;

    Ok(date.and_time(time).and_utc().timestamp())
}

/// Drop a trailing `Z` and any fractional seconds. The fraction must be digits only.
fn strip_suffixes(time_part: &str) -> Result<&str, String> {
    let time_part = time_part.strip_suffix('Z').unwrap_or(time_part);
    match time_part.split_once('.') {
        Some((whole, fraction)) => {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(format!("invalid fractional seconds '{}'", fraction));
            }
            Ok(whole)
        }
        None => Ok(time_part),
    }
}

fn split_fields<const N: usize>(part: &str, sep: char) -> Result<[&str; N], String> {
    let fields: Vec<&str> = part.split(sep).collect();
    let found = fields.len();
    <[&str; N]>::try_from(fields)
        .map_err(|_| format!("expected {} fields in '{}', found {}", N, part, found))
}

fn parse_field<T: std::str::FromStr>(field: &str, name: &str) -> Result<T, String> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("{} '{}' is not numeric", name, field));
    }
    field.parse::<T>().map_err(|_| format!("{} '{}' is not numeric", name, field))
}
