//! Pure helpers turning partial numeric text into validated dates.
//! Nothing here panics or errors: a missing date is always `None`.

use crate::date::{days_in_month, DateValue};

/// Keep only ASCII digits, truncated to `max_len` characters.
pub fn sanitize_digits(raw: &str, max_len: usize) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).take(max_len).collect()
}

fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    match s.parse::<i64>() {
        Ok(n) => Some(n),
        // A digit run too long for i64 is still "a very large number".
        Err(_) if s.bytes().all(|b| b.is_ascii_digit()) => Some(i64::MAX),
        Err(_) => None,
    }
}

/// Bound `raw` into `[min, max]` and zero-pad it to `pad_len`.
/// Unparsable (or empty) input yields an empty string so the field resets.
pub fn clamp_digits(raw: &str, min: i64, max: i64, pad_len: usize) -> String {
    match parse_int(raw) {
        Some(n) => format!("{:0width$}", n.max(min).min(max), width = pad_len),
        None => String::new(),
    }
}

/// Build a date from three text buffers, or `None` if they don't form one
/// with a year in `[min_year, max_year]`.
pub fn parse_triplet(year: &str, month: &str, day: &str, min_year: i32, max_year: i32) -> Option<DateValue> {
    let y = parse_int(year)?;
    let m = parse_int(month)?;
    let d = parse_int(day)?;
    if y < i64::from(min_year) || y > i64::from(max_year) {
        return None;
    }
    if !(1..=12).contains(&m) {
        return None;
    }
    let (y, m) = (y as i32, m as u8);
    if d < 1 || d > i64::from(days_in_month(y, m)) {
        return None;
    }
    DateValue::new(y, m, d as u8)
}
