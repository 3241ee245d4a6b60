//! Month-grid model handed to the calendar primitive: Sunday-first weeks,
//! outside days included, with per-cell flags and range highlight hints.

use crate::date::{DateValue, YearMonth};
use crate::matcher::DisabledDays;
use time::Duration;

/// Render hints only; they carry no behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeModifiers {
    pub range_start: bool,
    pub range_end: bool,
    pub range_middle: bool,
}

/// Endpoints of the paired range as seen by one picker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RangeHighlight {
    pub start: Option<DateValue>,
    pub end: Option<DateValue>,
}

impl RangeHighlight {
    pub fn is_active(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    pub fn modifiers(&self, day: DateValue) -> RangeModifiers {
        let middle = match (self.start, self.end) {
            (Some(s), Some(e)) => day > s && day < e,
            _ => false,
        };
        RangeModifiers {
            range_start: self.start == Some(day),
            range_end: self.end == Some(day),
            range_middle: middle,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DayCell {
    pub date: DateValue,
    pub outside: bool, // belongs to the previous / next month
    pub disabled: bool,
    pub selected: bool,
    pub today: bool,
    pub modifiers: RangeModifiers,
}

/// Weeks covering `month`, each starting on Sunday. Empty if the month lies
/// outside the supported calendar.
pub fn month_weeks(month: YearMonth) -> Vec<[DateValue; 7]> {
    let Some(first) = month.first_day().to_time() else { return Vec::new() };
    let lead = i64::from(first.weekday().number_days_from_sunday());
    let Some(start) = first.checked_sub(Duration::days(lead)) else { return Vec::new() };

    let span = lead + i64::from(month.last_day().day);
    let n_weeks = (span + 6) / 7;

    let mut days = Vec::with_capacity((n_weeks * 7) as usize);
    for i in 0..n_weeks * 7 {
        match start.checked_add(Duration::days(i)) {
            Some(d) => days.push(DateValue::from(d)),
            None => return Vec::new(),
        }
    }
    days.chunks_exact(7)
        .filter_map(|w| <[DateValue; 7]>::try_from(w).ok())
        .collect()
}

/// Full grid for `month` with selection, disabled and range flags resolved.
pub fn build_grid(
    month: YearMonth,
    selected: Option<DateValue>,
    disabled: &DisabledDays,
    highlight: &RangeHighlight,
    today: DateValue,
) -> Vec<[DayCell; 7]> {
    month_weeks(month)
        .into_iter()
        .map(|week| {
            week.map(|date| DayCell {
                date,
                outside: !month.contains(date),
                disabled: disabled.is_disabled(date),
                selected: selected == Some(date),
                today: date == today,
                modifiers: highlight.modifiers(date),
            })
        })
        .collect()
}
