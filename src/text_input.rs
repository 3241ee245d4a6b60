//! Three numeric text buffers (YYYY / MM / DD) kept in step with a controlled date.
//!
//! Buffers are free-form while typing. A commit happens when a field reaches its
//! full width and all three parse, or on blur after the field is clamped.

use crate::date::{days_in_month, DateValue};
use crate::parse::{clamp_digits, parse_triplet, sanitize_digits};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Year,
    Month,
    Day,
}

impl Field {
    pub fn max_len(self) -> usize {
        match self {
            Field::Year => 4,
            Field::Month | Field::Day => 2,
        }
    }
    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Year => "YYYY",
            Field::Month => "MM",
            Field::Day => "DD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Empty,
    Partial,
    Complete,
}

/// Textual projection of a date (or of nothing).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextTriplet {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl TextTriplet {
    pub fn from_date(d: DateValue) -> Self {
        Self {
            year: d.year.to_string(),
            month: format!("{:02}", d.month),
            day: format!("{:02}", d.day),
        }
    }
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Year => &self.year,
            Field::Month => &self.month,
            Field::Day => &self.day,
        }
    }
    fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
        }
    }
    pub fn state(&self, field: Field) -> FieldState {
        let len = self.get(field).len();
        if len == 0 {
            FieldState::Empty
        } else if len < field.max_len() {
            FieldState::Partial
        } else {
            FieldState::Complete
        }
    }
    pub fn is_empty(&self) -> bool {
        self.year.is_empty() && self.month.is_empty() && self.day.is_empty()
    }
}

/// Editor state for one date: the buffers plus the date they were last derived from.
#[derive(Clone, Debug)]
pub struct DateTextInput {
    buffers: TextTriplet,
    derived: Option<DateValue>,
    from_year: i32,
    to_year: i32,
}

impl DateTextInput {
    pub fn new(from_year: i32, to_year: i32, value: Option<DateValue>) -> Self {
        Self {
            buffers: value.map(TextTriplet::from_date).unwrap_or_default(),
            derived: value,
            from_year,
            to_year,
        }
    }

    pub fn buffers(&self) -> &TextTriplet {
        &self.buffers
    }

    /// Date the buffers currently stand for (last sync or last commit).
    pub fn derived(&self) -> Option<DateValue> {
        self.derived
    }

    /// Keystroke / paste into `field`. Returns the committed date when the
    /// field just became complete and the three buffers form a valid date.
    pub fn input(&mut self, field: Field, raw: &str) -> Option<DateValue> {
        let clean = sanitize_digits(raw, field.max_len());
        *self.buffers.get_mut(field) = clean;
        match self.buffers.state(field) {
            FieldState::Complete => self.try_commit(),
            _ => None,
        }
    }

    /// Focus left `field`: clamp a non-empty buffer into range and re-parse.
    pub fn blur(&mut self, field: Field) -> Option<DateValue> {
        if self.buffers.get(field).is_empty() {
            return None;
        }
        let clamped = match field {
            Field::Year => clamp_digits(&self.buffers.year, i64::from(self.from_year), i64::from(self.to_year), 4),
            Field::Month => clamp_digits(&self.buffers.month, 1, 12, 2),
            Field::Day => {
                let max_day = self.max_day_for_buffers();
                clamp_digits(&self.buffers.day, 1, i64::from(max_day), 2)
            }
        };
        *self.buffers.get_mut(field) = clamped;
        self.try_commit()
    }

    /// Reconcile with the authoritative value. Buffers are rewritten only when
    /// `value` differs from what they were last derived from, so the echo of our
    /// own commit leaves in-progress text alone. Returns whether they were rewritten.
    pub fn sync(&mut self, value: Option<DateValue>) -> bool {
        if value == self.derived {
            return false;
        }
        self.assign(value);
        true
    }

    /// Unconditionally rewrite all three buffers from `value`, discarding any
    /// half-typed text. Used when a calendar click decides the date.
    pub fn assign(&mut self, value: Option<DateValue>) {
        self.buffers = value.map(TextTriplet::from_date).unwrap_or_default();
        self.derived = value;
    }

    fn max_day_for_buffers(&self) -> u8 {
        let y = self.buffers.year.parse::<i32>().ok();
        let m = self.buffers.month.parse::<u8>().ok().filter(|m| (1..=12).contains(m));
        match (y, m) {
            (Some(y), Some(m)) => days_in_month(y, m),
            _ => 31,
        }
    }

    fn try_commit(&mut self) -> Option<DateValue> {
        let parsed = parse_triplet(
            &self.buffers.year,
            &self.buffers.month,
            &self.buffers.day,
            self.from_year,
            self.to_year,
        )?;
        self.derived = Some(parsed);
        Some(parsed)
    }
}
