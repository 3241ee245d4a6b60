use crate::date::YearMonth;
use serde::{Deserialize, Serialize};

/// Per-picker options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct PickerOptions {
    pub from_year: i32,                 // inclusive, lowest accepted / listed year
    pub to_year: i32,                   // inclusive, highest accepted / listed year
    pub disabled: bool,                 // whole picker inert
    pub placeholder: String,
    pub initial_month: Option<YearMonth>, // visible month when no date is set; None = today
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            from_year: 1900,
            to_year: 2100,
            disabled: false,
            placeholder: "날짜 선택".to_string(),
            initial_month: None,
        }
    }
}

impl PickerOptions {
    /// Year bounds; a reversed pair is swapped rather than rejected.
    pub fn with_year_bounds(mut self, from_year: i32, to_year: i32) -> Self {
        self.from_year = from_year.min(to_year);
        self.to_year = from_year.max(to_year);
        self
    }
    pub fn with_disabled(mut self, yes: bool) -> Self {
        self.disabled = yes;
        self
    }
    pub fn with_placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }
    pub fn with_initial_month(mut self, month: YearMonth) -> Self {
        self.initial_month = Some(month);
        self
    }
}

/// What to do with the other endpoint when an edit would invert the range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Move the other endpoint one day past the edited one.
    Shift,
    /// Drop the other endpoint.
    Clear,
}

/// Range behavior. The two presets mirror two generations of the same widget
/// and intentionally stay distinct.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub conflict: ConflictPolicy,
    /// Disable calendar days that would invert the range (`to` before `from`, `from` after `to`).
    pub cross_constrain: bool,
}

impl RangeConfig {
    /// Text-entry calendar: shift the opposite endpoint, no disabled days.
    pub fn custom_calendar() -> Self {
        Self { conflict: ConflictPolicy::Shift, cross_constrain: false }
    }
    /// Button-triggered date picker: clear the opposite endpoint and disable inverting days.
    pub fn date_picker() -> Self {
        Self { conflict: ConflictPolicy::Clear, cross_constrain: true }
    }
    pub fn with_conflict(mut self, policy: ConflictPolicy) -> Self {
        self.conflict = policy;
        self
    }
    pub fn with_cross_constrain(mut self, yes: bool) -> Self {
        self.cross_constrain = yes;
        self
    }
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self::custom_calendar()
    }
}
