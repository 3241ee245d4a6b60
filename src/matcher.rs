//! Disabled-day matchers: a small serializable set of boundary predicates.

use crate::date::DateValue;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMatcher {
    /// Strictly before the anchor; the anchor day itself is not matched.
    Before(DateValue),
    /// Strictly after the anchor.
    After(DateValue),
}

impl DayMatcher {
    pub fn matches(&self, day: DateValue) -> bool {
        match *self {
            DayMatcher::Before(anchor) => day < anchor,
            DayMatcher::After(anchor) => day > anchor,
        }
    }
}

/// A day is disabled when at least one matcher matches it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisabledDays(pub Vec<DayMatcher>);

impl DisabledDays {
    /// Matchers for an optional `[min, max]` window; either side may be open.
    pub fn between(min: Option<DateValue>, max: Option<DateValue>) -> Self {
        let mut days = Self::default();
        if let Some(min) = min {
            days.push(DayMatcher::Before(min));
        }
        if let Some(max) = max {
            days.push(DayMatcher::After(max));
        }
        days
    }
    pub fn push(&mut self, m: DayMatcher) {
        self.0.push(m);
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn is_disabled(&self, day: DateValue) -> bool {
        self.0.iter().any(|m| m.matches(day))
    }
}
