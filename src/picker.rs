//! Single date picker: text triplet + popover calendar with month/year navigation.

use crate::calendar::{build_grid, DayCell, RangeHighlight};
use crate::config::PickerOptions;
use crate::date::{DateValue, YearMonth};
use crate::matcher::DisabledDays;
use crate::text_input::{DateTextInput, Field, TextTriplet};

/// Standalone pickers close their popover on a day click; range endpoints keep it open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerRole {
    Standalone,
    RangeEndpoint,
}

/// One user interaction routed to a picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Input(Field, String),
    Blur(Field),
    SelectDay(DateValue),
    PrevMonth,
    NextMonth,
    SelectMonth(u8),
    SelectYear(i32),
    SetOpen(bool),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PickerState {
    pub visible_month: YearMonth,
    pub open: bool,
}

/// Date change produced by one interaction: a new date, or the selection removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commit {
    Set(DateValue),
    Clear,
}

impl Commit {
    /// The committed value as the host stores it.
    pub fn date(self) -> Option<DateValue> {
        match self {
            Commit::Set(d) => Some(d),
            Commit::Clear => None,
        }
    }
}

/// Dropdown entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption<T> {
    pub value: T,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct SinglePicker {
    opts: PickerOptions,
    role: PickerRole,
    value: Option<DateValue>,
    text: DateTextInput,
    state: PickerState,
    disabled_days: DisabledDays,
    highlight: RangeHighlight,
}

impl SinglePicker {
    pub fn new(opts: PickerOptions, role: PickerRole, value: Option<DateValue>) -> Self {
        let visible_month = value
            .map(YearMonth::from)
            .or(opts.initial_month)
            .unwrap_or_else(|| DateValue::today().year_month());
        Self {
            text: DateTextInput::new(opts.from_year, opts.to_year, value),
            opts,
            role,
            value,
            state: PickerState { visible_month, open: false },
            disabled_days: DisabledDays::default(),
            highlight: RangeHighlight::default(),
        }
    }

    pub fn value(&self) -> Option<DateValue> { self.value }
    pub fn role(&self) -> PickerRole { self.role }
    pub fn options(&self) -> &PickerOptions { &self.opts }
    pub fn state(&self) -> PickerState { self.state }
    pub fn buffers(&self) -> &TextTriplet { self.text.buffers() }
    pub fn disabled_days(&self) -> &DisabledDays { &self.disabled_days }
    pub fn highlight(&self) -> RangeHighlight { self.highlight }

    pub fn set_disabled_days(&mut self, days: DisabledDays) {
        self.disabled_days = days;
    }
    pub fn set_highlight(&mut self, highlight: RangeHighlight) {
        self.highlight = highlight;
    }

    /// Host supplied a new authoritative value. An actual external change rewrites
    /// the text buffers and brings the calendar to the new date's month.
    pub fn sync(&mut self, value: Option<DateValue>) {
        self.value = value;
        if self.text.sync(value) {
            if let Some(d) = value {
                self.state.visible_month = d.year_month();
            }
        }
    }

    /// Trigger text: the date in long Korean form ("2024년 5월 20일"), or the placeholder.
    pub fn trigger_label(&self) -> String {
        match self.value {
            Some(d) => d.to_korean_long(),
            None => self.opts.placeholder.clone(),
        }
    }

    /// Apply one interaction; returns the commit, if this event produced one.
    pub fn apply(&mut self, event: PickerEvent) -> Option<Commit> {
        if self.opts.disabled {
            return None;
        }
        match event {
            PickerEvent::Input(field, raw) => {
                let committed = self.text.input(field, &raw);
                self.after_text_commit(committed)
            }
            PickerEvent::Blur(field) => {
                let committed = self.text.blur(field);
                self.after_text_commit(committed)
            }
            PickerEvent::SelectDay(day) => self.select_day(day),
            PickerEvent::PrevMonth => {
                self.state.visible_month = self.state.visible_month.prev();
                None
            }
            PickerEvent::NextMonth => {
                self.state.visible_month = self.state.visible_month.next();
                None
            }
            PickerEvent::SelectMonth(m) => {
                if (1..=12).contains(&m) {
                    self.state.visible_month = self.state.visible_month.with_month(m);
                }
                None
            }
            PickerEvent::SelectYear(y) => {
                if (self.opts.from_year..=self.opts.to_year).contains(&y) {
                    self.state.visible_month = self.state.visible_month.with_year(y);
                }
                None
            }
            PickerEvent::SetOpen(open) => {
                self.state.open = open;
                None
            }
        }
    }

    fn after_text_commit(&mut self, committed: Option<DateValue>) -> Option<Commit> {
        let d = committed?;
        self.state.visible_month = d.year_month();
        Some(Commit::Set(d))
    }

    /// Clicking the selected day again deselects it.
    fn select_day(&mut self, day: DateValue) -> Option<Commit> {
        if self.disabled_days.is_disabled(day) {
            tracing::debug!("ignoring click on disabled day {}", day);
            return None;
        }
        let commit = if self.value == Some(day) { Commit::Clear } else { Commit::Set(day) };
        // The click decides the text outright; the host's echo then matches `derived`.
        self.text.assign(commit.date());
        if self.role == PickerRole::Standalone {
            self.state.open = false;
        }
        Some(commit)
    }

    pub fn month_options() -> Vec<SelectOption<u8>> {
        (1..=12u8)
            .map(|m| SelectOption { value: m, label: format!("{m}월") })
            .collect()
    }

    /// Every year in the configured bounds, newest first.
    pub fn year_options(&self) -> Vec<SelectOption<i32>> {
        (self.opts.from_year..=self.opts.to_year)
            .rev()
            .map(|y| SelectOption { value: y, label: y.to_string() })
            .collect()
    }

    pub fn calendar(&self) -> Vec<[DayCell; 7]> {
        build_grid(
            self.state.visible_month,
            self.value,
            &self.disabled_days,
            &self.highlight,
            DateValue::today(),
        )
    }
}

/// Standalone single-date binding: a picker plus the host's change callback.
pub struct SingleDateInput<F>
where
    F: FnMut(Option<DateValue>),
{
    picker: SinglePicker,
    on_change: F,
}

impl<F> SingleDateInput<F>
where
    F: FnMut(Option<DateValue>),
{
    pub fn new(opts: PickerOptions, value: Option<DateValue>, on_change: F) -> Self {
        Self { picker: SinglePicker::new(opts, PickerRole::Standalone, value), on_change }
    }

    pub fn picker(&self) -> &SinglePicker {
        &self.picker
    }

    pub fn sync(&mut self, value: Option<DateValue>) {
        self.picker.sync(value);
    }

    /// Route one interaction; the callback fires once per commit, with `None` for a deselect.
    pub fn apply(&mut self, event: PickerEvent) -> Option<Commit> {
        let commit = self.picker.apply(event)?;
        (self.on_change)(commit.date());
        Some(commit)
    }
}
