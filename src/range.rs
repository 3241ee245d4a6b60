//! Two single pickers bound to `from` / `to` with the auto-adjust policy.

use crate::calendar::RangeHighlight;
use crate::config::{ConflictPolicy, PickerOptions, RangeConfig};
use crate::date::DateValue;
use crate::matcher::DisabledDays;
use crate::picker::{PickerEvent, PickerRole, SinglePicker};
use serde::{Deserialize, Serialize};

/// Ordered pair of optional dates. After a completed edit `from <= to` whenever both are set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<DateValue>,
    pub to: Option<DateValue>,
}

impl DateRange {
    pub fn new(from: Option<DateValue>, to: Option<DateValue>) -> Self {
        Self { from, to }
    }
    pub fn is_ordered(&self) -> bool {
        match (self.from, self.to) {
            (Some(f), Some(t)) => f <= t,
            _ => true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    From,
    To,
}

/// Range after setting `from`, with the opposite endpoint fixed up per `policy`.
pub fn resolve_from(current: DateRange, new_from: Option<DateValue>, policy: ConflictPolicy) -> DateRange {
    let mut next = DateRange { from: new_from, to: current.to };
    if let (Some(f), Some(t)) = (new_from, current.to) {
        if f > t {
            next.to = match policy {
                ConflictPolicy::Shift => Some(f.succ().unwrap_or(f)),
                ConflictPolicy::Clear => None,
            };
            tracing::debug!("range start {} passed end {}; end -> {:?}", f, t, next.to);
        }
    }
    next
}

/// Range after setting `to`, with the opposite endpoint fixed up per `policy`.
pub fn resolve_to(current: DateRange, new_to: Option<DateValue>, policy: ConflictPolicy) -> DateRange {
    let mut next = DateRange { from: current.from, to: new_to };
    if let (Some(t), Some(f)) = (new_to, current.from) {
        if t < f {
            next.from = match policy {
                ConflictPolicy::Shift => Some(t.pred().unwrap_or(t)),
                ConflictPolicy::Clear => None,
            };
            tracing::debug!("range end {} fell before start {}; start -> {:?}", t, f, next.from);
        }
    }
    next
}

/// Owns both endpoint pickers. The range itself stays host-owned: every edit is
/// reported through `on_change` and takes effect once the host calls [`sync`](Self::sync).
pub struct RangeCoordinator<F>
where
    F: FnMut(DateRange),
{
    config: RangeConfig,
    range: DateRange,
    from: SinglePicker,
    to: SinglePicker,
    on_change: F,
}

impl<F> RangeCoordinator<F>
where
    F: FnMut(DateRange),
{
    pub fn new(config: RangeConfig, opts: PickerOptions, range: DateRange, on_change: F) -> Self {
        let mut me = Self {
            config,
            range,
            from: SinglePicker::new(opts.clone().with_placeholder("시작일"), PickerRole::RangeEndpoint, range.from),
            to: SinglePicker::new(opts.with_placeholder("종료일"), PickerRole::RangeEndpoint, range.to),
            on_change,
        };
        me.refresh_hints();
        me
    }

    pub fn config(&self) -> RangeConfig { self.config }
    pub fn range(&self) -> DateRange { self.range }

    pub fn picker(&self, endpoint: Endpoint) -> &SinglePicker {
        match endpoint {
            Endpoint::From => &self.from,
            Endpoint::To => &self.to,
        }
    }

    pub fn select_from(&mut self, new_from: Option<DateValue>) -> DateRange {
        let next = resolve_from(self.range, new_from, self.config.conflict);
        (self.on_change)(next);
        next
    }

    pub fn select_to(&mut self, new_to: Option<DateValue>) -> DateRange {
        let next = resolve_to(self.range, new_to, self.config.conflict);
        (self.on_change)(next);
        next
    }

    /// Route an interaction to one endpoint's picker; a commit (or deselect) becomes a range change.
    pub fn apply(&mut self, endpoint: Endpoint, event: PickerEvent) -> Option<DateRange> {
        let commit = match endpoint {
            Endpoint::From => self.from.apply(event),
            Endpoint::To => self.to.apply(event),
        }?;
        Some(match endpoint {
            Endpoint::From => self.select_from(commit.date()),
            Endpoint::To => self.select_to(commit.date()),
        })
    }

    /// New authoritative range from the host.
    pub fn sync(&mut self, range: DateRange) {
        self.range = range;
        self.from.sync(range.from);
        self.to.sync(range.to);
        self.refresh_hints();
    }

    fn refresh_hints(&mut self) {
        let highlight = RangeHighlight { start: self.range.from, end: self.range.to };
        self.from.set_highlight(highlight);
        self.to.set_highlight(highlight);
        if self.config.cross_constrain {
            self.from.set_disabled_days(DisabledDays::between(None, self.range.to));
            self.to.set_disabled_days(DisabledDays::between(self.range.from, None));
        }
    }
}
