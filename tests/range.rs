#[path = "common/mod.rs"]
mod common;

use common::*;
use rangepick::{
    resolve_from, resolve_to, ConflictPolicy, DateRange, Endpoint, Field, PickerEvent, PickerOptions, RangeConfig,
    RangeCoordinator, YearMonth,
};

fn opts() -> PickerOptions {
    PickerOptions::default().with_initial_month(YearMonth::new(2024, 5))
}

fn inverted() -> DateRange {
    DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 5)))
}

/// Shift policy: a start past the end pushes the end to start + 1 day.
#[test]
fn shift_policy_moves_end_forward() {
    let (log, on_change) = recorder();
    let mut rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), inverted(), on_change);
    let next = rc.select_from(Some(d(2024, 5, 20)));
    assert_eq!(next, DateRange::new(Some(d(2024, 5, 20)), Some(d(2024, 5, 21))));
    assert_eq!(*log.borrow(), vec![next]);
}

/// Clear policy: the same edit drops the end instead.
#[test]
fn clear_policy_drops_end() {
    let (log, on_change) = recorder();
    let mut rc = RangeCoordinator::new(RangeConfig::date_picker(), opts(), inverted(), on_change);
    let next = rc.select_from(Some(d(2024, 5, 20)));
    assert_eq!(next, DateRange::new(Some(d(2024, 5, 20)), None));
    assert_eq!(*log.borrow(), vec![next]);
}

/// The end-side edit is symmetric under both policies.
#[test]
fn end_before_start_adjusts_start() {
    let current = DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 20)));
    assert_eq!(
        resolve_to(current, Some(d(2024, 5, 1)), ConflictPolicy::Shift),
        DateRange::new(Some(d(2024, 4, 30)), Some(d(2024, 5, 1)))
    );
    assert_eq!(
        resolve_to(current, Some(d(2024, 5, 1)), ConflictPolicy::Clear),
        DateRange::new(None, Some(d(2024, 5, 1)))
    );
    // Shifting across a year boundary.
    let jan = DateRange::new(Some(d(2024, 1, 5)), None);
    assert_eq!(
        resolve_to(jan, Some(d(2024, 1, 1)), ConflictPolicy::Shift).from,
        Some(d(2023, 12, 31))
    );
}

/// Edits that keep the range ordered (or touch an absent endpoint) change only
/// the edited side; equal endpoints are not an inversion.
#[test]
fn ordered_edits_are_untouched() {
    let current = DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 20)));
    for policy in [ConflictPolicy::Shift, ConflictPolicy::Clear] {
        assert_eq!(
            resolve_from(current, Some(d(2024, 5, 20)), policy),
            DateRange::new(Some(d(2024, 5, 20)), Some(d(2024, 5, 20)))
        );
        assert_eq!(resolve_to(current, None, policy), DateRange::new(Some(d(2024, 5, 10)), None));
        let open = DateRange::new(None, None);
        assert_eq!(resolve_from(open, Some(d(2030, 1, 1)), policy).to, None);
    }
}

/// The host always gets the full pair, even when only one side changed; the
/// coordinator keeps using the host's range until the host syncs.
#[test]
fn callback_receives_full_pair_and_waits_for_sync() {
    let (log, on_change) = recorder();
    let start = DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 5, 31)));
    let mut rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), start, on_change);

    rc.select_to(Some(d(2024, 5, 15)));
    assert_eq!(log.borrow()[0], DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 5, 15))));
    assert_eq!(rc.range(), start);

    let accepted = log.borrow()[0];
    rc.sync(accepted);
    assert_eq!(rc.range(), accepted);
    assert_eq!(rc.picker(Endpoint::To).buffers().day, "15");
}

/// Typing a start date past the end commits through the shift policy; once the
/// host accepts, the end picker's text shows the shifted date.
#[test]
fn typed_start_shifts_end_text() {
    let (log, on_change) = recorder();
    let start = DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 5, 5)));
    let mut rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), start, on_change);

    assert_eq!(rc.apply(Endpoint::From, PickerEvent::Input(Field::Day, "2".into())), None);
    let next = rc.apply(Endpoint::From, PickerEvent::Input(Field::Day, "20".into()));
    assert_eq!(next, Some(DateRange::new(Some(d(2024, 5, 20)), Some(d(2024, 5, 21)))));
    assert_eq!(log.borrow().len(), 1);

    rc.sync(DateRange::new(Some(d(2024, 5, 20)), Some(d(2024, 5, 21))));
    let to = rc.picker(Endpoint::To).buffers();
    assert_eq!((to.year.as_str(), to.month.as_str(), to.day.as_str()), ("2024", "05", "21"));
    assert_eq!(rc.picker(Endpoint::From).buffers().day, "20");
}

/// Clicking the selected end day again clears only the end, under either preset.
#[test]
fn clicking_selected_end_clears_it() {
    for config in [RangeConfig::custom_calendar(), RangeConfig::date_picker()] {
        let (log, on_change) = recorder();
        let range = DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 5, 5)));
        let mut rc = RangeCoordinator::new(config, opts(), range, on_change);

        let next = rc.apply(Endpoint::To, PickerEvent::SelectDay(d(2024, 5, 5)));
        assert_eq!(next, Some(DateRange::new(Some(d(2024, 5, 1)), None)));
        assert_eq!(*log.borrow(), vec![DateRange::new(Some(d(2024, 5, 1)), None)]);

        rc.sync(DateRange::new(Some(d(2024, 5, 1)), None));
        assert!(rc.picker(Endpoint::To).buffers().is_empty());
        assert_eq!(rc.picker(Endpoint::From).buffers().day, "01");
        assert_eq!(rc.picker(Endpoint::To).trigger_label(), "종료일");
    }
}

/// Range endpoints keep the popover open after a day click.
#[test]
fn endpoint_popover_stays_open() {
    let (_log, on_change) = recorder();
    let mut rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), DateRange::default(), on_change);
    rc.apply(Endpoint::From, PickerEvent::SetOpen(true));
    rc.apply(Endpoint::From, PickerEvent::SelectDay(d(2024, 5, 3)));
    assert!(rc.picker(Endpoint::From).state().open);
}

/// Date-picker preset disables days that would invert the range; the
/// custom-calendar preset disables nothing and relies on shifting.
#[test]
fn cross_constraints_only_in_date_picker_preset() {
    let range = DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 20)));

    let (_log, on_change) = recorder();
    let rc = RangeCoordinator::new(RangeConfig::date_picker(), opts(), range, on_change);
    let from_days = rc.picker(Endpoint::From).disabled_days();
    let to_days = rc.picker(Endpoint::To).disabled_days();
    assert!(from_days.is_disabled(d(2024, 5, 21)));
    assert!(!from_days.is_disabled(d(2024, 5, 20)));
    assert!(to_days.is_disabled(d(2024, 5, 9)));
    assert!(!to_days.is_disabled(d(2024, 5, 10)));

    let (_log, on_change) = recorder();
    let rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), range, on_change);
    assert!(rc.picker(Endpoint::From).disabled_days().is_empty());
    assert!(rc.picker(Endpoint::To).disabled_days().is_empty());
}

/// Under cross constraints a click on a blocked day is ignored and the host hears nothing.
#[test]
fn blocked_click_does_not_notify() {
    let (log, on_change) = recorder();
    let range = DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 20)));
    let mut rc = RangeCoordinator::new(RangeConfig::date_picker(), opts(), range, on_change);
    assert_eq!(rc.apply(Endpoint::To, PickerEvent::SelectDay(d(2024, 5, 2))), None);
    assert!(log.borrow().is_empty());

    // Constraints follow the host's range.
    rc.sync(DateRange::new(Some(d(2024, 5, 1)), Some(d(2024, 5, 20))));
    assert!(rc.apply(Endpoint::To, PickerEvent::SelectDay(d(2024, 5, 2))).is_some());
}

/// Both pickers get the same highlight hints from the current range.
#[test]
fn highlight_hints_follow_range() {
    let (_log, on_change) = recorder();
    let range = DateRange::new(Some(d(2024, 5, 10)), Some(d(2024, 5, 12)));
    let mut rc = RangeCoordinator::new(RangeConfig::custom_calendar(), opts(), range, on_change);
    let h = rc.picker(Endpoint::To).highlight();
    assert_eq!((h.start, h.end), (range.from, range.to));
    assert!(h.modifiers(d(2024, 5, 11)).range_middle);

    rc.sync(DateRange::new(None, Some(d(2024, 5, 12))));
    let h = rc.picker(Endpoint::From).highlight();
    assert_eq!(h.start, None);
    assert!(!h.modifiers(d(2024, 5, 11)).range_middle);
}

/// Policies serialize as the plain names used in config files.
#[test]
fn config_presets_and_serde() {
    assert_eq!(RangeConfig::custom_calendar().conflict, ConflictPolicy::Shift);
    assert_eq!(RangeConfig::date_picker().conflict, ConflictPolicy::Clear);
    assert_eq!(serde_json::to_string(&ConflictPolicy::Shift).unwrap(), "\"shift\"");
    let cfg: RangeConfig = serde_json::from_str(r#"{"conflict":"clear","cross_constrain":false}"#).unwrap();
    assert_eq!(cfg, RangeConfig::custom_calendar().with_conflict(ConflictPolicy::Clear));
    assert!(!DateRange::new(Some(d(2024, 1, 2)), Some(d(2024, 1, 1))).is_ordered());
}
