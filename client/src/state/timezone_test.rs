use super::*;
use crate::state::slots::SlotGrid;

fn winter_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn summer_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
}

fn slot(minutes: u16) -> SlotOffset {
    SlotOffset::new(minutes).unwrap()
}

// =============================================================
// Timezone
// =============================================================

#[test]
fn timezone_default_is_utc() {
    assert_eq!(Timezone::default(), Timezone::Utc);
}

#[test]
fn timezone_parses_every_select_value() {
    for tz in Timezone::ALL {
        assert_eq!(tz.value().parse::<Timezone>(), Ok(tz));
    }
}

#[test]
fn timezone_rejects_unknown_identifier() {
    let err = "Europe/Paris".parse::<Timezone>().unwrap_err();
    assert_eq!(err, TimezoneError::Unsupported("Europe/Paris".to_owned()));
    assert_eq!(err.to_string(), "unsupported timezone identifier: Europe/Paris");
}

#[test]
fn timezone_option_labels_match_selector() {
    let labels: Vec<_> = Timezone::ALL.iter().map(|tz| tz.label()).collect();
    assert_eq!(labels, vec!["UTC", "America/New_York", "Indian Standard Time (IST)"]);
}

#[test]
fn ist_resolves_to_kolkata() {
    assert_eq!(Timezone::India.tz(), Tz::Asia__Kolkata);
    assert_eq!(Timezone::India.to_string(), "IST");
}

// =============================================================
// format_slot_label
// =============================================================

#[test]
fn utc_labels_match_wall_clock() {
    assert_eq!(format_slot_label(slot(480), Timezone::Utc, winter_day()), "08:00 AM");
    assert_eq!(format_slot_label(slot(1350), Timezone::Utc, winter_day()), "10:30 PM");
    assert_eq!(format_slot_label(slot(1380), Timezone::Utc, winter_day()), "11:00 PM");
}

#[test]
fn new_york_labels_follow_daylight_saving() {
    assert_eq!(format_slot_label(slot(480), Timezone::NewYork, winter_day()), "03:00 AM");
    assert_eq!(format_slot_label(slot(480), Timezone::NewYork, summer_day()), "04:00 AM");
}

#[test]
fn ist_labels_shift_by_five_and_a_half_hours() {
    assert_eq!(format_slot_label(slot(480), Timezone::India, winter_day()), "01:30 PM");
    assert_eq!(format_slot_label(slot(1080), Timezone::India, winter_day()), "11:30 PM");
}

#[test]
fn every_grid_slot_formats_to_a_stable_non_empty_label() {
    for tz in Timezone::ALL {
        for s in SlotGrid::default().slots() {
            let first = format_slot_label(s, tz, winter_day());
            let second = format_slot_label(s, tz, winter_day());
            assert!(!first.is_empty());
            assert_eq!(first, second);
        }
    }
}
