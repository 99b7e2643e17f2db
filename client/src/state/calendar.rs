//! Week navigation and timezone state for the picker page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app owns one `CalendarState` for the whole session. Navigation moves
//! the anchor date by whole weeks with no bound in either direction; the
//! timezone only changes how slot labels are rendered. The week selection is
//! kept beside the anchor and dropped whenever the displayed week changes.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Days, Local, NaiveDate};

use super::selection::{DayLabel, DaySelection, WeekSelection};
use super::timezone::Timezone;

const DAYS_PER_WEEK: u64 = 7;

/// Anchor date, display timezone, and the selection for the displayed week.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    pub anchor: NaiveDate,
    pub timezone: Timezone,
    selection: WeekSelection,
}

impl CalendarState {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            anchor,
            timezone: Timezone::default(),
            selection: WeekSelection::new(),
        }
    }

    /// State anchored on the host's current local date.
    pub fn today() -> Self {
        Self::new(local_today())
    }

    /// Move the anchor to `date`, dropping the selection if the week changes.
    pub fn anchor_on(&mut self, date: NaiveDate) {
        let previous_week = self.week_start();
        self.anchor = date;
        if self.week_start() != previous_week {
            self.selection.clear();
        }
    }

    pub fn load_previous_week(&mut self) {
        if let Some(prev) = self.anchor.checked_sub_days(Days::new(DAYS_PER_WEEK)) {
            self.anchor_on(prev);
        }
    }

    pub fn load_next_week(&mut self) {
        if let Some(next) = self.anchor.checked_add_days(Days::new(DAYS_PER_WEEK)) {
            self.anchor_on(next);
        }
    }

    /// Switch the display timezone. Slot identities and the selection are kept.
    pub fn change_timezone(&mut self, timezone: Timezone) {
        self.timezone = timezone;
    }

    /// Selection for the displayed week.
    pub fn selection(&self) -> &WeekSelection {
        &self.selection
    }

    /// Replace `day`'s contribution with the complete mapping its row reported.
    pub fn record_day(&mut self, day: DayLabel, reported: DaySelection) {
        self.selection.merge_day(day, reported);
    }

    /// Monday of the week containing the anchor date.
    pub fn week_start(&self) -> NaiveDate {
        let back = u64::from(self.anchor.weekday().num_days_from_monday());
        self.anchor.checked_sub_days(Days::new(back)).unwrap_or(self.anchor)
    }

    /// Calendar date of `day` within the displayed week.
    pub fn date_of(&self, day: DayLabel) -> NaiveDate {
        let start = self.week_start();
        start
            .checked_add_days(Days::new(u64::from(day.days_from_monday())))
            .unwrap_or(start)
    }

    /// Anchor rendered as `YYYY-MM-DD`.
    pub fn anchor_iso(&self) -> String {
        self.anchor.format("%Y-%m-%d").to_string()
    }
}

/// Current date on the host clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Row heading such as `Mon 01-15`.
pub fn day_heading(day: DayLabel, date: NaiveDate) -> String {
    format!("{day} {}", date.format("%m-%d"))
}
