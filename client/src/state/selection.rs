//! Per-day and per-week slot selections.
//!
//! DESIGN
//! ======
//! The week aggregate is keyed by `(DayLabel, SlotOffset)` through a nested
//! mapping, so the same offset on two different days never collides. Keys are
//! inserted lazily as slots are touched; an absent key means unchecked.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::slots::SlotOffset;

/// Weekday row identities, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayLabel {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl DayLabel {
    pub const ALL: [DayLabel; 5] = [DayLabel::Mon, DayLabel::Tue, DayLabel::Wed, DayLabel::Thu, DayLabel::Fri];

    pub fn as_str(self) -> &'static str {
        match self {
            DayLabel::Mon => "Mon",
            DayLabel::Tue => "Tue",
            DayLabel::Wed => "Wed",
            DayLabel::Thu => "Thu",
            DayLabel::Fri => "Fri",
        }
    }

    /// Days after Monday of the same week.
    pub fn days_from_monday(self) -> u32 {
        match self {
            DayLabel::Mon => 0,
            DayLabel::Tue => 1,
            DayLabel::Wed => 2,
            DayLabel::Thu => 3,
            DayLabel::Fri => 4,
        }
    }
}

impl fmt::Display for DayLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checked state of the touched slots of one day.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DaySelection {
    slots: BTreeMap<SlotOffset, bool>,
}

impl DaySelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_checked(&self, slot: SlotOffset) -> bool {
        self.slots.get(&slot).copied().unwrap_or(false)
    }

    pub fn set(&mut self, slot: SlotOffset, checked: bool) {
        self.slots.insert(slot, checked);
    }

    /// Complete mapping after setting `slot`, leaving `self` untouched.
    #[must_use]
    pub fn with_slot(&self, slot: SlotOffset, checked: bool) -> Self {
        let mut next = self.clone();
        next.set(slot, checked);
        next
    }

    /// Offsets currently checked, in increasing order.
    pub fn checked_slots(&self) -> impl Iterator<Item = SlotOffset> + '_ {
        self.slots.iter().filter(|(_, checked)| **checked).map(|(slot, _)| *slot)
    }

    /// Number of touched slots (checked or explicitly unchecked).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Aggregate of all day selections for the displayed week.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSelection {
    days: BTreeMap<DayLabel, DaySelection>,
}

impl WeekSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one day's contribution with the complete mapping it reported.
    pub fn merge_day(&mut self, day: DayLabel, selection: DaySelection) {
        if selection.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, selection);
        }
    }

    /// Selection for `day`, empty when nothing was touched.
    pub fn day(&self, day: DayLabel) -> DaySelection {
        self.days.get(&day).cloned().unwrap_or_default()
    }

    pub fn is_checked(&self, day: DayLabel, slot: SlotOffset) -> bool {
        self.days.get(&day).is_some_and(|d| d.is_checked(slot))
    }

    /// Total checked slots across every day.
    pub fn checked_count(&self) -> usize {
        self.days.values().map(|d| d.checked_slots().count()).sum()
    }

    pub fn clear(&mut self) {
        self.days.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
