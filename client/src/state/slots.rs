//! Half-hour slot identities and the grid that produces them.
//!
//! DESIGN
//! ======
//! A slot is identified by its minute offset from midnight. The offset is the
//! stable key used in selections and exports; it is never timezone-adjusted.
//! Only the display label (see `timezone`) depends on the active zone.

#[cfg(test)]
#[path = "slots_test.rs"]
mod slots_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minutes in one day; offsets are always below this bound.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Minutes-since-midnight identity of one time slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotOffset(u16);

impl SlotOffset {
    /// Build an offset, rejecting values outside `0..1440`.
    pub fn new(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour and minute components on a 24-hour clock.
    pub fn hour_minute(self) -> (u32, u32) {
        (u32::from(self.0 / 60), u32::from(self.0 % 60))
    }
}

impl fmt::Display for SlotOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Start/end/step bounds for the slots shown in each day row.
///
/// `end` is exclusive: the last slot starts at `end - interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotGrid {
    pub start: u16,
    pub end: u16,
    pub interval: u16,
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            start: 8 * 60,
            end: 23 * 60,
            interval: 30,
        }
    }
}

impl SlotGrid {
    /// Number of checkboxes rendered per row.
    pub fn len(&self) -> usize {
        if self.interval == 0 || self.end <= self.start {
            return 0;
        }
        usize::from((self.end - self.start) / self.interval)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Slot offsets in increasing order, left to right.
    pub fn slots(&self) -> impl Iterator<Item = SlotOffset> + use<> {
        let SlotGrid { start, interval, .. } = *self;
        (0..self.len()).filter_map(move |index| {
            let step = u16::try_from(index).ok()?.checked_mul(interval)?;
            SlotOffset::new(start.checked_add(step)?)
        })
    }
}
