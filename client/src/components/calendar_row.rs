//! One table row of slot checkboxes for a single weekday.
//!
//! DESIGN
//! ======
//! The row is a stateless renderer. It reads its `DaySelection` from the
//! table and, on every toggle, reports the complete updated mapping through
//! `on_change`. The table stays the only writer of the week aggregate.

#[cfg(test)]
#[path = "calendar_row_test.rs"]
mod calendar_row_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::state::calendar::day_heading;
use crate::state::selection::{DayLabel, DaySelection};
use crate::state::slots::{SlotGrid, SlotOffset};
use crate::state::timezone::{Timezone, format_slot_label};

/// Render data for one checkbox cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotCell {
    pub slot: SlotOffset,
    pub label: String,
    pub checked: bool,
}

/// Cells for one row, left to right in increasing offset order.
pub fn slot_cells(grid: &SlotGrid, timezone: Timezone, date: NaiveDate, selection: &DaySelection) -> Vec<SlotCell> {
    grid.slots()
        .map(|slot| SlotCell {
            slot,
            label: format_slot_label(slot, timezone, date),
            checked: selection.is_checked(slot),
        })
        .collect()
}

#[component]
pub fn CalendarRow(
    day: DayLabel,
    grid: SlotGrid,
    #[prop(into)] date: Signal<NaiveDate>,
    #[prop(into)] timezone: Signal<Timezone>,
    #[prop(into)] selection: Signal<DaySelection>,
    on_change: Callback<DaySelection>,
) -> impl IntoView {
    let cells = move || {
        let (date, timezone) = (date.get(), timezone.get());
        selection
            .with(|s| slot_cells(&grid, timezone, date, s))
            .into_iter()
            .map(|cell| {
                let slot = cell.slot;
                let on_toggle = move |ev: leptos::ev::Event| {
                    let next = selection.with_untracked(|s| s.with_slot(slot, event_target_checked(&ev)));
                    on_change.run(next);
                };
                view! {
                    <td class="calendar-row__slot">
                        <div class="calendar-row__time">{cell.label}</div>
                        <input type="checkbox" prop:checked=cell.checked on:change=on_toggle/>
                    </td>
                }
            })
            .collect_view()
    };

    view! {
        <tr class="calendar-row">
            <td class="calendar-row__day">{move || day_heading(day, date.get())}</td>
            {cells}
        </tr>
    }
}
