//! Week table: one row per weekday plus the download trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the displayed week's selection from the `CalendarState` context and
//! is its only writer. Rows report complete day mappings and the table
//! overwrites that day's entry.

use leptos::prelude::*;

use crate::state::calendar::CalendarState;
use crate::state::selection::{DayLabel, DaySelection};
use crate::state::slots::SlotGrid;
use crate::util::export::download_selection;

use super::calendar_row::CalendarRow;

#[component]
pub fn CalendarTable(days: Vec<DayLabel>, #[prop(optional)] grid: SlotGrid) -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let timezone = Memo::new(move |_| calendar.with(|c| c.timezone));

    Effect::new(move || {
        calendar.with(|c| match serde_json::to_string(c.selection()) {
            Ok(data) => log::debug!("selection data {data}"),
            Err(e) => log::warn!("selection not serializable: {e}"),
        });
    });

    let rows = days
        .into_iter()
        .map(|day| {
            let date = Memo::new(move |_| calendar.with(|c| c.date_of(day)));
            let day_selection = Memo::new(move |_| calendar.with(|c| c.selection().day(day)));
            let on_change = Callback::new(move |reported: DaySelection| {
                calendar.update(|c| c.record_day(day, reported));
            });
            view! {
                <CalendarRow
                    day=day
                    grid=grid
                    date=date
                    timezone=timezone
                    selection=day_selection
                    on_change=on_change
                />
            }
        })
        .collect_view();

    let on_download = move |_| calendar.with_untracked(|c| download_selection(c.selection()));

    view! {
        <table class="calendar-table">
            <tbody>{rows}</tbody>
        </table>
        <button class="btn calendar-table__download" on:click=on_download>
            "Download"
        </button>
    }
}
