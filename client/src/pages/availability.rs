//! Availability picker page: header, timezone selector, and week table.
//!
//! ARCHITECTURE
//! ============
//! The page turns button and select events into `CalendarState` updates.
//! Rejected timezone values never touch the signal.

use leptos::prelude::*;

use crate::components::calendar_table::CalendarTable;
use crate::components::date_display::DateDisplay;
use crate::components::timezone_selector::TimezoneSelector;
use crate::components::week_selector::WeekSelector;
use crate::state::calendar::CalendarState;
use crate::state::selection::DayLabel;
use crate::state::timezone::Timezone;

#[component]
pub fn AvailabilityPage() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();
    let timezone = Signal::derive(move || calendar.with(|c| c.timezone));

    let on_previous = Callback::new(move |()| {
        calendar.update(CalendarState::load_previous_week);
        log::debug!("showing week of {}", calendar.with_untracked(CalendarState::anchor_iso));
    });
    let on_next = Callback::new(move |()| {
        calendar.update(CalendarState::load_next_week);
        log::debug!("showing week of {}", calendar.with_untracked(CalendarState::anchor_iso));
    });
    let on_timezone = Callback::new(move |id: String| match id.parse::<Timezone>() {
        Ok(tz) => {
            calendar.update(|c| c.change_timezone(tz));
            log::debug!("timezone changed to {tz}");
        }
        Err(e) => log::warn!("{e}; keeping current timezone"),
    });

    view! {
        <div class="calendar">
            <div class="header">
                <DateDisplay/>
                <WeekSelector on_previous=on_previous on_next=on_next/>
            </div>

            <TimezoneSelector selected=timezone on_change=on_timezone/>

            <CalendarTable days=DayLabel::ALL.to_vec()/>
        </div>
    }
}
