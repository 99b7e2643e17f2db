//! Header text showing the anchor date of the displayed week.

use leptos::prelude::*;

use crate::state::calendar::CalendarState;

#[component]
pub fn DateDisplay() -> impl IntoView {
    let calendar = expect_context::<RwSignal<CalendarState>>();

    view! {
        <div class="date-display">
            "Current Date: "
            {move || calendar.with(CalendarState::anchor_iso)}
        </div>
    }
}
