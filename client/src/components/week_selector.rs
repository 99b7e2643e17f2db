//! Previous/next week navigation buttons.

use leptos::prelude::*;

/// Week navigation controls. The owner decides what a step means.
#[component]
pub fn WeekSelector(on_previous: Callback<()>, on_next: Callback<()>) -> impl IntoView {
    view! {
        <div class="week-selector">
            <button class="btn" on:click=move |_| on_previous.run(())>
                "Previous week"
            </button>
            <button class="btn" on:click=move |_| on_next.run(())>
                "Next week"
            </button>
        </div>
    }
}
