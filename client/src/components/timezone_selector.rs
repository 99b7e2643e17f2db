//! Timezone dropdown.
//!
//! DESIGN
//! ======
//! Reports the raw `<select>` value upward; validation against the offered
//! set happens in `Timezone::from_str` before state is touched.

use leptos::prelude::*;

use crate::state::timezone::Timezone;

#[component]
pub fn TimezoneSelector(#[prop(into)] selected: Signal<Timezone>, on_change: Callback<String>) -> impl IntoView {
    let options = Timezone::ALL
        .into_iter()
        .map(|tz| {
            view! {
                <option value=tz.value() prop:selected=move || selected.get() == tz>
                    {tz.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="timezone-selector">
            <label for="timezone">"Select Timezone:"</label>
            <select id="timezone" on:change=move |ev| on_change.run(event_target_value(&ev))>
                {options}
            </select>
        </div>
    }
}
