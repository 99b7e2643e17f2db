//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::availability::AvailabilityPage;
use crate::state::calendar::CalendarState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session-wide calendar state and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Anchor date starts at today and lives for the whole page session.
    let calendar = RwSignal::new(CalendarState::today());
    provide_context(calendar);

    // SSR renders with the server clock; once hydrated, re-anchor on the
    // browser's local date so navigation steps from what the user sees.
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        calendar.update(|c| c.anchor_on(crate::state::calendar::local_today()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/weekpick.css"/>
        <Title text="Weekly Availability"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AvailabilityPage/>
            </Routes>
        </Router>
    }
}
