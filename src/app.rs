//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::experiments::ExperimentsPage;
use crate::state::experiments::ExperimentsState;

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
/// Provides the shared experiments list state and sets up client-side
/// routing. The page loader is the only writer of that state; pages and
/// components just read it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let experiments = RwSignal::new(ExperimentsState::default());
    provide_context(experiments);

    view! {
        <Stylesheet id="leptos" href="/pkg/trackboard.css"/>
        <Title text="Trackboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ExperimentsPage/>
                <Route path=StaticSegment("experiments") view=ExperimentsPage/>
            </Routes>
        </Router>
    }
}
