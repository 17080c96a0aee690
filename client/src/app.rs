//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::SITE_TITLE;
use crate::pages::home::HomePage;
use crate::state::theme::ThemeStore;
use crate::state::ui::UiState;
use crate::util::dark_mode::BrowserThemeHost;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Personal portfolio: projects, skills, and contact."/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
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
/// Provides the theme store and header state, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server renders light; the browser store takes over once hydrated.
    let theme = RwSignal::new(ThemeStore::detached(BrowserThemeHost));
    let ui = RwSignal::new(UiState::default());

    provide_context(theme);
    provide_context(ui);

    Effect::new(move || {
        theme.set(ThemeStore::initialize(BrowserThemeHost));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=SITE_TITLE/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
