//! Root application component and HTML shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::dispatch::Dispatcher;
use crate::pages::home::HomePage;
use crate::state::site::SiteState;

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
/// Owns the page state, provides the dispatcher to every component, and
/// performs the load-time work: theme resolution and the footer year.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let state = RwSignal::new(SiteState::default());
    let dispatcher = Dispatcher::new(state);
    provide_context(dispatcher);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::site::{PageLoad, SiteEvent};
        use crate::util::{dom, theme};

        // Effects run after hydration, so the server markup still matches the
        // first client render. This one reads no signals and runs once.
        Effect::new(move || {
            dispatcher.send(SiteEvent::PageLoaded(PageLoad {
                stored_theme: theme::read_stored(),
                prefers_light: theme::system_prefers_light(),
                year: dom::current_year().unwrap_or_default(),
            }));
        });

        let active_theme = Memo::new(move |_| state.with(|s| s.theme.theme));
        Effect::new(move || {
            if let Err(e) = theme::apply(active_theme.get()) {
                log::warn!("theme apply failed: {e}");
            }
        });

        on_cleanup(crate::util::timers::cancel_all);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/stellar.css"/>
        <Title text="Stellar"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
