//! Page footer with the current year.

use leptos::prelude::*;

use crate::consts::YEAR_ID;
use crate::dispatch::Dispatcher;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let state = expect_context::<Dispatcher>().state();
    let year = move || state.with(|s| s.year.map(|y| y.to_string()).unwrap_or_default());

    view! {
        <footer class="site-footer">
            <p>
                "\u{00A9} " <span id=YEAR_ID>{year}</span> " Stellar Studio. All rights reserved."
            </p>
        </footer>
    }
}
