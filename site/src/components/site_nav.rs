//! Header navigation with a collapsible mobile menu.

use leptos::prelude::*;

use crate::components::scroll_link::ScrollLink;
use crate::consts::{NAV_LIST_ID, NAV_TOGGLE_ID};
use crate::dispatch::Dispatcher;
use crate::state::nav::NavEvent;
use crate::state::site::SiteEvent;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#services", "Services"),
    ("#gallery", "Gallery"),
    ("#contact", "Contact"),
];

/// Menu toggle plus link list.
///
/// Any click outside both the list and the toggle closes the menu.
#[component]
pub fn SiteNav() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();
    let list_ref = NodeRef::<leptos::html::Ul>::new();
    let toggle_ref = NodeRef::<leptos::html::Button>::new();

    let open = move || state.with(|s| s.nav.open);
    let aria_expanded = move || state.with(|s| s.nav.aria_expanded());

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::click, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside_list = list_ref.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
            let inside_toggle = toggle_ref.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
            dispatcher.send(SiteEvent::Nav(NavEvent::DocumentClicked { inside_nav: inside_list || inside_toggle }));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <nav class="site-nav" aria-label="Primary">
            <button
                id=NAV_TOGGLE_ID
                type="button"
                class="nav-toggle"
                node_ref=toggle_ref
                aria-controls=NAV_LIST_ID
                aria-label="Toggle navigation"
                aria-expanded=aria_expanded
                on:click=move |_| {
                    dispatcher.send(SiteEvent::Nav(NavEvent::ToggleClicked));
                }
            >
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
                <span class="nav-toggle__bar"></span>
            </button>
            <ul id=NAV_LIST_ID class="nav-list" class:show=open node_ref=list_ref>
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <li>
                                <ScrollLink href=href>{label}</ScrollLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
