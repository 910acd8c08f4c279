//! In-page anchor with smooth scrolling.

use leptos::prelude::*;

use crate::dispatch::Dispatcher;
use crate::state::effect::Effect;
use crate::state::scroll::ScrollEvent;
use crate::state::site::SiteEvent;
use crate::util::dom;

/// Anchor whose `href` is a fragment (`#section`).
///
/// When the fragment names an element on the page, the default jump is
/// suppressed and the target is scrolled into view smoothly (closing the
/// mobile nav). Otherwise the browser handles the click as usual.
#[component]
pub fn ScrollLink(href: &'static str, #[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let effects = dispatcher.send(SiteEvent::Scroll(ScrollEvent::AnchorClicked {
            href: href.to_owned(),
            target_found: dom::selector_matches(href),
        }));
        if effects.iter().any(|e| matches!(e, Effect::ScrollTo { .. })) {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
