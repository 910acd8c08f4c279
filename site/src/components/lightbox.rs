//! Fullscreen image overlay.

use leptos::prelude::*;

use crate::consts::{LIGHTBOX_CLOSE_CLASS, LIGHTBOX_ID, LIGHTBOX_IMG_ID};
use crate::dispatch::Dispatcher;
use crate::state::lightbox::LightboxEvent;
use crate::state::site::SiteEvent;

/// Overlay opened from the gallery.
///
/// Closes on the close button, on a click on the backdrop itself, or on
/// Escape anywhere on the page.
#[component]
pub fn Lightbox() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                dispatcher.send(SiteEvent::Lightbox(LightboxEvent::EscapePressed));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_overlay_click = move |ev: leptos::ev::MouseEvent| {
        let on_backdrop = ev.target() == ev.current_target();
        dispatcher.send(SiteEvent::Lightbox(LightboxEvent::OverlayClicked { on_backdrop }));
    };
    let on_close_click = move |_| {
        dispatcher.send(SiteEvent::Lightbox(LightboxEvent::CloseClicked));
    };

    view! {
        <div
            id=LIGHTBOX_ID
            class="lightbox"
            role="dialog"
            aria-modal="true"
            aria-label="Image preview"
            aria-hidden=move || state.with(|s| s.lightbox.aria_hidden())
            on:click=on_overlay_click
        >
            <button type="button" class=LIGHTBOX_CLOSE_CLASS aria-label="Close image" on:click=on_close_click>
                "\u{2715}"
            </button>
            <img
                id=LIGHTBOX_IMG_ID
                src=move || state.with(|s| s.lightbox.src.clone())
                alt=move || state.with(|s| s.lightbox.alt.clone())
            />
        </div>
    }
}
