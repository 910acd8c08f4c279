//! Light/dark toggle button.

use leptos::prelude::*;

use crate::consts::THEME_TOGGLE_ID;
use crate::dispatch::Dispatcher;
use crate::state::site::SiteEvent;
use crate::state::theme::ThemeEvent;

/// Shows the sun while light is active and the moon while dark is active;
/// `aria-pressed` is true for light. Spins once per click.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let state = dispatcher.state();

    let theme = move || state.with(|s| s.theme.theme);
    let spinning = move || state.with(|s| s.theme.spinning);

    view! {
        <button
            id=THEME_TOGGLE_ID
            type="button"
            class="theme-toggle"
            class:spin=spinning
            aria-label="Toggle color theme"
            aria-pressed=move || theme().is_pressed().to_string()
            on:click=move |_| {
                dispatcher.send(SiteEvent::Theme(ThemeEvent::ToggleClicked));
            }
        >
            {move || theme().icon()}
        </button>
    }
}
