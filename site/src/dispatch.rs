//! Reactive handle that feeds `SiteEvent`s through `SiteState::dispatch` and
//! performs the resulting effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` via context. Components call `send`; the state
//! signal drives rendering, and effects run here against the browser.

use leptos::prelude::*;

use crate::state::effect::Effect;
use crate::state::site::{SiteEvent, SiteState};

#[derive(Clone, Copy)]
pub struct Dispatcher {
    state: RwSignal<SiteState>,
}

impl Dispatcher {
    pub fn new(state: RwSignal<SiteState>) -> Self {
        Self { state }
    }

    pub fn state(self) -> RwSignal<SiteState> {
        self.state
    }

    /// Apply `event` and run its effects. Returns the effects so callers can
    /// react to them (anchors only suppress navigation when a scroll happens).
    pub fn send(self, event: SiteEvent) -> Vec<Effect> {
        log::debug!("dispatch {event:?}");
        let effects = self.state.try_update(|state| state.dispatch(event)).unwrap_or_default();
        for effect in &effects {
            self.run(effect);
        }
        effects
    }

    #[cfg(feature = "hydrate")]
    fn run(self, effect: &Effect) {
        use crate::consts::LIGHTBOX_CLOSE_CLASS;
        use crate::util::{dom, theme, timers};

        match effect {
            Effect::PersistTheme(value) => theme::persist(*value),
            Effect::FocusLightboxClose => {
                // The overlay is revealed on the next render; focus after it.
                gloo_timers::callback::Timeout::new(0, || {
                    if let Err(e) = dom::focus(&format!(".{LIGHTBOX_CLOSE_CLASS}")) {
                        log::warn!("lightbox focus failed: {e}");
                    }
                })
                .forget();
            }
            Effect::ScrollTo { selector } => {
                if let Err(e) = dom::scroll_into_view(selector) {
                    log::warn!("smooth scroll failed: {e}");
                }
            }
            Effect::Schedule { slot, delay_ms } => {
                let slot = *slot;
                timers::schedule(slot, *delay_ms, move || {
                    self.send(slot.fired_event());
                });
            }
            Effect::Cancel(slot) => timers::cancel(*slot),
        }
    }

    #[cfg(not(feature = "hydrate"))]
    fn run(self, effect: &Effect) {
        log::trace!("effect skipped outside browser: {effect:?}");
    }
}
