//! Page-wide state and the typed event dispatch table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components translate DOM gestures into `SiteEvent`s; `SiteState::dispatch`
//! routes each one to its controller and returns the effects to perform.
//! Cross-controller rules (anchor navigation closing the menu) live here.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use crate::state::contact::{ContactEvent, ContactState};
use crate::state::effect::{Effect, TimerSlot};
use crate::state::lightbox::{LightboxEvent, LightboxState};
use crate::state::nav::{NavEvent, NavState};
use crate::state::scroll::{ScrollEvent, route_anchor};
use crate::state::theme::{ThemeEvent, ThemeState};

/// What the browser reported once the page became interactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageLoad {
    pub stored_theme: Option<String>,
    pub prefers_light: Option<bool>,
    pub year: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SiteEvent {
    PageLoaded(PageLoad),
    Theme(ThemeEvent),
    Nav(NavEvent),
    Scroll(ScrollEvent),
    Lightbox(LightboxEvent),
    Contact(ContactEvent),
}

impl TimerSlot {
    /// Event delivered when the timer in this slot fires.
    pub fn fired_event(self) -> SiteEvent {
        match self {
            Self::ThemeSpin => SiteEvent::Theme(ThemeEvent::SpinFinished),
            Self::ContactSend => SiteEvent::Contact(ContactEvent::SendFinished),
            Self::ContactStatusClear => SiteEvent::Contact(ContactEvent::StatusExpired),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteState {
    pub theme: ThemeState,
    pub nav: NavState,
    pub lightbox: LightboxState,
    pub contact: ContactState,
    /// Footer year; unknown until the page has loaded in a browser.
    pub year: Option<i32>,
}

impl SiteState {
    pub fn dispatch(&mut self, event: SiteEvent) -> Vec<Effect> {
        match event {
            SiteEvent::PageLoaded(load) => {
                self.year = Some(load.year);
                self.theme.handle(ThemeEvent::Loaded { stored: load.stored_theme, prefers_light: load.prefers_light })
            }
            SiteEvent::Theme(ev) => self.theme.handle(ev),
            SiteEvent::Nav(ev) => {
                self.nav.handle(ev);
                Vec::new()
            }
            SiteEvent::Scroll(ScrollEvent::AnchorClicked { href, target_found }) => {
                let Some(scroll) = route_anchor(&href, target_found) else {
                    return Vec::new();
                };
                self.nav.close();
                vec![scroll]
            }
            SiteEvent::Lightbox(ev) => self.lightbox.handle(ev),
            SiteEvent::Contact(ev) => self.contact.handle(ev),
        }
    }
}
