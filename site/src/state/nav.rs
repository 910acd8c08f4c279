//! Mobile navigation open/closed state.
//!
//! The nav list's `show` class and the toggle's `aria-expanded` attribute are
//! both rendered from `open`, so they cannot disagree.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEvent {
    ToggleClicked,
    /// Any click on the document. `inside_nav` is true when the target lies
    /// within the nav list or the nav toggle.
    DocumentClicked { inside_nav: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn handle(&mut self, event: NavEvent) {
        match event {
            NavEvent::ToggleClicked => self.open = !self.open,
            NavEvent::DocumentClicked { inside_nav: false } => self.close(),
            NavEvent::DocumentClicked { inside_nav: true } => {}
        }
    }

    /// Close the menu. No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Value of the toggle's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
