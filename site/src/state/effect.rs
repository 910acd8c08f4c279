//! Side effects requested by state transitions.
//!
//! Transitions stay pure; the hydrate-only runner in `crate::dispatch`
//! performs these against the browser.

use crate::state::theme::Theme;

/// Named slot for a pending one-shot timer.
///
/// At most one timer is pending per slot. Scheduling into an occupied slot
/// cancels the previous timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// End of the theme toggle rotation.
    ThemeSpin,
    /// Simulated contact form latency.
    ContactSend,
    /// Clearing the contact form's thank-you status.
    ContactStatusClear,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Write the theme to `localStorage`.
    PersistTheme(Theme),
    /// Move focus to the lightbox close control.
    FocusLightboxClose,
    /// Smooth-scroll the element matching `selector` to the top of the viewport.
    ScrollTo { selector: String },
    Schedule { slot: TimerSlot, delay_ms: u32 },
    Cancel(TimerSlot),
}
