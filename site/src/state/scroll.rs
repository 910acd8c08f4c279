//! In-page anchor routing.
//!
//! The component looks the target up in the document; routing here only
//! decides what happens with that answer.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use crate::state::effect::Effect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollEvent {
    /// An anchor was clicked. `target_found` is whether `href` matched an
    /// element when used as a selector.
    AnchorClicked { href: String, target_found: bool },
}

/// Returns the scroll effect for an in-page anchor, or `None` when the click
/// should fall through to default browser navigation.
pub fn route_anchor(href: &str, target_found: bool) -> Option<Effect> {
    if !href.starts_with('#') || !target_found {
        return None;
    }
    Some(Effect::ScrollTo { selector: href.to_owned() })
}
