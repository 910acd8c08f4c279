//! Gallery lightbox overlay.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use crate::consts::GALLERY_ALT_FALLBACK;
use crate::state::effect::Effect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A gallery item was clicked. `src` comes from its `data-src`, `alt` from
    /// its nested image.
    ItemClicked { src: String, alt: String },
    CloseClicked,
    /// A click on the overlay. `on_backdrop` is true when the overlay itself,
    /// not the image inside it, was the target.
    OverlayClicked { on_backdrop: bool },
    EscapePressed,
}

/// Overlay state. `src` is empty exactly when the overlay is hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxState {
    pub open: bool,
    pub src: String,
    pub alt: String,
}

impl LightboxState {
    pub fn handle(&mut self, event: LightboxEvent) -> Vec<Effect> {
        match event {
            LightboxEvent::ItemClicked { src, alt } => self.open_with(src, alt),
            LightboxEvent::OverlayClicked { on_backdrop: false } => Vec::new(),
            LightboxEvent::CloseClicked
            | LightboxEvent::OverlayClicked { on_backdrop: true }
            | LightboxEvent::EscapePressed => {
                self.close();
                Vec::new()
            }
        }
    }

    /// Value of the overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.open { "false" } else { "true" }
    }

    fn open_with(&mut self, src: String, alt: String) -> Vec<Effect> {
        // An item without a source would show an empty overlay.
        if src.is_empty() {
            return Vec::new();
        }
        self.alt = if alt.is_empty() { GALLERY_ALT_FALLBACK.to_owned() } else { alt };
        self.src = src;
        self.open = true;
        vec![Effect::FocusLightboxClose]
    }

    fn close(&mut self) {
        self.open = false;
        self.src.clear();
        self.alt.clear();
    }
}
