//! Theme persistence and application.
//!
//! Reads the persisted preference and the system color-scheme signal from the
//! browser, writes the preference back to `localStorage`, and reflects the
//! active theme as the `.light` class on `<html>`. Requires a browser
//! environment; server builds see nothing stored and no system signal.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: private browsing or disabled storage simply
//! means the preference does not survive a reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::LIGHT_THEME_CLASS;
#[cfg(feature = "hydrate")]
use crate::consts::{PREFERS_LIGHT_QUERY, THEME_STORAGE_KEY};
use crate::state::theme::Theme;
use crate::util::dom::DomError;

/// Raw persisted value, if any.
pub fn read_stored() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(THEME_STORAGE_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Whether the system prefers a light color scheme, when the browser can say.
pub fn system_prefers_light() -> Option<bool> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        window
            .match_media(PREFERS_LIGHT_QUERY)
            .ok()
            .flatten()
            .map(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `theme` to localStorage.
pub fn persist(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Add or remove the `.light` class on the `<html>` element.
pub fn apply(theme: Theme) -> Result<(), DomError> {
    crate::util::dom::set_root_class(LIGHT_THEME_CLASS, theme == Theme::Light)
}
