//! Light/dark theme controller.
//!
//! Resolution order at page load: persisted value, then the system
//! `prefers-color-scheme` signal, then dark.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{THEME_ICON_DARK, THEME_ICON_LIGHT, THEME_SPIN_MS};
use crate::state::effect::{Effect, TimerSlot};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Value written to storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Label shown on the toggle for the current mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => THEME_ICON_DARK,
            Self::Light => THEME_ICON_LIGHT,
        }
    }

    /// `aria-pressed` value of the toggle: pressed means light.
    pub fn is_pressed(self) -> bool {
        self == Self::Light
    }

    /// Resolve the load-time theme.
    ///
    /// An empty stored value counts as absent. Any other stored value that is
    /// not `"light"` resolves to dark without consulting the system signal.
    pub fn resolve(stored: Option<&str>, prefers_light: Option<bool>) -> Self {
        match stored.filter(|v| !v.is_empty()) {
            Some("light") => Self::Light,
            Some(_) => Self::Dark,
            None if prefers_light == Some(true) => Self::Light,
            None => Self::Dark,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ThemeEvent {
    /// Page load with whatever the browser could tell us.
    Loaded { stored: Option<String>, prefers_light: Option<bool> },
    ToggleClicked,
    SpinFinished,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    /// True while the toggle's rotation is playing.
    pub spinning: bool,
}

impl ThemeState {
    pub fn handle(&mut self, event: ThemeEvent) -> Vec<Effect> {
        match event {
            ThemeEvent::Loaded { stored, prefers_light } => {
                self.theme = Theme::resolve(stored.as_deref(), prefers_light);
                Vec::new()
            }
            ThemeEvent::ToggleClicked => {
                self.theme = self.theme.toggled();
                self.spinning = true;
                vec![
                    Effect::PersistTheme(self.theme),
                    Effect::Schedule { slot: TimerSlot::ThemeSpin, delay_ms: THEME_SPIN_MS },
                ]
            }
            ThemeEvent::SpinFinished => {
                self.spinning = false;
                Vec::new()
            }
        }
    }
}
