//! Shared constants for the site crate: storage keys, timings, copy, and the
//! element identifiers the page markup exposes.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme (`"light"` / `"dark"`).
pub const THEME_STORAGE_KEY: &str = "stellar_theme";

/// Media query consulted when no theme has been persisted.
pub const PREFERS_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

// ── Timings ─────────────────────────────────────────────────────

/// Duration of the one-shot rotation played on the theme toggle.
pub const THEME_SPIN_MS: u32 = 420;

/// Simulated network latency for the contact form.
pub const CONTACT_SEND_DELAY_MS: u32 = 1100;

/// How long the thank-you status stays visible after a send.
pub const CONTACT_STATUS_CLEAR_MS: u32 = 7000;

// ── Copy ────────────────────────────────────────────────────────

pub const THEME_ICON_LIGHT: &str = "\u{1F31E}";
pub const THEME_ICON_DARK: &str = "\u{1F319}";

/// Alt text used when a gallery thumbnail has none.
pub const GALLERY_ALT_FALLBACK: &str = "Gallery image";

pub const ERR_NAME: &str = "Please enter your name (2+ characters)";
pub const ERR_EMAIL: &str = "Enter a valid email address";
pub const ERR_MESSAGE: &str = "Message must be at least 10 characters";

pub const STATUS_SENDING: &str = "Sending message...";
pub const STATUS_SENT: &str = "Thanks! Your message has been received. We\u{2019}ll be in touch soon.";

pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;

// ── DOM contract ────────────────────────────────────────────────

pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_LIST_ID: &str = "nav-list";
pub const YEAR_ID: &str = "year";
pub const LIGHTBOX_ID: &str = "lightbox";
pub const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub const LIGHTBOX_CLOSE_CLASS: &str = "lightbox-close";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";

/// Class on the `<html>` element while the light theme is active.
pub const LIGHT_THEME_CLASS: &str = "light";
