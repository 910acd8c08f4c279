//! Page sections and controls.
//!
//! Components only translate DOM gestures into `SiteEvent`s and render state;
//! every transition goes through the shared `Dispatcher`.

pub mod contact_form;
pub mod gallery;
pub mod lightbox;
pub mod scroll_link;
pub mod site_footer;
pub mod site_nav;
pub mod theme_toggle;
