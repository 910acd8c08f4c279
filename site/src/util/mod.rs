//! Browser helpers shared across components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate web-sys glue from components and state so the
//! interaction logic stays testable outside a browser.

pub mod dom;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod timers;
