//! Page interaction state.
//!
//! DESIGN
//! ======
//! Each controller owns a small plain struct with a pure `handle` transition
//! that returns the side effects it wants performed. `site` stitches them into
//! one dispatch table so components never mutate controller state directly.

pub mod contact;
pub mod effect;
pub mod lightbox;
pub mod nav;
pub mod scroll;
pub mod site;
pub mod theme;
