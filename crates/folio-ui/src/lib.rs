//! Folio UI Components
//!
//! Dioxus components shared by the portfolio page.
//!
//! ## Design Philosophy
//!
//! Light, airy and content-first:
//! - **Primary (#1e293b)**: buttons, links, focus rings
//! - **Muted (#64748b)**: secondary copy
//! - **Glass cards**: translucent white panels over a soft gradient
//!
//! Entrance animations are plain CSS transitions toggled by the
//! `reveal-animation` / `active` classes; see [`components::reveal_class`].

pub mod components;

pub use components::*;
