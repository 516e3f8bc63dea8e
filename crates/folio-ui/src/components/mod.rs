//! Reusable UI components.
//!
//! All components render plain elements with the page's utility classes:
//! - Inter for body text, Playfair Display for headings
//! - `glass-card` panels
//! - `btn-hover` lift on interactive elements

mod button;
mod input;
mod reveal;
mod toast;

pub use button::*;
pub use input::*;
pub use reveal::*;
pub use toast::*;
