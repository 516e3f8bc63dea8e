//! Page sections for Folio.
//!
//! Each section wraps its animated pieces in [`Reveal`], which registers
//! them with the page's visibility watcher.

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;
mod toasts;

pub use about::About;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use projects::Projects;
pub use reveal::Reveal;
pub use skills::Skills;
pub use toasts::Toasts;
