//! Page components for Folio.

mod index;

pub use index::Index;
