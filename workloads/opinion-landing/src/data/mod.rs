//! Page content models.

mod content;

pub use content::*;
