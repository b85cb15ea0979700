//! Section renderers for the landing page.

mod hero;
mod how_it_works;
mod newsletter;
mod questions;

pub use hero::*;
pub use how_it_works::*;
pub use newsletter::*;
pub use questions::*;
