//! Streaming primitives for shell-first SSR.
//!
//! This crate enforces shell-first streaming patterns:
//! - `StreamingSink` - Writes the shell, then named sections, in order
//! - `Shell` / `HeadContent` - Document skeleton around the sections
//! - `html_escape` - Escaping for text and attribute values

mod escape;
mod shell;
mod sink;

pub use escape::*;
pub use shell::*;
pub use sink::*;
