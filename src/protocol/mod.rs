//! Text encoding of boards.
//!
//! Renders boards for terminal play and parses the same layout back, which
//! is also how tests set up arbitrary positions.

pub mod text;

pub use text::{parse, render, render_hints, TextError};
