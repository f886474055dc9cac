//! Source document inspection for docshell.
//!
//! Reads the declared title out of an AsciiDoc document header without
//! rendering the document. Rendering belongs to the external converter.

pub mod title;

pub use title::{extract_title, read_title, TitleError};
