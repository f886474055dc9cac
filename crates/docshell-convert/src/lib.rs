//! Shell generation for docshell.
//!
//! A shell is the bare HTML fragment an external converter produces next to
//! each source document. This crate decides which shells are stale, and
//! drives the converter over a source directory one file at a time.

pub mod asciidoctor;
pub mod shells;
pub mod staleness;
pub mod traits;

pub use asciidoctor::Asciidoctor;
pub use shells::{discover, generate_shells, ShellMode, ShellReport, SHELL_EXT, SOURCE_EXT};
pub use staleness::needs_rebuild;
pub use traits::{Conversion, ConvertError, Converter};
