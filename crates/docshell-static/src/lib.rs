//! Static site assembly for docshell.
//!
//! Wraps converter-produced shells with the site header and footer, writes
//! one page directory per document, and builds the section index.

pub mod assets;
pub mod builder;
pub mod index;
pub mod pages;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, CleanResult, SiteBuilder};
pub use pages::PageEntry;
pub use templates::{TemplateEngine, TemplateOverrides};
