//! Page assembly.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// A page that was written into the section directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageEntry {
    /// Document name (the source file stem)
    pub name: String,
    /// Declared document title
    pub title: String,
    /// Site-absolute link to the page directory
    pub href: String,
}

impl PageEntry {
    pub fn new(section: &str, name: impl Into<String>, title: impl Into<String>) -> Self {
        let name = name.into();
        let href = page_href(section, &name);
        Self {
            name,
            title: title.into(),
            href,
        }
    }
}

/// `guide`, `lists` -> `/guide/lists/`
pub fn page_href(section: &str, name: &str) -> String {
    let section = section.trim_matches('/');
    if section.is_empty() {
        format!("/{}/", name)
    } else {
        format!("/{}/{}/", section, name)
    }
}

/// Header, shell and footer, concatenated byte for byte.
pub fn assemble(header: &str, shell: &[u8], footer: &str) -> Vec<u8> {
    let mut page = Vec::with_capacity(header.len() + shell.len() + footer.len());
    page.extend_from_slice(header.as_bytes());
    page.extend_from_slice(shell);
    page.extend_from_slice(footer.as_bytes());
    page
}

/// Write an assembled page to `<page_dir>/index.html`, creating the
/// directory if needed.
pub fn write_page(page_dir: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::create_dir_all(page_dir)?;
    fs::write(page_dir.join("index.html"), contents)
}
