//! Section index page.

use crate::pages::PageEntry;
use crate::templates::{SiteContext, TemplateEngine};

/// Render the section landing page listing every page.
///
/// Pages are listed in the order given.
pub fn render_index(
    engine: &TemplateEngine,
    site: &SiteContext,
    index_heading: &str,
    section_heading: &str,
    pages: &[PageEntry],
) -> Result<String, minijinja::Error> {
    let mut html = engine.header(site, index_heading, false)?;
    html.push_str(&engine.index_body(section_heading, pages)?);
    html.push_str(&engine.footer()?);

    Ok(html)
}
