//! Header, footer and index templates.
//!
//! Templates interpolate plain strings only. Auto-escaping is off, so a
//! title is written exactly as the source document declares it.

use minijinja::{context, AutoEscape, Environment};
use serde::Serialize;

use crate::pages::PageEntry;

const HEADER: &str = "header";
const FOOTER: &str = "footer";
const INDEX: &str = "index";
const INDEX_LINKS: &str = "index_links";

/// Replacement template sources. `None` keeps the built-in template.
#[derive(Debug, Clone, Default)]
pub struct TemplateOverrides {
    pub header: Option<String>,
    pub footer: Option<String>,
    pub index_links: Option<String>,
}

/// Values shared by every page header.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    /// Prefix of every `<title>`
    pub site_title: String,
    /// Stylesheets linked from the site root
    pub stylesheets: Vec<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the built-in site theme.
    pub fn new() -> Self {
        Self::with_overrides(TemplateOverrides::default())
            .expect("built-in templates are valid")
    }

    /// Create a template engine, replacing any built-in template that has
    /// an override.
    pub fn with_overrides(overrides: TemplateOverrides) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        let TemplateOverrides {
            header,
            footer,
            index_links,
        } = overrides;

        env.add_template_owned(HEADER, header.unwrap_or_else(|| HEADER_TEMPLATE.to_string()))?;
        env.add_template_owned(FOOTER, footer.unwrap_or_else(|| FOOTER_TEMPLATE.to_string()))?;
        env.add_template_owned(
            INDEX_LINKS,
            index_links.unwrap_or_else(|| INDEX_LINKS_TEMPLATE.to_string()),
        )?;
        env.add_template(INDEX, INDEX_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render the page header.
    ///
    /// `heading` becomes the top-level `<h1>`. With `page_title` set the
    /// document `<title>` is `"{site_title}: {heading}"`, otherwise just the
    /// site title.
    pub fn header(
        &self,
        site: &SiteContext,
        heading: &str,
        page_title: bool,
    ) -> Result<String, minijinja::Error> {
        let html_title = if page_title {
            format!("{}: {}", site.site_title, heading)
        } else {
            site.site_title.clone()
        };

        self.env.get_template(HEADER)?.render(context! {
            title => heading,
            html_title => html_title,
            site_title => &site.site_title,
            stylesheets => &site.stylesheets,
        })
    }

    /// Render the page footer.
    pub fn footer(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(FOOTER)?.render(context! {})
    }

    /// Render the index body: the section list followed by the extra links.
    pub fn index_body(
        &self,
        section_heading: &str,
        pages: &[PageEntry],
    ) -> Result<String, minijinja::Error> {
        let mut body = self.env.get_template(INDEX)?.render(context! {
            section_heading => section_heading,
            pages => pages,
        })?;
        body.push_str(&self.env.get_template(INDEX_LINKS)?.render(context! {})?);

        Ok(body)
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const HEADER_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <title>{{ html_title }}</title>
{%- for sheet in stylesheets %}
  <link rel="stylesheet" href="/{{ sheet }}">
{%- endfor %}
  <meta name="viewport" content=
  "width=device-width, initial-scale=1">
  <link rel="icon" href="/favicon/favicon.svg" sizes="any" type=
  "image/svg+xml">
</head>
<body>
  <header>
    <ul class="menu">
      <li>
        <a href="https://www.scheme.org/">Home</a>
      </li>
      <li class="active">Docs</li>
      <li>
        <a href="https://community.scheme.org/">Community</a>
      </li>
      <li>
        <a href="https://standards.scheme.org/">Standards</a>
      </li>
      <li>
        <a href="https://get.scheme.org/">Implementations</a>
      </li>
    </ul>
  </header>
  <h1 id="logo">{{ title }}</h1>
"##;

const FOOTER_TEMPLATE: &str = r##"<h2>Contributing</h2>
  <section id="schemeorg-contributing" class="round-box green-box">
    <p><kbd>doc.scheme.org</kbd> is a community subdomain of
    <kbd>scheme.org</kbd>.</p>
    <ul>
      <li>Source code: <a href=
      "https://github.com/schemedoc"><kbd class=
      "github-org">schemedoc</kbd> organization</a> on GitHub.
      </li>
      <li>Discussion: <code class="mailing-list">schemedoc</code>
      mailing list (<a href=
      "https://srfi-email.schemers.org/schemedoc/">archives</a>,
      <a href=
      "https://srfi.schemers.org/srfi-list-subscribe.html#schemedoc">
        subscribe</a>), GitHub issues.
      </li>
    </ul>
  </section>
</body>
</html>
"##;

const INDEX_TEMPLATE: &str = r##"<h2>{{ section_heading }}</h2>
<ul>
{% for page in pages %}<li><a href="{{ page.href }}">{{ page.title }}</a></li>
{% endfor %}</ul>
"##;

const INDEX_LINKS_TEMPLATE: &str = r##"<h2>Scheme Requests for Implementation (SRFI)</h2>
  <p><a href="srfi/library-names/">Library names</a></p>
  <p><a href="srfi/support/">Support table</a></p>
  <h2>More tools</h2>
  <p><a href="//cookbook.scheme.org/" class=
  "offsite">Cookbook</a></p>
  <p><a href="//man.scheme.org/" class="offsite">Manual pages (Unix
  style)</a></p>
  <p><a href="surveys/">Surveys</a></p>
"##;
