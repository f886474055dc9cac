//! Site configuration file (`site.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docshell_convert::Asciidoctor;
use docshell_static::{BuildConfig, TemplateOverrides};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub converter: ConverterSection,
    #[serde(default)]
    pub templates: TemplatesSection,
    #[serde(default)]
    pub build: BuildSettings,
    #[serde(default)]
    pub serve: ServeSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_index_heading")]
    pub index_heading: String,
    #[serde(default = "default_section_heading")]
    pub section_heading: String,
    #[serde(default = "default_stylesheets")]
    pub stylesheets: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConverterSection {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_converter_args")]
    pub args: Vec<String>,
}

/// Paths to template files replacing the built-in theme.
#[derive(Debug, Deserialize, Default)]
pub struct TemplatesSection {
    pub header: Option<PathBuf>,
    pub footer: Option<PathBuf>,
    pub index_links: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct BuildSettings {
    #[serde(default)]
    pub minify: bool,
}

#[derive(Debug, Deserialize)]
pub struct ServeSettings {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: default_output(),
            section: default_section(),
            title: default_title(),
            index_heading: default_index_heading(),
            section_heading: default_section_heading(),
            stylesheets: default_stylesheets(),
        }
    }
}

impl Default for ConverterSection {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_converter_args(),
        }
    }
}

impl Default for ServeSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_source() -> PathBuf {
    PathBuf::from(".")
}
fn default_output() -> PathBuf {
    PathBuf::from("www")
}
fn default_section() -> String {
    "guide".to_string()
}
fn default_title() -> String {
    "Scheme Documentation".to_string()
}
fn default_index_heading() -> String {
    "Scheme Docs".to_string()
}
fn default_section_heading() -> String {
    "Scheme Guide".to_string()
}
fn default_stylesheets() -> Vec<String> {
    vec!["schemeorg.css".to_string(), "syntax.css".to_string()]
}
fn default_program() -> String {
    "asciidoctor".to_string()
}
fn default_converter_args() -> Vec<String> {
    ["-a", "source-highlighter=rouge", "-s"]
        .into_iter()
        .map(String::from)
        .collect()
}
fn default_port() -> u16 {
    8000
}

/// Load configuration from `path` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

impl ConfigFile {
    /// Builder settings, with template overrides read from disk.
    pub fn build_config(&self) -> Result<BuildConfig> {
        Ok(BuildConfig {
            source_dir: self.site.source.clone(),
            output_dir: self.site.output.clone(),
            section: self.site.section.clone(),
            site_title: self.site.title.clone(),
            index_heading: self.site.index_heading.clone(),
            section_heading: self.site.section_heading.clone(),
            stylesheets: self.site.stylesheets.clone(),
            minify: self.build.minify,
            templates: TemplateOverrides {
                header: read_template(self.templates.header.as_deref())?,
                footer: read_template(self.templates.footer.as_deref())?,
                index_links: read_template(self.templates.index_links.as_deref())?,
            },
        })
    }

    pub fn converter(&self) -> Asciidoctor {
        Asciidoctor::with_command(&self.converter.program, &self.converter.args)
    }
}

fn read_template(path: Option<&Path>) -> Result<Option<String>> {
    path.map(|p| {
        fs::read_to_string(p).with_context(|| format!("Failed to read template {}", p.display()))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = tempdir().unwrap();

        let config = load_config(&temp.path().join("site.toml")).unwrap();

        assert_eq!(config.site.output, PathBuf::from("www"));
        assert_eq!(config.site.section, "guide");
        assert_eq!(config.serve.port, 8000);
        assert_eq!(
            config.converter(),
            Asciidoctor::new()
        );
        assert!(!config.build.minify);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(
            &path,
            r#"
[site]
output = "public"

[converter]
args = ["-s"]

[serve]
port = 9000
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.output, PathBuf::from("public"));
        assert_eq!(config.site.title, "Scheme Documentation");
        assert_eq!(config.converter.program, "asciidoctor");
        assert_eq!(config.converter.args, ["-s"]);
        assert_eq!(config.serve.port, 9000);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site\noutput = ").unwrap();

        assert!(load_config(&path).is_err());
    }

    #[test]
    fn reads_template_overrides() {
        let temp = tempdir().unwrap();
        let footer = temp.path().join("footer.html");
        fs::write(&footer, "<footer></footer>\n").unwrap();

        let config = ConfigFile {
            templates: TemplatesSection {
                footer: Some(footer),
                ..Default::default()
            },
            ..Default::default()
        };
        let build = config.build_config().unwrap();

        assert_eq!(build.templates.footer.as_deref(), Some("<footer></footer>\n"));
        assert!(build.templates.header.is_none());
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let temp = tempdir().unwrap();
        let config = ConfigFile {
            templates: TemplatesSection {
                header: Some(temp.path().join("nope.html")),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.build_config().is_err());
    }
}
