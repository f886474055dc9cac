//! Static site builder.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use docshell_convert::{
    discover, generate_shells, ConvertError, Converter, ShellMode, ShellReport, SHELL_EXT,
    SOURCE_EXT,
};
use docshell_doc::{read_title, TitleError};

use crate::assets::AssetPipeline;
use crate::index::render_index;
use crate::pages::{assemble, write_page, PageEntry};
use crate::templates::{SiteContext, TemplateEngine, TemplateOverrides};

/// Configuration for building a site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory holding source documents and their shells
    pub source_dir: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Sub-directory of the output that holds pages and the index
    pub section: String,

    /// Prefix of every page `<title>`
    pub site_title: String,

    /// `<h1>` of the index page
    pub index_heading: String,

    /// Heading above the page list on the index page
    pub section_heading: String,

    /// Stylesheets copied from the source directory to the output root
    pub stylesheets: Vec<String>,

    /// Minify stylesheets while copying
    pub minify: bool,

    /// Template sources replacing the built-in theme
    pub templates: TemplateOverrides,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            output_dir: PathBuf::from("www"),
            section: "guide".to_string(),
            site_title: "Scheme Documentation".to_string(),
            index_heading: "Scheme Docs".to_string(),
            section_heading: "Scheme Guide".to_string(),
            stylesheets: vec!["schemeorg.css".to_string(), "syntax.css".to_string()],
            minify: false,
            templates: TemplateOverrides::default(),
        }
    }
}

/// Result of a build or update.
#[derive(Debug)]
pub struct BuildResult {
    /// Source documents handed to the converter
    pub converted: usize,

    /// Source documents whose shell was already fresh
    pub skipped: usize,

    /// Conversions the converter reported as failed
    pub failed: usize,

    /// Number of pages written
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Result of a clean.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CleanResult {
    /// Shells deleted from the source directory
    pub shells_removed: usize,

    /// Whether an output tree existed and was deleted
    pub output_removed: bool,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error(transparent)]
    Convert(#[from] ConvertError),

    #[error("Failed to read title of {path}: {source}")]
    Title {
        path: String,
        #[source]
        source: TitleError,
    },

    #[error("Shell {0} has no source document; run `docshell clean` to remove stale shells")]
    OrphanShell(String),

    #[error("Refusing to clean {0}: it contains the source directory")]
    UnsafeOutput(String),
}

impl From<minijinja::Error> for BuildError {
    fn from(e: minijinja::Error) -> Self {
        Self::TemplateError(e.to_string())
    }
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    converter: Box<dyn Converter>,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a site builder using `converter` to produce shells.
    pub fn new(config: BuildConfig, converter: impl Converter + 'static) -> Result<Self, BuildError> {
        let templates = TemplateEngine::with_overrides(config.templates.clone())?;

        Ok(Self {
            config,
            converter: Box::new(converter),
            templates,
        })
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Rebuild the whole site from scratch.
    ///
    /// Cleans, converts every source, assembles pages and the index, then
    /// copies stylesheets into the output root.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        self.clean()?;
        let report = generate_shells(
            &self.config.source_dir,
            self.converter.as_ref(),
            ShellMode::Full,
        )?;
        let pages = self.make_pages()?;
        self.make_index(&pages)?;

        AssetPipeline::copy_stylesheets(
            &self.config.source_dir,
            &self.config.output_dir,
            &self.config.stylesheets,
            self.config.minify,
        )
        .map_err(|e| BuildError::WriteError(format!("stylesheets: {}", e)))?;

        Ok(self.result(report, pages.len(), start))
    }

    /// Convert only stale sources, then reassemble every page and the index.
    pub fn update(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        let report = generate_shells(
            &self.config.source_dir,
            self.converter.as_ref(),
            ShellMode::Update,
        )?;
        let pages = self.make_pages()?;
        self.make_index(&pages)?;

        Ok(self.result(report, pages.len(), start))
    }

    /// Delete every shell in the source directory and the whole output tree.
    ///
    /// Running it on an already clean tree is not an error.
    pub fn clean(&self) -> Result<CleanResult, BuildError> {
        self.check_output_dir()?;

        let mut result = CleanResult::default();

        if self.config.source_dir.is_dir() {
            for shell in discover(&self.config.source_dir, SHELL_EXT)? {
                match fs::remove_file(&shell) {
                    Ok(()) => result.shells_removed += 1,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => {
                        return Err(BuildError::WriteError(format!(
                            "{}: {}",
                            shell.display(),
                            e
                        )))
                    }
                }
            }
        }

        match fs::remove_dir_all(&self.config.output_dir) {
            Ok(()) => result.output_removed = true,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(BuildError::WriteError(format!(
                    "{}: {}",
                    self.config.output_dir.display(),
                    e
                )))
            }
        }

        Ok(result)
    }

    /// Wrap every shell in the source directory into
    /// `<output>/<section>/<name>/index.html`.
    fn make_pages(&self) -> Result<Vec<PageEntry>, BuildError> {
        let section_dir = self.section_dir();
        fs::create_dir_all(&section_dir)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", section_dir.display(), e)))?;

        let site = self.site_context();
        let footer = self.templates.footer()?;
        let mut pages = Vec::new();

        for shell_path in discover(&self.config.source_dir, SHELL_EXT)? {
            let name = shell_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .ok_or_else(|| BuildError::ReadError(shell_path.display().to_string()))?;

            tracing::info!("Make page: {}", name);

            let source_path = shell_path.with_extension(SOURCE_EXT);
            if !source_path.is_file() {
                return Err(BuildError::OrphanShell(shell_path.display().to_string()));
            }

            let title = read_title(&source_path).map_err(|source| BuildError::Title {
                path: source_path.display().to_string(),
                source,
            })?;

            let header = self.templates.header(&site, &title, true)?;
            let shell = fs::read(&shell_path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", shell_path.display(), e)))?;

            let page_dir = section_dir.join(&name);
            write_page(&page_dir, &assemble(&header, &shell, &footer))
                .map_err(|e| BuildError::WriteError(format!("{}: {}", page_dir.display(), e)))?;

            pages.push(PageEntry::new(&self.config.section, name, title));
        }

        Ok(pages)
    }

    /// Write `<output>/<section>/index.html`.
    fn make_index(&self, pages: &[PageEntry]) -> Result<(), BuildError> {
        tracing::info!("Make index page with {} entries", pages.len());

        let html = render_index(
            &self.templates,
            &self.site_context(),
            &self.config.index_heading,
            &self.config.section_heading,
            pages,
        )?;

        let index_path = self.section_dir().join("index.html");
        fs::write(&index_path, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", index_path.display(), e)))
    }

    fn check_output_dir(&self) -> Result<(), BuildError> {
        let (Ok(source), Ok(output)) = (
            self.config.source_dir.canonicalize(),
            self.config.output_dir.canonicalize(),
        ) else {
            return Ok(());
        };

        if source.starts_with(&output) {
            return Err(BuildError::UnsafeOutput(output.display().to_string()));
        }

        Ok(())
    }

    fn section_dir(&self) -> PathBuf {
        self.config.output_dir.join(self.config.section.trim_matches('/'))
    }

    fn site_context(&self) -> SiteContext {
        SiteContext {
            site_title: self.config.site_title.clone(),
            stylesheets: self.config.stylesheets.clone(),
        }
    }

    fn result(&self, report: ShellReport, pages: usize, start: Instant) -> BuildResult {
        BuildResult {
            converted: report.converted,
            skipped: report.skipped,
            failed: report.failed.len(),
            pages,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        }
    }
}
