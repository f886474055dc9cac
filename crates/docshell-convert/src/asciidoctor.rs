//! Asciidoctor command-line converter.

use std::path::Path;
use std::process::Command;

use crate::traits::{Conversion, ConvertError, Converter};

/// Runs the `asciidoctor` executable (or a configured stand-in) once per
/// source document.
///
/// The file name is appended as the final argument and the process runs in
/// the source's directory, so the shell lands next to the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asciidoctor {
    program: String,
    args: Vec<String>,
}

impl Asciidoctor {
    /// Default invocation: embedded output with rouge highlighting.
    pub fn new() -> Self {
        Self::with_command("asciidoctor", ["-a", "source-highlighter=rouge", "-s"])
    }

    /// Use a custom program and leading arguments.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for Asciidoctor {
    fn default() -> Self {
        Self::new()
    }
}

impl Converter for Asciidoctor {
    fn name(&self) -> &str {
        &self.program
    }

    fn convert(&self, source: &Path) -> Result<Conversion, ConvertError> {
        let file_name = source
            .file_name()
            .ok_or_else(|| ConvertError::InvalidPath(source.display().to_string()))?;
        let work_dir = source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        tracing::debug!(
            "Running {} {} {} in {}",
            self.program,
            self.args.join(" "),
            file_name.to_string_lossy(),
            work_dir.display()
        );

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(file_name)
            .current_dir(work_dir)
            .output()
            .map_err(|source| ConvertError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut diagnostics = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() && diagnostics.trim().is_empty() {
            diagnostics = format!("exited with {}", output.status);
        }

        Ok(Conversion {
            source: source.to_path_buf(),
            success: output.status.success(),
            diagnostics,
        })
    }
}
