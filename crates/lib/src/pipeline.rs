//! Hand-off of a resolved configuration to the compilation pipeline.
//!
//! The pipeline itself is external. [`TranslatorProcess`] launches the
//! translator executable, writes the [`BuildOptions`] to its stdin as JSON and
//! reads a JSON report back from stdout:
//!
//! ```json
//! { "outputPath": "/work/app/bridge/output" }
//! ```
//!
//! On failure the translator may print a diagnostic to stderr:
//!
//! ```json
//! { "message": "...", "fileName": "App.cs", "startLine": 3, "startColumn": 7, "inner": { "message": "..." } }
//! ```

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::options::BuildOptions;
use crate::platform::paths::translator_program;

/// The external source-to-target compilation pipeline.
pub trait Pipeline {
  /// Compile with `options`, returning the output directory.
  fn compile(&mut self, options: &BuildOptions) -> Result<PathBuf, PipelineError>;
}

/// Position in a source file an error was raised at.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
  pub file_name: String,
  pub start_line: u32,
  pub start_column: u32,
}

impl fmt::Display for SourceLocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}({}, {})", self.file_name, self.start_line, self.start_column)
  }
}

/// Errors raised by the compilation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
  #[error("failed to launch translator '{}': {source}", program.display())]
  Launch { program: PathBuf, source: io::Error },

  #[error("failed to communicate with translator: {0}")]
  Io(#[from] io::Error),

  #[error("failed to serialize build options: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("unexpected translator report: {0}")]
  Report(#[source] serde_json::Error),

  #[error("{}", match location {
    Some(location) => format!("{location}: {message}"),
    None => message.clone(),
  })]
  Emitter {
    message: String,
    location: Option<SourceLocation>,
    #[source]
    cause: Option<Box<PipelineError>>,
  },

  #[error("translator exited with {status}: {stderr}")]
  Failed { status: String, stderr: String },
}

impl PipelineError {
  /// Source location of the error, when the translator reported one.
  pub fn location(&self) -> Option<&SourceLocation> {
    match self {
      PipelineError::Emitter { location, .. } => location.as_ref(),
      _ => None,
    }
  }
}

/// Diagnostic the translator prints on stderr when it fails.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Diagnostic {
  message: String,
  file_name: Option<String>,
  start_line: Option<u32>,
  start_column: Option<u32>,
  inner: Option<Box<Diagnostic>>,
}

impl From<Diagnostic> for PipelineError {
  fn from(diagnostic: Diagnostic) -> Self {
    let location = diagnostic.file_name.map(|file_name| SourceLocation {
      file_name,
      start_line: diagnostic.start_line.unwrap_or_default(),
      start_column: diagnostic.start_column.unwrap_or_default(),
    });
    PipelineError::Emitter {
      message: diagnostic.message,
      location,
      cause: diagnostic.inner.map(|inner| Box::new(PipelineError::from(*inner))),
    }
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatorReport {
  output_path: PathBuf,
}

/// [`Pipeline`] backed by an external translator process.
#[derive(Debug, Clone)]
pub struct TranslatorProcess {
  program: PathBuf,
}

impl TranslatorProcess {
  pub fn new(program: impl Into<PathBuf>) -> Self {
    Self { program: program.into() }
  }

  /// Translator configured in the environment.
  pub fn from_env() -> Self {
    Self::new(translator_program())
  }
}

impl Pipeline for TranslatorProcess {
  fn compile(&mut self, options: &BuildOptions) -> Result<PathBuf, PipelineError> {
    let payload = serde_json::to_vec(options).map_err(PipelineError::Serialize)?;

    info!(translator = %self.program.display(), "starting translator");
    let mut child = Command::new(&self.program)
      .stdin(Stdio::piped())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .spawn()
      .map_err(|e| PipelineError::Launch {
        program: self.program.clone(),
        source: e,
      })?;

    if let Some(mut stdin) = child.stdin.take() {
      match stdin.write_all(&payload) {
        Ok(()) => {}
        // A translator may exit without reading its input.
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
          debug!("translator closed stdin before reading the options");
        }
        Err(e) => return Err(e.into()),
      }
    }
    let output = child.wait_with_output()?;

    if !output.status.success() {
      return Err(failure(&output));
    }

    let report: TranslatorReport = serde_json::from_slice(&output.stdout).map_err(PipelineError::Report)?;
    debug!(output = %report.output_path.display(), "translator finished");
    Ok(report.output_path)
  }
}

/// Map a failed translator run to an error, preferring its JSON diagnostic.
fn failure(output: &Output) -> PipelineError {
  let stderr = String::from_utf8_lossy(&output.stderr);
  match serde_json::from_str::<Diagnostic>(stderr.trim()) {
    Ok(diagnostic) => diagnostic.into(),
    Err(_) => PipelineError::Failed {
      status: output.status.to_string(),
      stderr: stderr.trim().to_string(),
    },
  }
}
