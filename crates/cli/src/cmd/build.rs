//! Implementation of the build (and `run`) path.
//!
//! Hands the resolved configuration to the translator and, for `run`, opens the
//! generated `index.html`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use bridge_lib::options::BuildOptions;
use bridge_lib::pipeline::{Pipeline, PipelineError, TranslatorProcess};
use bridge_lib::platform::open_in_default_app;

use crate::output::{print_error, print_success, symbols};

pub fn cmd_build(options: &BuildOptions) -> Result<()> {
  let mut pipeline = TranslatorProcess::from_env();
  build_with(&mut pipeline, options)
}

pub(crate) fn build_with(pipeline: &mut dyn Pipeline, options: &BuildOptions) -> Result<()> {
  let output = match pipeline.compile(options) {
    Ok(output) => output,
    Err(e) => {
      report_pipeline_error(&e);
      return Err(e).context("Build failed");
    }
  };

  print_success(&format!("Build complete {} {}", symbols::ARROW, output.display()));

  if options.run {
    launch(&output.join("index.html"));
  }

  Ok(())
}

fn report_pipeline_error(err: &PipelineError) {
  if let Some(location) = err.location() {
    error!(
      file = %location.file_name,
      line = location.start_line,
      column = location.start_column,
      "{err}"
    );
    print_error(&err.to_string());
  }
}

fn launch(page: &Path) {
  if !page.is_file() {
    warn!(path = %page.display(), "nothing to run, page not found");
    return;
  }

  match open_in_default_app(page) {
    Ok(()) => info!(path = %page.display(), "opened in default application"),
    Err(e) => warn!(path = %page.display(), error = %e, "failed to open page"),
  }
}
