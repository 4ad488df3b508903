//! Precedence merge of direct property switches over `--settings`.

use super::dispatch::Draft;
use crate::options::BuildOptions;

/// Apply `-c`, `-P` and `-D` on top of whatever `--settings` produced.
///
/// Runs once, after dispatch, so the direct switches win regardless of the
/// order in which they appeared on the command line.
pub(crate) fn apply_direct_overrides(draft: Draft) -> BuildOptions {
  let Draft { mut options, overrides } = draft;
  let properties = &mut options.project_properties;

  if let Some(configuration) = overrides.configuration {
    properties.configuration = Some(configuration);
  }
  if let Some(platform) = overrides.platform {
    properties.platform = Some(platform);
  }
  if let Some(define_constants) = overrides.define_constants {
    properties.define_constants = Some(define_constants);
  }

  options
}
