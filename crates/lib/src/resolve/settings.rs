//! Parser for the `--settings` mini-language.
//!
//! The argument is a comma-separated list of `name:value` pairs, for example
//! `Configuration:Release,DefineConstants:"TRACE;DEBUG"`. Malformed and
//! duplicate pairs are skipped with a warning; an unknown property name
//! rejects the whole argument.

use tracing::warn;

use crate::options::{ProjectProperties, ProjectProperty, PropertyError};

/// Parse a `--settings` argument into a fresh set of project properties.
pub fn parse_settings(input: &str) -> Result<ProjectProperties, PropertyError> {
  let mut properties = ProjectProperties::default();

  if input.trim().is_empty() {
    return Ok(properties);
  }

  let input = strip_wrapping_quotes(input);
  let mut settings: Vec<(&str, &str)> = Vec::new();

  for pair in input.split(',').filter(|p| !p.is_empty()) {
    let Some((name, value)) = pair.split_once(':') else {
      warn!(pair, "skipped setting that is not well-formed like name:value");
      continue;
    };

    let name = name.trim();
    if name.is_empty() {
      warn!(pair, "skipped setting with an empty name");
      continue;
    }

    if let Some((_, kept)) = settings.iter().find(|(seen, _)| *seen == name) {
      warn!(pair, kept = %format!("{name}:{kept}"), "skipped duplicate setting");
      continue;
    }

    settings.push((name, strip_value_quotes(value)));
  }

  for (name, value) in settings {
    let property: ProjectProperty = name.parse()?;
    properties.set(property, value)?;
  }

  Ok(properties)
}

/// Remove one layer of matching double quotes around the whole argument.
fn strip_wrapping_quotes(input: &str) -> &str {
  if input.len() > 1 && input.starts_with('"') && input.ends_with('"') {
    &input[1..input.len() - 1]
  } else {
    input
  }
}

/// Remove a leading and a trailing double quote, each independently.
fn strip_value_quotes(value: &str) -> &str {
  if value.len() < 2 {
    return value;
  }
  let value = value.strip_prefix('"').unwrap_or(value);
  value.strip_suffix('"').unwrap_or(value)
}
