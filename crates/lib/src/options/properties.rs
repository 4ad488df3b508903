//! Allow-listed project properties settable from the command line.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// A project property the builder lets the command line override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectProperty {
  AssemblyName,
  CheckForOverflowUnderflow,
  Configuration,
  DefineConstants,
  OutputPath,
  OutDir,
  OutputType,
  Platform,
  RootNamespace,
}

impl ProjectProperty {
  pub const ALL: [ProjectProperty; 9] = [
    ProjectProperty::AssemblyName,
    ProjectProperty::CheckForOverflowUnderflow,
    ProjectProperty::Configuration,
    ProjectProperty::DefineConstants,
    ProjectProperty::OutputPath,
    ProjectProperty::OutDir,
    ProjectProperty::OutputType,
    ProjectProperty::Platform,
    ProjectProperty::RootNamespace,
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      ProjectProperty::AssemblyName => "AssemblyName",
      ProjectProperty::CheckForOverflowUnderflow => "CheckForOverflowUnderflow",
      ProjectProperty::Configuration => "Configuration",
      ProjectProperty::DefineConstants => "DefineConstants",
      ProjectProperty::OutputPath => "OutputPath",
      ProjectProperty::OutDir => "OutDir",
      ProjectProperty::OutputType => "OutputType",
      ProjectProperty::Platform => "Platform",
      ProjectProperty::RootNamespace => "RootNamespace",
    }
  }
}

impl fmt::Display for ProjectProperty {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for ProjectProperty {
  type Err = PropertyError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    ProjectProperty::ALL
      .into_iter()
      .find(|p| p.as_str() == s)
      .ok_or_else(|| PropertyError::UnknownName(s.to_string()))
  }
}

/// Errors raised while assigning a project property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
  #[error("'{0}' is not a recognized project setting")]
  UnknownName(String),

  #[error("invalid value '{value}' for {property}: expected true or false")]
  InvalidBool { property: ProjectProperty, value: String },
}

/// Typed view of the overridable project properties.
///
/// Serialized with the property names the translator expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectProperties {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assembly_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub check_for_overflow_underflow: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub configuration: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub define_constants: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output_path: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub out_dir: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub output_type: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub platform: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub root_namespace: Option<String>,
}

impl ProjectProperties {
  /// Assign `value` to `property`, validating it for that property.
  pub fn set(&mut self, property: ProjectProperty, value: &str) -> Result<(), PropertyError> {
    let text = Some(value.to_string());
    match property {
      ProjectProperty::AssemblyName => self.assembly_name = text,
      ProjectProperty::CheckForOverflowUnderflow => {
        self.check_for_overflow_underflow = Some(parse_bool(property, value)?);
      }
      ProjectProperty::Configuration => self.configuration = text,
      ProjectProperty::DefineConstants => self.define_constants = text,
      ProjectProperty::OutputPath => self.output_path = text,
      ProjectProperty::OutDir => self.out_dir = text,
      ProjectProperty::OutputType => self.output_type = text,
      ProjectProperty::Platform => self.platform = text,
      ProjectProperty::RootNamespace => self.root_namespace = text,
    }
    Ok(())
  }

  /// Current value of `property` rendered as text.
  pub fn get(&self, property: ProjectProperty) -> Option<String> {
    match property {
      ProjectProperty::AssemblyName => self.assembly_name.clone(),
      ProjectProperty::CheckForOverflowUnderflow => self.check_for_overflow_underflow.map(|b| b.to_string()),
      ProjectProperty::Configuration => self.configuration.clone(),
      ProjectProperty::DefineConstants => self.define_constants.clone(),
      ProjectProperty::OutputPath => self.output_path.clone(),
      ProjectProperty::OutDir => self.out_dir.clone(),
      ProjectProperty::OutputType => self.output_type.clone(),
      ProjectProperty::Platform => self.platform.clone(),
      ProjectProperty::RootNamespace => self.root_namespace.clone(),
    }
  }
}

fn parse_bool(property: ProjectProperty, value: &str) -> Result<bool, PropertyError> {
  match value.trim().to_ascii_lowercase().as_str() {
    "true" => Ok(true),
    "false" => Ok(false),
    _ => Err(PropertyError::InvalidBool {
      property,
      value: value.to_string(),
    }),
  }
}
