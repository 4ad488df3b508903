//! Verb and switch dispatch over the raw token stream.
//!
//! Tokens are consumed left to right. Verbs and the help/version switches may
//! finish dispatch early with a terminal [`Invocation`]; everything else
//! accumulates into a [`Draft`] handed to the later resolution stages.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{Invocation, ResolveError, parse_settings};
use crate::consts::{ASSEMBLY_EXTENSION, DEFAULT_TEMPLATE, PROJECT_EXTENSION};
use crate::options::BuildOptions;
use crate::util::path::{has_extension, normalize};

/// Outcome of dispatch.
#[derive(Debug)]
pub(crate) enum Dispatched {
  Done(Invocation),
  Draft(Draft),
}

/// Options accumulated by dispatch, plus the direct property switches that
/// take priority over `--settings`.
#[derive(Debug, Default)]
pub(crate) struct Draft {
  pub options: BuildOptions,
  pub overrides: DirectOverrides,
}

/// Values of `-c`, `-P` and `-D`, applied after dispatch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct DirectOverrides {
  pub configuration: Option<String>,
  pub platform: Option<String>,
  pub define_constants: Option<String>,
}

/// Top-level builder actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
  Add,
  New,
  Build,
  Run,
}

impl Verb {
  fn parse(token: &str) -> Option<Self> {
    match token {
      "add" => Some(Verb::Add),
      "new" => Some(Verb::New),
      "build" => Some(Verb::Build),
      "run" => Some(Verb::Run),
      _ => None,
    }
  }
}

/// Recognized switches, with their long, short and legacy spellings collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Switch {
  Project,
  Lib,
  Bridge,
  Output,
  Configuration,
  Platform,
  Define,
  Rebuild,
  NoCore,
  Source,
  Settings,
  Folder,
  ReferencesPath,
  Recursive,
  NoRecursive,
  Help,
  Version,
  NoTimestamp,
  Terminator,
}

impl Switch {
  fn parse(token: &str) -> Option<Self> {
    let switch = match token {
      "-p" | "-project" | "--project" => Switch::Project,
      "-lib" => Switch::Lib,
      "-b" | "-bridge" | "--bridge" => Switch::Bridge,
      "-o" | "-output" | "--output" => Switch::Output,
      "-c" | "-cfg" | "-configuration" | "--configuration" => Switch::Configuration,
      "-P" | "--platform" => Switch::Platform,
      "-D" | "-def" | "-define" | "--define" => Switch::Define,
      "-r" | "-rebuild" | "--rebuild" => Switch::Rebuild,
      "-nocore" | "--nocore" => Switch::NoCore,
      "-s" | "-src" | "--source" => Switch::Source,
      "-S" | "--settings" => Switch::Settings,
      "-f" | "-folder" | "--folder" => Switch::Folder,
      "-rp" | "-referencespath" | "--referencespath" => Switch::ReferencesPath,
      "-R" | "-recursive" | "--recursive" => Switch::Recursive,
      "--norecursive" => Switch::NoRecursive,
      "-h" | "--help" => Switch::Help,
      "-v" | "--version" => Switch::Version,
      "-notimestamp" | "--notimestamp" => Switch::NoTimestamp,
      "--" => Switch::Terminator,
      _ => return None,
    };
    Some(switch)
  }
}

/// Cursor over the argument list.
struct Tokens<'a> {
  args: &'a [String],
  pos: usize,
}

impl<'a> Tokens<'a> {
  fn new(args: &'a [String]) -> Self {
    Self { args, pos: 0 }
  }

  fn next(&mut self) -> Option<&'a str> {
    let token = self.args.get(self.pos)?;
    self.pos += 1;
    Some(token.as_str())
  }

  /// Token `offset` places ahead of the cursor, without consuming it.
  fn peek_at(&self, offset: usize) -> Option<&'a str> {
    self.args.get(self.pos + offset).map(String::as_str)
  }

  /// Consume the operand of `switch`, failing at end of stream.
  fn operand(&mut self, switch: &str) -> Result<&'a str, ResolveError> {
    self.next().ok_or_else(|| ResolveError::MissingOperand {
      switch: switch.to_string(),
    })
  }

  fn finish(&mut self) {
    self.pos = self.args.len();
  }
}

/// Run the dispatch state machine over `args`.
pub(crate) fn dispatch(args: &[String], cwd: &Path) -> Result<Dispatched, ResolveError> {
  let mut draft = Draft::default();
  let mut tokens = Tokens::new(args);

  while let Some(token) = tokens.next() {
    if let Some(verb) = Verb::parse(token) {
      match verb {
        Verb::Add => return add_package(&mut tokens, cwd).map(Dispatched::Done),
        Verb::New => return Ok(Dispatched::Done(new_project(&mut tokens, cwd))),
        Verb::Build => {
          draft.options.rebuild = true;
          draft.options.folder = Some(cwd.to_path_buf());
        }
        Verb::Run => {
          draft.options.run = true;
          draft.options.folder = Some(cwd.to_path_buf());
        }
      }
      continue;
    }

    let Some(switch) = Switch::parse(token) else {
      if !bind_positional(token, &mut draft.options) {
        return Err(ResolveError::InvalidArgument(token.to_string()));
      }
      continue;
    };

    if let Some(invocation) = apply_switch(switch, token, &mut tokens, &mut draft, cwd)? {
      return Ok(Dispatched::Done(invocation));
    }
  }

  Ok(Dispatched::Draft(draft))
}

/// Apply one switch. Returns a terminal invocation for help and version.
fn apply_switch(
  switch: Switch,
  token: &str,
  tokens: &mut Tokens<'_>,
  draft: &mut Draft,
  cwd: &Path,
) -> Result<Option<Invocation>, ResolveError> {
  let options = &mut draft.options;

  match switch {
    Switch::Project => {
      if options.lib.is_some() {
        return Err(ResolveError::MutuallyExclusive);
      }
      options.project_location = Some(PathBuf::from(tokens.operand(token)?));
    }
    Switch::Lib => {
      if options.project_location.is_some() {
        return Err(ResolveError::MutuallyExclusive);
      }
      options.lib = Some(PathBuf::from(tokens.operand(token)?));
    }
    Switch::Bridge => options.bridge_location = Some(PathBuf::from(tokens.operand(token)?)),
    Switch::Output => options.output_location = Some(PathBuf::from(tokens.operand(token)?)),
    Switch::Configuration => draft.overrides.configuration = Some(tokens.operand(token)?.to_string()),
    Switch::Platform => draft.overrides.platform = Some(tokens.operand(token)?.to_string()),
    Switch::Define => draft.overrides.define_constants = Some(tokens.operand(token)?.to_string()),
    Switch::Rebuild => options.rebuild = true,
    Switch::NoCore => options.extract_core = false,
    Switch::Source => options.sources = Some(tokens.operand(token)?.to_string()),
    Switch::Settings => {
      let argument = tokens.operand(token)?;
      options.project_properties = parse_settings(argument).map_err(|source| ResolveError::InvalidSettings {
        argument: argument.to_string(),
        source,
      })?;
    }
    Switch::Folder => options.folder = Some(normalize(&cwd.join(tokens.operand(token)?))),
    // `join` keeps absolute operands as they are.
    Switch::ReferencesPath => options.references_path = Some(normalize(&cwd.join(tokens.operand(token)?))),
    Switch::Recursive => options.recursive = true,
    Switch::NoRecursive => options.recursive = false,
    Switch::Help => return Ok(Some(Invocation::Help)),
    Switch::Version => return Ok(Some(Invocation::Version)),
    Switch::NoTimestamp => options.no_timestamp = true,
    Switch::Terminator => {
      if let Some(next) = tokens.next() {
        if !bind_positional(next, options) {
          debug!(argument = next, "argument after -- was not bound");
        }
      }
      let ignored = tokens.args.len() - tokens.pos;
      if ignored > 0 {
        debug!(count = ignored, "ignoring arguments after --");
      }
      tokens.finish();
    }
  }

  Ok(None)
}

/// Bind an unprefixed argument to the project or assembly path by extension.
///
/// Only succeeds while neither path is set.
fn bind_positional(arg: &str, options: &mut BuildOptions) -> bool {
  if options.project_location.is_some() || options.lib.is_some() {
    return false;
  }
  if has_extension(arg, PROJECT_EXTENSION) {
    options.project_location = Some(PathBuf::from(arg));
    true
  } else if has_extension(arg, ASSEMBLY_EXTENSION) {
    options.lib = Some(PathBuf::from(arg));
    true
  } else {
    false
  }
}

/// `add package <name> [-v|--version <version>]`
fn add_package(tokens: &mut Tokens<'_>, cwd: &Path) -> Result<Invocation, ResolveError> {
  let entity = tokens.operand("add")?;
  if entity != "package" {
    return Err(ResolveError::UnknownAddEntity(entity.to_string()));
  }

  let name = match tokens.next() {
    Some(name) if !name.trim().is_empty() => name,
    _ => return Err(ResolveError::MissingPackageName),
  };

  let version = match (tokens.peek_at(0), tokens.peek_at(1)) {
    (Some("-v" | "--version"), Some(version)) => Some(version.to_string()),
    (Some("-v" | "--version"), None) => {
      warn!(package = name, "no version given after --version, installing latest");
      None
    }
    _ => None,
  };

  Ok(Invocation::AddPackage {
    folder: cwd.to_path_buf(),
    name: name.to_string(),
    version,
  })
}

/// `new [template]`
fn new_project(tokens: &mut Tokens<'_>, cwd: &Path) -> Invocation {
  let template = match tokens.peek_at(0) {
    Some(template) if !template.starts_with('-') => {
      tokens.next();
      template
    }
    _ => DEFAULT_TEMPLATE,
  };

  Invocation::NewProject {
    folder: cwd.to_path_buf(),
    template: template.to_string(),
  }
}
