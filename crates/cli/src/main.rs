mod cmd;
mod output;

use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use tracing::error;
use tracing_subscriber::EnvFilter;

use bridge_lib::environment::FsEnvironment;
use bridge_lib::resolve::{Invocation, resolve};

use crate::cmd::{cmd_add_package, cmd_build, cmd_new, print_help, print_usage, print_version};

fn init_logging(no_timestamp: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_ansi(std::io::stderr().is_terminal())
    .with_target(false);

  if no_timestamp {
    builder.without_time().init();
  } else {
    builder.init();
  }
}

/// Whether `--notimestamp` appears before the terminator.
fn wants_no_timestamp(args: &[String]) -> bool {
  args
    .iter()
    .take_while(|a| a.as_str() != "--")
    .any(|a| a == "-notimestamp" || a == "--notimestamp")
}

fn run(args: &[String]) -> anyhow::Result<bool> {
  let env = FsEnvironment::from_process().context("Failed to determine the current directory")?;

  let invocation = match resolve(args, &env) {
    Ok(invocation) => invocation,
    Err(e) => {
      error!("{e}");
      print_help();
      return Ok(false);
    }
  };

  match invocation {
    Invocation::Help => print_help(),
    Invocation::Version => print_version(),
    Invocation::AddPackage { folder, name, version } => cmd_add_package(&folder, &name, version.as_deref())?,
    Invocation::NewProject { folder, template } => cmd_new(&folder, &template)?,
    Invocation::Build(options) => cmd_build(&options)?,
  }

  Ok(true)
}

fn main() -> ExitCode {
  let args: Vec<String> = std::env::args().skip(1).collect();
  init_logging(wants_no_timestamp(&args));

  if args.is_empty() {
    print_usage();
    return ExitCode::FAILURE;
  }

  match run(&args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      for (depth, cause) in e.chain().enumerate() {
        if depth == 0 {
          error!("{cause}");
        } else {
          error!(depth, "caused by: {cause}");
        }
      }
      ExitCode::FAILURE
    }
  }
}
