//! Usage, help and version text.

use bridge_lib::consts::APP_NAME;
use bridge_lib::options::ProjectProperty;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const ABOUT: &str = "Builds C# projects and assemblies into JavaScript";

fn version_line() -> String {
  format!("{APP_NAME} {VERSION}")
}

/// Short usage shown when the builder is started without arguments.
pub fn print_usage() {
  let cwd = std::env::current_dir()
    .map(|p| p.display().to_string())
    .unwrap_or_else(|_| ".".to_string());

  println!(
    "{version_line}
{ABOUT}

Usage: {name} [commands] [[options] path-to-application]

Commands:
  new [template]       Create a project from a template [default: classlib].
  build                Build the project in the current folder.
  run                  Build, then open the generated index.html.
  add package <name>   Install a package into the current folder.

Path to Output folder:
  {cwd}

Run '{name} --help' for the list of options.",
    version_line = version_line(),
    name = APP_NAME,
  );
}

pub fn print_help() {
  let name = APP_NAME;
  let settings = ProjectProperty::ALL
    .iter()
    .map(|p| p.as_str())
    .collect::<Vec<_>>()
    .join(", ");

  println!(
    "Usage: {name} [options] (<project-file>|<assembly-file>)
       {name} [-h|--help]

-h --help                  This help message.
-p --project <file>        Project file to build.
-lib <file>                Prebuilt assembly to translate.
-c --configuration <name>  Configuration name (Debug/Release etc)
                           [default: none].
-P --platform <name>       Platform name (AnyCPU etc) [default: none].
-S --settings <name:value> Comma-delimited list of project settings,
                           i.e. -S name1:value1,name2:value2
                           Allowed settings: {settings}
                           Options -c, -P and -D have priority over -S.
-r --rebuild               Force assembly rebuilding.
--nocore                   Do not extract core javascript files.
-D --define <const-list>   Semicolon-delimited list of project constants.
-b --bridge <file>         Bridge.dll file location (currently unused).
-o --output <path>         Output location [default: project or folder name].
-s --source <file>         Source files name/pattern [default: *.cs].
-f --folder <path>         Builder working directory relative to current WD
                           [default: current wd].
-rp --referencespath <path> Folder of referenced assemblies.
-R --recursive             Recursively search for .cs source files inside
                           the working directory.
--norecursive              Non-recursive search of .cs source files inside
                           the working directory.
-v --version               Version of the builder.
-notimestamp --notimestamp Do not show timestamp in log messages
                           [default: shows timestamp]."
  );
}

pub fn print_version() {
  println!("{}", version_line());
}
