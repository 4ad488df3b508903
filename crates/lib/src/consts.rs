//! Names and defaults shared across the crate.

pub const APP_NAME: &str = "bridge";

/// Extension of project descriptors bound positionally or auto-detected.
pub const PROJECT_EXTENSION: &str = "csproj";

/// Extension of prebuilt assemblies.
pub const ASSEMBLY_EXTENSION: &str = "dll";

/// Source pattern used when `--source` is not given.
pub const DEFAULT_SOURCES: &str = "*.cs";

/// Template used by `new` when none is named.
pub const DEFAULT_TEMPLATE: &str = "classlib";

/// Conventional reference folders probed, in order, in folder mode.
pub const DEFAULT_REFERENCES_PATHS: [&str; 2] = ["bin", "Libs"];

/// Per-folder configuration file consulted by the locator.
pub const CONFIG_FILE_NAME: &str = "bridge.json";

/// Package manifest expanded by the scaffolder.
pub const PACKAGES_MANIFEST: &str = "packages.config";

/// Folder (relative to the project folder) packages are installed into.
pub const PACKAGES_DIR: &str = "packages";

pub const DEFAULT_PACKAGE_SOURCE: &str = "https://www.nuget.org/api/v2/package/";

pub const DEFAULT_TRANSLATOR: &str = "bridge-translator";
