mod add;
mod build;
mod help;
mod new;

pub use add::cmd_add_package;
pub use build::cmd_build;
pub use help::{print_help, print_usage, print_version};
pub use new::cmd_new;
