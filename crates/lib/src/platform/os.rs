use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Operating system variants the builder knows how to launch files on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Command that opens `target` with the user's default application.
  pub fn open_command(&self, target: &Path) -> Command {
    let mut cmd = match self {
      Self::Linux => Command::new("xdg-open"),
      Self::MacOs => Command::new("open"),
      Self::Windows => {
        let mut cmd = Command::new("cmd");
        // `start` treats its first quoted argument as the window title.
        cmd.args(["/C", "start", ""]);
        cmd
      }
    };
    cmd.arg(target);
    cmd
  }
}

/// Open `target` (typically the generated `index.html`) without waiting for it.
pub fn open_in_default_app(target: &Path) -> io::Result<()> {
  let os = Os::current().ok_or_else(|| {
    io::Error::new(
      io::ErrorKind::Unsupported,
      format!("don't know how to open files on {}", std::env::consts::OS),
    )
  })?;

  os.open_command(target)
    .stdin(Stdio::null())
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .spawn()?;
  Ok(())
}
