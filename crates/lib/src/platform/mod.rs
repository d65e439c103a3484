pub mod os;
pub mod paths;

use std::path::PathBuf;

use os::Os;

use crate::error::BuildError;

/// The machine a build is being driven from.
///
/// Kept as plain data so editor resolution can be exercised for any OS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Host {
  /// OS identifier in `std::env::consts::OS` form (e.g., "linux")
  pub os: String,
  pub home: Option<PathBuf>,
}

impl Host {
  pub fn new(os: impl Into<String>, home: Option<PathBuf>) -> Self {
    Self { os: os.into(), home }
  }

  /// Describe the running machine
  pub fn current() -> Self {
    Self::new(std::env::consts::OS, paths::home_dir())
  }

  /// Returns the supported OS family for this host
  pub fn os_family(&self) -> Result<Os, BuildError> {
    Os::from_identifier(&self.os)
  }
}
