//! Shared test helpers for CLI integration tests.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Isolated Unity project directory.
pub struct TestProject {
  pub temp: TempDir,
}

impl TestProject {
  /// Create a project whose `version.txt` holds `version`.
  pub fn with_version(version: &str) -> Self {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("version.txt"), version).unwrap();
    Self { temp }
  }

  /// Project root as the binary will see it after canonicalization.
  pub fn root(&self) -> PathBuf {
    dunce::canonicalize(self.temp.path()).unwrap()
  }

  pub fn version_file(&self) -> String {
    std::fs::read_to_string(self.temp.path().join("version.txt")).unwrap()
  }

  /// Writes an executable `/bin/sh` script named `Unity` into the project.
  ///
  /// The script receives the editor arguments as `"$@"`.
  #[cfg(unix)]
  pub fn stub_editor(&self, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = self.temp.path().join("Unity");
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
  }

  /// Get a Command for the toybuild binary running `args` against this project.
  ///
  /// `--project-path` is appended after `args` so it also works as a global
  /// option after a subcommand.
  pub fn toybuild_cmd(&self, args: &[&str]) -> Command {
    let mut cmd: Command = cargo_bin_cmd!("toybuild");
    cmd.env_remove("TOYBUILD_UNITY_PATH");
    cmd.args(args).arg("--project-path").arg(self.temp.path());
    cmd
  }

  pub fn path(&self) -> &Path {
    self.temp.path()
  }
}
