//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

/// Everything that can stop a build before the editor reports its own result.
///
/// A non-zero editor exit is not an error here; it is reported through
/// [`crate::invoke::BuildOutcome::Failed`] so the caller can propagate the code.
#[derive(Debug, Error)]
pub enum BuildError {
  /// No editor path override was given and the host OS has no lookup entry.
  #[error("unsupported OS: {0}")]
  UnsupportedOs(String),

  /// The Linux editor lives under the home directory, which could not be found.
  #[error("cannot locate the editor: home directory is not set")]
  MissingHome,

  #[error("failed to read version file {}: {source}", path.display())]
  ReadVersion { path: PathBuf, source: std::io::Error },

  #[error("failed to write version file {}: {source}", path.display())]
  WriteVersion { path: PathBuf, source: std::io::Error },

  /// Version file contents are not `MAJOR.MINOR.PATCH[-hotfix.N]`.
  #[error("invalid versioning format: {0}")]
  InvalidVersion(String),

  #[error("failed to launch {}: {source}", program.display())]
  Launch { program: PathBuf, source: std::io::Error },

  /// The build was interrupted; the editor has been stopped and reaped.
  #[error("build interrupted")]
  Interrupted,

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
