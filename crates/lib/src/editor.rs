//! Unity editor executable lookup.
//!
//! Each supported OS family has exactly one install location, pinned to
//! [`EDITOR_VERSION`]. Resolved paths are never checked for existence; a bad
//! path shows up when the editor is launched.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::EDITOR_VERSION;
use crate::error::{BuildError, Result};
use crate::platform::Host;
use crate::platform::os::Os;

/// Returns the editor executable for `host`, or `explicit` unchanged when given.
pub fn resolve_editor_path(explicit: Option<&Path>, host: &Host) -> Result<PathBuf> {
  if let Some(path) = explicit {
    debug!(path = %path.display(), "using editor path override");
    return Ok(path.to_path_buf());
  }

  let path = default_editor_path(host.os_family()?, host.home.as_deref())?;
  debug!(os = %host.os, path = %path.display(), "resolved pinned editor path");
  Ok(path)
}

/// Pinned install location of the editor for an OS family.
pub fn default_editor_path(os: Os, home: Option<&Path>) -> Result<PathBuf> {
  let path = match os {
    Os::Windows => PathBuf::from(format!(
      r"C:\Program Files\Unity\Hub\Editor\{}\Editor\Unity.exe",
      EDITOR_VERSION
    )),
    Os::Linux => home
      .ok_or(BuildError::MissingHome)?
      .join("Unity")
      .join("Hub")
      .join("Editor")
      .join(EDITOR_VERSION)
      .join("Editor")
      .join("Unity"),
    Os::MacOs => PathBuf::from(format!(
      "/Applications/Unity/Hub/Editor/{}/Unity.app/Contents/MacOS/Unity",
      EDITOR_VERSION
    )),
  };
  Ok(path)
}
