//! Build targets, scripting backends, and default artifact naming.

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::Serialize;

use crate::consts::{BUILDS_DIR, PRODUCT_NAME};

/// Platform a player build is produced for.
///
/// Names match the editor's `-buildTarget` spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
pub enum BuildTarget {
  #[value(name = "Win64")]
  Win64,
  #[value(name = "Linux64")]
  Linux64,
  #[value(name = "OSXUniversal")]
  #[allow(clippy::upper_case_acronyms)]
  OSXUniversal,
}

impl BuildTarget {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Win64 => "Win64",
      Self::Linux64 => "Linux64",
      Self::OSXUniversal => "OSXUniversal",
    }
  }

  /// Directory under `Builds/`: the lower-cased name with "64" removed.
  pub fn platform_dir(&self) -> String {
    self.as_str().to_lowercase().replace("64", "")
  }

  /// File name of the built player.
  pub fn artifact_name(&self) -> String {
    let ext = match self {
      Self::Win64 => "exe",
      Self::Linux64 | Self::OSXUniversal => "x86_64",
    };
    format!("{}.{}", PRODUCT_NAME, ext)
  }
}

impl fmt::Display for BuildTarget {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Compilation strategy for managed code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptingBackend {
  Mono,
  Il2cpp,
}

impl ScriptingBackend {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Mono => "mono",
      Self::Il2cpp => "il2cpp",
    }
  }
}

impl fmt::Display for ScriptingBackend {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Returns `explicit` verbatim, or `<project_root>/Builds/<platform_dir>/<artifact>`.
pub fn derive_output_path(explicit: Option<&Path>, project_root: &Path, target: BuildTarget) -> PathBuf {
  match explicit {
    Some(path) => path.to_path_buf(),
    None => project_root
      .join(BUILDS_DIR)
      .join(target.platform_dir())
      .join(target.artifact_name()),
  }
}
