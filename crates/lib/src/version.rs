//! Build labels and `version.txt` maintenance.
//!
//! The version file holds a base version such as `1.4.0` or `1.4.0-hotfix.2`.
//! A build label is that text with `.build-<number>` appended; composing one
//! performs no validation. Bumping parses the file and rewrites it.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{BuildError, Result};

const HOTFIX_PREFIX: &str = "hotfix.";

/// Reads `path` and appends `.build-<build_number>` to its trimmed contents.
pub fn compose_build_version(path: &Path, build_number: &str) -> Result<String> {
  let base = read_trimmed(path)?;
  let version = format!("{}.build-{}", base, build_number);
  debug!(path = %path.display(), version = %version, "composed build version");
  Ok(version)
}

fn read_trimmed(path: &Path) -> Result<String> {
  let contents = fs::read_to_string(path).map_err(|source| BuildError::ReadVersion {
    path: path.to_path_buf(),
    source,
  })?;
  Ok(contents.trim().to_string())
}

/// Parts of a version that can be bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum VersionComponent {
  Major,
  Minor,
  Patch,
  Hotfix,
}

/// A `MAJOR.MINOR.PATCH[-hotfix.N]` base version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BaseVersion {
  pub major: u64,
  pub minor: u64,
  pub patch: u64,
  /// Hotfix counter; `0` means no hotfix tag.
  pub hotfix: u64,
}

impl BaseVersion {
  pub fn new(major: u64, minor: u64, patch: u64) -> Self {
    Self {
      major,
      minor,
      patch,
      hotfix: 0,
    }
  }

  /// Bumps one component; every smaller component resets.
  pub fn bump(self, component: VersionComponent) -> Self {
    match component {
      VersionComponent::Major => Self::new(self.major + 1, 0, 0),
      VersionComponent::Minor => Self::new(self.major, self.minor + 1, 0),
      VersionComponent::Patch => Self::new(self.major, self.minor, self.patch + 1),
      VersionComponent::Hotfix => Self {
        hotfix: self.hotfix + 1,
        ..self
      },
    }
  }

  pub fn clear_hotfix(self) -> Self {
    Self::new(self.major, self.minor, self.patch)
  }
}

impl FromStr for BaseVersion {
  type Err = BuildError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    let invalid = || BuildError::InvalidVersion(s.to_string());
    let parsed = semver::Version::parse(s.trim()).map_err(|_| invalid())?;

    let hotfix = if parsed.pre.is_empty() {
      0
    } else {
      parsed
        .pre
        .as_str()
        .strip_prefix(HOTFIX_PREFIX)
        .and_then(|n| n.parse::<u64>().ok())
        .ok_or_else(invalid)?
    };

    Ok(Self {
      major: parsed.major,
      minor: parsed.minor,
      patch: parsed.patch,
      hotfix,
    })
  }
}

impl fmt::Display for BaseVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
    if self.hotfix > 0 {
      write!(f, "-{}{}", HOTFIX_PREFIX, self.hotfix)?;
    }
    Ok(())
  }
}

/// Parses the base version stored at `path`.
pub fn read_base_version(path: &Path) -> Result<BaseVersion> {
  read_trimmed(path)?.parse()
}

/// Replaces the contents of `path` with `version` and a trailing newline.
pub fn write_base_version(path: &Path, version: &BaseVersion) -> Result<()> {
  fs::write(path, format!("{}\n", version)).map_err(|source| BuildError::WriteVersion {
    path: path.to_path_buf(),
    source,
  })
}

/// Applies `update` to the version stored at `path`, returning `(old, new)`.
pub fn update_version_file(
  path: &Path,
  update: impl FnOnce(BaseVersion) -> BaseVersion,
) -> Result<(BaseVersion, BaseVersion)> {
  let old = read_base_version(path)?;
  let new = update(old);
  write_base_version(path, &new)?;
  info!(path = %path.display(), from = %old, to = %new, "updated base version");
  Ok((old, new))
}
