//! Implementation of the `toybuild version` subcommands.
//!
//! These read and rewrite the base version in `<project>/version.txt`.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use toybuild_lib::consts::VERSION_FILE;
use toybuild_lib::version::{BaseVersion, VersionComponent, read_base_version, update_version_file};

use crate::output::{print_json, print_success, symbols};

#[derive(Subcommand)]
pub enum VersionAction {
  /// Show the current base version
  Show {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },

  /// Bump one component; smaller components reset
  Bump {
    #[arg(value_enum)]
    component: VersionComponent,
  },

  /// Drop the hotfix tag (e.g. 1.2.3-hotfix.2 -> 1.2.3)
  ClearHotfix,
}

pub fn cmd_version(project_root: &Path, action: VersionAction) -> Result<()> {
  let path = project_root.join(VERSION_FILE);

  match action {
    VersionAction::Show { json } => {
      let version = read_base_version(&path).with_context(|| format!("Failed to read {}", path.display()))?;
      if json {
        print_json(&serde_json::json!({ "version": version.to_string(), "parts": version }))?;
      } else {
        println!("Current version: {}", version);
      }
      Ok(())
    }
    VersionAction::Bump { component } => update(&path, |v| v.bump(component)),
    VersionAction::ClearHotfix => update(&path, BaseVersion::clear_hotfix),
  }
}

fn update(path: &Path, change: impl FnOnce(BaseVersion) -> BaseVersion) -> Result<()> {
  let (old, new) = update_version_file(path, change).with_context(|| format!("Failed to update {}", path.display()))?;
  print_success(&format!("Updated base version: {} {} {}", old, symbols::ARROW, new));
  Ok(())
}
