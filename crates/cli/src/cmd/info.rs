use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Serialize;

use toybuild_lib::consts::EDITOR_VERSION;
use toybuild_lib::editor::resolve_editor_path;
use toybuild_lib::platform::Host;

use crate::output::{print_json, print_stat, print_warning};

#[derive(Debug, Serialize)]
struct InfoReport {
  os: String,
  editor_version: &'static str,
  editor_path: Option<PathBuf>,
  editor_installed: bool,
  error: Option<String>,
}

pub fn cmd_info(unity_path: Option<&Path>, json: bool) -> Result<()> {
  let host = Host::current();

  let (editor_path, error) = match resolve_editor_path(unity_path, &host) {
    Ok(path) => (Some(path), None),
    Err(e) => (None, Some(e.to_string())),
  };

  let report = InfoReport {
    os: host.os,
    editor_version: EDITOR_VERSION,
    editor_installed: editor_path.as_deref().is_some_and(Path::exists),
    editor_path,
    error,
  };

  if json {
    return print_json(&report);
  }

  println!("System:");
  print_stat("Platform", &report.os);
  print_stat("Editor version", report.editor_version);
  match (&report.editor_path, &report.error) {
    (Some(path), _) => {
      let status = if report.editor_installed { "found" } else { "not found" };
      print_stat("Editor", &format!("{} ({})", path.display(), status));
    }
    (None, Some(err)) => print_warning(&format!("Could not locate editor: {}", err)),
    (None, None) => {}
  }

  Ok(())
}
