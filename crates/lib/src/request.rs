//! Turning raw build options into a fully resolved [`BuildRequest`].

use std::path::PathBuf;

use tracing::info;

use crate::consts::{DEFAULT_BUILD_NUMBER, VERSION_FILE};
use crate::editor::resolve_editor_path;
use crate::error::Result;
use crate::platform::Host;
use crate::target::{BuildTarget, ScriptingBackend, derive_output_path};
use crate::version::compose_build_version;

/// Build settings as supplied on the command line.
#[derive(Debug, Clone)]
pub struct BuildOptions {
  pub target: BuildTarget,
  pub scripting_backend: ScriptingBackend,
  pub output: Option<PathBuf>,
  pub build_number: String,
  pub unity_path: Option<PathBuf>,
  pub project_root: PathBuf,
}

impl BuildOptions {
  pub fn new(target: BuildTarget, scripting_backend: ScriptingBackend, project_root: impl Into<PathBuf>) -> Self {
    Self {
      target,
      scripting_backend,
      output: None,
      build_number: DEFAULT_BUILD_NUMBER.to_string(),
      unity_path: None,
      project_root: project_root.into(),
    }
  }
}

/// Everything the editor invocation needs, with every default filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
  pub target: BuildTarget,
  pub scripting_backend: ScriptingBackend,
  pub output_path: PathBuf,
  pub build_number: String,
  pub editor_path: PathBuf,
  pub project_root: PathBuf,
  pub version_file: PathBuf,
  /// `version.txt` contents plus `.build-<build_number>`
  pub version: String,
}

impl BuildRequest {
  /// Resolves the editor path, output path and build version for `options`.
  ///
  /// # Errors
  ///
  /// - `UnsupportedOs` / `MissingHome` when no editor path was supplied and
  ///   none can be derived for `host`
  /// - `ReadVersion` when `version.txt` is missing or unreadable
  pub fn resolve(options: BuildOptions, host: &Host) -> Result<Self> {
    let editor_path = resolve_editor_path(options.unity_path.as_deref(), host)?;
    let version_file = options.project_root.join(VERSION_FILE);
    let version = compose_build_version(&version_file, &options.build_number)?;
    let output_path = derive_output_path(options.output.as_deref(), &options.project_root, options.target);

    info!(
      target = %options.target,
      backend = %options.scripting_backend,
      version = %version,
      output = %output_path.display(),
      "resolved build request"
    );

    Ok(Self {
      target: options.target,
      scripting_backend: options.scripting_backend,
      output_path,
      build_number: options.build_number,
      editor_path,
      project_root: options.project_root,
      version_file,
      version,
    })
  }
}
