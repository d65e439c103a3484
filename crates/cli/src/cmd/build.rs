//! Implementation of the default build command.
//!
//! Resolves the build request, prints the editor command line, runs the
//! editor while streaming its output, and reports the exit code to propagate.

use anyhow::{Context, Result};
use tracing::debug;

use toybuild_lib::BuildError;
use toybuild_lib::invoke::{BuildOutcome, display_command_line, run_build};
use toybuild_lib::platform::Host;
use toybuild_lib::request::{BuildOptions, BuildRequest};

use crate::output::{format_elapsed, print_error, print_info, print_success, print_warning};

/// Conventional exit code for a process stopped by SIGINT.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Execute a build.
///
/// Returns the exit code the process should terminate with: `0` on success,
/// the editor's own code when it fails.
///
/// # Errors
///
/// Returns an error if the request cannot be resolved (unsupported OS,
/// missing version file) or the editor cannot be launched.
pub fn cmd_build(options: BuildOptions, dry_run: bool) -> Result<i32> {
  let host = Host::current();
  debug!(os = %host.os, "resolving build request");

  let request = BuildRequest::resolve(options, &host).context("Failed to resolve build request")?;

  print_info("Building Unity project:");
  println!("{}", display_command_line(&request));

  if dry_run {
    print_info("Dry run: editor not launched");
    return Ok(0);
  }

  let rt = tokio::runtime::Builder::new_current_thread()
    .enable_all()
    .build()
    .context("Failed to create async runtime")?;

  let mut stdout = std::io::stdout();
  match rt.block_on(run_build(&request, &mut stdout)) {
    Ok(outcome) => {
      println!();
      let elapsed = format_elapsed(outcome.elapsed());
      match &outcome {
        BuildOutcome::Succeeded { output_path, .. } => print_success(&format!(
          "Build completed successfully: {} ({})",
          output_path.display(),
          elapsed
        )),
        BuildOutcome::Failed { code, .. } => {
          print_error(&format!("Build failed with exit code {} after {}", code, elapsed))
        }
      }
      Ok(outcome.exit_code())
    }
    Err(BuildError::Interrupted) => {
      print_warning("Build interrupted; editor stopped");
      Ok(INTERRUPTED_EXIT_CODE)
    }
    Err(e) => Err(e).context("Failed to run the editor"),
  }
}
