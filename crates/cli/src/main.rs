mod cmd;
mod output;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use toybuild_lib::consts::{DEFAULT_BUILD_NUMBER, UNITY_PATH_ENV};
use toybuild_lib::request::BuildOptions;
use toybuild_lib::target::{BuildTarget, ScriptingBackend};

use cmd::{VersionAction, cmd_build, cmd_info, cmd_version};

/// toybuild - Build Toy Soldiers for a specified target
///
/// Global options (`--project-path`, `--unity-path`, `-v`) go after a subcommand.
#[derive(Parser)]
#[command(name = "toybuild")]
#[command(author, version, about, long_about = None)]
#[command(subcommand_negates_reqs = true, args_conflicts_with_subcommands = true)]
struct Cli {
  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Root of the Unity project (must contain version.txt)
  #[arg(long, global = true, default_value = ".")]
  project_path: PathBuf,

  /// Platform to build for
  #[arg(long, value_enum, required = true)]
  target: Option<BuildTarget>,

  /// Scripting backend for managed code
  #[arg(long, value_enum, required = true)]
  scripting_backend: Option<ScriptingBackend>,

  /// Output path for the build (default: Builds/<platform>/ToySoldiers.<ext>)
  #[arg(long)]
  output: Option<PathBuf>,

  /// CI/CD build number
  #[arg(long, default_value = DEFAULT_BUILD_NUMBER)]
  build_number: String,

  /// Optional custom path to the Unity executable
  #[arg(long, global = true, env = UNITY_PATH_ENV)]
  unity_path: Option<PathBuf>,

  /// Print the editor command line without launching it
  #[arg(long)]
  dry_run: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Inspect or bump the base version in version.txt
  Version {
    #[command(subcommand)]
    action: VersionAction,
  },

  /// Show host platform and editor location
  Info {
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  init_tracing(cli.verbose);

  match cli.command {
    Some(Commands::Version { action }) => cmd_version(&project_root(&cli.project_path)?, action),
    Some(Commands::Info { json }) => cmd_info(cli.unity_path.as_deref(), json),
    None => {
      let options = BuildOptions {
        target: cli.target.context("--target is required")?,
        scripting_backend: cli.scripting_backend.context("--scripting-backend is required")?,
        output: cli.output,
        build_number: cli.build_number,
        unity_path: cli.unity_path,
        project_root: project_root(&cli.project_path)?,
      };

      let code = cmd_build(options, cli.dry_run)?;
      if code != 0 {
        std::process::exit(code);
      }
      Ok(())
    }
  }
}

/// Logs go to stderr so they never interleave with forwarded editor output.
fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn project_root(path: &Path) -> Result<PathBuf> {
  dunce::canonicalize(path).with_context(|| format!("Project path not found: {}", path.display()))
}
