//! Editor command-line construction and the streaming build runner.
//!
//! The editor runs headless with stdout and stderr sharing one pipe, so its
//! output reaches us in the order it was written. Every line is forwarded to
//! the caller's sink as soon as it arrives, so long builds show live progress.

use std::ffi::OsString;
use std::future::Future;
use std::io::{PipeReader, Write};
use std::path::PathBuf;
use std::pin::Pin;
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

use crate::consts::BUILD_ENTRY_POINT;
use crate::error::{BuildError, Result};
use crate::request::BuildRequest;

/// Flags that put the editor in unattended batch mode.
const BATCH_FLAGS: [&str; 6] = [
  "-quit",
  "-batchmode",
  "-nographics",
  "-disableassemblyupdater",
  "-accept-apiupdate",
  "-disableburst-compilation",
];

/// How a build that got as far as launching the editor ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
  Succeeded { output_path: PathBuf, elapsed: Duration },
  /// The editor exited non-zero; `code` is what this tool exits with.
  Failed { code: i32, elapsed: Duration },
}

impl BuildOutcome {
  pub fn exit_code(&self) -> i32 {
    match self {
      Self::Succeeded { .. } => 0,
      Self::Failed { code, .. } => *code,
    }
  }

  pub fn elapsed(&self) -> Duration {
    match self {
      Self::Succeeded { elapsed, .. } | Self::Failed { elapsed, .. } => *elapsed,
    }
  }
}

/// Arguments passed to the editor, in order, excluding the executable itself.
pub fn editor_arguments(request: &BuildRequest) -> Vec<OsString> {
  let mut args: Vec<OsString> = BATCH_FLAGS.iter().map(OsString::from).collect();
  let settings: [OsString; 12] = [
    "-projectPath".into(),
    request.project_root.clone().into_os_string(),
    "-executeMethod".into(),
    BUILD_ENTRY_POINT.into(),
    "-buildVersion".into(),
    request.version.clone().into(),
    "-buildTarget".into(),
    request.target.as_str().into(),
    "-outputPath".into(),
    request.output_path.clone().into_os_string(),
    "-scriptingBackend".into(),
    request.scripting_backend.as_str().into(),
  ];
  args.extend(settings);
  args
}

/// The full command line: editor executable followed by [`editor_arguments`].
pub fn command_line(request: &BuildRequest) -> Vec<OsString> {
  let mut line = vec![request.editor_path.clone().into_os_string()];
  line.extend(editor_arguments(request));
  line
}

/// Renders [`command_line`] for display, quoting arguments that contain whitespace.
pub fn display_command_line(request: &BuildRequest) -> String {
  command_line(request)
    .iter()
    .map(|arg| {
      let arg = arg.to_string_lossy();
      if arg.chars().any(char::is_whitespace) {
        format!("\"{}\"", arg)
      } else {
        arg.into_owned()
      }
    })
    .collect::<Vec<_>>()
    .join(" ")
}

/// Launch the editor for `request` and forward its output to `sink` line by line.
///
/// Returns once the editor has exited and been reaped. On interrupt or a
/// forwarding error the editor is killed and reaped before the error is
/// returned.
///
/// # Errors
///
/// - `Launch` if the editor executable cannot be started
/// - `Interrupted` if Ctrl-C arrives while the editor runs
/// - `Io` if reading the pipe or writing to `sink` fails
pub async fn run_build<W: Write>(request: &BuildRequest, sink: &mut W) -> Result<BuildOutcome> {
  let started = Instant::now();
  let mut interrupt = Interrupt::new();

  let (mut child, output) = spawn_editor(request)?;
  info!(pid = ?child.id(), "editor started");

  let status = match supervise(&mut child, output, sink, &mut interrupt).await {
    Ok(status) => status,
    Err(err) => {
      warn!(error = %err, "stopping editor");
      if let Err(kill_err) = child.kill().await {
        warn!(error = %kill_err, "failed to stop editor");
      }
      return Err(err);
    }
  };

  let elapsed = started.elapsed();
  let code = exit_code(status);

  info!(code, elapsed = ?elapsed, "editor exited");

  Ok(if code == 0 {
    BuildOutcome::Succeeded {
      output_path: request.output_path.clone(),
      elapsed,
    }
  } else {
    BuildOutcome::Failed { code, elapsed }
  })
}

/// Starts the editor with stdout and stderr both writing into one pipe.
///
/// The parent's copies of the write end live in `command` and are closed when
/// it drops, so the returned reader sees EOF once the editor side closes.
fn spawn_editor(request: &BuildRequest) -> Result<(Child, PipeReader)> {
  let (reader, writer) = std::io::pipe()?;

  debug!(editor = %request.editor_path.display(), "spawning editor");

  let mut command = Command::new(&request.editor_path);
  command
    .args(editor_arguments(request))
    .stdin(Stdio::null())
    .stdout(writer.try_clone()?)
    .stderr(writer)
    .kill_on_drop(true);

  let child = command.spawn().map_err(|source| BuildError::Launch {
    program: request.editor_path.clone(),
    source,
  })?;

  Ok((child, reader))
}

/// Forwards output until the pipe closes, then waits for the editor to exit.
///
/// Ctrl-C is watched for the whole time the editor is alive.
async fn supervise<W: Write>(
  child: &mut Child,
  output: PipeReader,
  sink: &mut W,
  interrupt: &mut Interrupt,
) -> Result<ExitStatus> {
  let mut lines = BufReader::new(async_pipe(output)?).split(b'\n');

  loop {
    tokio::select! {
      line = lines.next_segment() => match line? {
        Some(line) => forward_line(sink, &line)?,
        None => break,
      },
      () = interrupt.recv() => return Err(BuildError::Interrupted),
    }
  }

  tokio::select! {
    status = child.wait() => Ok(status?),
    () = interrupt.recv() => Err(BuildError::Interrupted),
  }
}

#[cfg(unix)]
fn async_pipe(reader: PipeReader) -> Result<tokio::net::unix::pipe::Receiver> {
  Ok(tokio::net::unix::pipe::Receiver::from_owned_fd(reader.into())?)
}

#[cfg(windows)]
fn async_pipe(reader: PipeReader) -> Result<tokio::fs::File> {
  let handle = std::os::windows::io::OwnedHandle::from(reader);
  Ok(tokio::fs::File::from_std(std::fs::File::from(handle)))
}

/// Ctrl-C listener that outlives individual `select!` rounds.
///
/// If the handler cannot be installed, `recv` never resolves and the build
/// runs without interrupt support.
struct Interrupt {
  signal: Pin<Box<dyn Future<Output = std::io::Result<()>>>>,
  armed: bool,
}

impl Interrupt {
  fn new() -> Self {
    Self {
      signal: Box::pin(tokio::signal::ctrl_c()),
      armed: true,
    }
  }

  async fn recv(&mut self) {
    if self.armed {
      match self.signal.as_mut().await {
        Ok(()) => return,
        Err(e) => {
          warn!(error = %e, "cannot listen for interrupts");
          self.armed = false;
        }
      }
    }
    std::future::pending::<()>().await
  }
}

fn forward_line<W: Write>(sink: &mut W, line: &[u8]) -> std::io::Result<()> {
  sink.write_all(line)?;
  sink.write_all(b"\n")?;
  sink.flush()
}

/// Exit code to propagate; signal deaths map to `128 + signal` on Unix.
fn exit_code(status: ExitStatus) -> i32 {
  if let Some(code) = status.code() {
    return code;
  }

  #[cfg(unix)]
  {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = status.signal() {
      return 128 + signal;
    }
  }

  1
}
