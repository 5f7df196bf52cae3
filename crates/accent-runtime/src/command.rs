//! Tokio-backed command runner.
//!
//! Spawns the program with piped stdout/stderr, drains both streams to EOF
//! while waiting for exit, and maps the result onto the core
//! [`CommandError`] taxonomy.

use accent_core::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, trace};

/// Runs commands with `tokio::process`.
///
/// The child is spawned with `kill_on_drop`, so dropping an in-flight
/// [`CommandRunner::run`] future also reaps the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    /// Create a new runner.
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError> {
        trace!(command = %command, "Spawning");

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| CommandError::LaunchFailed {
                program: command.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        // Drain both pipes concurrently with the wait so a chatty child can
        // never block on a full pipe buffer.
        let (stdout, stderr, status) =
            tokio::try_join!(read_stream(stdout), read_stream(stderr), child.wait()).map_err(
                |source| CommandError::Io {
                    program: command.program.clone(),
                    source,
                },
            )?;

        debug!(
            command = %command,
            status = %status,
            stdout_bytes = stdout.len(),
            stderr_bytes = stderr.len(),
            "Command finished"
        );

        if !status.success() {
            return Err(CommandError::NonZeroExit {
                program: command.program.clone(),
                code: status.code(),
                stderr,
            });
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code: status.code().unwrap_or_default(),
        })
    }
}

/// Read a whole stream as (lossy) UTF-8. A missing pipe reads as empty.
async fn read_stream<R>(stream: Option<R>) -> io::Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut buf = Vec::new();
    if let Some(mut stream) = stream {
        stream.read_to_end(&mut buf).await?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
