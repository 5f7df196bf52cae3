//! Command runner trait definition.
//!
//! This port abstracts launching an external program and collecting its
//! output. Strategies only ever see this trait; the tokio implementation
//! lives in `accent-runtime`.

use async_trait::async_trait;
use std::fmt;

use super::CommandError;

/// A program invocation: executable name plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Program name, resolved through `PATH` by the runner.
    pub program: String,
    /// Arguments passed verbatim (no shell involved).
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Create a command for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append a single argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured output of a process that exited successfully.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandOutput {
    /// Output of a clean exit with the given stdout and empty stderr.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
            exit_code: 0,
        }
    }
}

/// Runs external programs to completion.
///
/// # Contract
///
/// - Suspends the caller until the process terminates.
/// - Accumulates all of stdout and stderr, however many chunks arrive.
/// - Returns `Ok` only for exit code 0.
/// - Distinguishes [`CommandError::LaunchFailed`] (program could not start)
///   from [`CommandError::NonZeroExit`] (program ran and failed).
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` and collect its output.
    async fn run(&self, command: &CommandSpec) -> Result<CommandOutput, CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_builder_keeps_order() {
        let spec = CommandSpec::new("gsettings")
            .arg("get")
            .args(["org.gnome.desktop.interface", "gtk-theme"]);
        assert_eq!(spec.program, "gsettings");
        assert_eq!(
            spec.args,
            vec!["get", "org.gnome.desktop.interface", "gtk-theme"]
        );
    }

    #[test]
    fn test_spec_display() {
        let spec = CommandSpec::new("echo").args(["a", "b"]);
        assert_eq!(spec.to_string(), "echo a b");
        assert_eq!(CommandSpec::new("true").to_string(), "true");
    }

    #[test]
    fn test_output_success() {
        let out = CommandOutput::success("'Yaru'\n");
        assert_eq!(out.exit_code, 0);
        assert!(out.stderr.is_empty());
    }
}
