//! Command runner for external process execution.
//!
//! Every external tool invocation flows through [`CommandRunner`], so
//! the pipeline sees one uniform result shape regardless of which tool
//! ran or how it failed. A nonzero exit code is not an error here; it
//! is reported through the `success` flag with the captured output.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use log::debug;
use tokio::process::Command;

/// Captured result of one tool invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Failure that happened before the tool produced any output, e.g.
    /// the binary was not found.
    pub fn launch_failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: message.into(),
        }
    }
}

/// Seam for external process execution. Production code uses
/// [`SystemRunner`]; tests substitute a scripted fake.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[OsString], cwd: Option<&Path>) -> CommandOutput;
}

/// Runs tools as real subprocesses via tokio.
pub struct SystemRunner;

#[async_trait]
impl CommandRunner for SystemRunner {
    async fn run(&self, program: &str, args: &[OsString], cwd: Option<&Path>) -> CommandOutput {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = cwd {
            command.current_dir(dir);
        }

        debug!("Executing command: {:?}", command);

        match command.output().await {
            Ok(output) => CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            },
            Err(e) => CommandOutput::launch_failure(e.to_string()),
        }
    }
}
