//! Running package-manager commands with streamed output
//!
//! Each step shows the command being executed, echoes the child's stdout and
//! stderr as they arrive, and is killed if it outlives its timeout.

use super::check::Tool;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;
use tokio::time::timeout;

/// Timeout for a single install step (10 minutes)
pub const STEP_TIMEOUT: Duration = Duration::from_secs(600);

/// One package-manager invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallStep {
    pub tool: Tool,
    pub args: &'static [&'static str],
    /// Working directory for the command
    pub dir: PathBuf,
}

impl InstallStep {
    pub fn new(tool: Tool, args: &'static [&'static str], dir: impl Into<PathBuf>) -> Self {
        Self {
            tool,
            args,
            dir: dir.into(),
        }
    }

    /// The command as a user would type it
    pub fn command_line(&self) -> String {
        std::iter::once(self.tool.binary)
            .chain(self.args.iter().copied())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the step to completion, failing on non-zero exit or timeout
    pub async fn run(&self, limit: Duration) -> Result<()> {
        let cmd = self.command_line();
        println!();
        println!(
            "{} {} {}",
            "Running:".dimmed(),
            cmd.yellow(),
            format!("(in {})", self.dir.display()).dimmed()
        );
        println!();

        let mut child = TokioCommand::new(self.tool.binary)
            .args(self.args)
            .current_dir(&self.dir)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start `{}`", cmd))?;

        let stdout = child
            .stdout
            .take()
            .context("Failed to capture installer stdout")?;
        let stderr = child
            .stderr
            .take()
            .context("Failed to capture installer stderr")?;

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let output_task = async {
            let mut stdout_open = true;
            let mut stderr_open = true;
            while stdout_open || stderr_open {
                tokio::select! {
                    line = stdout_reader.next_line(), if stdout_open => {
                        match line {
                            Ok(Some(line)) => println!("  {}", line),
                            Ok(None) => stdout_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stdout:".red(), e);
                                stdout_open = false;
                            }
                        }
                    }
                    line = stderr_reader.next_line(), if stderr_open => {
                        match line {
                            Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                            Ok(None) => stderr_open = false,
                            Err(e) => {
                                eprintln!("{} {}", "Error reading stderr:".red(), e);
                                stderr_open = false;
                            }
                        }
                    }
                }
            }
        };

        if timeout(limit, output_task).await.is_err() {
            let _ = child.kill().await;
            println!();
            anyhow::bail!(
                "`{}` timed out after {} seconds.\n\
                 Run it manually in {} to finish the setup.",
                cmd,
                limit.as_secs(),
                self.dir.display()
            );
        }

        match timeout(Duration::from_secs(5), child.wait()).await {
            Ok(Ok(status)) => {
                if status.success() {
                    Ok(())
                } else {
                    anyhow::bail!(
                        "`{}` failed with exit code: {}\n\
                         Run it manually in {} to see the full error.",
                        cmd,
                        status.code().unwrap_or(-1),
                        self.dir.display()
                    );
                }
            }
            Ok(Err(e)) => {
                anyhow::bail!("Failed to wait for `{}`: {}", cmd, e);
            }
            Err(_) => {
                let _ = child.kill().await;
                anyhow::bail!("`{}` hung after closing its output.", cmd);
            }
        }
    }
}
