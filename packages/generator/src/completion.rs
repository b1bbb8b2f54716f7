//! # Text Completion
//!
//! The pipeline's only suspension point. Anything that turns a prompt into
//! text can back it: a hosted model client, a local binary, or a canned
//! response in tests.

use crate::error::CompletionError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Prompt in, raw text out. No format is promised for the output.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Runs an external program with the prompt on stdin and returns its stdout
#[derive(Debug, Clone)]
pub struct CommandCompletion {
    program: String,
    args: Vec<String>,
}

impl CommandCompletion {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Build from `[program, args...]`
    pub fn from_argv(argv: &[String]) -> Result<Self, CompletionError> {
        let (program, args) = argv.split_first().ok_or(CompletionError::NoCommand)?;
        Ok(Self::new(program.clone()).args(args.iter().cloned()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl TextCompletion for CommandCompletion {
    async fn generate_text(&self, prompt: &str) -> Result<String, CompletionError> {
        let spawn_error = |source| CompletionError::Spawn {
            program: self.program.clone(),
            source,
        };

        debug!(program = %self.program, args = ?self.args, "Spawning completion command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(spawn_error)?;

        // stdout/stderr must drain while the prompt is still being written
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(prompt.as_bytes()).await?;
                // dropping stdin closes it and ends the prompt
            }
            Ok::<_, std::io::Error>(())
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(spawn_error)?;
        match fed {
            Err(error) if error.kind() != ErrorKind::BrokenPipe => return Err(spawn_error(error)),
            _ => {}
        }
        if !output.status.success() {
            return Err(CompletionError::Failed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CompletionError::InvalidOutput)
    }
}
