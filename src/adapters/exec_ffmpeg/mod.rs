//! FFmpeg execution adapter
//!
//! Runs the assembled command as a child process (no shell), forwards its
//! stderr to ours while keeping the tail for error reports, and maps the
//! outcome onto [`WmarkError`] categories.

use std::io::{self, Read, Write};
use std::process::{Child, ExitStatus, Stdio};
use std::time::Instant;

use tracing::{debug, error, info, warn};

use crate::domain::model::ToolConfig;
use crate::engine::CommandInvocation;
use crate::error::{WmarkError, WmarkResult};
use crate::ports::{ExecutePort, ExecutionReport};

/// Upper bound on buffered stderr bytes
const MAX_TAIL_BYTES: usize = 64 * 1024;

/// Process-based execution adapter
pub struct FfmpegProcessAdapter {
    /// Forward the tool's stderr to our stderr as it arrives
    echo_stderr: bool,
    tail_lines: usize,
}

impl FfmpegProcessAdapter {
    /// Create new adapter from tool configuration
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            echo_stderr: true,
            tail_lines: config.stderr_tail_lines,
        }
    }

    /// Stop forwarding tool output; it is still captured
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.echo_stderr = !quiet;
        self
    }

    fn spawn(&self, invocation: &CommandInvocation) -> WmarkResult<ChildGuard> {
        let program = invocation.program_name();
        let child = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| {
                if source.kind() == io::ErrorKind::NotFound {
                    error!("{} not found", program);
                    WmarkError::ToolNotFound { program: program.clone(), source }
                } else {
                    error!("Failed to start {}: {}", program, source);
                    WmarkError::ToolLaunch { program: program.clone(), source }
                }
            })?;

        debug!("Spawned {} with pid {}", program, child.id());
        Ok(ChildGuard::new(child))
    }
}

impl ExecutePort for FfmpegProcessAdapter {
    fn execute(&self, invocation: &CommandInvocation) -> WmarkResult<ExecutionReport> {
        let program = invocation.program_name();
        info!("Running: {}", invocation);

        let started = Instant::now();
        let mut guard = self.spawn(invocation)?;
        let mut stderr = guard.child.stderr.take();
        let mut tail = StderrTail::new(self.tail_lines);

        if let Some(pipe) = stderr.as_mut() {
            let mut buf = [0u8; 8192];
            loop {
                let n = match pipe.read(&mut buf) {
                    Ok(0) => break,
                    Ok(n) => n,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    // The pipe is closed before the guard waits on the child
                    Err(source) => return Err(WmarkError::ToolIo { program, source }),
                };
                tail.push(&buf[..n]);
                if self.echo_stderr {
                    let mut out = io::stderr().lock();
                    if let Err(e) = out.write_all(&buf[..n]).and_then(|_| out.flush()) {
                        warn!("Failed to forward tool output: {}", e);
                    }
                }
            }
        }
        drop(stderr);

        let status = guard
            .wait()
            .map_err(|source| WmarkError::ToolIo { program: program.clone(), source })?;
        let elapsed = started.elapsed();

        if status.success() {
            info!("{} finished in {:.2}s", program, elapsed.as_secs_f64());
            Ok(ExecutionReport {
                exit_code: status.code(),
                elapsed,
            })
        } else {
            error!("{} exited unsuccessfully: {}", program, status);
            Err(WmarkError::ToolFailed {
                program,
                exit_code: status.code(),
                status: status.to_string(),
                stderr_tail: tail.finish(),
            })
        }
    }
}

/// Owns a child process and waits for it when dropped, so no exit path
/// leaves it unreaped.
struct ChildGuard {
    child: Child,
    reaped: bool,
}

impl ChildGuard {
    fn new(child: Child) -> Self {
        Self { child, reaped: false }
    }

    fn wait(&mut self) -> io::Result<ExitStatus> {
        let status = self.child.wait()?;
        self.reaped = true;
        Ok(status)
    }
}

impl Drop for ChildGuard {
    fn drop(&mut self) {
        if !self.reaped {
            if let Err(e) = self.child.wait() {
                warn!("Failed to reap child process {}: {}", self.child.id(), e);
            }
        }
    }
}

/// Bounded buffer of the most recent stderr output
struct StderrTail {
    bytes: Vec<u8>,
    max_lines: usize,
}

impl StderrTail {
    fn new(max_lines: usize) -> Self {
        Self {
            bytes: Vec::new(),
            max_lines,
        }
    }

    fn push(&mut self, chunk: &[u8]) {
        if self.max_lines == 0 {
            return;
        }
        self.bytes.extend_from_slice(chunk);
        if self.bytes.len() > 2 * MAX_TAIL_BYTES {
            let excess = self.bytes.len() - MAX_TAIL_BYTES;
            self.bytes.drain(..excess);
        }
    }

    /// Last `max_lines` non-empty lines. Carriage returns count as line
    /// breaks since progress output rewrites a single line with `\r`.
    fn finish(self) -> String {
        let text = String::from_utf8_lossy(&self.bytes);
        let lines: Vec<&str> = text
            .split(|c| c == '\n' || c == '\r')
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();
        let start = lines.len().saturating_sub(self.max_lines);
        lines[start..].join("\n")
    }
}
