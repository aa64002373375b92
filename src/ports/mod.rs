// Ports - Interface definitions (contracts)

use std::time::Duration;

use crate::engine::CommandInvocation;
use crate::error::WmarkResult;

/// Port for running the external media tool
pub trait ExecutePort: Send + Sync {
    /// Run the invocation to completion. Blocks until the child has exited.
    fn execute(&self, invocation: &CommandInvocation) -> WmarkResult<ExecutionReport>;
}

/// Outcome of a successful tool run
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionReport {
    pub exit_code: Option<i32>,
    pub elapsed: Duration,
}
