//! Command construction for the external media tool

pub mod command;

pub use command::{build_invocation, CommandInvocation};
