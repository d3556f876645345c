//! Line-oriented client for the intraday tracker.
//!
//! The binary wires these pieces together; they are exposed as a library so
//! the session loop can be driven from tests with in-memory readers/writers.

pub mod cli;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod session;
