//! Library surface of the Votelytics CLI
//!
//! Exposed so integration tests can exercise configuration loading and
//! output formatting directly.

pub mod config;
pub mod output;
pub mod paths;
