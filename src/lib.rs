//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `blockfall::{core,input,term,types}` and hosts the binary's runtime
//! configuration and event log.

pub mod config;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::RunConfig;
pub use event_log::{EventLog, LogRecord};
