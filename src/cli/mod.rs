//! Terminal front-end: collects movements from the user and displays the ledger.

pub mod commands;
pub mod core;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV};
