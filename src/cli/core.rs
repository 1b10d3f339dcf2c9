//! Loop control and error types shared by the shell and its commands.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::errors::LedgerError;
use crate::form::FormError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single command. The shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{0}`.")]
    UnknownCommand(String),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure of the shell itself; ends the session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] LedgerError),
}
