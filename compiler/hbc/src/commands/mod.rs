//! Command handlers for the `hb` CLI.
//!
//! Handlers return [`CommandError`] instead of exiting so the binary owns
//! process exit codes and tests can inspect failures.

mod debug;
mod run;

use std::path::PathBuf;

use hb_eval::RunError;
use hb_lexer::ParseError;

pub use debug::parse_file;
pub use run::{run_file, RunOptions};

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot find file '{}'", path.display())]
    NotFound { path: PathBuf },
    #[error("permission denied reading '{}'", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("'{}' contains invalid UTF-8 data", path.display())]
    InvalidUtf8 { path: PathBuf },
    #[error("error reading '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] hb_eval::EvalError),
}

impl From<RunError> for CommandError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Parse(err) => CommandError::Parse(err),
            RunError::Eval(err) => CommandError::Eval(err),
        }
    }
}

/// Read a source file, mapping I/O failures to user-facing messages.
pub(crate) fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(path).map_err(|source| {
        let path = PathBuf::from(path);
        match source.kind() {
            std::io::ErrorKind::NotFound => CommandError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied { path },
            std::io::ErrorKind::InvalidData => CommandError::InvalidUtf8 { path },
            _ => CommandError::Io { path, source },
        }
    })
}
