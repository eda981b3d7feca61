//! Error types for the planck launcher.
//!
//! Uses thiserror for derive macros. Every variant maps to a process exit code.

use crate::evaluator::EvalFailure;
use crate::exit_codes;
use thiserror::Error;

/// Main error type for launcher operations.
#[derive(Error, Debug)]
pub enum LaunchError {
    /// Option grammar violation reported by clap (unknown option, missing
    /// value, conflicting options, invalid enum value). Also carries the
    /// help and version displays, which are not failures.
    #[error(transparent)]
    Cli(#[from] clap::Error),

    /// Usage error detected after clap accepted the arguments.
    #[error("{0}")]
    Usage(String),

    /// Reading script source or writing launcher output failed.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// The evaluator reported a failure; its status becomes the exit code.
    #[error("evaluation failed with status {status}")]
    Evaluation { status: i32 },
}

impl LaunchError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::Cli(err) if !err.use_stderr() => exit_codes::SUCCESS,
            LaunchError::Cli(_) => exit_codes::USER_ERROR,
            LaunchError::Usage(_) => exit_codes::USER_ERROR,
            LaunchError::Io { .. } => exit_codes::USER_ERROR,
            LaunchError::Evaluation { status } => *status,
        }
    }
}

impl From<EvalFailure> for LaunchError {
    fn from(failure: EvalFailure) -> Self {
        LaunchError::Evaluation {
            status: failure.status,
        }
    }
}

/// Result type alias for launcher operations.
pub type Result<T> = std::result::Result<T, LaunchError>;
