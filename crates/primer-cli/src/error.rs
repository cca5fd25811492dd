//! CLI error type and exit codes.

use primer_core::ArithmeticError;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const IO_ERROR: i32 = 2;
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl CliError {
    /// Maps the error to the process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => exit_codes::IO_ERROR,
            Self::Arithmetic(_) => exit_codes::ERROR,
        }
    }
}
