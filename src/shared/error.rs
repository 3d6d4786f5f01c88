use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for the `bom-tree` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Tree rendered (an empty tree still counts as success)
    Success = 0,
    /// BOM could not be loaded, config was invalid, or output could not be written
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while loading a bill of materials or presenting the tree.
///
/// The tree core itself never fails; these all come from the adapters and
/// the binary around it.
#[derive(Debug, Error)]
pub enum BomTreeError {
    #[error("Bill of materials not found: {path}\n\n💡 Hint: {suggestion}")]
    BomNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read bill of materials data: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a CycloneDX JSON document")]
    BomParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
