//! Structured error handling and exit codes.

use serde::Serialize;

use crate::session::{SessionError, ValidationError};

/// Exit codes for the namedupe application.
///
/// - 0: Success (completed normally, duplicates found)
/// - 1: General error (unexpected failure, scan aborted)
/// - 2: No duplicates found (completed normally, no duplicates)
/// - 3: Partial success (delete completed but some files could not be moved)
/// - 4: Invalid input (missing folder or extension selection)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: Scan completed and duplicates were found.
    Success = 0,
    /// General error: An unexpected error occurred.
    GeneralError = 1,
    /// No duplicates: Scan completed but no duplicates were found.
    NoDuplicates = 2,
    /// Partial success: Some files could not be moved to the trash.
    PartialSuccess = 3,
    /// Invalid input: validation failed before scanning.
    InvalidInput = 4,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "ND000",
            Self::GeneralError => "ND001",
            Self::NoDuplicates => "ND002",
            Self::PartialSuccess => "ND003",
            Self::InvalidInput => "ND004",
        }
    }

    /// Exit code for an error returned by the application.
    #[must_use]
    pub fn for_error(err: &anyhow::Error) -> Self {
        let is_validation = err.downcast_ref::<ValidationError>().is_some()
            || err
                .downcast_ref::<SessionError>()
                .is_some_and(|e| matches!(e, SessionError::Validation(_)));
        if is_validation {
            Self::InvalidInput
        } else {
            Self::GeneralError
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "ND001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            message: err.to_string(),
        }
    }
}
