//! Error types and context management for generator operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generator operations
#[derive(Debug)]
pub enum GeneratorError {
    /// Generator argument validation failed
    ///
    /// Raised before any index state is built, e.g. when:
    /// - `catch_len` is negative and not the full-length sentinel
    /// - the selection is longer than the source for a selection without replacement
    /// - a cycle is built from an empty collection
    InvalidParameter {
        /// Generator entry point that rejected the argument
        operation: &'static str,
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to write generated tuples
    Output {
        /// Destination file, `None` for standard output
        path: Option<PathBuf>,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                operation,
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid parameter '{parameter}' = '{value}' in {operation}: {reason}"
                )
            }
            Self::Output { path, source } => match path {
                Some(path) => write!(f, "Failed to write to '{}': {source}", path.display()),
                None => write!(f, "Failed to write to standard output: {source}"),
            },
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for generator results
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Attributes errors to the generator entry point that raised them
pub trait WithContext<T> {
    /// Record the operation on parameter errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GeneratorError>,
{
    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            if let GeneratorError::InvalidParameter { operation: op, .. } = &mut error {
                *op = operation;
            }
            error
        })
    }
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            path: None,
            source: err,
        }
    }
}

/// Create an invalid parameter error not yet attributed to an operation
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GeneratorError {
    GeneratorError::InvalidParameter {
        operation: "unknown",
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
