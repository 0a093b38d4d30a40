//! Error handling for the zing probe

use thiserror::Error;

/// Custom error types for the zing probe
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (bad or missing CLI arguments)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Host/address lookup failures in the requested address family
    #[error("Resolution error: {0}")]
    Resolution(String),

    /// Unexpected runtime faults surfaced at the top level
    #[error("I/O error: {0}")]
    Io(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    /// Create a new resolution error
    pub fn resolution<S: Into<String>>(message: S) -> Self {
        Self::Resolution(message.into())
    }

    /// Create a new I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io(message.into())
    }

    /// Process exit code for this error. Every fatal error exits 1;
    /// probe timeouts never become errors, they degrade to the
    /// unavailable sample sentinel instead.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) | AppError::Resolution(_) | AppError::Io(_) => 1,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

/// Result type alias using our custom error
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_include_kind() {
        let err = AppError::config("bad port");
        assert_eq!(err.to_string(), "Configuration error: bad port");

        let err = AppError::resolution("no such host");
        assert_eq!(err.to_string(), "Resolution error: no such host");
    }

    #[test]
    fn all_errors_exit_nonzero() {
        assert_eq!(AppError::config("x").exit_code(), 1);
        assert_eq!(AppError::resolution("x").exit_code(), 1);
        assert_eq!(AppError::io("x").exit_code(), 1);
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: AppError = io.into();
        assert!(matches!(err, AppError::Io(_)));
    }
}
