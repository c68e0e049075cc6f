use std::result::Result as StdResult;

use thiserror::Error;
use winsnap_engine::Error as EngineError;

/// Errors that can occur during window operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Accessibility permission is required but not granted.
    #[error("Accessibility permission missing")]
    Permission,

    /// Failed to create an Accessibility API application element.
    #[error("Failed to create AX application element")]
    AppElement,

    /// No frontmost application, or it has no focused window.
    #[error("Focused window not available")]
    FocusedWindow,

    /// An Accessibility API operation failed with the given error code.
    #[error("AX operation failed: code {0}")]
    AxCode(i32),

    /// The AX element became invalid (e.g., window closed) during the operation.
    #[error("AX element invalid (window gone)")]
    WindowGone,

    /// Operation must be executed on the main thread.
    #[error("Operation requires main thread")]
    MainThread,

    /// The attribute or operation is not supported by the window or platform.
    #[error("Operation not supported")]
    Unsupported,
}

/// Result alias for window operations.
pub type Result<T> = StdResult<T, Error>;

impl From<Error> for EngineError {
    fn from(e: Error) -> Self {
        match e {
            Error::Permission => Self::Permission,
            Error::FocusedWindow | Error::WindowGone => Self::NoFocusedWindow,
            other => Self::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_engine_errors() {
        assert_eq!(EngineError::from(Error::Permission), EngineError::Permission);
        assert_eq!(
            EngineError::from(Error::WindowGone),
            EngineError::NoFocusedWindow
        );
        assert_eq!(
            EngineError::from(Error::AxCode(-25200)),
            EngineError::Backend("AX operation failed: code -25200".into())
        );
    }
}
