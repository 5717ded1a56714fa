/*!
# Error Types for flowstream

Centralized error handling for stream construction and runtime failures.
*/

use crate::flowstream::datasource::options::OptionsError;
use thiserror::Error;

/// Main application error type
///
/// Validation failures surface synchronously from stream construction and
/// are unconditionally fatal. Runtime errors handed to `destroy` are never
/// thrown; they travel through the notification channel instead.
#[derive(Debug, Error)]
pub enum FlowStreamError {
    /// Invalid stream configuration
    #[error("configuration error: {0}")]
    Options(#[from] OptionsError),

    /// Generic application errors
    #[error("application error: {message}")]
    Application { message: String },
}

impl FlowStreamError {
    /// Helper to create application errors
    pub fn application(message: impl Into<String>) -> Self {
        Self::Application {
            message: message.into(),
        }
    }
}

/// Type alias for Results using FlowStreamError
pub type FlowStreamResult<T> = Result<T, FlowStreamError>;

/// Convert from standard Box<dyn std::error::Error> to FlowStreamError
impl From<Box<dyn std::error::Error + Send + Sync>> for FlowStreamError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        FlowStreamError::Application {
            message: err.to_string(),
        }
    }
}

impl From<Box<dyn std::error::Error>> for FlowStreamError {
    fn from(err: Box<dyn std::error::Error>) -> Self {
        FlowStreamError::Application {
            message: err.to_string(),
        }
    }
}
