//! The single error type returned by service operations.

use std::error::Error;
use std::fmt;

use toroid_core::{RuleError, SessionError};
use toroid_engine::ConfigError;

use crate::status::ServiceStatus;

/// A failed operation: a stable status code plus a descriptive message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceError {
    /// Machine-readable code. Never [`ServiceStatus::Ok`].
    pub status: ServiceStatus,
    /// Human-readable description.
    pub message: String,
}

impl ServiceError {
    /// An [`ServiceStatus::InvalidArgument`] error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self {
            status: ServiceStatus::InvalidArgument,
            message: message.into(),
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.status, self.message)
    }
}

impl Error for ServiceError {}

impl From<SessionError> for ServiceError {
    fn from(e: SessionError) -> Self {
        Self {
            status: ServiceStatus::from(&e),
            message: e.to_string(),
        }
    }
}

impl From<RuleError> for ServiceError {
    fn from(e: RuleError) -> Self {
        Self {
            status: ServiceStatus::from(&e),
            message: e.to_string(),
        }
    }
}

impl From<ConfigError> for ServiceError {
    fn from(e: ConfigError) -> Self {
        Self {
            status: ServiceStatus::from(&e),
            message: e.to_string(),
        }
    }
}
