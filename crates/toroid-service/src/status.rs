//! Stable status codes for the service surface.
//!
//! [`ServiceStatus`] is a `repr(i32)` enum: `Ok` is 0 and every error is
//! negative. Values are stable across releases so transports can put them
//! on the wire as integers.

use toroid_core::{RuleError, SessionError};
use toroid_engine::ConfigError;

/// Outcome code attached to every reply.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ServiceStatus {
    /// Success.
    Ok = 0,
    /// Session dimensions failed validation.
    InvalidDimensions = -1,
    /// No live session has the requested ID.
    UnknownSession = -2,
    /// A rule encoding was not exactly 16 bytes.
    MalformedRuleEncoding = -3,
    /// An argument is out of range (rule number, timeout).
    InvalidArgument = -4,
}

impl ServiceStatus {
    /// Whether this is [`ServiceStatus::Ok`].
    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

impl From<&SessionError> for ServiceStatus {
    fn from(e: &SessionError) -> Self {
        match e {
            SessionError::InvalidDimensions { .. } => ServiceStatus::InvalidDimensions,
            SessionError::UnknownSession { .. } => ServiceStatus::UnknownSession,
        }
    }
}

impl From<&RuleError> for ServiceStatus {
    fn from(e: &RuleError) -> Self {
        match e {
            RuleError::MalformedEncoding { .. } => ServiceStatus::MalformedRuleEncoding,
        }
    }
}

impl From<&ConfigError> for ServiceStatus {
    fn from(_: &ConfigError) -> Self {
        ServiceStatus::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::{Dims, SessionId};

    #[test]
    fn codes_are_stable() {
        assert_eq!(ServiceStatus::Ok as i32, 0);
        assert_eq!(ServiceStatus::InvalidDimensions as i32, -1);
        assert_eq!(ServiceStatus::UnknownSession as i32, -2);
        assert_eq!(ServiceStatus::MalformedRuleEncoding as i32, -3);
        assert_eq!(ServiceStatus::InvalidArgument as i32, -4);
    }

    #[test]
    fn session_errors_map() {
        let dims = SessionError::InvalidDimensions {
            dims: Dims::new(3, 3, 3),
            mode: None,
            reason: "too small".into(),
        };
        assert_eq!(ServiceStatus::from(&dims), ServiceStatus::InvalidDimensions);
        let unknown = SessionError::UnknownSession { id: SessionId(1) };
        assert_eq!(ServiceStatus::from(&unknown), ServiceStatus::UnknownSession);
    }

    #[test]
    fn rule_and_config_errors_map() {
        let rule = RuleError::MalformedEncoding { len: 3 };
        assert_eq!(ServiceStatus::from(&rule), ServiceStatus::MalformedRuleEncoding);
        let config = ConfigError::InvalidTimeout { value: -1.0 };
        assert_eq!(ServiceStatus::from(&config), ServiceStatus::InvalidArgument);
    }
}
