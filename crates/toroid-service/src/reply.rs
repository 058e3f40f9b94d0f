//! Flat reply envelope.

use crate::error::ServiceError;
use crate::status::ServiceStatus;

/// Status, message and optional body, as a transport would send them.
///
/// `body` is `Some` exactly when `status` is [`ServiceStatus::Ok`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reply<T> {
    /// Outcome code.
    pub status: ServiceStatus,
    /// Empty on success, the error description otherwise.
    pub message: String,
    /// The response body on success.
    pub body: Option<T>,
}

impl<T> Reply<T> {
    /// Turn the envelope back into a `Result`.
    pub fn into_result(self) -> Result<T, ServiceError> {
        match self.body {
            Some(body) if self.status.is_ok() => Ok(body),
            _ => Err(ServiceError {
                status: self.status,
                message: self.message,
            }),
        }
    }
}

impl<T> From<Result<T, ServiceError>> for Reply<T> {
    fn from(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(body) => Self {
                status: ServiceStatus::Ok,
                message: String::new(),
                body: Some(body),
            },
            Err(e) => Self {
                status: e.status,
                message: e.message,
                body: None,
            },
        }
    }
}
