//! Driving port for the employee directory.
//!
//! Inbound adapters call this port; `EmployeeDirectoryService` implements it
//! over an [`EmployeeSource`](super::EmployeeSource).

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{AggregateError, EmployeeRecord, Error, NewEmployee};

/// Failures raised by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    /// No employee exists for the identifier, or the upstream said so.
    #[error("employee {id} not found")]
    NotFound { id: String },
    /// The upstream could not be reached.
    #[error("employee api unavailable: {message}")]
    UpstreamUnavailable { message: String },
    /// The upstream answered with something unusable.
    #[error("employee api error: {message}")]
    UpstreamError { message: String },
    /// The upstream rejected a mutation with this HTTP status.
    #[error("employee api rejected the request with status {status}: {message}")]
    UpstreamStatus { status: u16, message: String },
    /// A salary-based view hit a malformed salary.
    #[error(transparent)]
    AggregateParse(#[from] AggregateError),
    /// The create acknowledgement carried no usable status.
    #[error("employee api acknowledgement has no status")]
    InvalidUpstreamAck,
}

impl From<DirectoryError> for Error {
    fn from(value: DirectoryError) -> Self {
        let message = value.to_string();
        match value {
            DirectoryError::NotFound { .. } => Error::not_found(message),
            DirectoryError::UpstreamUnavailable { .. } => Error::service_unavailable(message),
            DirectoryError::UpstreamError { .. } | DirectoryError::InvalidUpstreamAck => {
                Error::upstream(message)
            }
            DirectoryError::UpstreamStatus { status, .. } => {
                let error = if (400..500).contains(&status) {
                    Error::invalid_request(message)
                } else {
                    Error::upstream(message)
                };
                error.with_details(json!({ "upstreamStatus": status }))
            }
            DirectoryError::AggregateParse(_) => Error::internal(message),
        }
    }
}

/// Port exposing the directory use cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeDirectory: Send + Sync {
    /// Every employee the upstream reports; empty when the fetch fails.
    async fn list_all(&self) -> Vec<EmployeeRecord>;

    /// One employee by identifier.
    async fn get_by_id(&self, id: &str) -> Result<EmployeeRecord, DirectoryError>;

    /// Employees whose name contains `fragment`, ignoring case.
    async fn search(&self, fragment: &str) -> Vec<EmployeeRecord>;

    /// Highest salary across all employees.
    async fn max_salary(&self) -> Result<i64, DirectoryError>;

    /// Names of the ten best-paid employees, highest first.
    async fn top_ten(&self) -> Result<Vec<String>, DirectoryError>;

    /// Create an employee and return the upstream status verbatim.
    async fn create(&self, employee: NewEmployee) -> Result<String, DirectoryError>;

    /// Delete an employee and return the name it had.
    async fn delete_by_id(&self, id: &str) -> Result<String, DirectoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(DirectoryError::NotFound { id: "7".into() }, ErrorCode::NotFound)]
    #[case(DirectoryError::UpstreamUnavailable { message: "refused".into() }, ErrorCode::ServiceUnavailable)]
    #[case(DirectoryError::UpstreamError { message: "bad body".into() }, ErrorCode::UpstreamError)]
    #[case(DirectoryError::InvalidUpstreamAck, ErrorCode::UpstreamError)]
    #[case(DirectoryError::UpstreamStatus { status: 422, message: "no".into() }, ErrorCode::InvalidRequest)]
    #[case(DirectoryError::UpstreamStatus { status: 503, message: "down".into() }, ErrorCode::UpstreamError)]
    #[case(
        DirectoryError::AggregateParse(AggregateError::SalaryParse { id: "1".into(), value: "x".into() }),
        ErrorCode::InternalError
    )]
    fn directory_errors_map_to_api_codes(#[case] error: DirectoryError, #[case] code: ErrorCode) {
        assert_eq!(Error::from(error).code(), code);
    }

    #[rstest]
    #[case(429)]
    #[case(500)]
    fn upstream_status_is_forwarded_in_details(#[case] status: u16) {
        let error = Error::from(DirectoryError::UpstreamStatus {
            status,
            message: "rejected".into(),
        });
        assert_eq!(error.details(), Some(&json!({ "upstreamStatus": status })));
    }

    #[rstest]
    fn not_found_message_names_the_identifier() {
        let error = Error::from(DirectoryError::NotFound { id: "42".into() });
        assert_eq!(error.message(), "employee 42 not found");
        assert!(error.details().is_none());
    }
}
