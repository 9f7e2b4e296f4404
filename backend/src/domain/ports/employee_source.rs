//! Driven port for the upstream employee API.
//!
//! The upstream service is the system of record. Adapters perform exactly one
//! HTTP exchange per call and hand back the parsed envelope untouched; deciding
//! whether an envelope counts as success belongs to `domain::envelope`.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::define_port_error;
use crate::domain::{EmployeeRecord, NewEmployee};

/// Status marker the upstream API uses for successful envelopes.
pub const SUCCESS_STATUS: &str = "success";

/// Upstream response wrapper carrying a status marker and an optional payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope<T> {
    /// Status marker, normally `"success"` or `"failure"`.
    pub status: Option<String>,
    /// Payload, absent when the upstream omitted or nulled it.
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Build a success envelope around `data`.
    pub fn success(data: T) -> Self {
        Self {
            status: Some(SUCCESS_STATUS.to_owned()),
            data: Some(data),
        }
    }

    /// Build an envelope with the given status and no payload.
    pub fn without_data(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            data: None,
        }
    }

    /// Return the payload only when the status is the success marker.
    pub fn into_success_payload(self) -> Option<T> {
        match self.status.as_deref() {
            Some(SUCCESS_STATUS) => self.data,
            _ => None,
        }
    }
}

/// Opaque object returned by the upstream create call.
pub type CreateAck = Map<String, Value>;

define_port_error! {
    /// Errors surfaced while calling the upstream employee API.
    pub enum EmployeeSourceError {
        /// The request never produced a complete response.
        Connect { message: String } =>
            "employee api unreachable: {message}",
        /// The upstream answered with a non-success HTTP status.
        HttpStatus { status: u16, message: String } =>
            "employee api returned status {status}: {message}",
        /// The response body did not match the expected envelope.
        Decode { message: String } =>
            "employee api response decode failed: {message}",
    }
}

/// Port for the upstream employee API.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    /// Fetch the full employee collection.
    async fn fetch_all(&self) -> Result<Envelope<Vec<EmployeeRecord>>, EmployeeSourceError>;

    /// Fetch one employee by its upstream identifier.
    async fn fetch_by_id(&self, id: &str) -> Result<Envelope<EmployeeRecord>, EmployeeSourceError>;

    /// Ask the upstream to create an employee.
    async fn create(&self, employee: &NewEmployee) -> Result<CreateAck, EmployeeSourceError>;

    /// Ask the upstream to delete an employee. Any 2xx counts as done.
    async fn delete(&self, id: &str) -> Result<(), EmployeeSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Envelope::success(1), Some(1))]
    #[case(Envelope::without_data("success"), None)]
    #[case(Envelope { status: Some("failure".to_owned()), data: Some(1) }, None)]
    #[case(Envelope { status: None, data: Some(1) }, None)]
    fn success_payload_requires_marker_and_data(
        #[case] envelope: Envelope<i32>,
        #[case] expected: Option<i32>,
    ) {
        assert_eq!(envelope.into_success_payload(), expected);
    }

    #[rstest]
    #[case(EmployeeSourceError::connect("refused"), "connect")]
    #[case(EmployeeSourceError::http_status(503_u16, "down"), "http_status")]
    #[case(EmployeeSourceError::decode("eof"), "decode")]
    fn kinds_name_the_failure_class(#[case] error: EmployeeSourceError, #[case] kind: &str) {
        assert_eq!(error.kind(), kind);
    }
}
