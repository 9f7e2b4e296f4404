//! Response normalisation for upstream envelopes.
//!
//! The two read paths deliberately fail differently. A list fetch that fails
//! for any reason yields an empty collection, so "no data" and "nothing found"
//! look the same to callers. A by-id fetch surfaces the failure as not found.

use serde_json::Value;
use tracing::{info, warn};

use super::EmployeeRecord;
use super::ports::{CreateAck, EmployeeSourceError, Envelope};

/// Failure to unwrap an upstream envelope.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizationError {
    /// The by-id envelope was not a success or carried no record.
    #[error("employee {id} not found")]
    NotFound {
        /// Identifier that was looked up.
        id: String,
    },
    /// The create acknowledgement lacked a usable status.
    #[error("upstream acknowledgement has no status")]
    InvalidAck,
}

/// Unwrap a list envelope, degrading every failure to an empty list.
///
/// # Examples
/// ```
/// use employee_directory::domain::normalize_list;
/// use employee_directory::domain::ports::{EmployeeSourceError, Envelope};
///
/// let failed = normalize_list(Err(EmployeeSourceError::connect("refused")));
/// assert!(failed.is_empty());
///
/// let rejected = normalize_list(Ok(Envelope::without_data("failure")));
/// assert!(rejected.is_empty());
/// ```
pub fn normalize_list(
    result: Result<Envelope<Vec<EmployeeRecord>>, EmployeeSourceError>,
) -> Vec<EmployeeRecord> {
    match result {
        Ok(envelope) => {
            let status = envelope.status.clone();
            if let Some(records) = envelope.into_success_payload() {
                info!(count = records.len(), "retrieved employees");
                records
            } else {
                warn!(status = ?status, "employee list envelope not successful; returning empty list");
                Vec::new()
            }
        }
        Err(error) => {
            warn!(error_kind = error.kind(), %error, "employee list fetch failed; returning empty list");
            Vec::new()
        }
    }
}

/// Unwrap a single-record envelope.
///
/// # Errors
///
/// Returns [`NormalizationError::NotFound`] when the status is not the success
/// marker or the record is missing.
pub fn normalize_record(
    envelope: Envelope<EmployeeRecord>,
    id: &str,
) -> Result<EmployeeRecord, NormalizationError> {
    let status = envelope.status.clone();
    envelope.into_success_payload().ok_or_else(|| {
        warn!(employee_id = id, status = ?status, "employee envelope not successful");
        NormalizationError::NotFound { id: id.to_owned() }
    })
}

/// Extract the status string from a create acknowledgement, verbatim.
///
/// # Errors
///
/// Returns [`NormalizationError::InvalidAck`] when `status` is missing, not a
/// string, or empty.
pub fn normalize_ack(ack: &CreateAck) -> Result<String, NormalizationError> {
    match ack.get("status") {
        Some(Value::String(status)) if !status.is_empty() => Ok(status.clone()),
        _ => Err(NormalizationError::InvalidAck),
    }
}
