//! Employee directory domain service.
//!
//! Composes the upstream source, envelope normalisation, and aggregation into
//! the use cases exposed by the [`EmployeeDirectory`] driving port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{DirectoryError, EmployeeDirectory, EmployeeSource, EmployeeSourceError};
use crate::domain::{
    EmployeeRecord, NewEmployee, NormalizationError, TOP_EARNERS_LIMIT, aggregation, envelope,
};

/// Classify a by-id lookup failure. Client errors mean the record is absent.
fn map_lookup_error(error: EmployeeSourceError, id: &str) -> DirectoryError {
    match error {
        EmployeeSourceError::Connect { message } => DirectoryError::UpstreamUnavailable { message },
        EmployeeSourceError::HttpStatus { status, .. } if (400..500).contains(&status) => {
            DirectoryError::NotFound { id: id.to_owned() }
        }
        other @ EmployeeSourceError::HttpStatus { .. } => DirectoryError::UpstreamError {
            message: other.to_string(),
        },
        EmployeeSourceError::Decode { message } => DirectoryError::UpstreamError { message },
    }
}

/// Classify a create or delete failure, forwarding the upstream status code.
fn map_mutation_error(error: EmployeeSourceError) -> DirectoryError {
    match error {
        EmployeeSourceError::Connect { message } => DirectoryError::UpstreamUnavailable { message },
        EmployeeSourceError::HttpStatus { status, message } => {
            DirectoryError::UpstreamStatus { status, message }
        }
        EmployeeSourceError::Decode { message } => DirectoryError::UpstreamError { message },
    }
}

fn map_normalization_error(error: NormalizationError) -> DirectoryError {
    match error {
        NormalizationError::NotFound { id } => DirectoryError::NotFound { id },
        NormalizationError::InvalidAck => DirectoryError::InvalidUpstreamAck,
    }
}

/// Directory service backed by an upstream employee source.
pub struct EmployeeDirectoryService<S> {
    source: Arc<S>,
}

// Manual impl so `S` itself need not be `Clone`.
impl<S> Clone for EmployeeDirectoryService<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

impl<S> EmployeeDirectoryService<S> {
    /// Create a service over the given source.
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

#[async_trait]
impl<S> EmployeeDirectory for EmployeeDirectoryService<S>
where
    S: EmployeeSource,
{
    async fn list_all(&self) -> Vec<EmployeeRecord> {
        debug!("listing employees");
        envelope::normalize_list(self.source.fetch_all().await)
    }

    async fn get_by_id(&self, id: &str) -> Result<EmployeeRecord, DirectoryError> {
        debug!(employee_id = id, "fetching employee");
        let response = self
            .source
            .fetch_by_id(id)
            .await
            .map_err(|err| map_lookup_error(err, id))?;
        let record = envelope::normalize_record(response, id).map_err(map_normalization_error)?;
        info!(employee_id = id, "retrieved employee");
        Ok(record)
    }

    async fn search(&self, fragment: &str) -> Vec<EmployeeRecord> {
        debug!(fragment, "searching employees by name");
        let matches = aggregation::search_by_name(&self.list_all().await, fragment);
        info!(fragment, count = matches.len(), "employee search complete");
        matches
    }

    async fn max_salary(&self) -> Result<i64, DirectoryError> {
        debug!("computing highest salary");
        let highest = aggregation::max_salary(&self.list_all().await)?;
        info!(highest, "computed highest salary");
        Ok(highest)
    }

    async fn top_ten(&self) -> Result<Vec<String>, DirectoryError> {
        debug!("ranking top earners");
        let names = aggregation::top_earners(&self.list_all().await, TOP_EARNERS_LIMIT)?;
        info!(count = names.len(), "ranked top earners");
        Ok(names)
    }

    async fn create(&self, employee: NewEmployee) -> Result<String, DirectoryError> {
        debug!(name = %employee.name, "creating employee");
        let ack = self
            .source
            .create(&employee)
            .await
            .map_err(map_mutation_error)?;
        let status = envelope::normalize_ack(&ack).map_err(map_normalization_error)?;
        info!(name = %employee.name, %status, "employee create acknowledged");
        Ok(status)
    }

    async fn delete_by_id(&self, id: &str) -> Result<String, DirectoryError> {
        debug!(employee_id = id, "deleting employee");
        let record = self.get_by_id(id).await?;
        self.source.delete(id).await.map_err(map_mutation_error)?;
        info!(employee_id = id, name = %record.name, "deleted employee");
        Ok(record.name)
    }
}

#[cfg(test)]
#[path = "employee_directory_service_tests.rs"]
mod tests;
