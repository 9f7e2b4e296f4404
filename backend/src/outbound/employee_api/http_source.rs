//! Reqwest-backed employee API source adapter.
//!
//! This adapter owns transport details only: URL construction, request
//! serialisation, HTTP error mapping, and JSON decoding into domain records.
//! It performs exactly one request per call and never retries.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::dto::{CreateEmployeeDto, EmployeeDto, EnvelopeDto};
use crate::domain::ports::{CreateAck, EmployeeSource, EmployeeSourceError, Envelope};
use crate::domain::{EmployeeRecord, NewEmployee};

/// Base URL of the public dummy employee API.
pub const DEFAULT_BASE_URL: &str = "https://dummy.restapiexample.com/api/v1";
const USER_AGENT: &str = concat!("employee-directory/", env!("CARGO_PKG_VERSION"));

/// Errors raised while constructing the adapter.
#[derive(Debug, thiserror::Error)]
pub enum EmployeeApiSourceBuildError {
    /// The base URL cannot have path segments appended.
    #[error("employee api base url must be hierarchical: {0}")]
    InvalidBaseUrl(Url),
    /// The reqwest client could not be built.
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Employee source adapter issuing requests below one base URL.
pub struct EmployeeApiHttpSource {
    client: Client,
    base_url: Url,
}

impl EmployeeApiHttpSource {
    /// Build an adapter. `timeout` bounds each request; `None` keeps the
    /// transport default.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL cannot carry path segments or the
    /// reqwest client cannot be constructed.
    pub fn new(base_url: Url, timeout: Option<Duration>) -> Result<Self, EmployeeApiSourceBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(EmployeeApiSourceBuildError::InvalidBaseUrl(base_url));
        }
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, EmployeeSourceError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| EmployeeSourceError::connect("employee api base url is not hierarchical"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, EmployeeSourceError> {
        let response = request
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        Ok(body.to_vec())
    }
}

#[async_trait]
impl EmployeeSource for EmployeeApiHttpSource {
    async fn fetch_all(&self) -> Result<Envelope<Vec<EmployeeRecord>>, EmployeeSourceError> {
        let url = self.endpoint(&["employees"])?;
        let body = self.send(self.client.get(url)).await?;
        let envelope: EnvelopeDto<Vec<EmployeeDto>> = decode(&body)?;
        Ok(envelope.into_domain(|records| records.into_iter().map(Into::into).collect()))
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Envelope<EmployeeRecord>, EmployeeSourceError> {
        let url = self.endpoint(&["employee", id])?;
        let body = self.send(self.client.get(url)).await?;
        let envelope: EnvelopeDto<EmployeeDto> = decode(&body)?;
        Ok(envelope.into_domain(Into::into))
    }

    async fn create(&self, employee: &NewEmployee) -> Result<CreateAck, EmployeeSourceError> {
        let url = self.endpoint(&["create"])?;
        let request = self
            .client
            .post(url)
            .json(&CreateEmployeeDto::from(employee));
        let body = self.send(request).await?;
        decode(&body)
    }

    async fn delete(&self, id: &str) -> Result<(), EmployeeSourceError> {
        let url = self.endpoint(&["delete", id])?;
        self.send(self.client.delete(url)).await.map(drop)
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, EmployeeSourceError> {
    serde_json::from_slice(body).map_err(|error| {
        EmployeeSourceError::decode(format!(
            "invalid employee api payload: {error} (body: {})",
            body_preview(body)
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> EmployeeSourceError {
    EmployeeSourceError::connect(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> EmployeeSourceError {
    let preview = body_preview(body);
    let message = match (status.canonical_reason(), preview.is_empty()) {
        (Some(reason), true) => reason.to_owned(),
        (Some(reason), false) => format!("{reason}: {preview}"),
        (None, true) => format!("status {}", status.as_u16()),
        (None, false) => preview,
    };
    EmployeeSourceError::http_status(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let mut chars = compact.chars();
    let preview = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if chars.next().is_some() {
        format!("{preview}...")
    } else {
        preview
    }
}
