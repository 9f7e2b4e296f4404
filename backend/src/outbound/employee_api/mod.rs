//! Upstream employee API outbound adapters.
//!
//! This module provides a thin HTTP implementation of the `EmployeeSource`
//! port.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_BASE_URL, EmployeeApiHttpSource, EmployeeApiSourceBuildError};
