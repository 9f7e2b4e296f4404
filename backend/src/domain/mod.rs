//! Domain primitives, ports, and services.
//!
//! Purpose: model employees as the upstream API reports them, define the
//! ports at the hexagon boundary, and compose them into directory use cases.
//! Nothing in here knows about actix or reqwest.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - EmployeeRecord / NewEmployee — employee value types.
//! - EmployeeDirectoryService — implementation of the directory driving port.

pub mod aggregation;
pub mod employee;
pub mod envelope;
pub mod error;
pub mod ports;
pub mod trace_id;

mod employee_directory_service;

pub use self::aggregation::{
    AggregateError, TOP_EARNERS_LIMIT, max_salary, search_by_name, top_earners,
};
pub use self::employee::{EmployeeRecord, NewEmployee};
pub use self::employee_directory_service::EmployeeDirectoryService;
pub use self::envelope::{NormalizationError, normalize_ack, normalize_list, normalize_record};
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
