//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod employee_directory;
mod employee_source;

#[cfg(test)]
pub use employee_directory::MockEmployeeDirectory;
pub use employee_directory::{DirectoryError, EmployeeDirectory};
#[cfg(test)]
pub use employee_source::MockEmployeeSource;
pub use employee_source::{
    CreateAck, EmployeeSource, EmployeeSourceError, Envelope, SUCCESS_STATUS,
};
