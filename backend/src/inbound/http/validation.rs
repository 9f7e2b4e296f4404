//! Shared validation helpers for inbound HTTP adapters.

use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidEmployeeId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidEmployeeId => "invalid_employee_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_code(self, code: ErrorCode) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "code": code.as_str(),
        }))
    }
}

/// Accept an employee identifier made only of ASCII digits.
pub(crate) fn parse_employee_id(value: String, field: FieldName) -> Result<String, Error> {
    if !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit()) {
        Ok(value)
    } else {
        Err(ValidationError::new(
            field.as_str(),
            format!("{} must be a positive integer", field.as_str()),
        )
        .with_code(ErrorCode::InvalidEmployeeId))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as ApiErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("1")]
    #[case("007")]
    #[case("12345678901234567890")]
    fn digit_strings_are_accepted(#[case] raw: &str) {
        assert_eq!(
            parse_employee_id(raw.to_owned(), FieldName::new("id")),
            Ok(raw.to_owned())
        );
    }

    #[rstest]
    #[case("")]
    #[case("abc")]
    #[case("-1")]
    #[case("1.5")]
    #[case(" 1")]
    #[case("١٢")]
    fn other_strings_are_rejected_with_field_details(#[case] raw: &str) {
        let error = parse_employee_id(raw.to_owned(), FieldName::new("id"))
            .expect_err("identifier must be rejected");
        assert_eq!(error.code(), ApiErrorCode::InvalidRequest);
        assert_eq!(
            error.details(),
            Some(&json!({"field": "id", "code": "invalid_employee_id"}))
        );
    }
}
