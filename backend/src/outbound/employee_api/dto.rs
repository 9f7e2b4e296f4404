//! DTOs for the upstream employee API wire format.
//!
//! The upstream is loose about types: numeric fields arrive as numbers or
//! strings and may be null. Decoding here is lenient and converts everything
//! to text so the domain never sees wire quirks.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::ports::Envelope;
use crate::domain::{EmployeeRecord, NewEmployee};

#[derive(Debug, Deserialize)]
pub(super) struct EnvelopeDto<T> {
    pub(super) status: Option<String>,
    pub(super) data: Option<T>,
}

impl<T> EnvelopeDto<T> {
    pub(super) fn into_domain<U>(self, convert: impl FnOnce(T) -> U) -> Envelope<U> {
        Envelope {
            status: self.status,
            data: self.data.map(convert),
        }
    }
}

/// Upstream employee record. Long (`employee_name`) and short (`name`)
/// spellings decode into separate slots; the long form wins when both appear.
#[derive(Debug, Deserialize)]
pub(super) struct EmployeeDto {
    #[serde(default, deserialize_with = "lenient_text")]
    pub(super) id: String,
    #[serde(default, deserialize_with = "optional_text")]
    employee_name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    employee_salary: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    salary: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    employee_age: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    age: Option<String>,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub(super) profile_image: Option<String>,
}

impl From<EmployeeDto> for EmployeeRecord {
    fn from(value: EmployeeDto) -> Self {
        Self {
            id: value.id,
            name: value.employee_name.or(value.name).unwrap_or_default(),
            salary: value.employee_salary.or(value.salary).unwrap_or_default(),
            age: value.employee_age.or(value.age).unwrap_or_default(),
            profile_image: value.profile_image,
        }
    }
}

/// Request body for the upstream create call.
#[derive(Debug, Serialize)]
pub(super) struct CreateEmployeeDto<'a> {
    pub(super) name: &'a str,
    pub(super) salary: &'a str,
    pub(super) age: &'a str,
}

impl<'a> From<&'a NewEmployee> for CreateEmployeeDto<'a> {
    fn from(value: &'a NewEmployee) -> Self {
        Self {
            name: &value.name,
            salary: &value.salary,
            age: &value.age,
        }
    }
}

fn text_from_value<E: serde::de::Error>(value: Value) -> Result<Option<String>, E> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text)),
        Value::Number(number) => Ok(Some(number.to_string())),
        other => Err(E::custom(format!("expected text or number, found {other}"))),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value::<D::Error>(value)?.unwrap_or_default())
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    text_from_value::<D::Error>(value)
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value::<D::Error>(value)?.filter(|image| !image.is_empty()))
}
