//! Employee value types.
//!
//! Records mirror what the upstream employee API sends: every numeric quantity
//! arrives as text and stays text here. Numeric views are parsed on use so a
//! malformed salary only fails the operation that needs the number.

use std::num::ParseIntError;

/// One employee as reported by the upstream API.
///
/// ## Invariants
/// - None enforced locally; the upstream service is the sole authority.
/// - `salary` and `age` hold the upstream text verbatim.
///
/// # Examples
/// ```
/// use employee_directory::domain::EmployeeRecord;
///
/// let record = EmployeeRecord::new("1", "Tiger Nixon", "320800", "61");
/// assert_eq!(record.salary_amount(), Ok(320_800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeRecord {
    /// Upstream-assigned opaque identifier.
    pub id: String,
    /// Display name; may be empty.
    pub name: String,
    /// Salary as transmitted by the upstream API.
    pub salary: String,
    /// Age as transmitted by the upstream API.
    pub age: String,
    /// Opaque profile image reference.
    pub profile_image: Option<String>,
}

impl EmployeeRecord {
    /// Build a record without a profile image.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        salary: impl Into<String>,
        age: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            salary: salary.into(),
            age: age.into(),
            profile_image: None,
        }
    }

    /// Parse the salary text as an integer amount.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the text is not a base-10 integer.
    /// Surrounding whitespace is not tolerated.
    pub fn salary_amount(&self) -> Result<i64, ParseIntError> {
        self.salary.parse()
    }

    /// Parse the age text as whole years.
    ///
    /// # Errors
    ///
    /// Returns the parse error when the text is not a non-negative integer.
    pub fn age_years(&self) -> Result<u32, ParseIntError> {
        self.age.parse()
    }
}

/// Caller input for creating an employee upstream.
///
/// Fields are forwarded as text without local validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewEmployee {
    /// Display name.
    pub name: String,
    /// Salary text.
    pub salary: String,
    /// Age text.
    pub age: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("320800", Some(320_800))]
    #[case(" 170750 ", None)]
    #[case("+170750", Some(170_750))]
    #[case("0", Some(0))]
    #[case("12.5", None)]
    #[case("", None)]
    #[case("n/a", None)]
    fn salary_is_parsed_on_use(#[case] raw: &str, #[case] expected: Option<i64>) {
        let record = EmployeeRecord::new("1", "Tiger Nixon", raw, "61");
        assert_eq!(record.salary_amount().ok(), expected);
    }

    #[rstest]
    fn malformed_age_does_not_prevent_construction() {
        let record = EmployeeRecord::new("2", "Garrett Winters", "170750", "sixty");
        assert!(record.age_years().is_err());
        assert_eq!(record.salary_amount(), Ok(170_750));
    }
}
