//! Derived views over an already-fetched employee collection.
//!
//! Everything here is pure. Salary-based views parse every salary before
//! producing a result: one malformed record fails the whole aggregate rather
//! than being skipped.

use super::EmployeeRecord;

/// Number of names returned by the top earners view.
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Failure while deriving a salary-based view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// A salary could not be parsed as an integer.
    #[error("employee {id} has a non-integer salary {value:?}")]
    SalaryParse {
        /// Identifier of the offending record.
        id: String,
        /// Raw salary text.
        value: String,
    },
}

fn parsed_salary(record: &EmployeeRecord) -> Result<i64, AggregateError> {
    record
        .salary_amount()
        .map_err(|_| AggregateError::SalaryParse {
            id: record.id.clone(),
            value: record.salary.clone(),
        })
}

/// Return the records whose name contains `fragment`, ignoring case.
///
/// Relative order is preserved and an empty fragment matches everything.
///
/// # Examples
/// ```
/// use employee_directory::domain::{EmployeeRecord, search_by_name};
///
/// let records = vec![
///     EmployeeRecord::new("1", "Tiger Nixon", "320800", "61"),
///     EmployeeRecord::new("2", "Garrett Winters", "170750", "63"),
/// ];
/// let found = search_by_name(&records, "NIX");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Tiger Nixon");
/// ```
#[must_use]
pub fn search_by_name(records: &[EmployeeRecord], fragment: &str) -> Vec<EmployeeRecord> {
    let needle = fragment.to_lowercase();
    records
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Return the highest salary, or 0 for an empty collection.
///
/// # Errors
///
/// Returns [`AggregateError::SalaryParse`] when any salary is not an integer.
pub fn max_salary(records: &[EmployeeRecord]) -> Result<i64, AggregateError> {
    let mut best: Option<i64> = None;
    for record in records {
        let salary = parsed_salary(record)?;
        best = Some(best.map_or(salary, |current| current.max(salary)));
    }
    Ok(best.unwrap_or(0))
}

/// Return the names of the `limit` best-paid employees, highest first.
///
/// Equal salaries keep their original relative order.
///
/// # Errors
///
/// Returns [`AggregateError::SalaryParse`] when any salary is not an integer,
/// including salaries that would fall outside the returned slice.
pub fn top_earners(records: &[EmployeeRecord], limit: usize) -> Result<Vec<String>, AggregateError> {
    let mut ranked = records
        .iter()
        .map(|record| parsed_salary(record).map(|salary| (salary, record)))
        .collect::<Result<Vec<_>, _>>()?;
    // `sort_by` is stable, so ties keep upstream order.
    ranked.sort_by(|(left, _), (right, _)| right.cmp(left));
    Ok(ranked
        .into_iter()
        .take(limit)
        .map(|(_, record)| record.name.clone())
        .collect())
}
