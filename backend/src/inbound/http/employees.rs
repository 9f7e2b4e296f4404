//! Employee directory HTTP handlers.
//!
//! ```text
//! GET    /api/v1/employees
//! GET    /api/v1/employees/search/{searchString}
//! GET    /api/v1/employees/highestSalary
//! GET    /api/v1/employees/topTenHighestEarningEmployeeNames
//! GET    /api/v1/employees/{id}
//! POST   /api/v1/employees
//! DELETE /api/v1/employees/{id}
//! ```
//!
//! Literal paths must be registered before `{id}`; [`configure`] does so.

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{EmployeeRecord, NewEmployee};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::json_payload_error;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_employee_id};

/// Employee as returned to callers, using the upstream field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeBody {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Tiger Nixon")]
    pub employee_name: String,
    #[schema(example = "320800")]
    pub employee_salary: String,
    #[schema(example = "61")]
    pub employee_age: String,
    pub profile_image: Option<String>,
}

impl From<EmployeeRecord> for EmployeeBody {
    fn from(value: EmployeeRecord) -> Self {
        Self {
            id: value.id,
            employee_name: value.name,
            employee_salary: value.salary,
            employee_age: value.age,
            profile_image: value.profile_image,
        }
    }
}

/// Request payload for creating an employee. Absent fields are sent as empty
/// text.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateEmployeeBody {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "1000")]
    pub salary: Option<String>,
    #[schema(example = "30")]
    pub age: Option<String>,
}

impl From<CreateEmployeeBody> for NewEmployee {
    fn from(value: CreateEmployeeBody) -> Self {
        Self {
            name: value.name.unwrap_or_default(),
            salary: value.salary.unwrap_or_default(),
            age: value.age.unwrap_or_default(),
        }
    }
}

fn into_bodies(records: Vec<EmployeeRecord>) -> Vec<EmployeeBody> {
    records.into_iter().map(EmployeeBody::from).collect()
}

/// Register the employee routes in matching order.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_payload_error))
        .service(list_employees)
        .service(search_employees)
        .service(highest_salary)
        .service(top_ten_earners)
        .service(get_employee)
        .service(create_employee)
        .service(delete_employee);
}

/// List every employee. An unreachable upstream yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees", body = [EmployeeBody])
    ),
    tags = ["employees"],
    operation_id = "listEmployees"
)]
#[get("/employees")]
pub async fn list_employees(state: web::Data<HttpState>) -> web::Json<Vec<EmployeeBody>> {
    web::Json(into_bodies(state.directory.list_all().await))
}

/// Find employees whose name contains the search string, ignoring case.
#[utoipa::path(
    get,
    path = "/api/v1/employees/search/{searchString}",
    params(("searchString" = String, Path, description = "Name fragment")),
    responses(
        (status = 200, description = "Matching employees", body = [EmployeeBody])
    ),
    tags = ["employees"],
    operation_id = "searchEmployees"
)]
#[get("/employees/search/{search_string}")]
pub async fn search_employees(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> web::Json<Vec<EmployeeBody>> {
    let fragment = path.into_inner();
    web::Json(into_bodies(state.directory.search(&fragment).await))
}

/// Highest salary across all employees; 0 when there are none.
#[utoipa::path(
    get,
    path = "/api/v1/employees/highestSalary",
    responses(
        (status = 200, description = "Highest salary", body = i64),
        (status = 500, description = "A salary could not be parsed", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "highestSalary"
)]
#[get("/employees/highestSalary")]
pub async fn highest_salary(state: web::Data<HttpState>) -> ApiResult<web::Json<i64>> {
    Ok(web::Json(state.directory.max_salary().await?))
}

/// Names of the ten best-paid employees, highest first.
#[utoipa::path(
    get,
    path = "/api/v1/employees/topTenHighestEarningEmployeeNames",
    responses(
        (status = 200, description = "Top earner names", body = [String]),
        (status = 500, description = "A salary could not be parsed", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "topTenHighestEarningEmployeeNames"
)]
#[get("/employees/topTenHighestEarningEmployeeNames")]
pub async fn top_ten_earners(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<String>>> {
    Ok(web::Json(state.directory.top_ten().await?))
}

/// Fetch one employee by numeric identifier.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = String, Path, description = "Numeric employee identifier")),
    responses(
        (status = 200, description = "Employee", body = EmployeeBody),
        (status = 400, description = "Identifier is not numeric", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 502, description = "Upstream error", body = ErrorSchema),
        (status = 503, description = "Upstream unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "getEmployeeById"
)]
#[get("/employees/{id}")]
pub async fn get_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<EmployeeBody>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    let record = state.directory.get_by_id(&id).await?;
    Ok(web::Json(EmployeeBody::from(record)))
}

/// Create an employee upstream and return the upstream status verbatim.
#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = CreateEmployeeBody,
    responses(
        (status = 200, description = "Upstream acknowledgement status", body = String),
        (status = 400, description = "Upstream rejected the request", body = ErrorSchema),
        (status = 502, description = "Upstream error", body = ErrorSchema),
        (status = 503, description = "Upstream unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "createEmployee"
)]
#[post("/employees")]
pub async fn create_employee(
    state: web::Data<HttpState>,
    payload: web::Json<CreateEmployeeBody>,
) -> ApiResult<web::Json<String>> {
    let employee = NewEmployee::from(payload.into_inner());
    debug!(name = %employee.name, "create employee requested");
    Ok(web::Json(state.directory.create(employee).await?))
}

/// Delete an employee by numeric identifier and return the deleted name.
#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = String, Path, description = "Numeric employee identifier")),
    responses(
        (status = 200, description = "Name of the deleted employee", body = String),
        (status = 400, description = "Identifier is not numeric or upstream rejected the request", body = ErrorSchema),
        (status = 404, description = "Employee not found", body = ErrorSchema),
        (status = 502, description = "Upstream error", body = ErrorSchema),
        (status = 503, description = "Upstream unavailable", body = ErrorSchema)
    ),
    tags = ["employees"],
    operation_id = "deleteEmployeeById"
)]
#[delete("/employees/{id}")]
pub async fn delete_employee(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<String>> {
    let id = parse_employee_id(path.into_inner(), FieldName::new("id"))?;
    Ok(web::Json(state.directory.delete_by_id(&id).await?))
}

#[cfg(test)]
#[path = "employees_tests.rs"]
mod tests;
