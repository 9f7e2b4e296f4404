//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep
//! domain types free of utoipa derives.
//!
//! The generated specification is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::employees::{CreateEmployeeBody, EmployeeBody};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee directory API",
        description = "Gateway over the upstream employee REST API with search and salary aggregates."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::employees::list_employees,
        crate::inbound::http::employees::search_employees,
        crate::inbound::http::employees::highest_salary,
        crate::inbound::http::employees::top_ten_earners,
        crate::inbound::http::employees::get_employee,
        crate::inbound::http::employees::create_employee,
        crate::inbound::http::employees::delete_employee,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(EmployeeBody, CreateEmployeeBody, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "employees", description = "Employee directory operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated OpenAPI document.

    use super::*;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn employee_schema_uses_upstream_field_names() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let employee = schemas.get("EmployeeBody").expect("EmployeeBody schema");

        assert_object_schema_has_field(employee, "employee_name");
        assert_object_schema_has_field(employee, "employee_salary");
    }

    #[test]
    fn every_employee_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v1/employees",
            "/api/v1/employees/search/{searchString}",
            "/api/v1/employees/highestSalary",
            "/api/v1/employees/topTenHighestEarningEmployeeNames",
            "/api/v1/employees/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
