use actix_web::{web, HttpResponse};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repositories::EmployeeRepository;
use crate::services::employee_service::EmployeeService;
use crate::utils::validation::{query_error_handler, validate_payload};

#[derive(Deserialize, Validate)]
pub struct EmployeeSearchParams {
    #[validate(length(min = 1))]
    search: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct EmployeeResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        EmployeeResponse {
            id: employee.id,
            name: employee.name,
            email: employee.email,
            department: employee.department,
            designation: employee.designation,
            date_of_joining: employee.date_of_joining,
        }
    }
}

/// Mounts the search route under `path` (`""` mounts it at the root).
pub fn configure(cfg: &mut web::ServiceConfig, path: &str) {
    cfg.app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .service(
            web::scope(path)
                .route("", web::get().to(search_employees))
                .route("/", web::get().to(search_employees)),
        );
}

pub async fn search_employees(
    repo: web::Data<dyn EmployeeRepository>,
    query: web::Query<EmployeeSearchParams>,
) -> Result<HttpResponse, AppError> {
    validate_payload(&query.0)?;

    let employees =
        EmployeeService::search_employees(repo.get_ref(), Some(query.search.as_str())).await?;

    let body: Vec<EmployeeResponse> = employees.into_iter().map(EmployeeResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}
