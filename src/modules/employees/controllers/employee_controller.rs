//! Employee directory endpoints (read-only).

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::employees::repositories::EmployeeRepository;

/// List all employees
///
/// GET /employees
pub async fn list_employees(pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let repository = EmployeeRepository::new(pool.get_ref().clone());
    let employees = repository.list_all().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "employees": employees,
    })))
}

/// Get one employee by code
///
/// GET /employees/{code}
pub async fn get_employee(
    pool: web::Data<MySqlPool>,
    code: web::Path<String>,
) -> Result<HttpResponse> {
    let repository = EmployeeRepository::new(pool.get_ref().clone());

    match repository.find_by_code(&code).await? {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(AppError::not_found(format!("Employee '{}'", code))),
    }
}

/// Configure employee routes
pub fn configure_employee_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/employees")
            .route("", web::get().to(list_employees))
            .route("/{code}", web::get().to(get_employee)),
    );
}
