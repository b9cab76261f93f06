//! Payslip endpoints. Payslips are assembled fresh per request from the
//! locked monthly table; nothing is persisted here.

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::payslips::repositories::MonthlyRecordRepository;
use crate::modules::payslips::services::PayslipAssembler;

/// Assemble one employee's payslip for a month
///
/// GET /payslips/{code}/{month}/{year}
pub async fn get_payslip(
    pool: web::Data<MySqlPool>,
    path: web::Path<(String, String, i32)>,
) -> Result<HttpResponse> {
    let (employee_code, month, year) = path.into_inner();

    let employee = EmployeeRepository::new(pool.get_ref().clone())
        .find_by_code(&employee_code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee '{}'", employee_code)))?;

    let record = MonthlyRecordRepository::new(pool.get_ref().clone())
        .find_locked(&employee_code, &month, year)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!(
                "No locked payroll for '{}' in {} {}",
                employee_code, month, year
            ))
        })?;

    let payslip = PayslipAssembler::assemble(&record, &employee)?;

    Ok(HttpResponse::Ok().json(payslip))
}

/// Configure payslip routes
pub fn configure_payslip_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payslips")
            .route("/{code}/{month}/{year}", web::get().to(get_payslip)),
    );
}
