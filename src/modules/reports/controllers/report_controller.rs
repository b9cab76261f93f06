//! Payroll reporting endpoints: monthly dashboard summary and the flat
//! register export.

use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use sqlx::MySqlPool;
use tracing::warn;

use crate::config::StatutoryRates;
use crate::core::Result;
use crate::modules::employees::models::Employee;
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::payslips::models::Payslip;
use crate::modules::payslips::repositories::MonthlyRecordRepository;
use crate::modules::payslips::services::PayslipAssembler;
use crate::modules::reports::services::ReportService;
use crate::modules::structures::repositories::StructureRepository;

/// Assemble every payslip for a month from the locked records and the
/// employee master. Records without a master row (or with an unparseable
/// month) are logged and skipped rather than failing the whole report.
async fn assemble_month(
    pool: &MySqlPool,
    month: &str,
    year: i32,
) -> Result<(Vec<Payslip>, HashMap<String, Employee>)> {
    let records = MonthlyRecordRepository::new(pool.clone())
        .list_locked(month, year)
        .await?;

    let employees: HashMap<String, Employee> = EmployeeRepository::new(pool.clone())
        .list_all()
        .await?
        .into_iter()
        .map(|employee| (employee.employee_code.clone(), employee))
        .collect();

    let mut payslips = Vec::with_capacity(records.len());
    for record in &records {
        let Some(employee) = employees.get(&record.employee_code) else {
            warn!(
                "Skipping locked record for '{}': no employee master row",
                record.employee_code
            );
            continue;
        };
        match PayslipAssembler::assemble(record, employee) {
            Ok(payslip) => payslips.push(payslip),
            Err(err) => warn!(
                "Skipping locked record for '{}': {}",
                record.employee_code, err
            ),
        }
    }

    Ok((payslips, employees))
}

/// Monthly dashboard summary with statutory rollups
///
/// GET /reports/summary/{month}/{year}
pub async fn payroll_summary(
    pool: web::Data<MySqlPool>,
    rates: web::Data<StatutoryRates>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse> {
    let (month, year) = path.into_inner();
    let (payslips, _) = assemble_month(pool.get_ref(), &month, year).await?;

    let summary = ReportService::summarize(&payslips, rates.get_ref());

    Ok(HttpResponse::Ok().json(summary))
}

/// Flat payroll register export rows
///
/// GET /reports/register/{month}/{year}
pub async fn payroll_register(
    pool: web::Data<MySqlPool>,
    path: web::Path<(String, i32)>,
) -> Result<HttpResponse> {
    let (month, year) = path.into_inner();
    let (payslips, employees) = assemble_month(pool.get_ref(), &month, year).await?;

    let structures = StructureRepository::new(pool.get_ref().clone())
        .list_all()
        .await?
        .into_iter()
        .map(|structure| (structure.employee_code.clone(), structure))
        .collect();

    let rows = ReportService::build_register(&payslips, &employees, &structures);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "rows": rows,
    })))
}

/// Configure report routes
pub fn configure_report_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reports")
            .route("/summary/{month}/{year}", web::get().to(payroll_summary))
            .route("/register/{month}/{year}", web::get().to(payroll_register)),
    );
}
