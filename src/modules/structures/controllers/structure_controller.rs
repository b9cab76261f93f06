//! Salary structure endpoints: single assignment, bulk import, reads.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use sqlx::MySqlPool;

use crate::config::StatutoryRates;
use crate::core::{AppError, Result};
use crate::modules::components::repositories::ComponentRepository;
use crate::modules::employees::repositories::EmployeeRepository;
use crate::modules::structures::models::SalaryStructure;
use crate::modules::structures::repositories::StructureRepository;
use crate::modules::structures::services::{BulkReconciler, StructureCalculator};

#[derive(Debug, Deserialize)]
pub struct AssignStructureRequest {
    pub employee_code: String,
    pub monthly_gross: Decimal,
}

/// Assign (or replace) one employee's salary structure
///
/// POST /structures
pub async fn assign_structure(
    pool: web::Data<MySqlPool>,
    rates: web::Data<StatutoryRates>,
    payload: web::Json<AssignStructureRequest>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let employee_code = payload.employee_code.trim().to_string();

    if employee_code.is_empty() {
        return Err(AppError::validation("Employee code cannot be empty"));
    }
    if payload.monthly_gross <= Decimal::ZERO {
        return Err(AppError::validation("Monthly gross must be positive"));
    }

    let employees = EmployeeRepository::new(pool.get_ref().clone());
    if employees.find_by_code(&employee_code).await?.is_none() {
        return Err(AppError::not_found(format!("Employee '{}'", employee_code)));
    }

    // Registry is re-read on every run; master edits apply immediately
    let registry = ComponentRepository::new(pool.get_ref().clone())
        .load_registry()
        .await?;

    let breakdown = StructureCalculator::new(&registry, rates.get_ref()).compute(payload.monthly_gross);
    let structure = SalaryStructure::from_breakdown(employee_code, breakdown);

    StructureRepository::new(pool.get_ref().clone())
        .upsert(&structure)
        .await?;

    tracing::info!(
        "Assigned salary structure for {} (gross {})",
        structure.employee_code,
        structure.monthly_gross
    );

    Ok(HttpResponse::Ok().json(structure))
}

/// Bulk import of (employee code, monthly gross) spreadsheet rows
///
/// POST /structures/import
pub async fn import_structures(
    pool: web::Data<MySqlPool>,
    rates: web::Data<StatutoryRates>,
    payload: web::Json<Vec<serde_json::Map<String, Value>>>,
) -> Result<HttpResponse> {
    let rows = BulkReconciler::rows_from_sheet(&payload);

    let employees = EmployeeRepository::new(pool.get_ref().clone());
    let known_codes = employees.known_codes().await?;

    let registry = ComponentRepository::new(pool.get_ref().clone())
        .load_registry()
        .await?;

    let outcome = BulkReconciler::reconcile(&rows, &known_codes, &registry, rates.get_ref());

    // One atomic batch write; nothing is persisted before this point
    StructureRepository::new(pool.get_ref().clone())
        .upsert_batch(&outcome.accepted)
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "accepted_count": outcome.accepted.len(),
        "rejected_count": outcome.rejected.len(),
        "rejected": outcome.rejected,
    })))
}

/// List all salary structures
///
/// GET /structures
pub async fn list_structures(pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let structures = StructureRepository::new(pool.get_ref().clone())
        .list_all()
        .await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "structures": structures,
    })))
}

/// Get one employee's salary structure
///
/// GET /structures/{code}
pub async fn get_structure(
    pool: web::Data<MySqlPool>,
    code: web::Path<String>,
) -> Result<HttpResponse> {
    let structure = StructureRepository::new(pool.get_ref().clone())
        .find_by_code(&code)
        .await?;

    match structure {
        Some(structure) => Ok(HttpResponse::Ok().json(structure)),
        None => Err(AppError::not_found(format!(
            "Salary structure for '{}'",
            code
        ))),
    }
}

/// Configure salary structure routes
pub fn configure_structure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/structures")
            .route("", web::post().to(assign_structure))
            .route("", web::get().to(list_structures))
            .route("/import", web::post().to(import_structures))
            .route("/{code}", web::get().to(get_structure)),
    );
}
