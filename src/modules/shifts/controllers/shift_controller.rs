//! Shift endpoints: listing and bulk import.

use actix_web::{web, HttpResponse};
use serde_json::Value;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::shifts::repositories::ShiftRepository;
use crate::modules::shifts::services::ShiftImporter;

/// List all shifts
///
/// GET /shifts
pub async fn list_shifts(pool: web::Data<MySqlPool>) -> Result<HttpResponse> {
    let shifts = ShiftRepository::new(pool.get_ref().clone()).list_all().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "shifts": shifts,
    })))
}

/// Bulk import of shift spreadsheet rows
///
/// POST /shifts/import
pub async fn import_shifts(
    pool: web::Data<MySqlPool>,
    payload: web::Json<Vec<serde_json::Map<String, Value>>>,
) -> Result<HttpResponse> {
    let repository = ShiftRepository::new(pool.get_ref().clone());

    let existing_names = repository.existing_name_keys().await?;
    let outcome = ShiftImporter::reconcile(&payload, &existing_names);

    repository.insert_batch(&outcome.accepted).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "inserted_count": outcome.accepted.len(),
        "skipped_count": outcome.skipped.len(),
        "rejected_count": outcome.rejected.len(),
        "skipped": outcome.skipped,
        "rejected": outcome.rejected,
    })))
}

/// Configure shift routes
pub fn configure_shift_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/shifts")
            .route("", web::get().to(list_shifts))
            .route("/import", web::post().to(import_shifts)),
    );
}
