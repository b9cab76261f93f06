//! Component master admin endpoints.

use actix_web::{web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;
use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::components::models::{CalculationBasis, ComponentDefinition, ComponentKind};
use crate::modules::components::repositories::ComponentRepository;

#[derive(Debug, Deserialize)]
pub struct ComponentPayload {
    pub kind: ComponentKind,
    pub name: String,
    pub calculation_basis: CalculationBasis,
    pub calculation_percentage: Decimal,
    #[serde(default)]
    pub max_calculated_value: Decimal,
}

/// List components of one kind
///
/// GET /components/{kind}
pub async fn list_components(
    pool: web::Data<MySqlPool>,
    kind: web::Path<String>,
) -> Result<HttpResponse> {
    let kind: ComponentKind = kind.parse().map_err(AppError::Validation)?;
    let repository = ComponentRepository::new(pool.get_ref().clone());
    let components = repository.list_by_kind(kind).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "components": components,
    })))
}

/// Create a component
///
/// POST /components
pub async fn create_component(
    pool: web::Data<MySqlPool>,
    payload: web::Json<ComponentPayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let component = ComponentDefinition::new(
        payload.kind,
        payload.name,
        payload.calculation_basis,
        payload.calculation_percentage,
        payload.max_calculated_value,
    )?;

    let repository = ComponentRepository::new(pool.get_ref().clone());
    let created = repository.create(&component).await?;

    tracing::info!(
        "Created {} component '{}' ({} basis)",
        created.kind,
        created.name,
        created.calculation_basis
    );

    Ok(HttpResponse::Created().json(created))
}

/// Update a component
///
/// PUT /components/{id}
pub async fn update_component(
    pool: web::Data<MySqlPool>,
    id: web::Path<String>,
    payload: web::Json<ComponentPayload>,
) -> Result<HttpResponse> {
    let payload = payload.into_inner();
    let repository = ComponentRepository::new(pool.get_ref().clone());

    let existing = repository
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Component '{}'", id)))?;

    let updated = ComponentDefinition {
        id: existing.id,
        kind: existing.kind,
        name: payload.name.trim().to_string(),
        calculation_basis: payload.calculation_basis,
        calculation_percentage: payload.calculation_percentage,
        max_calculated_value: payload.max_calculated_value,
    };
    updated.validate()?;

    repository.update(&updated).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a component
///
/// DELETE /components/{id}
pub async fn delete_component(
    pool: web::Data<MySqlPool>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    let repository = ComponentRepository::new(pool.get_ref().clone());
    repository.delete(&id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure component master routes
pub fn configure_component_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/components")
            .route("", web::post().to(create_component))
            .route("/{kind}", web::get().to(list_components))
            .route("/{id}", web::put().to(update_component))
            .route("/{id}", web::delete().to(delete_component)),
    );
}
