use sqlx::MySqlPool;

use crate::core::{AppError, Result};
use crate::modules::components::models::{ComponentDefinition, ComponentKind, ComponentRegistry};

/// Storage access for the component master.
///
/// The master is stored as one kind-discriminated table exposed as three
/// named collections (earnings, deductions, employer additions).
pub struct ComponentRepository {
    pool: MySqlPool,
}

impl ComponentRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List the components of one kind, in master order.
    pub async fn list_by_kind(&self, kind: ComponentKind) -> Result<Vec<ComponentDefinition>> {
        let components = sqlx::query_as::<_, ComponentDefinition>(
            r#"
            SELECT id, kind, name, calculation_basis, calculation_percentage, max_calculated_value
            FROM salary_components
            WHERE kind = ?
            ORDER BY created_at, id
            "#,
        )
        .bind(kind.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(components)
    }

    /// Load the full registry: one read of the three collections, with
    /// statutory classification resolved at load time.
    pub async fn load_registry(&self) -> Result<ComponentRegistry> {
        let earnings = self.list_by_kind(ComponentKind::Earning).await?;
        let deductions = self.list_by_kind(ComponentKind::Deduction).await?;
        let employer = self.list_by_kind(ComponentKind::EmployerContribution).await?;

        Ok(ComponentRegistry::new(&earnings, &deductions, &employer))
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<ComponentDefinition>> {
        let component = sqlx::query_as::<_, ComponentDefinition>(
            r#"
            SELECT id, kind, name, calculation_basis, calculation_percentage, max_calculated_value
            FROM salary_components
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(component)
    }

    /// Create a component, rejecting duplicate names within the same kind.
    pub async fn create(&self, component: &ComponentDefinition) -> Result<ComponentDefinition> {
        let existing: Option<(String,)> = sqlx::query_as(
            "SELECT id FROM salary_components WHERE kind = ? AND LOWER(name) = LOWER(?)",
        )
        .bind(component.kind.to_string())
        .bind(component.name.trim())
        .fetch_optional(&self.pool)
        .await?;

        if existing.is_some() {
            return Err(AppError::validation(format!(
                "A {} component named '{}' already exists",
                component.kind, component.name
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO salary_components
                (id, kind, name, calculation_basis, calculation_percentage, max_calculated_value)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(component.id.as_deref().unwrap_or_default())
        .bind(component.kind.to_string())
        .bind(&component.name)
        .bind(component.calculation_basis.to_string())
        .bind(component.calculation_percentage)
        .bind(component.max_calculated_value)
        .execute(&self.pool)
        .await?;

        Ok(component.clone())
    }

    pub async fn update(&self, component: &ComponentDefinition) -> Result<()> {
        let id = component
            .id
            .as_deref()
            .ok_or_else(|| AppError::validation("Component id is required for update"))?;

        let result = sqlx::query(
            r#"
            UPDATE salary_components
            SET name = ?, calculation_basis = ?, calculation_percentage = ?,
                max_calculated_value = ?
            WHERE id = ?
            "#,
        )
        .bind(&component.name)
        .bind(component.calculation_basis.to_string())
        .bind(component.calculation_percentage)
        .bind(component.max_calculated_value)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Component '{}'", id)));
        }

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM salary_components WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Component '{}'", id)));
        }

        Ok(())
    }
}
