use std::collections::HashSet;

use sqlx::{MySqlPool, QueryBuilder};

use crate::core::Result;
use crate::modules::shifts::models::shift::normalized_name;
use crate::modules::shifts::models::Shift;

/// Storage access for shift definitions.
pub struct ShiftRepository {
    pool: MySqlPool,
}

impl ShiftRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Shift>> {
        let shifts = sqlx::query_as::<_, Shift>(
            r#"
            SELECT id, name, start_time, end_time, status,
                   in_grace_minutes, out_grace_minutes, start_reminder, end_reminder
            FROM shifts
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(shifts)
    }

    /// The persisted name keys (trimmed, case-folded), used by the importer
    /// for duplicate detection.
    pub async fn existing_name_keys(&self) -> Result<HashSet<String>> {
        let names: Vec<(String,)> = sqlx::query_as("SELECT name FROM shifts")
            .fetch_all(&self.pool)
            .await?;

        Ok(names
            .into_iter()
            .map(|(name,)| normalized_name(&name))
            .collect())
    }

    /// Insert accepted import rows in one batch call. Plain insert, not
    /// upsert: duplicates were already skipped by the importer.
    pub async fn insert_batch(&self, shifts: &[Shift]) -> Result<()> {
        if shifts.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<sqlx::MySql> = QueryBuilder::new(
            "INSERT INTO shifts \
             (id, name, start_time, end_time, status, in_grace_minutes, \
              out_grace_minutes, start_reminder, end_reminder) ",
        );

        builder.push_values(shifts.iter(), |mut values, shift| {
            values
                .push_bind(shift.id.clone())
                .push_bind(shift.name.clone())
                .push_bind(shift.start_time.clone())
                .push_bind(shift.end_time.clone())
                .push_bind(shift.status.clone())
                .push_bind(shift.in_grace_minutes)
                .push_bind(shift.out_grace_minutes)
                .push_bind(shift.start_reminder.clone())
                .push_bind(shift.end_reminder.clone());
        });

        builder.build().execute(&self.pool).await?;

        Ok(())
    }
}
