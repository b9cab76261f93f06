use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

use crate::core::Result;
use crate::modules::payslips::models::MonthlyRecord;

/// Read-only access to the locked monthly payroll table. Rows are keyed by
/// (employee_code, month, year); only rows carrying the `Locked` status are
/// handed to callers — anything else is "not ready" and silently dropped.
pub struct MonthlyRecordRepository {
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = r#"
    SELECT employee_code, month, year, status, paid_days, working_days,
           earnings_breakdown, deductions_breakdown,
           basic, hra, special_allowance,
           arrears, advance, tds, other_deduction
    FROM monthly_payroll
"#;

impl MonthlyRecordRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Fetch one employee's record for a month, if it exists and is locked.
    pub async fn find_locked(
        &self,
        employee_code: &str,
        month: &str,
        year: i32,
    ) -> Result<Option<MonthlyRecord>> {
        let row = sqlx::query(&format!(
            "{} WHERE employee_code = ? AND month = ? AND year = ?",
            SELECT_COLUMNS
        ))
        .bind(employee_code)
        .bind(month)
        .bind(year)
        .fetch_optional(&self.pool)
        .await?;

        let record = row.map(Self::map_row).transpose()?;
        Ok(record.filter(MonthlyRecord::is_locked))
    }

    /// Fetch every locked record for a month.
    pub async fn list_locked(&self, month: &str, year: i32) -> Result<Vec<MonthlyRecord>> {
        let rows = sqlx::query(&format!(
            "{} WHERE month = ? AND year = ? ORDER BY employee_code",
            SELECT_COLUMNS
        ))
        .bind(month)
        .bind(year)
        .fetch_all(&self.pool)
        .await?;

        let records: Vec<MonthlyRecord> = rows
            .into_iter()
            .map(Self::map_row)
            .collect::<Result<Vec<_>>>()?;

        Ok(records.into_iter().filter(MonthlyRecord::is_locked).collect())
    }

    fn map_row(row: MySqlRow) -> Result<MonthlyRecord> {
        let earnings_json: Option<String> = row.try_get("earnings_breakdown")?;
        let deductions_json: Option<String> = row.try_get("deductions_breakdown")?;

        Ok(MonthlyRecord {
            employee_code: row.try_get("employee_code")?,
            month: row.try_get("month")?,
            year: row.try_get("year")?,
            status: row.try_get::<Option<String>, _>("status")?.unwrap_or_default(),
            paid_days: row.try_get::<Decimal, _>("paid_days")?,
            working_days: row.try_get::<Decimal, _>("working_days")?,
            earnings_breakdown: earnings_json
                .as_deref()
                .map(serde_json::from_str)
                .transpose()?,
            deductions_breakdown: deductions_json
                .as_deref()
                .map(serde_json::from_str)
                .transpose()?,
            basic: row.try_get::<Decimal, _>("basic")?,
            hra: row.try_get::<Decimal, _>("hra")?,
            special_allowance: row.try_get::<Decimal, _>("special_allowance")?,
            arrears: row.try_get::<Decimal, _>("arrears")?,
            advance: row.try_get::<Decimal, _>("advance")?,
            tds: row.try_get::<Decimal, _>("tds")?,
            other_deduction: row.try_get::<Decimal, _>("other_deduction")?,
        })
    }
}
