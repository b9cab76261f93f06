use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, QueryBuilder, Row};

use crate::core::Result;
use crate::modules::structures::models::SalaryStructure;

/// Storage access for persisted salary structures.
///
/// One row per employee, keyed uniquely by `employee_code`; writes are
/// upserts that replace the row wholesale, which makes re-imports idempotent
/// and concurrent imports last-writer-wins at row level.
pub struct StructureRepository {
    pool: MySqlPool,
}

const SELECT_COLUMNS: &str = r#"
    SELECT employee_code, monthly_gross, basic_salary,
           earnings_breakdown, deductions_breakdown, employer_breakdown,
           total_earnings, total_deductions, net_salary, ctc
    FROM salary_structures
"#;

impl StructureRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_code(&self, employee_code: &str) -> Result<Option<SalaryStructure>> {
        let row = sqlx::query(&format!("{} WHERE employee_code = ?", SELECT_COLUMNS))
            .bind(employee_code)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Self::map_row).transpose()
    }

    pub async fn list_all(&self) -> Result<Vec<SalaryStructure>> {
        let rows = sqlx::query(&format!("{} ORDER BY employee_code", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::map_row).collect()
    }

    /// Upsert a single structure by employee code.
    pub async fn upsert(&self, structure: &SalaryStructure) -> Result<()> {
        self.upsert_batch(std::slice::from_ref(structure)).await
    }

    /// Upsert a batch of structures in one statement. The conflict key is
    /// the unique `employee_code` index; an existing row is replaced, never
    /// duplicated.
    pub async fn upsert_batch(&self, structures: &[SalaryStructure]) -> Result<()> {
        if structures.is_empty() {
            return Ok(());
        }

        // Breakdown columns are JSON text; encode before building the statement
        let mut encoded: Vec<(String, String, String)> = Vec::with_capacity(structures.len());
        for structure in structures {
            encoded.push((
                serde_json::to_string(&structure.earnings)?,
                serde_json::to_string(&structure.deductions)?,
                serde_json::to_string(&structure.employer_additions)?,
            ));
        }

        let mut builder: QueryBuilder<sqlx::MySql> = QueryBuilder::new(
            "INSERT INTO salary_structures \
             (employee_code, monthly_gross, basic_salary, earnings_breakdown, \
              deductions_breakdown, employer_breakdown, total_earnings, \
              total_deductions, net_salary, ctc) ",
        );

        builder.push_values(
            structures.iter().zip(encoded),
            |mut values, (structure, (earnings, deductions, employer))| {
                values
                    .push_bind(structure.employee_code.clone())
                    .push_bind(structure.monthly_gross)
                    .push_bind(structure.basic_salary)
                    .push_bind(earnings)
                    .push_bind(deductions)
                    .push_bind(employer)
                    .push_bind(structure.total_earnings)
                    .push_bind(structure.total_deductions)
                    .push_bind(structure.net_salary)
                    .push_bind(structure.ctc);
            },
        );

        builder.push(
            " ON DUPLICATE KEY UPDATE \
             monthly_gross = VALUES(monthly_gross), \
             basic_salary = VALUES(basic_salary), \
             earnings_breakdown = VALUES(earnings_breakdown), \
             deductions_breakdown = VALUES(deductions_breakdown), \
             employer_breakdown = VALUES(employer_breakdown), \
             total_earnings = VALUES(total_earnings), \
             total_deductions = VALUES(total_deductions), \
             net_salary = VALUES(net_salary), \
             ctc = VALUES(ctc)",
        );

        builder.build().execute(&self.pool).await?;

        Ok(())
    }

    fn map_row(row: MySqlRow) -> Result<SalaryStructure> {
        let earnings_json: String = row.try_get("earnings_breakdown")?;
        let deductions_json: String = row.try_get("deductions_breakdown")?;
        let employer_json: String = row.try_get("employer_breakdown")?;

        Ok(SalaryStructure {
            employee_code: row.try_get("employee_code")?,
            monthly_gross: row.try_get::<Decimal, _>("monthly_gross")?,
            basic_salary: row.try_get::<Decimal, _>("basic_salary")?,
            earnings: serde_json::from_str(&earnings_json)?,
            deductions: serde_json::from_str(&deductions_json)?,
            employer_additions: serde_json::from_str(&employer_json)?,
            total_earnings: row.try_get::<Decimal, _>("total_earnings")?,
            total_deductions: row.try_get::<Decimal, _>("total_deductions")?,
            net_salary: row.try_get::<Decimal, _>("net_salary")?,
            ctc: row.try_get::<Decimal, _>("ctc")?,
        })
    }
}
