use std::collections::HashSet;

use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::employees::models::Employee;

/// Read-only access to the employee directory.
pub struct EmployeeRepository {
    pool: MySqlPool,
}

impl EmployeeRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// List all employees, ordered by code.
    pub async fn list_all(&self) -> Result<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_code, first_name, last_name, department, designation,
                   date_of_joining, bank_name, account_no, ifsc_code, uan_no, esic_no
            FROM employees
            ORDER BY employee_code
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    /// Point lookup by employee code.
    pub async fn find_by_code(&self, employee_code: &str) -> Result<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT employee_code, first_name, last_name, department, designation,
                   date_of_joining, bank_name, account_no, ifsc_code, uan_no, esic_no
            FROM employees
            WHERE employee_code = ?
            "#,
        )
        .bind(employee_code)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    /// One batch read of the known employee codes, used by the reconciler to
    /// validate import rows.
    pub async fn known_codes(&self) -> Result<HashSet<String>> {
        let codes: Vec<(String,)> = sqlx::query_as("SELECT employee_code FROM employees")
            .fetch_all(&self.pool)
            .await?;

        Ok(codes.into_iter().map(|(code,)| code).collect())
    }
}
