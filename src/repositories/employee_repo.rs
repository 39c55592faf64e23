use async_trait::async_trait;
use log::debug;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee, EMPLOYEE_COLUMNS};

// Five binds per row keeps each statement well under the Postgres limit.
const INSERT_CHUNK_SIZE: usize = 1000;

#[derive(Clone)]
pub struct PgEmployeeRepository {
    pool: PgPool,
}

impl PgEmployeeRepository {
    pub fn new(pool: PgPool) -> Self {
        PgEmployeeRepository { pool }
    }
}

/// Escapes LIKE wildcards so `term` only ever matches literally.
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[async_trait]
impl EmployeeRepository for PgEmployeeRepository {
    async fn search(&self, term: &str) -> Result<Vec<Employee>, AppError> {
        let sql = format!(
            "SELECT {} FROM employees WHERE name ILIKE $1 ESCAPE '\\' OR department ILIKE $1 ESCAPE '\\'",
            EMPLOYEE_COLUMNS
        );

        // Released back to the pool when dropped, on success or error.
        let mut conn = self.pool.acquire().await?;
        let employees = sqlx::query_as::<_, Employee>(&sql)
            .bind(like_pattern(term))
            .fetch_all(&mut *conn)
            .await?;

        debug!("Search for {:?} matched {} employees", term, employees.len());
        Ok(employees)
    }

    async fn any_exists(&self) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees)")
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> Result<u64, AppError> {
        if employees.is_empty() {
            return Ok(0);
        }

        // Dropping `tx` without commit rolls everything back.
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for chunk in employees.chunks(INSERT_CHUNK_SIZE) {
            let mut query_builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
                "INSERT INTO employees (name, email, department, designation, date_of_joining) ",
            );
            query_builder.push_values(chunk, |mut row, employee| {
                row.push_bind(&employee.name)
                    .push_bind(&employee.email)
                    .push_bind(&employee.department)
                    .push_bind(&employee.designation)
                    .push_bind(employee.date_of_joining);
            });

            inserted += query_builder
                .build()
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}
