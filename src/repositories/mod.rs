//! Storage port for employee records.
//!
//! Handlers and the seeder talk to [`EmployeeRepository`] only; production
//! wires in [`PgEmployeeRepository`], tests use an in-memory double.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

pub mod employee_repo;
#[cfg(test)]
pub mod in_memory;

pub use employee_repo::PgEmployeeRepository;

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Every employee whose name or department contains `term`, ignoring case.
    ///
    /// `term` is used as given; trimming and emptiness checks belong to the
    /// caller. Results are not ordered and not limited.
    async fn search(&self, term: &str) -> Result<Vec<Employee>, AppError>;

    async fn any_exists(&self) -> Result<bool, AppError>;

    /// Inserts all rows or none of them. Returns the number of rows written.
    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> Result<u64, AppError>;
}
