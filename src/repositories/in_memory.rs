use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::EmployeeRepository;
use crate::errors::AppError;
use crate::models::employee::{Employee, NewEmployee};

/// Vec-backed repository with the same matching rules as the Postgres one.
///
/// Search results come back in insertion order. The `failing*` constructors
/// make the matching operation return a storage error.
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    rows: Mutex<Vec<Employee>>,
    search_calls: AtomicUsize,
    fail_searches: bool,
    fail_inserts: bool,
}

impl InMemoryEmployeeRepository {
    pub fn with_rows(rows: Vec<Employee>) -> Self {
        InMemoryEmployeeRepository {
            rows: Mutex::new(rows),
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        InMemoryEmployeeRepository {
            fail_searches: true,
            ..Default::default()
        }
    }

    pub fn failing_inserts() -> Self {
        InMemoryEmployeeRepository {
            fail_inserts: true,
            ..Default::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows(&self) -> Vec<Employee> {
        self.rows.lock().unwrap().clone()
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn search(&self, term: &str) -> Result<Vec<Employee>, AppError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_searches {
            return Err(AppError::DatabaseError("connection refused".into()));
        }

        let needle = term.to_lowercase();
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|e| {
                e.name.to_lowercase().contains(&needle)
                    || e.department.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn any_exists(&self) -> Result<bool, AppError> {
        Ok(!self.rows.lock().unwrap().is_empty())
    }

    async fn insert_batch(&self, employees: Vec<NewEmployee>) -> Result<u64, AppError> {
        if self.fail_inserts {
            return Err(AppError::DatabaseError(
                "duplicate key value violates unique constraint \"employees_email_key\"".into(),
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        let mut staged = rows.clone();

        for new in employees {
            if staged.iter().any(|e| e.email == new.email) {
                return Err(AppError::DatabaseError(format!(
                    "duplicate key value violates unique constraint on email {}",
                    new.email
                )));
            }
            let id = staged.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            staged.push(Employee {
                id,
                name: new.name,
                email: new.email,
                department: new.department,
                designation: new.designation,
                date_of_joining: new.date_of_joining,
            });
        }

        let inserted = (staged.len() - rows.len()) as u64;
        *rows = staged;
        Ok(inserted)
    }
}
