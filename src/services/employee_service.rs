use crate::errors::AppError;
use crate::models::employee::Employee;
use crate::repositories::EmployeeRepository;

pub const EMPTY_SEARCH_MESSAGE: &str = "Search term cannot be empty...";
pub const NUL_SEARCH_MESSAGE: &str = "Search term cannot contain NUL characters";

pub struct EmployeeService;

impl EmployeeService {
    pub async fn search_employees(
        repo: &dyn EmployeeRepository,
        raw: Option<&str>,
    ) -> Result<Vec<Employee>, AppError> {
        let term = normalize_search_term(raw)?;
        repo.search(term).await
    }
}

/// Trims `raw` and rejects it when nothing is left.
///
/// Postgres text cannot hold `'\0'`, so such terms are refused here rather
/// than failing inside the query.
pub fn normalize_search_term(raw: Option<&str>) -> Result<&str, AppError> {
    match raw.map(str::trim) {
        Some(term) if term.contains('\0') => {
            Err(AppError::InvalidArgument(NUL_SEARCH_MESSAGE.to_string()))
        }
        Some(term) if !term.is_empty() => Ok(term),
        _ => Err(AppError::InvalidArgument(EMPTY_SEARCH_MESSAGE.to_string())),
    }
}
