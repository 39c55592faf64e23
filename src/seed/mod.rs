//! Demo data for an empty directory.
//!
//! [`seed_employees`] is a best-effort batch job: it never returns an error,
//! it reports what happened through [`SeedOutcome`] and the log.

use chrono::{Duration, NaiveDate};
use log::{error, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use validator::Validate;

use crate::errors::AppError;
use crate::models::employee::NewEmployee;
use crate::repositories::EmployeeRepository;

pub const DEFAULT_SEED_COUNT: usize = 50;

pub const FIRST_NAMES: [&str; 20] = [
    "Rahul", "Ananya", "Karan", "Priya", "Neha", "Amit", "Sneha", "Rohit", "Pooja", "Arjun",
    "Simran", "Vikram", "Isha", "Manish", "Aarav", "Kavya", "Nikhil", "Riya", "Siddharth", "Meera",
];

pub const LAST_NAMES: [&str; 10] = [
    "Sharma", "Verma", "Mehta", "Singh", "Gupta", "Malhotra", "Bansal", "Kapoor", "Chopra",
    "Agarwal",
];

/// Each department with the designations that are valid inside it.
pub const DEPARTMENTS: [(&str, &[&str]); 5] = [
    ("Engineering", &["Software Engineer", "Senior Engineer", "Tech Lead"]),
    ("HR", &["HR Executive", "HR Manager"]),
    ("Finance", &["Financial Analyst", "Account Manager"]),
    ("Marketing", &["Marketing Executive", "Marketing Lead"]),
    ("Operations", &["Operations Analyst", "Operations Manager"]),
];

pub const EMAIL_DOMAINS: [&str; 5] = [
    "techforge.io",
    "peoplecore.co",
    "finbridge.in",
    "marketloop.co",
    "cloudnest.ai",
];

const JOINING_START: (i32, u32, u32) = (2018, 1, 1);
const JOINING_END: (i32, u32, u32) = (2024, 12, 31);

#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// Storage already held employees; nothing was written.
    Skipped,
    Seeded(u64),
    /// The batch was rolled back.
    Failed(String),
}

/// Inclusive bounds for generated joining dates.
pub fn joining_window() -> Result<(NaiveDate, NaiveDate), AppError> {
    let date = |(y, m, d): (i32, u32, u32)| {
        NaiveDate::from_ymd_opt(y, m, d)
            .ok_or_else(|| AppError::InternalServerError(format!("invalid date {}-{}-{}", y, m, d)))
    };
    Ok((date(JOINING_START)?, date(JOINING_END)?))
}

fn pick<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

pub fn random_joining_date<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let span = (end - start).num_days();
    start + Duration::days(rng.gen_range(0..=span))
}

/// Builds `count` synthetic employees. Emails embed the zero-based index, so
/// they are distinct within one batch.
pub fn generate_employees<R: Rng>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<NewEmployee>, AppError> {
    let (start, end) = joining_window()?;
    let mut employees = Vec::with_capacity(count);

    for index in 0..count {
        let first = pick(rng, &FIRST_NAMES);
        let last = pick(rng, &LAST_NAMES);
        let (department, designations) = pick(rng, &DEPARTMENTS);
        let designation = pick(rng, *designations);
        let domain = pick(rng, &EMAIL_DOMAINS);

        let employee = NewEmployee {
            name: format!("{} {}", first, last),
            email: format!(
                "{}.{}{}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                index,
                domain
            ),
            department: department.to_string(),
            designation: designation.to_string(),
            date_of_joining: random_joining_date(rng, start, end),
        };
        employee.validate()?;
        employees.push(employee);
    }

    Ok(employees)
}

pub async fn seed_employees(repo: &dyn EmployeeRepository, count: usize) -> SeedOutcome {
    let mut rng = StdRng::from_entropy();
    seed_employees_with_rng(repo, count, &mut rng).await
}

pub async fn seed_employees_with_rng<R: Rng + Send>(
    repo: &dyn EmployeeRepository,
    count: usize,
    rng: &mut R,
) -> SeedOutcome {
    match try_seed(repo, count, rng).await {
        Ok(Some(inserted)) => {
            info!("Seeded {} employees successfully.", inserted);
            SeedOutcome::Seeded(inserted)
        }
        Ok(None) => {
            info!("Employees already exist. Skipping seeding.");
            SeedOutcome::Skipped
        }
        Err(err) => {
            error!("Error while seeding data: {}", err);
            SeedOutcome::Failed(err.to_string())
        }
    }
}

async fn try_seed<R: Rng + Send>(
    repo: &dyn EmployeeRepository,
    count: usize,
    rng: &mut R,
) -> Result<Option<u64>, AppError> {
    // Not atomic with the insert below; two concurrent seeders can both pass.
    if repo.any_exists().await? {
        return Ok(None);
    }

    let employees = generate_employees(count, rng)?;
    repo.insert_batch(employees).await.map(Some)
}
