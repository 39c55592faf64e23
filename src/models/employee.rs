use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Column list shared by every query that materializes an [`Employee`].
pub const EMPLOYEE_COLUMNS: &str = "id, name, email, department, designation, date_of_joining";

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub designation: String,
    pub date_of_joining: NaiveDate,
}

/// An employee that has not been assigned an `id` yet.
#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[validate(email, length(max = 100))]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    pub department: String,
    #[validate(length(min = 1, max = 50))]
    pub designation: String,
    pub date_of_joining: NaiveDate,
}
