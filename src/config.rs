use std::collections::HashMap;
use std::env;
use std::time::Duration;

use crate::errors::AppError;

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_EMPLOYEES_PATH: &str = "/employees";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_MAX_LIFETIME_SECS: u64 = 500;

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_address: String,
    pub employees_path: String,
    pub max_connections: u32,
    pub max_lifetime: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(env::vars().collect())
    }

    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, AppError> {
        let database_url = vars
            .get("DATABASE_URL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| AppError::ConfigError("DATABASE_URL must be set".to_string()))?;

        let bind_address = vars
            .get("BIND_ADDRESS")
            .cloned()
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let employees_path = normalize_path(
            vars.get("EMPLOYEES_PATH")
                .map(String::as_str)
                .unwrap_or(DEFAULT_EMPLOYEES_PATH),
        );

        let max_connections = parse_or(&vars, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let max_lifetime_secs = parse_or(&vars, "DB_MAX_LIFETIME_SECS", DEFAULT_MAX_LIFETIME_SECS)?;

        Ok(AppConfig {
            database_url,
            bind_address,
            employees_path,
            max_connections,
            max_lifetime: Duration::from_secs(max_lifetime_secs),
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    vars: &HashMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, AppError> {
    match vars.get(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::ConfigError(format!("{} must be a positive integer", key))),
        None => Ok(default),
    }
}

// "employees/" and "/employees" both become "/employees"; "/" becomes "".
fn normalize_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
