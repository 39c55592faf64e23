pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seed;
pub mod services;
pub mod utils;
