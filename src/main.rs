use std::io;
use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use log::info;

use employee_directory_backend::config::AppConfig;
use employee_directory_backend::db;
use employee_directory_backend::handlers;
use employee_directory_backend::repositories::{EmployeeRepository, PgEmployeeRepository};
use employee_directory_backend::utils::cors::permissive_cors;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    // Initialize the database pool
    let pool = db::create_pool(&config).await.map_err(io::Error::other)?;
    db::init_schema(&pool).await.map_err(io::Error::other)?;

    let repo: web::Data<dyn EmployeeRepository> =
        web::Data::from(Arc::new(PgEmployeeRepository::new(pool)) as Arc<dyn EmployeeRepository>);
    let employees_path = config.employees_path.clone();

    info!(
        "Starting server at {} (search at {}/)",
        config.bind_address, employees_path
    );

    HttpServer::new(move || {
        let employees_path = employees_path.clone();
        App::new()
            .wrap(Logger::default())
            .wrap(permissive_cors())
            .app_data(repo.clone())
            .configure(move |cfg| handlers::employee::configure(cfg, &employees_path))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
