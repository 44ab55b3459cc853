// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, database, and start HTTP server

use actix_web::{middleware::Logger, web, App, HttpServer};
use advertisements_api::config::{self, Config};
use advertisements_api::{db, handlers};
use anyhow::Context;
use dotenv::dotenv;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info,actix_web=info,sqlx=warn"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        anyhow::bail!("invalid configuration: {}", e);
    }

    log::info!("Starting advertisements-api...");
    log::info!("Environment: {}", config.environment);
    log::info!("Server Address: {}", config.bind_address());

    // 4. Initialize database connection pool and schema
    let pool = config::init_db_pool(&config)
        .await
        .context("failed to connect to database")?;

    db::ensure_schema(&pool)
        .await
        .context("failed to initialize database schema")?;

    // 5. Start HTTP server
    let server_pool = pool.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_pool.clone()))
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            .configure(handlers::configure)
    })
    .bind(config.bind_address())
    .with_context(|| format!("failed to bind {}", config.bind_address()))?
    .run();

    let result = server.await;

    // 6. Release database connections once the server has stopped
    pool.close().await;
    log::info!("Database pool closed, shutting down");

    result.context("HTTP server error")
}
