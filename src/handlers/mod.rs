// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod advertisements;
pub mod extractors;
pub mod health;

pub use advertisements::config as advertisements_config;
pub use extractors::config as extractors_config;
pub use health::config as health_config;

use actix_web::web;

/// Register every route plus the extractor error handlers
pub fn configure(cfg: &mut web::ServiceConfig) {
    extractors_config(cfg);
    health_config(cfg);
    advertisements_config(cfg);
}
