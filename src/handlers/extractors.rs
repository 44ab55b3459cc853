// src/handlers/extractors.rs
// DOCUMENTATION: Extractor error handling
// PURPOSE: Malformed bodies, paths and query strings answer with the same JSON error as the rest of the API

use crate::errors::AdsError;
use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected JSON body: {}", err);
        AdsError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected path parameter: {}", err);
        AdsError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::QueryConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected query string: {}", err);
        AdsError::ValidationError(err.to_string()).into()
    }));
}
