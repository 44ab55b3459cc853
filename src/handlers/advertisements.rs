// src/handlers/advertisements.rs
// DOCUMENTATION: HTTP handlers for advertisement operations
// PURPOSE: Parse requests, call services, return responses

use crate::errors::AdsError;
use crate::models::{CreateAdvertisementRequest, SearchQuery, UpdateAdvertisementRequest};
use crate::services::AdvertisementService;
use actix_web::{web, HttpResponse, Responder};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

/// POST /advertisement
/// Create a new advertisement
pub async fn create_advertisement(
    pool: web::Data<PgPool>,
    req: web::Json<CreateAdvertisementRequest>,
) -> Result<impl Responder, AdsError> {
    req.validate()?;

    let ad = AdvertisementService::create(pool.get_ref(), req.into_inner()).await?;
    Ok(HttpResponse::Created().json(ad))
}

/// GET /advertisement/{id}
pub async fn get_advertisement(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AdsError> {
    let ad = AdvertisementService::get(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ad))
}

/// PATCH /advertisement/{id}
/// Update only the fields present in the body
pub async fn update_advertisement(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
    req: web::Json<UpdateAdvertisementRequest>,
) -> Result<impl Responder, AdsError> {
    req.validate()?;

    let ad =
        AdvertisementService::update(pool.get_ref(), path.into_inner(), req.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ad))
}

/// DELETE /advertisement/{id}
pub async fn delete_advertisement(
    pool: web::Data<PgPool>,
    path: web::Path<Uuid>,
) -> Result<impl Responder, AdsError> {
    AdvertisementService::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// GET /advertisement
/// Search with optional q, min_price, max_price and author filters
pub async fn search_advertisements(
    pool: web::Data<PgPool>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, AdsError> {
    query.validate()?;

    let ads = AdvertisementService::search(pool.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ads))
}

/// Configuration for advertisement routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/advertisement")
            .route("", web::post().to(create_advertisement))
            .route("", web::get().to(search_advertisements))
            .route("/{id}", web::get().to(get_advertisement))
            .route("/{id}", web::patch().to(update_advertisement))
            .route("/{id}", web::delete().to(delete_advertisement)),
    );
}
