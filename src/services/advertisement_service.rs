// src/services/advertisement_service.rs
// DOCUMENTATION: Business logic for advertisements
// PURPOSE: Intermediary between handlers and repository, handles extra logic

use crate::db::AdvertisementRepository;
use crate::errors::AdsError;
use crate::models::{
    AdvertisementResponse, CreateAdvertisementRequest, SearchQuery, UpdateAdvertisementRequest,
};
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

pub struct AdvertisementService;

impl AdvertisementService {
    /// Create a new advertisement with a fresh id and creation time
    pub async fn create(
        pool: &PgPool,
        req: CreateAdvertisementRequest,
    ) -> Result<AdvertisementResponse, AdsError> {
        let ad = AdvertisementRepository::create(pool, Uuid::new_v4(), &req, Utc::now()).await?;
        Ok(ad.to_response())
    }

    /// Get an advertisement by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<AdvertisementResponse, AdsError> {
        let ad = AdvertisementRepository::get_by_id(pool, id).await?;
        Ok(ad.to_response())
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateAdvertisementRequest,
    ) -> Result<AdvertisementResponse, AdsError> {
        // Nothing to write, but a missing id must still surface as 404
        if req.is_empty() {
            return Self::get(pool, id).await;
        }

        let ad = AdvertisementRepository::update(pool, id, &req).await?;
        Ok(ad.to_response())
    }

    /// Delete an advertisement
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AdsError> {
        AdvertisementRepository::delete(pool, id).await
    }

    /// Search advertisements
    pub async fn search(
        pool: &PgPool,
        query: SearchQuery,
    ) -> Result<Vec<AdvertisementResponse>, AdsError> {
        let ads = AdvertisementRepository::search(pool, &query).await?;
        Ok(ads.iter().map(|ad| ad.to_response()).collect())
    }
}
