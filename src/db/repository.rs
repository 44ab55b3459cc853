// src/db/repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::AdsError;
use crate::models::*;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const SELECT_ADVERTISEMENT: &str =
    "SELECT id, title, description, price, author, created_at FROM advertisement";

/// AdvertisementRepository: All database operations for advertisements
/// DOCUMENTATION: Uses query_as for type-safe SQL with bound parameters
pub struct AdvertisementRepository;

impl AdvertisementRepository {
    /// Insert a new advertisement and return the stored record
    pub async fn create(
        pool: &PgPool,
        id: Uuid,
        req: &CreateAdvertisementRequest,
        created_at: DateTime<Utc>,
    ) -> Result<Advertisement, AdsError> {
        let ad = sqlx::query_as::<_, Advertisement>(
            r#"
            INSERT INTO advertisement (id, title, description, price, author, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, price, author, created_at
            "#,
        )
        .bind(id)
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.author)
        .bind(created_at)
        .fetch_one(pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create advertisement: {}", e);
            AdsError::from(e)
        })?;

        log::info!("Created advertisement with id: {}", ad.id);
        Ok(ad)
    }

    /// Retrieve advertisement by ID
    pub async fn get_by_id(pool: &PgPool, id: Uuid) -> Result<Advertisement, AdsError> {
        sqlx::query_as::<_, Advertisement>(&format!("{} WHERE id = $1", SELECT_ADVERTISEMENT))
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| {
                log::error!("Database error fetching advertisement {}: {}", id, e);
                AdsError::from(e)
            })?
            .ok_or_else(|| {
                log::warn!("Advertisement not found: {}", id);
                AdsError::not_found()
            })
    }

    /// Update existing advertisement
    /// DOCUMENTATION: Partial update - only provided fields are modified, created_at is never touched
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: &UpdateAdvertisementRequest,
    ) -> Result<Advertisement, AdsError> {
        let ad = sqlx::query_as::<_, Advertisement>(
            r#"
            UPDATE advertisement
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                price = COALESCE($3, price),
                author = COALESCE($4, author)
            WHERE id = $5
            RETURNING id, title, description, price, author, created_at
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(req.price)
        .bind(&req.author)
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for advertisement {}: {}", id, e);
            AdsError::from(e)
        })?
        .ok_or_else(|| {
            log::warn!("Advertisement not found for update: {}", id);
            AdsError::not_found()
        })?;

        log::info!("Updated advertisement: {}", id);
        Ok(ad)
    }

    /// Permanently delete an advertisement
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), AdsError> {
        let rows = sqlx::query("DELETE FROM advertisement WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for advertisement {}: {}", id, e);
                AdsError::from(e)
            })?
            .rows_affected();

        if rows == 0 {
            log::warn!("Advertisement not found for delete: {}", id);
            return Err(AdsError::not_found());
        }

        log::info!("Deleted advertisement: {}", id);
        Ok(())
    }

    /// Search advertisements with optional filters
    /// DOCUMENTATION: Price and author narrow the rows in Postgres; the text filter is
    /// applied by SearchQuery::matches so case folding never depends on the database locale
    pub async fn search(
        pool: &PgPool,
        query: &SearchQuery,
    ) -> Result<Vec<Advertisement>, AdsError> {
        let mut builder = Self::search_builder(query);

        log::debug!("Executing search query: {}", builder.sql());

        let rows = builder
            .build_query_as::<Advertisement>()
            .fetch_all(pool)
            .await
            .map_err(|e| {
                log::error!("Search query error: {}", e);
                AdsError::from(e)
            })?;

        let scanned = rows.len();
        let ads: Vec<Advertisement> = rows.into_iter().filter(|ad| query.matches(ad)).collect();

        log::info!("Search completed: {} results ({} scanned)", ads.len(), scanned);
        Ok(ads)
    }

    /// Build the SELECT for the filters Postgres evaluates exactly: price bounds and author
    fn search_builder(query: &SearchQuery) -> QueryBuilder<'_, Postgres> {
        let mut builder = QueryBuilder::new(SELECT_ADVERTISEMENT);
        builder.push(" WHERE TRUE");

        if let Some(min_price) = query.min_price {
            builder.push(" AND price >= ");
            builder.push_bind(min_price);
        }

        if let Some(max_price) = query.max_price {
            builder.push(" AND price <= ");
            builder.push_bind(max_price);
        }

        if let Some(author) = &query.author {
            builder.push(" AND author = ");
            builder.push_bind(author.as_str());
        }

        builder.push(" ORDER BY created_at ASC, id ASC");
        builder
    }
}
