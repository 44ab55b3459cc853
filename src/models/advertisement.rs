// src/models/advertisement.rs
// DOCUMENTATION: Core data structures for advertisements
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Reject NaN and infinities, which slip past range checks
fn finite_number(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        let mut err = ValidationError::new("finite");
        err.message = Some("must be a finite number".into());
        Err(err)
    }
}

/// Represents a complete advertisement record from the database
/// DOCUMENTATION: This struct maps directly to the advertisement table in PostgreSQL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Advertisement {
    /// Unique identifier (UUID v4), generated by the service
    pub id: Uuid,

    /// Short headline
    pub title: String,

    /// Free-form body text
    pub description: String,

    /// Asking price, never negative
    pub price: f64,

    /// Name of the person who posted the advertisement
    pub author: String,

    /// Set once on creation, untouched by updates
    pub created_at: DateTime<Utc>,
}

/// Request DTO for creating a new advertisement
/// DOCUMENTATION: Body of POST /advertisement, every field required
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAdvertisementRequest {
    pub title: String,

    pub description: String,

    // JSON has no NaN or infinity, so a range check is enough here
    #[validate(range(min = 0.0, message = "price must be greater than or equal to 0"))]
    pub price: f64,

    pub author: String,
}

/// Request DTO for updating an existing advertisement
/// DOCUMENTATION: Body of PATCH /advertisement/{id}
/// Only provided fields are updated; null is treated the same as absent
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAdvertisementRequest {
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(
        custom = "finite_number",
        range(min = 0.0, message = "price must be greater than or equal to 0")
    )]
    pub price: Option<f64>,

    pub author: Option<String>,
}

impl UpdateAdvertisementRequest {
    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.author.is_none()
    }
}

/// Response DTO for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertisementResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

/// Search query parameters
/// DOCUMENTATION: Query string of GET /advertisement, every filter optional
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against title and description
    pub q: Option<String>,

    /// Inclusive lower price bound
    #[validate(
        custom = "finite_number",
        range(min = 0.0, message = "min_price must be greater than or equal to 0")
    )]
    pub min_price: Option<f64>,

    /// Inclusive upper price bound
    #[validate(
        custom = "finite_number",
        range(min = 0.0, message = "max_price must be greater than or equal to 0")
    )]
    pub max_price: Option<f64>,

    /// Exact author name
    pub author: Option<String>,
}

impl SearchQuery {
    /// Text filter, or None when absent or empty
    pub fn text(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    /// Whether an advertisement satisfies every filter present
    /// DOCUMENTATION: AdvertisementRepository::search applies this to every row Postgres returns
    pub fn matches(&self, ad: &Advertisement) -> bool {
        if let Some(q) = self.text() {
            let needle = q.to_lowercase();
            if !ad.title.to_lowercase().contains(&needle)
                && !ad.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if ad.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if ad.price > max_price {
                return false;
            }
        }

        match &self.author {
            Some(author) => ad.author == *author,
            None => true,
        }
    }
}

impl Advertisement {
    /// Convert Advertisement to AdvertisementResponse for API
    pub fn to_response(&self) -> AdvertisementResponse {
        AdvertisementResponse {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            author: self.author.clone(),
            created_at: self.created_at,
        }
    }
}
