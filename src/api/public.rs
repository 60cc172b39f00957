//! Public read endpoints under `/api/public/*`.
//!
//! Callable without a session; the pipeline still attaches the bearer
//! header when a token happens to be present, and the backend tolerates
//! both. Responses arrive inside a `{data: {...}}` envelope, unlike the
//! owner endpoints.

use serde::Deserialize;

use crate::domain::Restaurant;

use super::client::decode;
use super::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
struct PublicRestaurants {
    restaurants: Vec<Restaurant>,
}

#[derive(Debug, Deserialize)]
struct PublicRestaurant {
    restaurant: Restaurant,
}

impl ApiClient {
    /// `GET /api/public/restaurants` - every published profile.
    pub async fn list_public(&self) -> Result<Vec<Restaurant>, ApiError> {
        let envelope: DataEnvelope<PublicRestaurants> =
            decode(self.get("/api/public/restaurants").await?)?;
        Ok(envelope.data.restaurants)
    }

    /// `GET /api/public/restaurants/:slug`. A retired or unknown slug is
    /// a 404, surfaced as [`ApiError::NotFound`].
    pub async fn get_public_by_slug(&self, slug: &str) -> Result<Restaurant, ApiError> {
        let envelope: DataEnvelope<PublicRestaurant> =
            decode(self.get(&format!("/api/public/restaurants/{slug}")).await?)?;
        Ok(envelope.data.restaurant)
    }
}
