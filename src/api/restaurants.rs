//! Owner restaurant endpoints. All of these require an authenticated
//! session; an expired token surfaces through the 401 recovery policy.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{Restaurant, RestaurantDraft};
use crate::validation::clean;

use super::client::decode;
use super::{ApiClient, ApiError};

#[derive(Debug, Deserialize)]
struct RestaurantEnvelope {
    restaurant: Restaurant,
}

#[derive(Debug, Deserialize)]
struct RestaurantListEnvelope {
    restaurants: Vec<Restaurant>,
}

impl ApiClient {
    /// `GET /restaurants` - every restaurant owned by the signed-in user,
    /// drafts included.
    pub async fn list_own(&self) -> Result<Vec<Restaurant>, ApiError> {
        let envelope: RestaurantListEnvelope = decode(self.get("/restaurants").await?)?;
        Ok(envelope.restaurants)
    }

    /// `GET /restaurants/:id`.
    pub async fn get_own(&self, id: &str) -> Result<Restaurant, ApiError> {
        let envelope: RestaurantEnvelope = decode(self.get(&format!("/restaurants/{id}")).await?)?;
        Ok(envelope.restaurant)
    }

    /// `POST /restaurants`. The draft is cleaned before transmission;
    /// the backend answers with the full profile, slug included.
    pub async fn create(&self, draft: &RestaurantDraft) -> Result<Restaurant, ApiError> {
        let body = cleaned_payload(draft)?;
        let envelope: RestaurantEnvelope = decode(self.post_json("/restaurants", body).await?)?;
        Ok(envelope.restaurant)
    }

    /// `PATCH /restaurants/:id`, then the publish/unpublish sub-operation
    /// when the draft carries `isPublished`.
    ///
    /// The two calls are ordered: patch first, then the toggle. The
    /// toggle failing does not roll back the patch; its error is
    /// surfaced as-is.
    pub async fn patch(&self, id: &str, draft: &RestaurantDraft) -> Result<Restaurant, ApiError> {
        let body = cleaned_payload(draft)?;
        let envelope: RestaurantEnvelope =
            decode(self.patch_json(&format!("/restaurants/{id}"), body).await?)?;
        match draft.is_published {
            Some(true) => self.publish(id).await,
            Some(false) => self.unpublish(id).await,
            None => Ok(envelope.restaurant),
        }
    }

    /// `DELETE /restaurants/:id`.
    pub async fn delete_restaurant(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/restaurants/{id}")).await?;
        Ok(())
    }

    /// `PATCH /restaurants/:id/publish`.
    pub async fn publish(&self, id: &str) -> Result<Restaurant, ApiError> {
        let envelope: RestaurantEnvelope =
            decode(self.patch_empty(&format!("/restaurants/{id}/publish")).await?)?;
        Ok(envelope.restaurant)
    }

    /// `PATCH /restaurants/:id/unpublish`.
    pub async fn unpublish(&self, id: &str) -> Result<Restaurant, ApiError> {
        let envelope: RestaurantEnvelope =
            decode(self.patch_empty(&format!("/restaurants/{id}/unpublish")).await?)?;
        Ok(envelope.restaurant)
    }

    /// `PATCH /restaurants/:id/regenerate-slug`. The backend derives a
    /// fresh slug from the current name; the old public URL stops
    /// resolving.
    pub async fn regenerate_slug(&self, id: &str) -> Result<Restaurant, ApiError> {
        let envelope: RestaurantEnvelope = decode(
            self.patch_empty(&format!("/restaurants/{id}/regenerate-slug"))
                .await?,
        )?;
        Ok(envelope.restaurant)
    }
}

fn cleaned_payload(draft: &RestaurantDraft) -> Result<Value, ApiError> {
    let value = serde_json::to_value(draft).map_err(|e| ApiError::UnexpectedShape(e.to_string()))?;
    Ok(clean(&value))
}
