//! Driven port for the `/venues` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{AccessToken, Venue, VenueDraft, VenueId, VenueUpdate};

/// Port for reading and managing venues.
///
/// Only [`VenueGateway::venue_details`] retries, and only on HTTP 429; every
/// other operation makes exactly one attempt.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueGateway: Send + Sync {
    /// `GET /venues`.
    async fn list_venues(&self) -> Result<Vec<Venue>, GatewayError>;

    /// `GET /venues/{id}?_bookings=true`.
    async fn venue_details(&self, id: &VenueId) -> Result<Venue, GatewayError>;

    /// `POST /venues`.
    async fn create_venue(
        &self,
        token: &AccessToken,
        draft: &VenueDraft,
    ) -> Result<Venue, GatewayError>;

    /// `PUT /venues/{id}`.
    async fn update_venue(
        &self,
        token: &AccessToken,
        id: &VenueId,
        update: &VenueUpdate,
    ) -> Result<Venue, GatewayError>;

    /// `DELETE /venues/{id}`.
    async fn delete_venue(&self, token: &AccessToken, id: &VenueId) -> Result<(), GatewayError>;

    /// `GET /venues/user/{userId}`.
    async fn list_user_venues(
        &self,
        token: &AccessToken,
        user_id: &str,
    ) -> Result<Vec<Venue>, GatewayError>;
}
