//! Driven port for the `/bookings` endpoints and a profile's booking list.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{AccessToken, Booking, BookingDraft, BookingId, BookingUpdate};

/// Port for creating and managing bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// `POST /bookings`.
    async fn create_booking(
        &self,
        token: &AccessToken,
        draft: &BookingDraft,
    ) -> Result<Booking, GatewayError>;

    /// `PUT /bookings/{id}`.
    async fn update_booking(
        &self,
        token: &AccessToken,
        id: &BookingId,
        update: &BookingUpdate,
    ) -> Result<Booking, GatewayError>;

    /// `DELETE /bookings/{id}`.
    async fn delete_booking(&self, token: &AccessToken, id: &BookingId)
    -> Result<(), GatewayError>;

    /// `GET /profiles/{name}/bookings`.
    async fn list_profile_bookings(
        &self,
        token: &AccessToken,
        profile_name: &str,
    ) -> Result<Vec<Booking>, GatewayError>;
}
