//! `BookingGateway` over `/bookings` and `/profiles/{name}/bookings`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::HolidazeHttpClient;
use super::dto::{BookingDto, BookingRequest};
use crate::domain::ports::{BookingGateway, GatewayError};
use crate::domain::{AccessToken, Booking, BookingDraft, BookingId, BookingUpdate};

#[async_trait]
impl BookingGateway for HolidazeHttpClient {
    async fn create_booking(
        &self,
        token: &AccessToken,
        draft: &BookingDraft,
    ) -> Result<Booking, GatewayError> {
        let request = self
            .request(Method::POST, self.endpoint(&["bookings"]), Some(token))
            .json(&BookingRequest::from(draft));
        self.fetch::<BookingDto>(request, "Could not create booking", "booking")
            .await
            .map(Booking::from)
    }

    async fn update_booking(
        &self,
        token: &AccessToken,
        id: &BookingId,
        update: &BookingUpdate,
    ) -> Result<Booking, GatewayError> {
        let request = self
            .request(Method::PUT, self.endpoint(&["bookings", id.as_str()]), Some(token))
            .json(&BookingRequest::from(update));
        self.fetch::<BookingDto>(request, "Could not update booking", "booking")
            .await
            .map(Booking::from)
    }

    async fn delete_booking(
        &self,
        token: &AccessToken,
        id: &BookingId,
    ) -> Result<(), GatewayError> {
        let request = self.request(
            Method::DELETE,
            self.endpoint(&["bookings", id.as_str()]),
            Some(token),
        );
        self.execute(request, "Could not delete booking").await?;
        Ok(())
    }

    async fn list_profile_bookings(
        &self,
        token: &AccessToken,
        profile_name: &str,
    ) -> Result<Vec<Booking>, GatewayError> {
        let request = self
            .request(
                Method::GET,
                self.endpoint(&["profiles", profile_name, "bookings"]),
                Some(token),
            )
            .query(&[("_venue", "true")]);
        let dtos: Vec<BookingDto> = self
            .fetch(request, "Could not load bookings", "booking list")
            .await?;
        Ok(dtos.into_iter().map(Booking::from).collect())
    }
}
