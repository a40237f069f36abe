//! `VenueGateway` over `/venues`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::HolidazeHttpClient;
use super::dto::{CreateVenueRequest, UpdateVenueRequest, VenueDto};
use crate::domain::ports::{GatewayError, VenueGateway};
use crate::domain::{AccessToken, Venue, VenueDraft, VenueId, VenueUpdate};

fn into_venues(dtos: Vec<VenueDto>) -> Vec<Venue> {
    dtos.into_iter().map(Venue::from).collect()
}

#[async_trait]
impl VenueGateway for HolidazeHttpClient {
    async fn list_venues(&self) -> Result<Vec<Venue>, GatewayError> {
        let request = self
            .request(Method::GET, self.endpoint(&["venues"]), None)
            .query(&[("_owner", "true")]);
        self.fetch(request, "Could not load venues", "venue list")
            .await
            .map(into_venues)
    }

    async fn venue_details(&self, id: &VenueId) -> Result<Venue, GatewayError> {
        let url = self.endpoint(&["venues", id.as_str()]);
        self.retry
            .run("venue details", || {
                let request = self
                    .request(Method::GET, url.clone(), None)
                    .query(&[("_bookings", "true"), ("_owner", "true")]);
                self.fetch::<VenueDto>(request, "Could not load venue", "venue")
            })
            .await
            .map(Venue::from)
    }

    async fn create_venue(
        &self,
        token: &AccessToken,
        draft: &VenueDraft,
    ) -> Result<Venue, GatewayError> {
        let request = self
            .request(Method::POST, self.endpoint(&["venues"]), Some(token))
            .json(&CreateVenueRequest::from(draft));
        self.fetch::<VenueDto>(request, "Could not create venue", "venue")
            .await
            .map(Venue::from)
    }

    async fn update_venue(
        &self,
        token: &AccessToken,
        id: &VenueId,
        update: &VenueUpdate,
    ) -> Result<Venue, GatewayError> {
        let request = self
            .request(Method::PUT, self.endpoint(&["venues", id.as_str()]), Some(token))
            .json(&UpdateVenueRequest::from(update));
        self.fetch::<VenueDto>(request, "Could not update venue", "venue")
            .await
            .map(Venue::from)
    }

    async fn delete_venue(&self, token: &AccessToken, id: &VenueId) -> Result<(), GatewayError> {
        let request = self.request(
            Method::DELETE,
            self.endpoint(&["venues", id.as_str()]),
            Some(token),
        );
        self.execute(request, "Could not delete venue").await?;
        Ok(())
    }

    async fn list_user_venues(
        &self,
        token: &AccessToken,
        user_id: &str,
    ) -> Result<Vec<Venue>, GatewayError> {
        let request = self.request(
            Method::GET,
            self.endpoint(&["venues", "user", user_id]),
            Some(token),
        );
        self.fetch(request, "Could not load the user's venues", "venue list")
            .await
            .map(into_venues)
    }
}
