//! Venue browsing and management use cases.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::ports::{GatewayError, VenueGateway};
use super::{
    DomainError, SessionStore, Venue, VenueDraft, VenueForm, VenueId, VenueUpdate, VenueUpdateForm,
};

fn log_failure(operation: &'static str) -> impl Fn(&GatewayError) {
    move |error| warn!(operation, error = %error, "venue request failed")
}

/// Venue use cases backed by a [`VenueGateway`].
pub struct VenueService<V> {
    gateway: Arc<V>,
    session: Arc<SessionStore>,
}

impl<V> Clone for VenueService<V> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: Arc::clone(&self.session),
        }
    }
}

impl<V: VenueGateway> VenueService<V> {
    /// Create the service around a gateway and the shared session store.
    #[must_use]
    pub const fn new(gateway: Arc<V>, session: Arc<SessionStore>) -> Self {
        Self { gateway, session }
    }

    /// All venues whose name contains `search`, ignoring case.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure instead of yielding an empty list.
    pub async fn list(&self, search: &str) -> Result<Vec<Venue>, DomainError> {
        let venues = self
            .gateway
            .list_venues()
            .await
            .inspect_err(log_failure("list venues"))?;
        let total = venues.len();
        let matching: Vec<Venue> = venues
            .into_iter()
            .filter(|venue| venue.matches_search(search))
            .collect();
        debug!(total, matching = matching.len(), "venues listed");
        Ok(matching)
    }

    /// One venue including its bookings.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure, including exhausted rate-limit retries.
    pub async fn details(&self, id: &VenueId) -> Result<Venue, DomainError> {
        Ok(self
            .gateway
            .venue_details(id)
            .await
            .inspect_err(log_failure("venue details"))?)
    }

    /// Validate the form and create a venue owned by the current user.
    ///
    /// # Errors
    ///
    /// Form and session checks fail before any request is sent.
    pub async fn create(&self, form: VenueForm) -> Result<Venue, DomainError> {
        let draft = VenueDraft::try_from_form(form)?;
        let session = self.session.require("create a venue")?;
        let venue = self
            .gateway
            .create_venue(session.token(), &draft)
            .await
            .inspect_err(log_failure("create venue"))?;
        info!(venue = %venue.id, "venue created");
        Ok(venue)
    }

    /// Update venue `id`, keeping current values for fields the form omits.
    ///
    /// The venue is fetched first and the form merged over it, so the `PUT`
    /// never blanks a field the user left out.
    ///
    /// # Errors
    ///
    /// Fails without a session, when the current venue cannot be fetched, or
    /// when the merged values are invalid. No update is sent in those cases.
    pub async fn update(&self, id: &VenueId, form: VenueUpdateForm) -> Result<Venue, DomainError> {
        let session = self.session.require("update a venue")?;
        let current = self
            .gateway
            .venue_details(id)
            .await
            .inspect_err(log_failure("venue details"))?;
        let update = VenueUpdate::try_merge(&current, form)?;
        let venue = self
            .gateway
            .update_venue(session.token(), id, &update)
            .await
            .inspect_err(log_failure("update venue"))?;
        info!(venue = %venue.id, "venue updated");
        Ok(venue)
    }

    /// Delete venue `id`.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the API refuses.
    pub async fn delete(&self, id: &VenueId) -> Result<(), DomainError> {
        let session = self.session.require("delete a venue")?;
        self.gateway
            .delete_venue(session.token(), id)
            .await
            .inspect_err(log_failure("delete venue"))?;
        info!(venue = %id, "venue deleted");
        Ok(())
    }

    /// Venues the logged-in user owns, filtered from the full listing.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the listing fails.
    pub async fn owned_venues(&self) -> Result<Vec<Venue>, DomainError> {
        let session = self.session.require("see your venues")?;
        let venues = self
            .gateway
            .list_venues()
            .await
            .inspect_err(log_failure("list venues"))?;
        Ok(venues
            .into_iter()
            .filter(|venue| venue.is_owned_by(&session))
            .collect())
    }

    /// Venues listed by `GET /venues/user/{user_id}`.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the API refuses.
    pub async fn user_venues(&self, user_id: &str) -> Result<Vec<Venue>, DomainError> {
        let session = self.session.require("see a user's venues")?;
        Ok(self
            .gateway
            .list_user_venues(session.token(), user_id)
            .await
            .inspect_err(log_failure("user venues"))?)
    }
}

#[cfg(test)]
#[path = "venue_service_tests.rs"]
mod tests;
