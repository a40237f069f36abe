//! Booking use cases: booking a stay and the "My Bookings" list.

use std::sync::Arc;

use mockable::Clock;
use tracing::{info, warn};

use super::ports::{BookingGateway, GatewayError};
use super::{
    Booking, BookingDraft, BookingForm, BookingId, BookingUpdate, DomainError, SessionStore, VenueId,
};

fn log_failure(operation: &'static str) -> impl Fn(&GatewayError) {
    move |error| warn!(operation, error = %error, "booking request failed")
}

/// Booking use cases backed by a [`BookingGateway`].
pub struct BookingService<B> {
    gateway: Arc<B>,
    session: Arc<SessionStore>,
    clock: Arc<dyn Clock>,
}

impl<B> Clone for BookingService<B> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: Arc::clone(&self.session),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B: BookingGateway> BookingService<B> {
    /// Create the service; `clock` decides what "today" is for new bookings.
    #[must_use]
    pub const fn new(gateway: Arc<B>, session: Arc<SessionStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            gateway,
            session,
            clock,
        }
    }

    /// Validate the form and book `venue_id`.
    ///
    /// # Errors
    ///
    /// Rejects reversed dates, past check-in and non-positive guest counts
    /// without sending a request; fails without a session.
    pub async fn book(&self, venue_id: VenueId, form: BookingForm) -> Result<Booking, DomainError> {
        let today = self.clock.utc().date_naive();
        let draft = BookingDraft::try_new(venue_id, form, today)?;
        let session = self.session.require("book a venue")?;
        let booking = self
            .gateway
            .create_booking(session.token(), &draft)
            .await
            .inspect_err(log_failure("create booking"))?;
        info!(booking = %booking.id, venue = %draft.venue_id(), "booking created");
        Ok(booking)
    }

    /// An empty "My Bookings" list bound to this service.
    #[must_use]
    pub fn my_bookings(&self) -> MyBookings<B> {
        MyBookings {
            service: self.clone(),
            bookings: Vec::new(),
        }
    }
}

/// Locally held list of the logged-in user's bookings.
///
/// Edits and deletions are applied to the local list from the server's
/// answer; the full list is only fetched by [`MyBookings::load`].
pub struct MyBookings<B> {
    service: BookingService<B>,
    bookings: Vec<Booking>,
}

impl<B: BookingGateway> MyBookings<B> {
    /// Replace the local list with the user's bookings.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the API refuses; the local list is
    /// left as it was.
    pub async fn load(&mut self) -> Result<&[Booking], DomainError> {
        let session = self.service.session.require("see your bookings")?;
        self.bookings = self
            .service
            .gateway
            .list_profile_bookings(session.token(), &session.name)
            .await
            .inspect_err(log_failure("list bookings"))?;
        Ok(&self.bookings)
    }

    /// Bookings currently held.
    #[must_use]
    pub const fn bookings(&self) -> &[Booking] {
        self.bookings.as_slice()
    }

    /// Validate the edit form, update booking `id`, and merge the answer.
    ///
    /// # Errors
    ///
    /// Form and session checks fail before any request is sent.
    pub async fn update(&mut self, id: &BookingId, form: BookingForm) -> Result<&Booking, DomainError> {
        let update = BookingUpdate::try_from_form(form)?;
        let session = self.service.session.require("update a booking")?;
        let updated = self
            .service
            .gateway
            .update_booking(session.token(), id, &update)
            .await
            .inspect_err(log_failure("update booking"))?;
        info!(booking = %id, "booking updated");

        let position = match self.bookings.iter().position(|booking| &booking.id == id) {
            Some(position) => {
                if let Some(slot) = self.bookings.get_mut(position) {
                    *slot = updated;
                }
                position
            }
            None => {
                self.bookings.push(updated);
                self.bookings.len() - 1
            }
        };
        self.bookings
            .get(position)
            .ok_or_else(|| DomainError::from(GatewayError::decode("updated booking vanished")))
    }

    /// Delete booking `id` and drop it from the local list.
    ///
    /// # Errors
    ///
    /// Fails without a session or when the API refuses; the local list is
    /// left as it was.
    pub async fn delete(&mut self, id: &BookingId) -> Result<(), DomainError> {
        let session = self.service.session.require("delete a booking")?;
        self.service
            .gateway
            .delete_booking(session.token(), id)
            .await
            .inspect_err(log_failure("delete booking"))?;
        self.bookings.retain(|booking| &booking.id != id);
        info!(booking = %id, "booking deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "booking_service_tests.rs"]
mod tests;
