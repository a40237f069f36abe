//! Bookings and the booking forms.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use super::validation::FormError;
use super::venue::VenueId;

/// Opaque booking identifier assigned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookingId(String);

impl BookingId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier for path construction.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation of a venue for a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// API identifier.
    pub id: BookingId,
    /// Check-in.
    pub date_from: DateTime<Utc>,
    /// Check-out, never before check-in.
    pub date_to: DateTime<Utc>,
    /// Guest count. Capacity is enforced by the API only.
    pub guests: u32,
    /// Booked venue, when the response carries it.
    pub venue_id: Option<VenueId>,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last update timestamp.
    pub updated: DateTime<Utc>,
}

/// Raw input from the booking and edit-booking forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingForm {
    /// Check-in date.
    pub date_from: NaiveDate,
    /// Check-out date.
    pub date_to: NaiveDate,
    /// Guest count as typed.
    pub guests: i64,
}

impl BookingForm {
    fn validate(self) -> Result<u32, FormError> {
        let guests = u32::try_from(self.guests)
            .ok()
            .filter(|guests| *guests > 0)
            .ok_or(FormError::InvalidGuests)?;
        if self.date_to < self.date_from {
            return Err(FormError::DatesOutOfOrder);
        }
        Ok(guests)
    }
}

/// New booking that passed the client-side checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    venue_id: VenueId,
    date_from: NaiveDate,
    date_to: NaiveDate,
    guests: u32,
}

impl BookingDraft {
    /// Validate a booking form for `venue_id`, given today's date.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use holidaze::domain::{BookingDraft, BookingForm, FormError, VenueId};
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2026, 7, d).unwrap();
    /// let form = BookingForm { date_from: day(10), date_to: day(8), guests: 2 };
    /// assert_eq!(
    ///     BookingDraft::try_new(VenueId::new("v1"), form, day(1)),
    ///     Err(FormError::DatesOutOfOrder)
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidGuests`], [`FormError::DatesOutOfOrder`] or
    /// [`FormError::DateInPast`].
    pub fn try_new(
        venue_id: VenueId,
        form: BookingForm,
        today: NaiveDate,
    ) -> Result<Self, FormError> {
        let guests = form.validate()?;
        if form.date_from < today {
            return Err(FormError::DateInPast);
        }
        Ok(Self {
            venue_id,
            date_from: form.date_from,
            date_to: form.date_to,
            guests,
        })
    }

    /// Venue to book.
    #[must_use]
    pub const fn venue_id(&self) -> &VenueId {
        &self.venue_id
    }

    /// Check-in date.
    #[must_use]
    pub const fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    /// Check-out date.
    #[must_use]
    pub const fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    /// Guest count, at least 1.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }
}

/// Edited dates and guest count for an existing booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingUpdate {
    date_from: NaiveDate,
    date_to: NaiveDate,
    guests: u32,
}

impl BookingUpdate {
    /// Validate the edit-booking form. Past dates are allowed.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidGuests`] or [`FormError::DatesOutOfOrder`].
    pub fn try_from_form(form: BookingForm) -> Result<Self, FormError> {
        let guests = form.validate()?;
        Ok(Self {
            date_from: form.date_from,
            date_to: form.date_to,
            guests,
        })
    }

    /// Check-in date.
    #[must_use]
    pub const fn date_from(&self) -> NaiveDate {
        self.date_from
    }

    /// Check-out date.
    #[must_use]
    pub const fn date_to(&self) -> NaiveDate {
        self.date_to
    }

    /// Guest count, at least 1.
    #[must_use]
    pub const fn guests(&self) -> u32 {
        self.guests
    }
}
