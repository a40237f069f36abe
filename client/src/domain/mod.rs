//! Domain primitives, forms and use cases.
//!
//! Purpose: model the Holidaze booking platform (profiles, venues, bookings
//! and the authenticated session) independently of HTTP and the filesystem.
//! Forms are validated here before any request is built, and every service
//! talks to the API only through the traits in [`ports`].
//!
//! Public surface:
//! - `SessionStore` — the shared authenticated-user state.
//! - `AuthService`, `VenueService`, `BookingService`, `ProfileService` — use
//!   cases consumed by the command-line front end.
//! - `DomainError` / `ErrorCode` — the failure every use case returns.
//! - `FetchTask` — cancellable background requests.

pub mod ports;

mod auth;
mod auth_service;
mod booking;
mod booking_service;
mod error;
mod profile;
mod profile_service;
mod session;
mod session_store;
mod task;
mod validation;
mod venue;
mod venue_service;

pub use self::auth::{LoginCredentials, Registration, RegistrationForm};
pub use self::auth_service::AuthService;
pub use self::booking::{Booking, BookingDraft, BookingForm, BookingId, BookingUpdate};
pub use self::booking_service::{BookingService, MyBookings};
pub use self::error::{DomainError, ErrorCode};
pub use self::profile::{AvatarUpdate, Profile, ProfileSummary};
pub use self::profile_service::{ProfileOverview, ProfileService};
pub use self::session::{AccessToken, Session};
pub use self::session_store::{SessionListener, SessionStatus, SessionStore, SubscriptionId};
pub use self::task::FetchTask;
pub use self::validation::{FormError, PASSWORD_MIN};
pub use self::venue::{
    Location, RATING_MAX, Venue, VenueDraft, VenueForm, VenueId, VenueUpdate, VenueUpdateForm,
};
pub use self::venue_service::VenueService;
