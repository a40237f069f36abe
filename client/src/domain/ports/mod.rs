//! Domain ports defining the edges of the hexagon.
//!
//! The gateway ports describe the REST API one operation per method; the
//! storage port describes where the session record is persisted. Adapters
//! live under `outbound` and map their failures into the typed errors here.

mod macros;
pub(crate) use macros::define_port_error;

mod auth_gateway;
mod booking_gateway;
mod gateway_error;
mod profile_gateway;
mod session_storage;
mod venue_gateway;

#[cfg(test)]
pub use auth_gateway::MockAuthGateway;
pub use auth_gateway::AuthGateway;
#[cfg(test)]
pub use booking_gateway::MockBookingGateway;
pub use booking_gateway::BookingGateway;
pub use gateway_error::GatewayError;
#[cfg(test)]
pub use profile_gateway::MockProfileGateway;
pub use profile_gateway::ProfileGateway;
#[cfg(test)]
pub use session_storage::MockSessionStorage;
pub use session_storage::{SessionStorage, SessionStorageError};
#[cfg(test)]
pub use venue_gateway::MockVenueGateway;
pub use venue_gateway::VenueGateway;
