//! Reqwest adapter for the Holidaze REST API.
//!
//! One [`HolidazeHttpClient`] implements every gateway port. Each operation
//! makes a single attempt except venue details, which goes through
//! [`RateLimitRetry`].

mod auth;
mod bookings;
mod client;
mod dto;
mod error;
mod profiles;
mod retry;
mod venues;

pub use client::{DEFAULT_BASE_URL, HolidazeHttpClient, HttpClientBuildError};
pub use retry::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY, RateLimitRetry, Sleeper, TokioSleeper};
