//! Driven port for the `/auth` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{LoginCredentials, Profile, Registration, Session};

/// Port for account registration and login.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// `POST /auth/register`.
    async fn register(&self, registration: &Registration) -> Result<Profile, GatewayError>;

    /// `POST /auth/login`, returning the session record including the token.
    async fn login(&self, credentials: &LoginCredentials) -> Result<Session, GatewayError>;
}
