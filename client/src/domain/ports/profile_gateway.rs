//! Driven port for the `/profiles` endpoints.

use async_trait::async_trait;

use super::GatewayError;
use crate::domain::{AccessToken, AvatarUpdate, Profile};

/// Port for reading profiles and changing avatars.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// `GET /profiles/{name}`.
    async fn profile(&self, token: &AccessToken, name: &str) -> Result<Profile, GatewayError>;

    /// `PUT /profiles/{name}/media`.
    async fn update_avatar(
        &self,
        token: &AccessToken,
        name: &str,
        avatar: &AvatarUpdate,
    ) -> Result<Profile, GatewayError>;
}
