//! `ProfileGateway` over `/profiles`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::HolidazeHttpClient;
use super::dto::{AvatarRequest, ProfileDto};
use crate::domain::ports::{GatewayError, ProfileGateway};
use crate::domain::{AccessToken, AvatarUpdate, Profile};

#[async_trait]
impl ProfileGateway for HolidazeHttpClient {
    async fn profile(&self, token: &AccessToken, name: &str) -> Result<Profile, GatewayError> {
        let request = self.request(Method::GET, self.endpoint(&["profiles", name]), Some(token));
        self.fetch::<ProfileDto>(request, "Could not load profile", "profile")
            .await
            .map(Profile::from)
    }

    async fn update_avatar(
        &self,
        token: &AccessToken,
        name: &str,
        avatar: &AvatarUpdate,
    ) -> Result<Profile, GatewayError> {
        let request = self
            .request(
                Method::PUT,
                self.endpoint(&["profiles", name, "media"]),
                Some(token),
            )
            .json(&AvatarRequest::from(avatar));
        self.fetch::<ProfileDto>(request, "Could not update avatar", "profile")
            .await
            .map(Profile::from)
    }
}
