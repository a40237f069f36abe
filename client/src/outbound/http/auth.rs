//! `AuthGateway` over `/auth`.

use async_trait::async_trait;
use reqwest::Method;

use super::client::HolidazeHttpClient;
use super::dto::{LoginRequest, ProfileDto, RegisterRequest};
use crate::domain::ports::{AuthGateway, GatewayError};
use crate::domain::{LoginCredentials, Profile, Registration, Session};

#[async_trait]
impl AuthGateway for HolidazeHttpClient {
    async fn register(&self, registration: &Registration) -> Result<Profile, GatewayError> {
        let request = self
            .request(Method::POST, self.endpoint(&["auth", "register"]), None)
            .json(&RegisterRequest::from(registration));
        self.fetch::<ProfileDto>(request, "Registration failed", "profile")
            .await
            .map(Profile::from)
    }

    async fn login(&self, credentials: &LoginCredentials) -> Result<Session, GatewayError> {
        let request = self
            .request(Method::POST, self.endpoint(&["auth", "login"]), None)
            .json(&LoginRequest::from(credentials));
        let session: Session = self.fetch(request, "Login failed", "login").await?;
        if !session.is_well_formed() {
            return Err(GatewayError::decode(
                "login response is missing the profile name or access token",
            ));
        }
        Ok(session)
    }
}
