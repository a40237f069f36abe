//! Reqwest-backed client shared by every Holidaze gateway implementation.
//!
//! The client owns transport details only: URL construction under the base
//! URL, bearer authentication, JSON bodies, status mapping and decoding.

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

use super::error::{decode_error, map_status_error, map_transport_error};
use super::retry::RateLimitRetry;
use crate::domain::AccessToken;
use crate::domain::ports::GatewayError;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.noroff.dev/api/v1/holidaze";

const USER_AGENT: &str = concat!("holidaze-client/", env!("CARGO_PKG_VERSION"));

/// Failures while building [`HolidazeHttpClient`].
#[derive(Debug, Error)]
pub enum HttpClientBuildError {
    /// The base URL cannot carry path segments (for example `mailto:`).
    #[error("base URL {0} cannot be used as an API root")]
    InvalidBaseUrl(Url),
    /// reqwest could not build its client.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// HTTP adapter implementing the auth, venue, booking and profile ports.
#[derive(Clone)]
pub struct HolidazeHttpClient {
    client: Client,
    base_url: Url,
    pub(super) retry: RateLimitRetry,
}

impl HolidazeHttpClient {
    /// Build a client for `base_url` with the default rate-limit retry.
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot carry a path or reqwest cannot initialise.
    pub fn new(base_url: Url) -> Result<Self, HttpClientBuildError> {
        Self::with_retry(base_url, RateLimitRetry::default())
    }

    /// Build a client with an explicit retry policy.
    ///
    /// # Errors
    ///
    /// Fails when the URL cannot carry a path or reqwest cannot initialise.
    pub fn with_retry(base_url: Url, retry: RateLimitRetry) -> Result<Self, HttpClientBuildError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpClientBuildError::InvalidBaseUrl(base_url));
        }
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url,
            retry,
        })
    }

    /// The API root requests are built under.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `base_url` extended with percent-encoded `segments`.
    pub(super) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(super) fn request(
        &self,
        method: Method,
        url: Url,
        token: Option<&AccessToken>,
    ) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token.expose()),
            None => builder,
        }
    }

    /// Send `request` and return the body of a success response.
    ///
    /// `fallback` is the message used when an error body carries none.
    pub(super) async fn execute(
        &self,
        request: RequestBuilder,
        fallback: &'static str,
    ) -> Result<Vec<u8>, GatewayError> {
        let outcome = self.send(request, fallback).await;
        if let Err(error) = &outcome {
            warn!(
                operation = fallback,
                status = ?error.status(),
                error = %error,
                "Holidaze API request failed"
            );
        }
        outcome
    }

    async fn send(
        &self,
        request: RequestBuilder,
        fallback: &'static str,
    ) -> Result<Vec<u8>, GatewayError> {
        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let url = response.url().clone();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "Holidaze API responded");
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref(), fallback));
        }
        Ok(Vec::from(body))
    }

    /// Send `request` and decode the success body as `D`.
    pub(super) async fn fetch<D: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        fallback: &'static str,
        what: &'static str,
    ) -> Result<D, GatewayError> {
        let body = self.execute(request, fallback).await?;
        decode(&body, what)
    }
}

pub(super) fn decode<D: DeserializeOwned>(body: &[u8], what: &str) -> Result<D, GatewayError> {
    serde_json::from_slice(body).map_err(|error| {
        let mapped = decode_error(what, &error);
        warn!(error = %mapped, "Holidaze API response did not decode");
        mapped
    })
}

#[cfg(test)]
mod tests {
    //! URL construction under different base URLs.

    use super::*;
    use rstest::rstest;

    fn client(base: &str) -> HolidazeHttpClient {
        HolidazeHttpClient::new(Url::parse(base).expect("valid url")).expect("client builds")
    }

    #[rstest]
    #[case::no_trailing_slash("https://api.noroff.dev/api/v1/holidaze")]
    #[case::trailing_slash("https://api.noroff.dev/api/v1/holidaze/")]
    fn endpoints_extend_the_base_path(#[case] base: &str) {
        let url = client(base).endpoint(&["venues", "abc-123"]);

        assert_eq!(url.as_str(), "https://api.noroff.dev/api/v1/holidaze/venues/abc-123");
    }

    #[test]
    fn path_segments_are_percent_encoded() {
        let url = client("http://localhost:8080").endpoint(&["profiles", "kari nordmann", "media"]);

        assert_eq!(url.as_str(), "http://localhost:8080/profiles/kari%20nordmann/media");
    }

    #[test]
    fn opaque_urls_are_rejected() {
        let url = Url::parse("mailto:kari@stud.noroff.no").expect("valid url");

        assert!(matches!(
            HolidazeHttpClient::new(url),
            Err(HttpClientBuildError::InvalidBaseUrl(_))
        ));
    }
}
