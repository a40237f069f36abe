//! Mapping of reqwest failures and HTTP statuses onto [`GatewayError`].

use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::ports::GatewayError;

#[derive(Debug, Deserialize)]
struct ErrorBodyDto {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorEntryDto>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntryDto {
    message: Option<String>,
}

pub(super) fn map_transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::transport(error.to_string())
}

/// Map a non-success response.
///
/// 4xx and 429 carry the server's message when the body has one, otherwise
/// `fallback`; 5xx always carries a generic message.
pub(super) fn map_status_error(status: StatusCode, body: &[u8], fallback: &str) -> GatewayError {
    let code = status.as_u16();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GatewayError::rate_limited(server_message(body).unwrap_or_else(|| fallback.to_owned()));
    }
    if status.is_client_error() {
        return GatewayError::rejected(code, server_message(body).unwrap_or_else(|| fallback.to_owned()));
    }
    GatewayError::server(code, format!("{fallback}: the service is unavailable (HTTP {code})"))
}

/// The top-level `message`, else the first `errors[].message`.
fn server_message(body: &[u8]) -> Option<String> {
    let parsed: ErrorBodyDto = serde_json::from_slice(body).ok()?;
    let non_blank = |message: Option<String>| message.filter(|text| !text.trim().is_empty());
    non_blank(parsed.message).or_else(|| {
        parsed
            .errors
            .into_iter()
            .find_map(|entry| non_blank(entry.message))
    })
}

pub(super) fn decode_error(what: &str, error: &serde_json::Error) -> GatewayError {
    GatewayError::decode(format!("invalid {what} payload: {error}"))
}

#[cfg(test)]
mod tests {
    //! Status mapping and message extraction.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::top_level(br#"{"message":"Profile already exists"}"#.as_slice(), "Profile already exists")]
    #[case::nested(
        br#"{"errors":[{"message":"Invalid email or password"}],"status":"Unauthorized"}"#.as_slice(),
        "Invalid email or password"
    )]
    #[case::blank_top_level(br#"{"message":" ","errors":[{"message":"Name taken"}]}"#.as_slice(), "Name taken")]
    #[case::empty_object(b"{}".as_slice(), "Login failed")]
    #[case::not_json(b"<html>Bad Request</html>".as_slice(), "Login failed")]
    fn client_errors_prefer_the_server_message(#[case] body: &[u8], #[case] expected: &str) {
        let error = map_status_error(StatusCode::BAD_REQUEST, body, "Login failed");

        assert_eq!(error, GatewayError::rejected(400_u16, expected));
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn too_many_requests_maps_to_rate_limited() {
        let error = map_status_error(StatusCode::TOO_MANY_REQUESTS, b"", "Could not load venue");

        assert_eq!(error, GatewayError::rate_limited("Could not load venue"));
    }

    #[test]
    fn server_errors_hide_the_body() {
        let error = map_status_error(
            StatusCode::BAD_GATEWAY,
            br#"{"message":"upstream stack trace"}"#,
            "Could not load venues",
        );

        assert_eq!(
            error,
            GatewayError::server(
                502_u16,
                "Could not load venues: the service is unavailable (HTTP 502)"
            )
        );
    }
}
