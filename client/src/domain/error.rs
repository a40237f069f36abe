//! Use-case error type.
//!
//! Every service operation fails with [`DomainError`], whose `Display` is the
//! single human-readable message shown to the user and whose [`ErrorCode`]
//! gives front ends a stable category to branch on.

use thiserror::Error;

use super::ports::{GatewayError, SessionStorageError};
use super::validation::FormError;

/// Stable machine-readable error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Input failed validation, locally or on the server.
    InvalidRequest,
    /// No session, or the API refused the token.
    Unauthorized,
    /// The requested resource does not exist.
    NotFound,
    /// The API is rate limiting the client.
    RateLimited,
    /// The API could not be reached or failed on its side.
    Unavailable,
    /// Unexpected local or decoding failure.
    InternalError,
}

/// Failure of a use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The form was rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] FormError),
    /// A mutating use case was attempted without a session.
    #[error("You need to be logged in to {action}.")]
    NotLoggedIn {
        /// What the user tried to do, e.g. "create a venue".
        action: &'static str,
    },
    /// The API call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The session could not be persisted or cleared.
    #[error(transparent)]
    Storage(#[from] SessionStorageError),
}

impl DomainError {
    /// Convenience constructor for [`DomainError::NotLoggedIn`].
    #[must_use]
    pub const fn not_logged_in(action: &'static str) -> Self {
        Self::NotLoggedIn { action }
    }

    /// Stable category for this failure.
    ///
    /// # Examples
    /// ```
    /// use holidaze::domain::{DomainError, ErrorCode};
    /// use holidaze::domain::ports::GatewayError;
    ///
    /// let err = DomainError::from(GatewayError::rejected(404_u16, "No venue with such ID"));
    /// assert_eq!(err.code(), ErrorCode::NotFound);
    /// ```
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Invalid(_) => ErrorCode::InvalidRequest,
            Self::NotLoggedIn { .. } => ErrorCode::Unauthorized,
            Self::Gateway(error) => gateway_code(error),
            Self::Storage(_) => ErrorCode::InternalError,
        }
    }
}

const fn gateway_code(error: &GatewayError) -> ErrorCode {
    match error {
        GatewayError::Rejected { status: 401 | 403, .. } => ErrorCode::Unauthorized,
        GatewayError::Rejected { status: 404, .. } => ErrorCode::NotFound,
        GatewayError::Rejected { .. } => ErrorCode::InvalidRequest,
        GatewayError::RateLimited { .. } => ErrorCode::RateLimited,
        GatewayError::Transport { .. } | GatewayError::Server { .. } => ErrorCode::Unavailable,
        GatewayError::Decode { .. } => ErrorCode::InternalError,
    }
}

#[cfg(test)]
mod tests {
    //! Category mapping and messages for use-case errors.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DomainError::from(FormError::PasswordMismatch), ErrorCode::InvalidRequest)]
    #[case(DomainError::not_logged_in("book a venue"), ErrorCode::Unauthorized)]
    #[case(DomainError::from(GatewayError::rejected(401_u16, "expired")), ErrorCode::Unauthorized)]
    #[case(DomainError::from(GatewayError::rejected(409_u16, "taken")), ErrorCode::InvalidRequest)]
    #[case(DomainError::from(GatewayError::rate_limited("busy")), ErrorCode::RateLimited)]
    #[case(DomainError::from(GatewayError::server(500_u16, "oops")), ErrorCode::Unavailable)]
    #[case(DomainError::from(GatewayError::decode("eof")), ErrorCode::InternalError)]
    #[case(DomainError::from(SessionStorageError::io("disk full")), ErrorCode::InternalError)]
    fn maps_failures_to_codes(#[case] error: DomainError, #[case] expected: ErrorCode) {
        assert_eq!(error.code(), expected);
    }

    #[test]
    fn not_logged_in_message_names_the_action() {
        assert_eq!(
            DomainError::not_logged_in("create a venue").to_string(),
            "You need to be logged in to create a venue."
        );
    }
}
