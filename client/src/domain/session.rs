//! Authenticated session record held client-side after login.

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Bearer token issued by the API on login.
///
/// The token is kept in zeroising memory and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(Zeroizing::new(token.into()))
    }

    /// Borrow the raw token for header construction.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Whether the token is blank once trimmed.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

impl From<String> for AccessToken {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<AccessToken> for String {
    fn from(value: AccessToken) -> Self {
        value.0.as_str().to_owned()
    }
}

/// Logged-in user as persisted between runs.
///
/// ## Invariants
/// - A session read back from storage is only accepted when
///   [`Session::is_well_formed`] holds.
///
/// The serialised shape matches the login response and the persisted record:
///
/// ```
/// use holidaze::domain::{AccessToken, Session};
///
/// let session = Session {
///     name: "kari_nordmann".to_owned(),
///     email: "kari@stud.noroff.no".to_owned(),
///     avatar: None,
///     venue_manager: true,
///     access_token: AccessToken::new("token-123"),
/// };
/// let json = serde_json::to_value(&session).unwrap();
/// assert_eq!(json["venueManager"], true);
/// assert_eq!(json["accessToken"], "token-123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Profile name, used in profile and booking paths.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Whether the profile may manage venues.
    #[serde(default)]
    pub venue_manager: bool,
    /// Bearer token attached to authenticated calls.
    pub access_token: AccessToken,
}

impl Session {
    /// Whether a restored record carries enough to act on behalf of the user.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.name.trim().is_empty() && !self.access_token.is_blank()
    }

    /// Borrow the bearer token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.access_token
    }
}
