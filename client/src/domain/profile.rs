//! Public profile records and avatar updates.

use super::validation::{FormError, is_absolute_url};

/// A registered user's public record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Unique profile name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Optional avatar URL.
    pub avatar: Option<String>,
    /// Whether the profile may manage venues.
    pub venue_manager: bool,
}

/// Owner summary embedded in venue responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    /// Owner's profile name.
    pub name: String,
    /// Owner's email.
    pub email: String,
    /// Owner's avatar URL.
    pub avatar: Option<String>,
}

/// Validated avatar URL for `PUT /profiles/{name}/media`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpdate(String);

impl AvatarUpdate {
    /// Accept an absolute URL.
    ///
    /// # Examples
    /// ```
    /// use holidaze::domain::{AvatarUpdate, FormError};
    ///
    /// assert!(AvatarUpdate::try_new("https://img.example/me.png").is_ok());
    /// assert_eq!(AvatarUpdate::try_new("me.png"), Err(FormError::InvalidAvatarUrl));
    /// ```
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidAvatarUrl`] for relative or malformed input.
    pub fn try_new(raw: &str) -> Result<Self, FormError> {
        let trimmed = raw.trim();
        if !is_absolute_url(trimmed) {
            return Err(FormError::InvalidAvatarUrl);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// The avatar URL.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
