//! The profile page: the user's record, their venues, and avatar changes.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::{GatewayError, ProfileGateway, VenueGateway};
use super::{AvatarUpdate, DomainError, Profile, Session, SessionStore, Venue};

fn log_failure(operation: &'static str) -> impl Fn(&GatewayError) {
    move |error| warn!(operation, error = %error, "profile request failed")
}

/// The logged-in user's profile and the venues they manage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileOverview {
    /// Profile as returned by the API.
    pub profile: Profile,
    /// Venues owned by the profile.
    pub venues: Vec<Venue>,
}

/// Profile use cases backed by profile and venue gateways.
pub struct ProfileService<P, V> {
    profiles: Arc<P>,
    venues: Arc<V>,
    session: Arc<SessionStore>,
}

impl<P, V> Clone for ProfileService<P, V> {
    fn clone(&self) -> Self {
        Self {
            profiles: Arc::clone(&self.profiles),
            venues: Arc::clone(&self.venues),
            session: Arc::clone(&self.session),
        }
    }
}

impl<P: ProfileGateway, V: VenueGateway> ProfileService<P, V> {
    /// Create the service.
    #[must_use]
    pub const fn new(profiles: Arc<P>, venues: Arc<V>, session: Arc<SessionStore>) -> Self {
        Self {
            profiles,
            venues,
            session,
        }
    }

    /// Fetch the profile and the venues it owns.
    ///
    /// # Errors
    ///
    /// Fails without a session or when either request fails.
    pub async fn overview(&self) -> Result<ProfileOverview, DomainError> {
        let session = self.session.require("see your profile")?;
        let profile = self
            .profiles
            .profile(session.token(), &session.name)
            .await
            .inspect_err(log_failure("profile"))?;
        let venues = self
            .venues
            .list_venues()
            .await
            .inspect_err(log_failure("list venues"))?
            .into_iter()
            .filter(|venue| venue.is_owned_by(&session))
            .collect();
        Ok(ProfileOverview { profile, venues })
    }

    /// Change the avatar and refresh the stored session with it.
    ///
    /// # Errors
    ///
    /// Rejects a non-absolute URL without a request; fails without a session,
    /// when the API refuses, or when the refreshed session cannot be stored.
    pub async fn update_avatar(&self, url: &str) -> Result<Profile, DomainError> {
        let avatar = AvatarUpdate::try_new(url)?;
        let session = self.session.require("change your avatar")?;
        let profile = self
            .profiles
            .update_avatar(session.token(), &session.name, &avatar)
            .await
            .inspect_err(log_failure("update avatar"))?;

        let refreshed = Session {
            avatar: profile
                .avatar
                .clone()
                .or_else(|| Some(avatar.as_str().to_owned())),
            ..session
        };
        self.session.login(refreshed)?;
        info!(profile = %profile.name, "avatar updated");
        Ok(profile)
    }
}
