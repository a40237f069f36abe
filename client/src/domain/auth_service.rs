//! Registration, login and logout use cases.

use std::sync::Arc;

use tracing::{info, warn};

use super::ports::AuthGateway;
use super::{DomainError, LoginCredentials, Profile, Registration, RegistrationForm, Session, SessionStore};

/// Account use cases backed by an [`AuthGateway`].
pub struct AuthService<A> {
    gateway: Arc<A>,
    session: Arc<SessionStore>,
}

impl<A> Clone for AuthService<A> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: Arc::clone(&self.session),
        }
    }
}

impl<A: AuthGateway> AuthService<A> {
    /// Create the service around a gateway and the shared session store.
    #[must_use]
    pub const fn new(gateway: Arc<A>, session: Arc<SessionStore>) -> Self {
        Self { gateway, session }
    }

    /// Validate the form and register the account. Does not log in.
    ///
    /// # Errors
    ///
    /// [`DomainError::Invalid`] without a request when the form fails its checks;
    /// [`DomainError::Gateway`] when the API rejects the registration.
    pub async fn register(&self, form: RegistrationForm) -> Result<Profile, DomainError> {
        let registration = Registration::try_from_form(form)?;
        let profile = self
            .gateway
            .register(&registration)
            .await
            .inspect_err(|error| warn!(error = %error, "registration failed"))?;
        info!(profile = %profile.name, "profile registered");
        Ok(profile)
    }

    /// Authenticate and store the returned session.
    ///
    /// # Errors
    ///
    /// Fails on invalid input, API rejection, or when the session cannot be
    /// persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let credentials = LoginCredentials::try_from_parts(email, password)?;
        let session = self
            .gateway
            .login(&credentials)
            .await
            .inspect_err(|error| warn!(error = %error, "login failed"))?;
        self.session.login(session.clone())?;
        Ok(session)
    }

    /// Forget the current session.
    ///
    /// # Errors
    ///
    /// Fails when the persisted record cannot be removed; the in-memory
    /// session is cleared regardless.
    pub fn logout(&self) -> Result<(), DomainError> {
        self.session.logout()?;
        Ok(())
    }
}
