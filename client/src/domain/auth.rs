//! Authentication inputs: login credentials and account registration.
//!
//! Raw form input is validated by the constructors here so services only ever
//! hand well-shaped payloads to the auth gateway.

use zeroize::Zeroizing;

use super::validation::{
    FormError, PASSWORD_MIN, is_absolute_url, is_valid_login_email, is_valid_name,
    is_valid_registration_email, non_blank,
};

/// Validated login credentials.
///
/// ## Invariants
/// - `email` is trimmed and ends in `@stud.noroff.no`.
/// - `password` is non-empty and kept verbatim.
///
/// # Examples
/// ```
/// use holidaze::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" a@stud.noroff.no ", "password1").unwrap();
/// assert_eq!(creds.email(), "a@stud.noroff.no");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Validate raw email/password input.
    ///
    /// # Errors
    ///
    /// [`FormError::InvalidLoginEmail`] or [`FormError::EmptyPassword`].
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, FormError> {
        let trimmed = email.trim();
        if !is_valid_login_email(trimmed) {
            return Err(FormError::InvalidLoginEmail);
        }
        if password.is_empty() {
            return Err(FormError::EmptyPassword);
        }
        Ok(Self {
            email: trimmed.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Account email.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as typed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Raw registration form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    /// Desired profile name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Password.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
    /// Optional avatar URL; blank means none.
    pub avatar: Option<String>,
    /// Request venue-manager rights.
    pub venue_manager: bool,
}

/// Registration payload that passed the client-side checks.
///
/// Checks run in form order and stop at the first failure: name, email,
/// password length, confirmation, avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    name: String,
    email: String,
    password: Zeroizing<String>,
    avatar: Option<String>,
    venue_manager: bool,
}

impl Registration {
    /// Validate a registration form.
    ///
    /// # Examples
    /// ```
    /// use holidaze::domain::{FormError, Registration, RegistrationForm};
    ///
    /// let form = RegistrationForm {
    ///     name: "kari".into(),
    ///     email: "kari@stud.noroff.no".into(),
    ///     password: "password1".into(),
    ///     confirm_password: "password2".into(),
    ///     ..RegistrationForm::default()
    /// };
    /// assert_eq!(Registration::try_from_form(form), Err(FormError::PasswordMismatch));
    /// ```
    ///
    /// # Errors
    ///
    /// The first failing check, as a [`FormError`].
    pub fn try_from_form(form: RegistrationForm) -> Result<Self, FormError> {
        let name = form.name.trim();
        if !is_valid_name(name) {
            return Err(FormError::InvalidName);
        }
        let email = form.email.trim();
        if !is_valid_registration_email(email) {
            return Err(FormError::InvalidRegistrationEmail);
        }
        if form.password.chars().count() < PASSWORD_MIN {
            return Err(FormError::PasswordTooShort { min: PASSWORD_MIN });
        }
        if form.password != form.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        let avatar = non_blank(form.avatar.as_deref());
        if avatar.is_some_and(|url| !is_absolute_url(url)) {
            return Err(FormError::InvalidAvatarUrl);
        }

        Ok(Self {
            name: name.to_owned(),
            email: email.to_owned(),
            avatar: avatar.map(str::to_owned),
            password: Zeroizing::new(form.password),
            venue_manager: form.venue_manager,
        })
    }

    /// Profile name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Account email.
    #[must_use]
    pub const fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Avatar URL, if one was given.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Whether venue-manager rights were requested.
    #[must_use]
    pub const fn venue_manager(&self) -> bool {
        self.venue_manager
    }
}
