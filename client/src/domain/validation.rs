//! Client-side form validation failures.
//!
//! Checks are advisory: they save a round trip for obviously bad input, but
//! the API remains the authority and may reject with different rules.

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

/// Minimum password length accepted by the registration form.
pub const PASSWORD_MIN: usize = 8;

/// A form rejected before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Profile or venue name outside `[A-Za-z0-9_]`.
    #[error("Name can only contain letters, numbers, and underscores (_).")]
    InvalidName,
    /// Registration email outside the Noroff domains.
    #[error("Email must be a valid stud.noroff.no or noroff.no address.")]
    InvalidRegistrationEmail,
    /// Login email outside the student domain.
    #[error("Email must be a valid @stud.noroff.no address.")]
    InvalidLoginEmail,
    /// Password shorter than the registration minimum.
    #[error("Password must be at least {min} characters long.")]
    PasswordTooShort {
        /// Required minimum length.
        min: usize,
    },
    /// Password left blank.
    #[error("Password must not be empty.")]
    EmptyPassword,
    /// Password confirmation differs from the password.
    #[error("Passwords do not match.")]
    PasswordMismatch,
    /// Avatar is not an absolute URL.
    #[error("Avatar must be a valid URL.")]
    InvalidAvatarUrl,
    /// A required text field was blank.
    #[error("{field} is required.")]
    MissingField {
        /// Human-readable field label.
        field: &'static str,
    },
    /// Price missing, not a number, or below the allowed minimum.
    #[error("Price must be a valid positive number.")]
    InvalidPrice,
    /// Guest capacity missing or not positive.
    #[error("Max Guests must be a valid positive number.")]
    InvalidMaxGuests,
    /// Rating outside 0 to 5.
    #[error("Rating must be between 0 and 5.")]
    InvalidRating,
    /// Media entry is not an absolute URL.
    #[error("Media must be a valid URL.")]
    InvalidMediaUrl,
    /// Check-out date precedes check-in date.
    #[error("Date To must not be earlier than Date From.")]
    DatesOutOfOrder,
    /// Check-in date lies before today.
    #[error("Date From must not be in the past.")]
    DateInPast,
    /// Guest count not a positive integer.
    #[error("Number of guests must be a positive integer.")]
    InvalidGuests,
    /// Street address outside `[A-Za-z0-9_]`.
    #[error("Invalid address. Only letters, numbers, and underscores are allowed.")]
    InvalidAddress,
    /// City, country or continent with characters other than letters,
    /// spaces, hyphens and apostrophes.
    #[error("Invalid {field} name. Only letters, spaces, hyphens, and apostrophes are allowed.")]
    InvalidPlaceName {
        /// Lower-case field label.
        field: &'static str,
    },
    /// Zip code not a whole number of at least 1.
    #[error("Zip Code must be a whole number of at least 1.")]
    InvalidZip,
}

static NAME_RE: OnceLock<Regex> = OnceLock::new();
static REGISTRATION_EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static LOGIN_EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PLACE_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("form regex {pattern} failed to compile: {error}"))
}

/// Whether `name` only uses letters, digits and underscores.
pub(crate) fn is_valid_name(name: &str) -> bool {
    NAME_RE
        .get_or_init(|| compile("^[A-Za-z0-9_]+$"))
        .is_match(name)
}

/// Whether `place` only uses letters, whitespace, hyphens and apostrophes.
pub(crate) fn is_valid_place_name(place: &str) -> bool {
    PLACE_RE
        .get_or_init(|| compile(r"^[A-Za-z\s\-']+$"))
        .is_match(place)
}

/// Whether `email` belongs to `noroff.no` or `stud.noroff.no`.
pub(crate) fn is_valid_registration_email(email: &str) -> bool {
    REGISTRATION_EMAIL_RE
        .get_or_init(|| compile(r"^[a-zA-Z0-9._%+-]+@(stud\.)?noroff\.no$"))
        .is_match(email)
}

/// Whether `email` belongs to `stud.noroff.no`.
pub(crate) fn is_valid_login_email(email: &str) -> bool {
    LOGIN_EMAIL_RE
        .get_or_init(|| compile(r"^.+@stud\.noroff\.no$"))
        .is_match(email)
}

/// Whether `raw` parses as an absolute URL.
pub(crate) fn is_absolute_url(raw: &str) -> bool {
    url::Url::parse(raw).is_ok()
}

/// Return `Some(trimmed)` for non-blank optional input.
pub(crate) fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    //! Pattern coverage for the shared form checks.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("kari_nordmann", true)]
    #[case("Villa42", true)]
    #[case("kari nordmann", false)]
    #[case("kåre", false)]
    #[case("", false)]
    fn names_allow_word_characters_only(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_valid_name(name), expected);
    }

    #[rstest]
    #[case("Bergen", true)]
    #[case("North America", true)]
    #[case("Côte-d'Ivoire", false)]
    #[case("Stavanger-Sola", true)]
    #[case("O'Fallon", true)]
    #[case("Oslo 1", false)]
    #[case("", false)]
    fn place_names_allow_letters_spaces_hyphens_and_apostrophes(
        #[case] place: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(is_valid_place_name(place), expected);
    }

    #[rstest]
    #[case("kari@stud.noroff.no", true)]
    #[case("staff@noroff.no", true)]
    #[case("kari@gmail.com", false)]
    #[case("kari@stud.noroffxno", false)]
    fn registration_accepts_both_noroff_domains(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_registration_email(email), expected);
    }

    #[rstest]
    #[case("a@stud.noroff.no", true)]
    #[case("staff@noroff.no", false)]
    fn login_requires_the_student_domain(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_login_email(email), expected);
    }

    #[test]
    fn form_errors_render_user_facing_messages() {
        assert_eq!(
            FormError::PasswordTooShort { min: PASSWORD_MIN }.to_string(),
            "Password must be at least 8 characters long."
        );
        assert_eq!(
            FormError::MissingField {
                field: "Description"
            }
            .to_string(),
            "Description is required."
        );
        assert_eq!(
            FormError::InvalidPlaceName { field: "city" }.to_string(),
            "Invalid city name. Only letters, spaces, hyphens, and apostrophes are allowed."
        );
    }
}
