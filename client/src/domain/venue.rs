//! Venue listings plus the create and update forms.

use std::fmt;

use super::booking::Booking;
use super::profile::ProfileSummary;
use super::session::Session;
use super::validation::{
    FormError, is_absolute_url, is_valid_name, is_valid_place_name, non_blank,
};

/// Highest rating a venue can carry.
pub const RATING_MAX: f64 = 5.0;

/// Opaque venue identifier assigned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VenueId(String);

impl VenueId {
    /// Wrap a raw identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier for path construction.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Postal location of a venue. Every part is optional on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
    /// Country.
    pub country: Option<String>,
    /// Continent.
    pub continent: Option<String>,
}

impl Location {
    /// Parts joined with commas, skipping blanks.
    #[must_use]
    pub fn summary(&self) -> String {
        [
            &self.address,
            &self.zip,
            &self.city,
            &self.country,
            &self.continent,
        ]
        .into_iter()
        .filter_map(|part| non_blank(part.as_deref()))
        .collect::<Vec<_>>()
        .join(", ")
    }
}

/// A bookable property listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    /// API identifier.
    pub id: VenueId,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Image URLs in display order; may be empty.
    pub media: Vec<String>,
    /// Nightly price.
    pub price: f64,
    /// Guest capacity.
    pub max_guests: u32,
    /// Rating from 0 to 5.
    pub rating: Option<f64>,
    /// Where the venue is.
    pub location: Location,
    /// Owning profile, when the response embeds it.
    pub owner: Option<ProfileSummary>,
    /// Bookings, present when fetched with `_bookings=true`.
    pub bookings: Vec<Booking>,
}

impl Venue {
    /// Case-insensitive name match used by the venue list search box.
    ///
    /// A blank query matches every venue.
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty() || self.name.to_lowercase().contains(&needle)
    }

    /// Whether the logged-in user owns this venue.
    ///
    /// Matches on the owner's profile name, or on the owner's email ignoring
    /// case. Blank owner fields never match.
    #[must_use]
    pub fn is_owned_by(&self, session: &Session) -> bool {
        self.owner.as_ref().is_some_and(|owner| {
            (!owner.name.is_empty() && owner.name == session.name)
                || (!owner.email.is_empty() && owner.email.eq_ignore_ascii_case(&session.email))
        })
    }
}

/// Raw input from the create-venue form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueForm {
    /// Venue name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Optional single media URL.
    pub media: Option<String>,
    /// Nightly price.
    pub price: f64,
    /// Guest capacity as typed.
    pub max_guests: i64,
    /// Optional rating.
    pub rating: Option<f64>,
    /// Location fields.
    pub location: Location,
}

/// Create-venue payload that passed the client-side checks.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueDraft {
    name: String,
    description: String,
    media: Vec<String>,
    price: f64,
    max_guests: u32,
    rating: Option<f64>,
    location: Location,
}

impl VenueDraft {
    /// Validate the create-venue form.
    ///
    /// Address, city, country and continent are required; the zip code is
    /// optional.
    ///
    /// # Examples
    /// ```
    /// use holidaze::domain::{FormError, VenueDraft, VenueForm};
    ///
    /// let form = VenueForm {
    ///     name: "Seaside_Cabin".into(),
    ///     description: "Quiet cabin by the fjord".into(),
    ///     price: 0.0,
    ///     max_guests: 4,
    ///     ..VenueForm::default()
    /// };
    /// assert_eq!(VenueDraft::try_from_form(form), Err(FormError::InvalidPrice));
    /// ```
    ///
    /// # Errors
    ///
    /// The first failing check, as a [`FormError`].
    pub fn try_from_form(form: VenueForm) -> Result<Self, FormError> {
        let VenueForm {
            name,
            description,
            media,
            price,
            max_guests,
            rating,
            location,
        } = form;
        let trimmed_name = name.trim();
        if !is_valid_name(trimmed_name) {
            return Err(FormError::InvalidName);
        }
        let trimmed_description = description.trim();
        if trimmed_description.is_empty() {
            return Err(FormError::MissingField {
                field: "Description",
            });
        }
        if !price.is_finite() || price < 1.0 {
            return Err(FormError::InvalidPrice);
        }
        let guests = positive_guests(max_guests).ok_or(FormError::InvalidMaxGuests)?;
        if let Some(value) = rating {
            if !value.is_finite() || !(0.0..=RATING_MAX).contains(&value) {
                return Err(FormError::InvalidRating);
            }
        }
        let media_urls = media_list(media.as_deref())?;
        let location_fields = checked_location(&location)?;

        Ok(Self {
            name: trimmed_name.to_owned(),
            description: trimmed_description.to_owned(),
            media: media_urls,
            price,
            max_guests: guests,
            rating,
            location: location_fields,
        })
    }

    /// Venue name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Media URLs; empty when none was given.
    #[must_use]
    pub const fn media(&self) -> &[String] {
        self.media.as_slice()
    }

    /// Nightly price, at least 1.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Guest capacity, at least 1.
    #[must_use]
    pub const fn max_guests(&self) -> u32 {
        self.max_guests
    }

    /// Rating within 0 to 5.
    #[must_use]
    pub const fn rating(&self) -> Option<f64> {
        self.rating
    }

    /// Trimmed location fields.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }
}

/// Raw input from the update-venue form. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VenueUpdateForm {
    /// Venue name.
    pub name: Option<String>,
    /// Description; `Some("")` clears it.
    pub description: Option<String>,
    /// Nightly price.
    pub price: Option<f64>,
    /// Guest capacity as typed.
    pub max_guests: Option<i64>,
    /// Replacement media URL; `None` leaves media untouched.
    pub media: Option<String>,
}

/// Venue update: name, description, price, capacity and optionally media.
///
/// The API replaces every field it receives, so untouched fields carry the
/// venue's current values.
#[derive(Debug, Clone, PartialEq)]
pub struct VenueUpdate {
    name: String,
    description: String,
    price: f64,
    max_guests: u32,
    media: Option<Vec<String>>,
}

impl VenueUpdate {
    /// Merge the form over `current` and validate the result.
    ///
    /// # Examples
    /// ```
    /// use holidaze::domain::{Location, Venue, VenueId, VenueUpdate, VenueUpdateForm};
    ///
    /// let current = Venue {
    ///     id: VenueId::new("v1"),
    ///     name: "Cabin".into(),
    ///     description: "By the fjord".into(),
    ///     media: Vec::new(),
    ///     price: 900.0,
    ///     max_guests: 4,
    ///     rating: None,
    ///     location: Location::default(),
    ///     owner: None,
    ///     bookings: Vec::new(),
    /// };
    /// let form = VenueUpdateForm { price: Some(1100.0), ..VenueUpdateForm::default() };
    /// let update = VenueUpdate::try_merge(&current, form).expect("valid update");
    /// assert_eq!(update.description(), "By the fjord");
    /// assert_eq!(update.price(), 1100.0);
    /// ```
    ///
    /// # Errors
    ///
    /// [`FormError::MissingField`] for a blank name, otherwise
    /// [`FormError::InvalidPrice`], [`FormError::InvalidMaxGuests`] or
    /// [`FormError::InvalidMediaUrl`].
    pub fn try_merge(current: &Venue, form: VenueUpdateForm) -> Result<Self, FormError> {
        let VenueUpdateForm {
            name,
            description,
            price,
            max_guests,
            media,
        } = form;
        let merged_name = non_blank(name.as_deref()).unwrap_or_else(|| current.name.trim());
        if merged_name.is_empty() {
            return Err(FormError::MissingField { field: "Name" });
        }
        let merged_description = description
            .as_deref()
            .map_or_else(|| current.description.trim(), str::trim);
        let merged_price = price.unwrap_or(current.price);
        if !merged_price.is_finite() || merged_price <= 0.0 {
            return Err(FormError::InvalidPrice);
        }
        let merged_guests = max_guests
            .map_or(Some(current.max_guests), positive_guests)
            .filter(|guests| *guests > 0)
            .ok_or(FormError::InvalidMaxGuests)?;
        let replacement_media = non_blank(media.as_deref())
            .map(|url| media_list(Some(url)))
            .transpose()?;

        Ok(Self {
            name: merged_name.to_owned(),
            description: merged_description.to_owned(),
            price: merged_price,
            max_guests: merged_guests,
            media: replacement_media,
        })
    }

    /// Venue name.
    #[must_use]
    pub const fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Description.
    #[must_use]
    pub const fn description(&self) -> &str {
        self.description.as_str()
    }

    /// Nightly price, above zero.
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }

    /// Guest capacity, at least 1.
    #[must_use]
    pub const fn max_guests(&self) -> u32 {
        self.max_guests
    }

    /// Replacement media list, when one was given.
    #[must_use]
    pub fn media(&self) -> Option<&[String]> {
        self.media.as_deref()
    }
}

fn positive_guests(raw: i64) -> Option<u32> {
    u32::try_from(raw).ok().filter(|guests| *guests > 0)
}

fn media_list(raw: Option<&str>) -> Result<Vec<String>, FormError> {
    match non_blank(raw) {
        Some(url) if is_absolute_url(url) => Ok(vec![url.to_owned()]),
        Some(_) => Err(FormError::InvalidMediaUrl),
        None => Ok(Vec::new()),
    }
}

fn checked_location(location: &Location) -> Result<Location, FormError> {
    let address = non_blank(location.address.as_deref())
        .ok_or(FormError::MissingField { field: "Address" })?;
    if !is_valid_name(address) {
        return Err(FormError::InvalidAddress);
    }
    let city = place(location.city.as_deref(), "City", "city")?;
    let zip = non_blank(location.zip.as_deref())
        .map(|raw| {
            raw.parse::<u64>()
                .ok()
                .filter(|code| *code >= 1)
                .map(|_| raw.to_owned())
                .ok_or(FormError::InvalidZip)
        })
        .transpose()?;
    let country = place(location.country.as_deref(), "Country", "country")?;
    let continent = place(location.continent.as_deref(), "Continent", "continent")?;

    Ok(Location {
        address: Some(address.to_owned()),
        city: Some(city),
        zip,
        country: Some(country),
        continent: Some(continent),
    })
}

fn place(raw: Option<&str>, label: &'static str, field: &'static str) -> Result<String, FormError> {
    let value = non_blank(raw).ok_or(FormError::MissingField { field: label })?;
    if is_valid_place_name(value) {
        Ok(value.to_owned())
    } else {
        Err(FormError::InvalidPlaceName { field })
    }
}
