//! Wire DTOs for the Holidaze REST API.
//!
//! Responses are decoded into these camelCase transport shapes first, then
//! mapped into domain records in one pass. Request bodies borrow from the
//! validated domain inputs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    AvatarUpdate, Booking, BookingDraft, BookingId, BookingUpdate, Location, LoginCredentials,
    Profile, ProfileSummary, Registration, Venue, VenueDraft, VenueId, VenueUpdate,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProfileDto {
    name: String,
    email: String,
    avatar: Option<String>,
    #[serde(default)]
    venue_manager: bool,
}

impl From<ProfileDto> for Profile {
    fn from(dto: ProfileDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            avatar: dto.avatar,
            venue_manager: dto.venue_manager,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwnerDto {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    avatar: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct LocationDto {
    address: Option<String>,
    city: Option<String>,
    zip: Option<String>,
    country: Option<String>,
    continent: Option<String>,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Self {
            address: dto.address,
            city: dto.city,
            zip: dto.zip,
            country: dto.country,
            continent: dto.continent,
        }
    }
}

impl From<&Location> for LocationDto {
    fn from(location: &Location) -> Self {
        Self {
            address: location.address.clone(),
            city: location.city.clone(),
            zip: location.zip.clone(),
            country: location.country.clone(),
            continent: location.continent.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct VenueDto {
    id: String,
    name: String,
    description: Option<String>,
    media: Option<Vec<String>>,
    price: f64,
    max_guests: u32,
    rating: Option<f64>,
    location: Option<LocationDto>,
    owner: Option<OwnerDto>,
    #[serde(default)]
    bookings: Vec<BookingDto>,
}

impl From<VenueDto> for Venue {
    fn from(dto: VenueDto) -> Self {
        Self {
            id: VenueId::new(dto.id),
            name: dto.name,
            description: dto.description.unwrap_or_default(),
            media: dto.media.unwrap_or_default(),
            price: dto.price,
            max_guests: dto.max_guests,
            rating: dto.rating,
            location: dto.location.unwrap_or_default().into(),
            owner: dto.owner.map(|owner| ProfileSummary {
                name: owner.name,
                email: owner.email,
                avatar: owner.avatar,
            }),
            bookings: dto.bookings.into_iter().map(Booking::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct VenueRefDto {
    id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BookingDto {
    id: String,
    date_from: DateTime<Utc>,
    date_to: DateTime<Utc>,
    guests: u32,
    venue_id: Option<String>,
    venue: Option<VenueRefDto>,
    created: DateTime<Utc>,
    updated: DateTime<Utc>,
}

impl From<BookingDto> for Booking {
    fn from(dto: BookingDto) -> Self {
        let venue_id = dto.venue_id.or_else(|| dto.venue.map(|venue| venue.id));
        Self {
            id: BookingId::new(dto.id),
            date_from: dto.date_from,
            date_to: dto.date_to,
            guests: dto.guests,
            venue_id: venue_id.map(VenueId::new),
            created: dto.created,
            updated: dto.updated,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<&'a str>,
    venue_manager: bool,
}

impl<'a> From<&'a Registration> for RegisterRequest<'a> {
    fn from(registration: &'a Registration) -> Self {
        Self {
            name: registration.name(),
            email: registration.email(),
            password: registration.password(),
            avatar: registration.avatar(),
            venue_manager: registration.venue_manager(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

impl<'a> From<&'a LoginCredentials> for LoginRequest<'a> {
    fn from(credentials: &'a LoginCredentials) -> Self {
        Self {
            email: credentials.email(),
            password: credentials.password(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CreateVenueRequest<'a> {
    name: &'a str,
    description: &'a str,
    media: &'a [String],
    price: f64,
    max_guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    rating: Option<f64>,
    location: LocationDto,
}

impl<'a> From<&'a VenueDraft> for CreateVenueRequest<'a> {
    fn from(draft: &'a VenueDraft) -> Self {
        Self {
            name: draft.name(),
            description: draft.description(),
            media: draft.media(),
            price: draft.price(),
            max_guests: draft.max_guests(),
            rating: draft.rating(),
            location: LocationDto::from(draft.location()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateVenueRequest<'a> {
    name: &'a str,
    description: &'a str,
    price: f64,
    max_guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<&'a [String]>,
}

impl<'a> From<&'a VenueUpdate> for UpdateVenueRequest<'a> {
    fn from(update: &'a VenueUpdate) -> Self {
        Self {
            name: update.name(),
            description: update.description(),
            price: update.price(),
            max_guests: update.max_guests(),
            media: update.media(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct BookingRequest<'a> {
    date_from: NaiveDate,
    date_to: NaiveDate,
    guests: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    venue_id: Option<&'a str>,
}

impl<'a> From<&'a BookingDraft> for BookingRequest<'a> {
    fn from(draft: &'a BookingDraft) -> Self {
        Self {
            date_from: draft.date_from(),
            date_to: draft.date_to(),
            guests: draft.guests(),
            venue_id: Some(draft.venue_id().as_str()),
        }
    }
}

impl From<&BookingUpdate> for BookingRequest<'_> {
    fn from(update: &BookingUpdate) -> Self {
        Self {
            date_from: update.date_from(),
            date_to: update.date_to(),
            guests: update.guests(),
            venue_id: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct AvatarRequest<'a> {
    avatar: &'a str,
}

impl<'a> From<&'a AvatarUpdate> for AvatarRequest<'a> {
    fn from(update: &'a AvatarUpdate) -> Self {
        Self {
            avatar: update.as_str(),
        }
    }
}
