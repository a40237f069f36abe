//! Plain-text rendering of domain records.

use std::io::{self, Write};

use crate::domain::{Booking, Profile, ProfileOverview, Session, Venue};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub(super) fn venue_line(out: &mut impl Write, venue: &Venue) -> io::Result<()> {
    write!(
        out,
        "{id}  {name}  {price} per night  up to {guests} guests",
        id = venue.id,
        name = venue.name,
        price = venue.price,
        guests = venue.max_guests,
    )?;
    let place = venue.location.summary();
    if !place.is_empty() {
        write!(out, "  {place}")?;
    }
    writeln!(out)
}

pub(super) fn venue_list(out: &mut impl Write, venues: &[Venue]) -> io::Result<()> {
    if venues.is_empty() {
        return writeln!(out, "No venues found.");
    }
    venues.iter().try_for_each(|venue| venue_line(out, venue))
}

pub(super) fn venue_details(out: &mut impl Write, venue: &Venue) -> io::Result<()> {
    writeln!(out, "{} ({})", venue.name, venue.id)?;
    if !venue.description.is_empty() {
        writeln!(out, "{}", venue.description)?;
    }
    writeln!(out, "Price: {} per night", venue.price)?;
    writeln!(out, "Max guests: {}", venue.max_guests)?;
    if let Some(rating) = venue.rating {
        writeln!(out, "Rating: {rating}")?;
    }
    let place = venue.location.summary();
    if !place.is_empty() {
        writeln!(out, "Location: {place}")?;
    }
    if let Some(owner) = &venue.owner {
        writeln!(out, "Owner: {} <{}>", owner.name, owner.email)?;
    }
    for media in &venue.media {
        writeln!(out, "Media: {media}")?;
    }
    if venue.bookings.is_empty() {
        return writeln!(out, "No bookings yet.");
    }
    writeln!(out, "Booked:")?;
    venue.bookings.iter().try_for_each(|booking| {
        write!(out, "  ")?;
        booking_line(out, booking)
    })
}

pub(super) fn booking_line(out: &mut impl Write, booking: &Booking) -> io::Result<()> {
    write!(
        out,
        "{id}  {from} to {to}  {guests} guests",
        id = booking.id,
        from = booking.date_from.format(DATE_FORMAT),
        to = booking.date_to.format(DATE_FORMAT),
        guests = booking.guests,
    )?;
    if let Some(venue) = &booking.venue_id {
        write!(out, "  venue {venue}")?;
    }
    writeln!(out)
}

pub(super) fn booking_list(out: &mut impl Write, bookings: &[Booking]) -> io::Result<()> {
    if bookings.is_empty() {
        return writeln!(out, "You have no bookings.");
    }
    bookings
        .iter()
        .try_for_each(|booking| booking_line(out, booking))
}

pub(super) fn session(out: &mut impl Write, session: Option<&Session>) -> io::Result<()> {
    let Some(session) = session else {
        return writeln!(out, "Not logged in.");
    };
    writeln!(out, "{} <{}>", session.name, session.email)?;
    if session.venue_manager {
        writeln!(out, "Venue manager")?;
    }
    if let Some(avatar) = &session.avatar {
        writeln!(out, "Avatar: {avatar}")?;
    }
    Ok(())
}

pub(super) fn profile(out: &mut impl Write, profile: &Profile) -> io::Result<()> {
    writeln!(out, "{} <{}>", profile.name, profile.email)?;
    writeln!(
        out,
        "Venue manager: {}",
        if profile.venue_manager { "yes" } else { "no" }
    )?;
    match &profile.avatar {
        Some(avatar) => writeln!(out, "Avatar: {avatar}"),
        None => writeln!(out, "Avatar: none"),
    }
}

pub(super) fn overview(out: &mut impl Write, overview: &ProfileOverview) -> io::Result<()> {
    profile(out, &overview.profile)?;
    writeln!(out)?;
    writeln!(out, "Your venues:")?;
    venue_list(out, &overview.venues)
}

#[cfg(test)]
mod tests {
    //! Output shape checks.

    use super::*;
    use crate::domain::{BookingId, Location, VenueId};
    use chrono::{TimeZone, Utc};

    fn rendered(render: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer).expect("render succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn venue_lines_include_location_when_known() {
        let venue = Venue {
            id: VenueId::new("v1"),
            name: "Fjord Cabin".to_owned(),
            description: String::new(),
            media: Vec::new(),
            price: 950.0,
            max_guests: 4,
            rating: None,
            location: Location {
                city: Some("Bergen".to_owned()),
                country: Some("Norway".to_owned()),
                ..Location::default()
            },
            owner: None,
            bookings: Vec::new(),
        };

        let line = rendered(|out| venue_line(out, &venue));

        assert!(line.starts_with("v1  Fjord Cabin  950 per night  up to 4 guests"));
        assert!(line.contains("Bergen"));
    }

    #[test]
    fn bookings_render_calendar_dates() {
        let day = |d| Utc.with_ymd_and_hms(2026, 7, d, 0, 0, 0).single().expect("date");
        let booking = Booking {
            id: BookingId::new("b1"),
            date_from: day(1),
            date_to: day(4),
            guests: 2,
            venue_id: Some(VenueId::new("v1")),
            created: day(1),
            updated: day(1),
        };

        assert_eq!(
            rendered(|out| booking_line(out, &booking)),
            "b1  2026-07-01 to 2026-07-04  2 guests  venue v1\n"
        );
    }

    #[test]
    fn empty_lists_say_so() {
        assert_eq!(rendered(|out| booking_list(out, &[])), "You have no bookings.\n");
        assert_eq!(rendered(|out| session(out, None)), "Not logged in.\n");
    }
}
