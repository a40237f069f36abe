//! Tests for booking and the "My Bookings" list.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockBookingGateway, MockSessionStorage};
use crate::domain::{AccessToken, FormError, Session};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 6, 15, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).expect("valid fixture date")
}

fn booking(id: &str, guests: u32) -> Booking {
    let stamp = Utc
        .with_ymd_and_hms(2026, 7, 1, 0, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    Booking {
        id: BookingId::new(id),
        date_from: stamp,
        date_to: stamp,
        guests,
        venue_id: None,
        created: stamp,
        updated: stamp,
    }
}

#[fixture]
fn session() -> Arc<SessionStore> {
    let mut storage = MockSessionStorage::new();
    storage.expect_save().returning(|_| Ok(()));
    let store = Arc::new(SessionStore::new(Arc::new(storage)));
    store
        .login(Session {
            name: "kari".to_owned(),
            email: "kari@stud.noroff.no".to_owned(),
            avatar: None,
            venue_manager: false,
            access_token: AccessToken::new("kari-token"),
        })
        .expect("login");
    store
}

fn loaded_gateway() -> MockBookingGateway {
    let mut gateway = MockBookingGateway::new();
    gateway
        .expect_list_profile_bookings()
        .withf(|token, name| token.expose() == "kari-token" && name == "kari")
        .times(1)
        .return_once(|_, _| Ok(vec![booking("b1", 2), booking("b2", 3)]));
    gateway
}

#[rstest]
#[tokio::test]
async fn book_sends_the_validated_draft(session: Arc<SessionStore>) {
    let mut gateway = MockBookingGateway::new();
    gateway
        .expect_create_booking()
        .withf(|token, draft| {
            token.expose() == "kari-token" && draft.venue_id().as_str() == "v1" && draft.guests() == 2
        })
        .times(1)
        .return_once(|_, _| Ok(booking("b9", 2)));
    let service = BookingService::new(Arc::new(gateway), session, fixture_clock());

    let created = service
        .book(
            VenueId::new("v1"),
            BookingForm {
                date_from: day(7, 1),
                date_to: day(7, 5),
                guests: 2,
            },
        )
        .await
        .expect("booking succeeds");

    assert_eq!(created.id, BookingId::new("b9"));
}

#[rstest]
#[case::past_check_in(day(6, 14), day(6, 20), 2, FormError::DateInPast)]
#[case::reversed(day(7, 5), day(7, 1), 2, FormError::DatesOutOfOrder)]
#[case::no_guests(day(7, 1), day(7, 5), 0, FormError::InvalidGuests)]
#[tokio::test]
async fn invalid_booking_forms_never_reach_the_gateway(
    session: Arc<SessionStore>,
    #[case] date_from: NaiveDate,
    #[case] date_to: NaiveDate,
    #[case] guests: i64,
    #[case] expected: FormError,
) {
    let mut gateway = MockBookingGateway::new();
    gateway.expect_create_booking().never();
    let service = BookingService::new(Arc::new(gateway), session, fixture_clock());

    let err = service
        .book(
            VenueId::new("v1"),
            BookingForm {
                date_from,
                date_to,
                guests,
            },
        )
        .await
        .expect_err("form is rejected");

    assert_eq!(err, DomainError::Invalid(expected));
}

#[rstest]
#[tokio::test]
async fn delete_removes_locally_without_refetching(session: Arc<SessionStore>) {
    let mut gateway = loaded_gateway();
    gateway
        .expect_delete_booking()
        .withf(|_, id| id.as_str() == "b1")
        .times(1)
        .return_once(|_, _| Ok(()));
    let service = BookingService::new(Arc::new(gateway), session, fixture_clock());
    let mut mine = service.my_bookings();
    mine.load().await.expect("load succeeds");

    mine.delete(&BookingId::new("b1"))
        .await
        .expect("delete succeeds");

    let ids: Vec<&str> = mine.bookings().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["b2"]);
}

#[rstest]
#[tokio::test]
async fn update_merges_the_server_answer(session: Arc<SessionStore>) {
    let mut gateway = loaded_gateway();
    gateway
        .expect_update_booking()
        .withf(|_, id, update| id.as_str() == "b2" && update.guests() == 5)
        .times(1)
        .return_once(|_, _, _| Ok(booking("b2", 5)));
    let service = BookingService::new(Arc::new(gateway), session, fixture_clock());
    let mut mine = service.my_bookings();
    mine.load().await.expect("load succeeds");

    // Edits are not checked against today.
    let updated = mine
        .update(
            &BookingId::new("b2"),
            BookingForm {
                date_from: day(1, 1),
                date_to: day(1, 3),
                guests: 5,
            },
        )
        .await
        .expect("update succeeds");
    assert_eq!(updated.guests, 5);

    let guests: Vec<u32> = mine.bookings().iter().map(|b| b.guests).collect();
    assert_eq!(guests, vec![2, 5]);
}

#[rstest]
#[tokio::test]
async fn failed_delete_keeps_the_local_list(session: Arc<SessionStore>) {
    let mut gateway = loaded_gateway();
    gateway
        .expect_delete_booking()
        .return_once(|_, _| Err(GatewayError::rejected(404_u16, "Booking not found")));
    let service = BookingService::new(Arc::new(gateway), session, fixture_clock());
    let mut mine = service.my_bookings();
    mine.load().await.expect("load succeeds");

    let err = mine
        .delete(&BookingId::new("b1"))
        .await
        .expect_err("delete fails");

    assert_eq!(err.to_string(), "Booking not found");
    assert_eq!(mine.bookings().len(), 2);
}
