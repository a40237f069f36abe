//! Tests for the venue service.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::{MockSessionStorage, MockVenueGateway};
use crate::domain::{AccessToken, FormError, Location, ProfileSummary, Session};

fn venue(id: &str, name: &str, owner_email: &str) -> Venue {
    Venue {
        id: VenueId::new(id),
        name: name.to_owned(),
        description: "A place to stay".to_owned(),
        media: Vec::new(),
        price: 500.0,
        max_guests: 4,
        rating: None,
        location: Location::default(),
        owner: Some(ProfileSummary {
            name: String::new(),
            email: owner_email.to_owned(),
            avatar: None,
        }),
        bookings: Vec::new(),
    }
}

fn valid_form() -> VenueForm {
    VenueForm {
        name: "Fjord_Cabin".to_owned(),
        description: "Cabin with a view".to_owned(),
        price: 900.0,
        max_guests: 3,
        location: Location {
            address: Some("Fjordveien_2".to_owned()),
            city: Some("Balestrand".to_owned()),
            zip: Some("6899".to_owned()),
            country: Some("Norway".to_owned()),
            continent: Some("Europe".to_owned()),
        },
        ..VenueForm::default()
    }
}

#[fixture]
fn logged_in() -> Arc<SessionStore> {
    let mut storage = MockSessionStorage::new();
    storage.expect_save().returning(|_| Ok(()));
    let store = Arc::new(SessionStore::new(Arc::new(storage)));
    store
        .login(Session {
            name: "kari".to_owned(),
            email: "kari@stud.noroff.no".to_owned(),
            avatar: None,
            venue_manager: true,
            access_token: AccessToken::new("kari-token"),
        })
        .expect("login");
    store
}

#[fixture]
fn logged_out() -> Arc<SessionStore> {
    let mut storage = MockSessionStorage::new();
    storage.expect_load().returning(|| Ok(None));
    let store = Arc::new(SessionStore::new(Arc::new(storage)));
    assert_eq!(store.restore(), None);
    store
}

#[rstest]
#[tokio::test]
async fn list_filters_by_name(logged_out: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway.expect_list_venues().times(1).return_once(|| {
        Ok(vec![
            venue("v1", "Fjord Cabin", "a@stud.noroff.no"),
            venue("v2", "City Loft", "b@stud.noroff.no"),
        ])
    });
    let service = VenueService::new(Arc::new(gateway), logged_out);

    let venues = service.list("fjord").await.expect("listing succeeds");

    let ids: Vec<&str> = venues.iter().map(|venue| venue.id.as_str()).collect();
    assert_eq!(ids, ["v1"]);
}

#[rstest]
#[tokio::test]
async fn listing_failures_are_reported_not_swallowed(logged_out: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway
        .expect_list_venues()
        .return_once(|| Err(GatewayError::transport("connection refused")));
    let service = VenueService::new(Arc::new(gateway), logged_out);

    let err = service.list("").await.expect_err("listing fails");

    assert!(matches!(err, DomainError::Gateway(GatewayError::Transport { .. })));
}

#[rstest]
#[tokio::test]
async fn create_sends_the_session_token(logged_in: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway
        .expect_create_venue()
        .withf(|token, draft| token.expose() == "kari-token" && draft.name() == "Fjord_Cabin")
        .times(1)
        .return_once(|_, _| Ok(venue("v9", "Fjord_Cabin", "kari@stud.noroff.no")));
    let service = VenueService::new(Arc::new(gateway), logged_in);

    let created = service.create(valid_form()).await.expect("create succeeds");

    assert_eq!(created.id, VenueId::new("v9"));
}

#[rstest]
#[tokio::test]
async fn create_requires_a_session(logged_out: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway.expect_create_venue().never();
    let service = VenueService::new(Arc::new(gateway), logged_out);

    let err = service.create(valid_form()).await.expect_err("no session");

    assert_eq!(err, DomainError::not_logged_in("create a venue"));
}

#[rstest]
#[tokio::test]
async fn invalid_update_form_never_reaches_the_gateway(logged_in: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway
        .expect_venue_details()
        .times(1)
        .return_once(|_| Ok(venue("v1", "Cabin", "kari@stud.noroff.no")));
    gateway.expect_update_venue().never();
    let service = VenueService::new(Arc::new(gateway), logged_in);

    let err = service
        .update(
            &VenueId::new("v1"),
            VenueUpdateForm {
                price: Some(-10.0),
                ..VenueUpdateForm::default()
            },
        )
        .await
        .expect_err("negative price");

    assert_eq!(err, DomainError::Invalid(FormError::InvalidPrice));
}

#[rstest]
#[tokio::test]
async fn update_merges_the_form_over_the_current_venue(logged_in: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway
        .expect_venue_details()
        .withf(|id| id.as_str() == "v1")
        .times(1)
        .return_once(|_| Ok(venue("v1", "Cabin", "kari@stud.noroff.no")));
    gateway
        .expect_update_venue()
        .withf(|token, id, update| {
            token.expose() == "kari-token"
                && id.as_str() == "v1"
                && update.name() == "Cabin"
                && update.description() == "A place to stay"
                && update.max_guests() == 6
        })
        .times(1)
        .return_once(|_, _, _| Ok(venue("v1", "Cabin", "kari@stud.noroff.no")));
    let service = VenueService::new(Arc::new(gateway), logged_in);

    service
        .update(
            &VenueId::new("v1"),
            VenueUpdateForm {
                max_guests: Some(6),
                ..VenueUpdateForm::default()
            },
        )
        .await
        .expect("update succeeds");
}

#[rstest]
#[tokio::test]
async fn update_requires_a_session_before_fetching(logged_out: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway.expect_venue_details().never();
    gateway.expect_update_venue().never();
    let service = VenueService::new(Arc::new(gateway), logged_out);

    let err = service
        .update(&VenueId::new("v1"), VenueUpdateForm::default())
        .await
        .expect_err("no session");

    assert_eq!(err, DomainError::not_logged_in("update a venue"));
}

#[rstest]
#[tokio::test]
async fn owned_venues_keep_only_the_users_listings(logged_in: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway.expect_list_venues().return_once(|| {
        Ok(vec![
            venue("v1", "Mine", "kari@stud.noroff.no"),
            venue("v2", "Theirs", "ola@stud.noroff.no"),
        ])
    });
    let service = VenueService::new(Arc::new(gateway), logged_in);

    let owned = service.owned_venues().await.expect("listing succeeds");

    let ids: Vec<&str> = owned.iter().map(|venue| venue.id.as_str()).collect();
    assert_eq!(ids, vec!["v1"]);
}

#[rstest]
#[tokio::test]
async fn delete_uses_the_session_token(logged_in: Arc<SessionStore>) {
    let mut gateway = MockVenueGateway::new();
    gateway
        .expect_delete_venue()
        .withf(|token, id| token.expose() == "kari-token" && id.as_str() == "v1")
        .times(1)
        .return_once(|_, _| Ok(()));
    let service = VenueService::new(Arc::new(gateway), logged_in);

    service
        .delete(&VenueId::new("v1"))
        .await
        .expect("delete succeeds");
}
