//! Registration and announcement tests
//!
//! Covers the one transactional mutation in the service: registering and
//! unregistering moves the profile's conference list and the seat counter
//! together or not at all. Also drives the announcement cron over the
//! resulting seat counts.

use summit::forms::ConferenceForm;
use summit::handlers::run_set_announcement;
use summit::{AuthUser, ConferenceService, EntityKey, Error, KeyId, Kind};

fn organizer() -> AuthUser {
    AuthUser::new("organizer@example.com", "organizer")
}

fn conference_with_seats(service: &ConferenceService, name: &str, seats: i64) -> String {
    service
        .create_conference(
            Some(&organizer()),
            &ConferenceForm {
                name: Some(name.to_string()),
                max_attendees: Some(seats),
                ..ConferenceForm::default()
            },
        )
        .unwrap()
        .websafe_key
        .unwrap()
}

fn seats_available(service: &ConferenceService, websafe_key: &str) -> i64 {
    service
        .get_conference(websafe_key)
        .unwrap()
        .seats_available
        .unwrap()
}

#[test]
fn test_register_takes_a_seat() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "RustConf", 10);
    let attendee = AuthUser::new("bob@example.com", "bob");

    assert!(service
        .register_for_conference(Some(&attendee), &key)
        .unwrap());
    assert_eq!(seats_available(&service, &key), 9);

    let attending = service.get_conferences_to_attend(Some(&attendee)).unwrap();
    assert_eq!(attending.len(), 1);
    assert_eq!(attending[0].name.as_deref(), Some("RustConf"));
}

#[test]
fn test_register_twice_is_a_conflict() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "RustConf", 10);
    let attendee = AuthUser::new("bob@example.com", "bob");

    service
        .register_for_conference(Some(&attendee), &key)
        .unwrap();
    assert!(matches!(
        service.register_for_conference(Some(&attendee), &key),
        Err(Error::Conflict(_))
    ));
    // The failed attempt must not take another seat
    assert_eq!(seats_available(&service, &key), 9);
}

#[test]
fn test_sold_out_conference_rejects_registration() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "Tiny Meetup", 1);

    let first = AuthUser::new("first@example.com", "first");
    let second = AuthUser::new("second@example.com", "second");

    assert!(service.register_for_conference(Some(&first), &key).unwrap());
    assert_eq!(seats_available(&service, &key), 0);

    assert!(matches!(
        service.register_for_conference(Some(&second), &key),
        Err(Error::Conflict(_))
    ));
    assert_eq!(seats_available(&service, &key), 0);
    assert!(service
        .get_conferences_to_attend(Some(&second))
        .unwrap()
        .is_empty());
}

#[test]
fn test_unregister_returns_the_seat() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "RustConf", 5);
    let attendee = AuthUser::new("bob@example.com", "bob");

    service
        .register_for_conference(Some(&attendee), &key)
        .unwrap();
    assert!(service
        .unregister_from_conference(Some(&attendee), &key)
        .unwrap());
    assert_eq!(seats_available(&service, &key), 5);
    assert!(service
        .get_conferences_to_attend(Some(&attendee))
        .unwrap()
        .is_empty());

    // Unregistering when not registered reports false, changes nothing
    assert!(!service
        .unregister_from_conference(Some(&attendee), &key)
        .unwrap());
    assert_eq!(seats_available(&service, &key), 5);
}

#[test]
fn test_failed_registration_writes_nothing() {
    let service = ConferenceService::new();
    let attendee = AuthUser::new("bob@example.com", "bob");
    let ghost = EntityKey::root(Kind::Profile, KeyId::Name("ghost@example.com".to_string()))
        .child(Kind::Conference, KeyId::Id(404));

    assert!(matches!(
        service.register_for_conference(Some(&attendee), &ghost.websafe()),
        Err(Error::NotFound(_))
    ));
    // The transaction rolled back: no profile write happened either
    assert!(service
        .get_conferences_to_attend(Some(&attendee))
        .unwrap()
        .is_empty());
}

#[test]
fn test_registration_requires_authentication() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "RustConf", 10);
    assert!(matches!(
        service.register_for_conference(None, &key),
        Err(Error::Unauthorized)
    ));
}

#[test]
fn test_announcement_follows_seat_counts() {
    let service = ConferenceService::new();
    let key = conference_with_seats(&service, "Tiny Meetup", 3);

    // Three open seats: nearly sold out
    let announcement = run_set_announcement(&service).unwrap();
    assert!(announcement.contains("Last chance to attend!"));
    assert!(announcement.contains("Tiny Meetup"));
    assert_eq!(service.get_announcement().unwrap(), announcement);

    // Fill every seat; the sweep now clears the cache entry
    for email in ["a@example.com", "b@example.com", "c@example.com"] {
        let attendee = AuthUser::new(email, email);
        service
            .register_for_conference(Some(&attendee), &key)
            .unwrap();
    }
    assert_eq!(seats_available(&service, &key), 0);
    assert_eq!(run_set_announcement(&service).unwrap(), "");
    assert_eq!(service.get_announcement().unwrap(), "");
}

#[test]
fn test_announcement_ignores_roomy_conferences() {
    let service = ConferenceService::new();
    conference_with_seats(&service, "Big Conf", 500);
    assert_eq!(run_set_announcement(&service).unwrap(), "");
}
