//! Conference query tests
//!
//! Drives the public filter language end to end: token validation, value
//! coercion, the single-inequality-field rule, and the sort order the
//! composed plan imposes on results.

use summit::forms::ConferenceForm;
use summit::{AuthUser, ConferenceService, Error, RawFilter};

fn seeded_service() -> ConferenceService {
    let service = ConferenceService::new();
    let organizer = AuthUser::new("organizer@example.com", "organizer");

    let conferences = [
        ("Async Summit", "Berlin", "2024-06-03", vec!["Web", "Async"], 50),
        ("Rust Forge", "Berlin", "2024-06-10", vec!["Systems"], 8),
        ("Data Days", "London", "2024-06-21", vec!["Databases", "Web"], 120),
        ("Winter Camp", "Oslo", "2024-12-01", vec!["Systems"], 30),
    ];
    for (name, city, start_date, topics, max_attendees) in conferences {
        service
            .create_conference(
                Some(&organizer),
                &ConferenceForm {
                    name: Some(name.to_string()),
                    city: Some(city.to_string()),
                    start_date: Some(start_date.to_string()),
                    topics: topics.into_iter().map(String::from).collect(),
                    max_attendees: Some(max_attendees),
                    ..ConferenceForm::default()
                },
            )
            .unwrap();
    }
    service
}

fn names(results: &[ConferenceForm]) -> Vec<&str> {
    results.iter().filter_map(|c| c.name.as_deref()).collect()
}

#[test]
fn test_no_filters_lists_everything_name_ordered() {
    let service = seeded_service();
    let results = service.query_conferences(&[]).unwrap();
    assert_eq!(
        names(&results),
        ["Async Summit", "Data Days", "Rust Forge", "Winter Camp"]
    );
}

#[test]
fn test_city_equality() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[RawFilter::new("CITY", "EQ", "Berlin")])
        .unwrap();
    assert_eq!(names(&results), ["Async Summit", "Rust Forge"]);
}

#[test]
fn test_topic_matches_any_element() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[RawFilter::new("TOPIC", "EQ", "Web")])
        .unwrap();
    assert_eq!(names(&results), ["Async Summit", "Data Days"]);
}

#[test]
fn test_month_value_coerces_to_integer() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[RawFilter::new("MONTH", "EQ", "12")])
        .unwrap();
    assert_eq!(names(&results), ["Winter Camp"]);
}

#[test]
fn test_equality_and_inequality_combined() {
    let service = seeded_service();
    // June conferences with room for more than 10 attendees, capacity-ordered
    let results = service
        .query_conferences(&[
            RawFilter::new("MONTH", "EQ", "6"),
            RawFilter::new("MAX_ATTENDEES", "GT", "10"),
        ])
        .unwrap();
    assert_eq!(names(&results), ["Async Summit", "Data Days"]);
    let capacities: Vec<_> = results.iter().map(|c| c.max_attendees.unwrap()).collect();
    assert_eq!(capacities, [50, 120]);
}

#[test]
fn test_inequality_field_leads_sort_with_name_tiebreak() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[RawFilter::new("MAX_ATTENDEES", "GT", "0")])
        .unwrap();
    let capacities: Vec<_> = results.iter().map(|c| c.max_attendees.unwrap()).collect();
    assert_eq!(capacities, [8, 30, 50, 120]);
}

#[test]
fn test_ne_designates_the_inequality_field() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[RawFilter::new("CITY", "NE", "Berlin")])
        .unwrap();
    // Sorted by city first, then name
    assert_eq!(names(&results), ["Data Days", "Winter Camp"]);
}

#[test]
fn test_second_inequality_field_is_rejected_regardless_of_order() {
    let service = seeded_service();
    for filters in [
        [
            RawFilter::new("CITY", "GT", "A"),
            RawFilter::new("TOPIC", "LT", "Z"),
        ],
        [
            RawFilter::new("TOPIC", "LT", "Z"),
            RawFilter::new("CITY", "GT", "A"),
        ],
    ] {
        assert!(matches!(
            service.query_conferences(&filters),
            Err(Error::MultipleInequalityFields)
        ));
    }
}

#[test]
fn test_repeated_inequalities_on_one_field_compose() {
    let service = seeded_service();
    let results = service
        .query_conferences(&[
            RawFilter::new("MAX_ATTENDEES", "GTEQ", "10"),
            RawFilter::new("MAX_ATTENDEES", "LTEQ", "60"),
        ])
        .unwrap();
    assert_eq!(names(&results), ["Winter Camp", "Async Summit"]);
}

#[test]
fn test_unknown_field_token_is_invalid() {
    let service = seeded_service();
    assert!(matches!(
        service.query_conferences(&[RawFilter::new("SPEAKER", "EQ", "x")]),
        Err(Error::InvalidFilter(_))
    ));
}

#[test]
fn test_unknown_operator_token_is_invalid() {
    let service = seeded_service();
    assert!(matches!(
        service.query_conferences(&[RawFilter::new("CITY", "CONTAINS", "Ber")]),
        Err(Error::InvalidFilter(_))
    ));
}

#[test]
fn test_non_numeric_month_is_invalid() {
    let service = seeded_service();
    assert!(matches!(
        service.query_conferences(&[RawFilter::new("MONTH", "EQ", "June")]),
        Err(Error::InvalidFilter(_))
    ));
}

#[test]
fn test_rejected_queries_touch_no_state() {
    let service = seeded_service();
    let before = service.store().len();
    let _ = service.query_conferences(&[RawFilter::new("SPEAKER", "EQ", "x")]);
    assert_eq!(service.store().len(), before);
}
