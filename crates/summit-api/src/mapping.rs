//! Record/form field mapping.
//!
//! Each mapping is written out field by field, so adding or renaming a
//! record field is a compile error here rather than a silently dropped
//! attribute. Dates and times cross the wire as ISO-8601 strings.

use crate::forms::{ConferenceForm, ProfileForm, SessionForm};
use summit_core::records::{Conference, Profile, Session};
use summit_core::{EntityKey, Error, Result};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Time};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Parses a wire date (`YYYY-MM-DD`).
///
/// Datetime strings are accepted too; everything past the date part is
/// ignored.
pub(crate) fn parse_date(value: &str) -> Result<Date> {
    let date_part = value.get(..10).unwrap_or(value);
    Date::parse(date_part, DATE_FORMAT)
        .map_err(|_| Error::BadRequest(format!("invalid date '{}'", value)))
}

/// Parses a wire time of day (`HH:MM`).
pub(crate) fn parse_time(value: &str) -> Result<Time> {
    Time::parse(value, TIME_FORMAT)
        .map_err(|_| Error::BadRequest(format!("invalid time '{}'", value)))
}

pub(crate) fn format_date(date: Date) -> Result<String> {
    date.format(DATE_FORMAT)
        .map_err(|e| Error::Serialization(e.to_string()))
}

pub(crate) fn format_time(time: Time) -> Result<String> {
    time.format(TIME_FORMAT)
        .map_err(|e| Error::Serialization(e.to_string()))
}

pub(crate) fn profile_to_form(profile: &Profile) -> ProfileForm {
    ProfileForm {
        display_name: profile.display_name.clone(),
        main_email: profile.main_email.clone(),
        tee_shirt_size: profile.tee_shirt_size.as_token().to_string(),
        conference_keys_to_attend: profile.conference_keys_to_attend.clone(),
        session_keys_wishlist: profile.session_keys_wishlist.clone(),
    }
}

pub(crate) fn conference_to_form(
    key: &EntityKey,
    conference: &Conference,
    organizer_display_name: Option<String>,
) -> Result<ConferenceForm> {
    Ok(ConferenceForm {
        name: Some(conference.name.clone()),
        description: Some(conference.description.clone()),
        organizer_user_id: Some(conference.organizer_user_id.clone()),
        organizer_display_name,
        topics: conference.topics.clone(),
        city: Some(conference.city.clone()),
        start_date: conference.start_date.map(format_date).transpose()?,
        month: Some(conference.month),
        end_date: conference.end_date.map(format_date).transpose()?,
        max_attendees: Some(conference.max_attendees),
        seats_available: Some(conference.seats_available),
        websafe_key: Some(key.websafe()),
    })
}

pub(crate) fn session_to_form(key: &EntityKey, session: &Session) -> Result<SessionForm> {
    Ok(SessionForm {
        name: Some(session.name.clone()),
        highlights: Some(session.highlights.clone()),
        speaker: Some(session.speaker.clone()),
        duration: Some(session.duration),
        type_of_session: Some(session.type_of_session.clone()),
        date: session.date.map(format_date).transpose()?,
        start_time: session.start_time.map(format_time).transpose()?,
        conference_websafe_key: key.parent().map(|parent| parent.websafe()),
        session_websafe_key: Some(key.websafe()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_core::records::TeeShirtSize;
    use summit_core::{KeyId, Kind};
    use time::macros::{date, time};

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-06-15").unwrap(), date!(2024 - 06 - 15));
        // Datetime input is truncated to its date part
        assert_eq!(
            parse_date("2024-06-15T09:30:00Z").unwrap(),
            date!(2024 - 06 - 15)
        );
        assert!(matches!(
            parse_date("June 15th"),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(parse_date("2024-13-01"), Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:30").unwrap(), time!(9:30));
        assert!(matches!(parse_time("9 am"), Err(Error::BadRequest(_))));
    }

    #[test]
    fn test_date_render_round_trip() {
        let rendered = format_date(date!(2024 - 06 - 05)).unwrap();
        assert_eq!(rendered, "2024-06-05");
        assert_eq!(parse_date(&rendered).unwrap(), date!(2024 - 06 - 05));
    }

    #[test]
    fn test_profile_mapping() {
        let profile = Profile {
            display_name: "Alice".to_string(),
            main_email: "alice@example.com".to_string(),
            tee_shirt_size: TeeShirtSize::Xl,
            conference_keys_to_attend: vec!["abcd".to_string()],
            session_keys_wishlist: vec![],
        };
        let form = profile_to_form(&profile);
        assert_eq!(form.display_name, "Alice");
        assert_eq!(form.tee_shirt_size, "XL");
        assert_eq!(form.conference_keys_to_attend, vec!["abcd".to_string()]);
    }

    #[test]
    fn test_session_form_carries_both_keys() {
        let conf_key = EntityKey::root(Kind::Profile, KeyId::Name("alice".to_string()))
            .child(Kind::Conference, KeyId::Id(1));
        let session_key = conf_key.child(Kind::Session, KeyId::Id(2));
        let session = Session {
            name: "Keynote".to_string(),
            highlights: String::new(),
            speaker: "Grace".to_string(),
            duration: 30,
            type_of_session: "keynote".to_string(),
            date: Some(date!(2024 - 06 - 15)),
            start_time: Some(time!(9:30)),
        };
        let form = session_to_form(&session_key, &session).unwrap();
        assert_eq!(form.session_websafe_key, Some(session_key.websafe()));
        assert_eq!(form.conference_websafe_key, Some(conf_key.websafe()));
        assert_eq!(form.date.as_deref(), Some("2024-06-15"));
        assert_eq!(form.start_time.as_deref(), Some("09:30"));
    }
}
