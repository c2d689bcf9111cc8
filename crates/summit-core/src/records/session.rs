//! The session record.

use crate::key::Kind;
use crate::record::{FieldName, Record};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// Duration in minutes applied when a session is created without one.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Highlights applied when a session is created without any.
pub const DEFAULT_HIGHLIGHTS: &str = "Amazing session! Don't miss it.";

/// A session, stored under its conference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session name
    pub name: String,
    /// Short pitch shown in listings
    pub highlights: String,
    /// Speaker display name
    pub speaker: String,
    /// Length in minutes
    pub duration: i64,
    /// Kind of session (workshop, lecture, keynote, ...)
    pub type_of_session: String,
    /// Day the session runs, when scheduled
    pub date: Option<Date>,
    /// Time of day the session starts, when scheduled
    pub start_time: Option<Time>,
}

/// The queryable fields of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionField {
    /// Kind of session
    TypeOfSession,
    /// Speaker display name
    Speaker,
    /// Length in minutes
    Duration,
    /// Scheduled day
    Date,
    /// Scheduled start time
    StartTime,
    /// Session name; the stable sort tiebreaker
    Name,
}

impl FieldName for SessionField {
    fn property_name(self) -> &'static str {
        match self {
            SessionField::TypeOfSession => "typeOfSession",
            SessionField::Speaker => "speaker",
            SessionField::Duration => "duration",
            SessionField::Date => "date",
            SessionField::StartTime => "startTime",
            SessionField::Name => "name",
        }
    }
}

impl Record for Session {
    type Field = SessionField;

    fn kind() -> Kind {
        Kind::Session
    }

    fn field(&self, field: SessionField) -> FieldValue {
        match field {
            SessionField::TypeOfSession => FieldValue::Str(self.type_of_session.clone()),
            SessionField::Speaker => FieldValue::Str(self.speaker.clone()),
            SessionField::Duration => FieldValue::Int(self.duration),
            SessionField::Date => match self.date {
                Some(date) => FieldValue::Date(date),
                None => FieldValue::Null,
            },
            SessionField::StartTime => match self.start_time {
                Some(time) => FieldValue::Time(time),
                None => FieldValue::Null,
            },
            SessionField::Name => FieldValue::Str(self.name.clone()),
        }
    }
}
