//! The conference record.

use crate::key::Kind;
use crate::record::{FieldName, Record};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use time::Date;

/// City applied when a conference is created without one.
pub const DEFAULT_CITY: &str = "Default City";

/// Topics applied when a conference is created without any.
pub const DEFAULT_TOPICS: [&str; 2] = ["Default", "Topic"];

/// A conference, stored under its organizer's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conference {
    /// Conference name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// User id of the organizer (the profile the conference is keyed under)
    pub organizer_user_id: String,
    /// Topics covered; repeated field, equality matches any element
    pub topics: Vec<String>,
    /// Host city
    pub city: String,
    /// First day, when scheduled
    pub start_date: Option<Date>,
    /// Month of the start date (1-12), 0 when unscheduled; kept denormalized
    /// so it can carry an equality filter alongside a date inequality
    pub month: i64,
    /// Last day, when scheduled
    pub end_date: Option<Date>,
    /// Seat capacity; 0 means unlimited registration is not offered
    pub max_attendees: i64,
    /// Seats still open for registration
    pub seats_available: i64,
}

/// The queryable fields of a [`Conference`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConferenceField {
    /// Host city
    City,
    /// Topics (repeated)
    Topics,
    /// Start month
    Month,
    /// Seat capacity
    MaxAttendees,
    /// Open seats; not addressable from client filters
    SeatsAvailable,
    /// Conference name; the stable sort tiebreaker
    Name,
}

impl ConferenceField {
    /// Maps a client filter token to a field.
    ///
    /// Only the four tokens of the public filter language resolve;
    /// everything else is an unknown field.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "CITY" => Some(ConferenceField::City),
            "TOPIC" => Some(ConferenceField::Topics),
            "MONTH" => Some(ConferenceField::Month),
            "MAX_ATTENDEES" => Some(ConferenceField::MaxAttendees),
            _ => None,
        }
    }

    /// True for fields whose filter values must coerce to integers.
    pub fn is_integer_valued(self) -> bool {
        matches!(
            self,
            ConferenceField::Month | ConferenceField::MaxAttendees | ConferenceField::SeatsAvailable
        )
    }
}

impl FieldName for ConferenceField {
    fn property_name(self) -> &'static str {
        match self {
            ConferenceField::City => "city",
            ConferenceField::Topics => "topics",
            ConferenceField::Month => "month",
            ConferenceField::MaxAttendees => "maxAttendees",
            ConferenceField::SeatsAvailable => "seatsAvailable",
            ConferenceField::Name => "name",
        }
    }
}

impl Record for Conference {
    type Field = ConferenceField;

    fn kind() -> Kind {
        Kind::Conference
    }

    fn field(&self, field: ConferenceField) -> FieldValue {
        match field {
            ConferenceField::City => FieldValue::Str(self.city.clone()),
            ConferenceField::Topics => FieldValue::StrList(self.topics.clone()),
            ConferenceField::Month => FieldValue::Int(self.month),
            ConferenceField::MaxAttendees => FieldValue::Int(self.max_attendees),
            ConferenceField::SeatsAvailable => FieldValue::Int(self.seats_available),
            ConferenceField::Name => FieldValue::Str(self.name.clone()),
        }
    }
}
