//! Wire forms.
//!
//! Forms are the JSON-facing mirror of the stored records: every field is
//! a string, integer, or list, with dates and times rendered as ISO-8601
//! strings. Field names follow the wire convention (`startDate`,
//! `maxAttendees`); the mapping between forms and records is explicit
//! per-field code in [`crate::mapping`].

use serde::{Deserialize, Serialize};
pub use summit_core::query::RawFilter;

/// A user profile as it travels on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileForm {
    /// Display name
    pub display_name: String,
    /// Primary email address
    pub main_email: String,
    /// T-shirt size token, e.g. `XL`
    pub tee_shirt_size: String,
    /// Websafe keys of conferences the user is registered for
    pub conference_keys_to_attend: Vec<String>,
    /// Websafe keys of sessions on the user's wishlist
    pub session_keys_wishlist: Vec<String>,
}

/// The user-modifiable subset of a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileMiniForm {
    /// New display name; unchanged when absent or empty
    pub display_name: Option<String>,
    /// New t-shirt size token; unchanged when absent or empty
    pub tee_shirt_size: Option<String>,
}

/// A conference as it travels on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConferenceForm {
    /// Conference name; required on creation
    pub name: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// Organizer user id; server-assigned
    pub organizer_user_id: Option<String>,
    /// Organizer display name; server-assigned where known
    pub organizer_display_name: Option<String>,
    /// Topics covered
    pub topics: Vec<String>,
    /// Host city
    pub city: Option<String>,
    /// First day, ISO-8601 (`YYYY-MM-DD`)
    pub start_date: Option<String>,
    /// Month of the start date; server-derived
    pub month: Option<i64>,
    /// Last day, ISO-8601 (`YYYY-MM-DD`)
    pub end_date: Option<String>,
    /// Seat capacity
    pub max_attendees: Option<i64>,
    /// Open seats; server-maintained
    pub seats_available: Option<i64>,
    /// Websafe key; server-assigned
    pub websafe_key: Option<String>,
}

/// An ordered conference query as it travels on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConferenceQueryForm {
    /// Filters, applied conjunctively in order
    pub filters: Vec<RawFilter>,
}

/// A session as it travels on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionForm {
    /// Session name; required on creation
    pub name: Option<String>,
    /// Short pitch shown in listings
    pub highlights: Option<String>,
    /// Speaker display name; defaults to the creator's
    pub speaker: Option<String>,
    /// Length in minutes
    pub duration: Option<i64>,
    /// Kind of session (workshop, lecture, keynote, ...)
    pub type_of_session: Option<String>,
    /// Day the session runs, ISO-8601 (`YYYY-MM-DD`)
    pub date: Option<String>,
    /// Start time of day (`HH:MM`)
    pub start_time: Option<String>,
    /// Websafe key of the owning conference; required on creation
    pub conference_websafe_key: Option<String>,
    /// Websafe session key; server-assigned
    pub session_websafe_key: Option<String>,
}

/// An optional integer range, both bounds inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegerRange {
    /// Lower bound
    pub min: Option<i64>,
    /// Upper bound
    pub max: Option<i64>,
}

/// An optional ISO-8601 date range, both bounds inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// Lower bound (`YYYY-MM-DD`)
    pub min: Option<String>,
    /// Upper bound (`YYYY-MM-DD`)
    pub max: Option<String>,
}

/// An optional time-of-day range, both bounds inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeRange {
    /// Lower bound (`HH:MM`)
    pub min: Option<String>,
    /// Upper bound (`HH:MM`)
    pub max: Option<String>,
}
