//! Record schemas for the service's three entity kinds.

pub mod conference;
pub mod profile;
pub mod session;

pub use conference::{Conference, ConferenceField, DEFAULT_CITY, DEFAULT_TOPICS};
pub use profile::{Profile, ProfileField, TeeShirtSize};
pub use session::{Session, SessionField, DEFAULT_DURATION_MINUTES, DEFAULT_HIGHLIGHTS};
