//! # Summit
//!
//! Conference management service: user profiles, conferences, sessions,
//! registrations, and wishlists over an embedded record store.
//!
//! ## Quick Start
//!
//! ```rust
//! use summit::forms::ConferenceForm;
//! use summit::{AuthUser, ConferenceService};
//!
//! fn main() -> Result<(), summit::Error> {
//!     let service = ConferenceService::new();
//!     let organizer = AuthUser::new("alice@example.com", "alice");
//!
//!     // Create a conference
//!     let created = service.create_conference(
//!         Some(&organizer),
//!         &ConferenceForm {
//!             name: Some("RustConf".to_string()),
//!             city: Some("Portland".to_string()),
//!             max_attendees: Some(200),
//!             ..ConferenceForm::default()
//!         },
//!     )?;
//!     let websafe_key = created.websafe_key.expect("created conferences carry a key");
//!
//!     // Fetch it back by key
//!     let fetched = service.get_conference(&websafe_key)?;
//!     assert_eq!(fetched.name.as_deref(), Some("RustConf"));
//!     assert_eq!(fetched.seats_available, Some(200));
//!
//!     // Attendees register through the same service
//!     let attendee = AuthUser::new("bob@example.com", "bob");
//!     service.register_for_conference(Some(&attendee), &websafe_key)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Querying
//!
//! Conference queries are ordered filter lists. Each filter names a field
//! token, an operator token, and a value; inequality operators may target
//! only one field per query, and that field leads the sort order:
//!
//! ```rust
//! use summit::{ConferenceService, RawFilter};
//!
//! let service = ConferenceService::new();
//! let results = service.query_conferences(&[
//!     RawFilter::new("MONTH", "EQ", "6"),
//!     RawFilter::new("MAX_ATTENDEES", "GT", "10"),
//! ])?;
//! assert!(results.is_empty());
//! # Ok::<(), summit::Error>(())
//! ```

pub mod forms;
pub mod handlers;
pub mod logging;
mod mapping;
mod service;
mod validate;

// Re-export core types
pub use summit_core::query::{FilterOperator, FilterSpec, QueryPlan, RawFilter};
pub use summit_core::records::{
    Conference, ConferenceField, Profile, Session, SessionField, TeeShirtSize,
};
pub use summit_core::{Entity, EntityKey, Error, FieldValue, FilterValue, KeyId, Kind, Result};

// Platform services
pub use summit_platform::{
    AuthUser, Cache, Clock, FixedClock, LogMailer, Mailer, MemoryMailer, SentMail, SystemClock,
    Task, TaskQueue,
};

// Store
pub use summit_store::Datastore;

pub use service::ConferenceService;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
