//! # Summit Core
//!
//! Core types for the Summit conference service: the error taxonomy,
//! hierarchical entity keys, record schemas, and the query filter
//! validator & composer.
//!
//! The query pipeline is the crate's center of gravity: client filters
//! arrive as token triples ([`query::RawFilter`]), validate into typed
//! [`query::FilterSpec`]s, and compose into a [`query::QueryPlan`] that
//! enforces the store's one rule (inequality operators may target only
//! one field per query) and fixes the sort order before execution.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod query;
pub mod record;
pub mod records;
pub mod value;

pub use error::{Error, Result};
pub use key::{EntityKey, KeyId, Kind};
pub use record::{Entity, FieldName, Record};
pub use value::{FieldValue, FilterValue};
