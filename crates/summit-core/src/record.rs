//! The record abstraction.
//!
//! Every persisted type declares its [`Kind`], a statically typed field
//! enumeration, and an accessor from field to [`FieldValue`]. The field
//! enumeration is the compile-time checked replacement for looking fields
//! up by name at runtime: a query can only reference fields the record
//! actually declares.

use crate::key::{EntityKey, Kind};
use crate::value::FieldValue;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A queryable field of some record type.
pub trait FieldName: Copy + Eq + fmt::Debug {
    /// The stored property name of the field, as it appears in messages.
    fn property_name(self) -> &'static str;
}

/// A persisted record type.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// The record's queryable fields.
    type Field: FieldName;

    /// The kind under which records of this type are keyed.
    fn kind() -> Kind;

    /// Reads one field's value for predicate evaluation and sorting.
    fn field(&self, field: Self::Field) -> FieldValue;
}

/// A record paired with the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity<R> {
    /// The record's key
    pub key: EntityKey,
    /// The record itself
    pub record: R,
}

impl<R> Entity<R> {
    /// Pairs a key with its record.
    pub fn new(key: EntityKey, record: R) -> Self {
        Entity { key, record }
    }
}
