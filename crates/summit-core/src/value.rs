//! Field and filter values.
//!
//! [`FieldValue`] is what a record reports for one of its queryable fields;
//! [`FilterValue`] is what a filter compares against. Comparison semantics
//! follow the store: same-kind values compare naturally, a list field
//! matches when any element does, and an unset field never matches.

use crate::query::FilterOperator;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use time::{Date, Time};

/// A value read out of a record field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text field
    Str(String),
    /// Repeated text field (e.g. conference topics)
    StrList(Vec<String>),
    /// Integer field
    Int(i64),
    /// Calendar date field
    Date(Date),
    /// Time-of-day field
    Time(Time),
    /// The field is unset on this record
    Null,
}

/// A value a filter compares a field against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FilterValue {
    /// Text comparison value
    Str(String),
    /// Integer comparison value
    Int(i64),
    /// Date comparison value
    Date(Date),
    /// Time-of-day comparison value
    Time(Time),
}

impl FieldValue {
    /// Evaluates `self <op> filter_value`.
    ///
    /// A list field matches when any element satisfies the predicate. An
    /// unset field matches nothing, and kind mismatches never match.
    pub fn satisfies(&self, op: FilterOperator, filter_value: &FilterValue) -> bool {
        match (self, filter_value) {
            (FieldValue::Str(a), FilterValue::Str(b)) => op.holds(a.as_str().cmp(b.as_str())),
            (FieldValue::StrList(list), FilterValue::Str(b)) => {
                list.iter().any(|a| op.holds(a.as_str().cmp(b.as_str())))
            }
            (FieldValue::Int(a), FilterValue::Int(b)) => op.holds(a.cmp(b)),
            (FieldValue::Date(a), FilterValue::Date(b)) => op.holds(a.cmp(b)),
            (FieldValue::Time(a), FilterValue::Time(b)) => op.holds(a.cmp(b)),
            _ => false,
        }
    }

    /// Total order used for result sorting.
    ///
    /// Same-kind values order naturally; a list orders by its smallest
    /// element; unset fields sort first; remaining kind mismatches fall
    /// back to a fixed kind rank so the order is still total.
    pub fn sort_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Str(a), FieldValue::Str(b)) => a.cmp(b),
            (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            (FieldValue::Time(a), FieldValue::Time(b)) => a.cmp(b),
            (FieldValue::StrList(a), FieldValue::StrList(b)) => {
                a.iter().min().cmp(&b.iter().min())
            }
            (FieldValue::Str(a), FieldValue::StrList(b)) => Some(a).cmp(&b.iter().min()),
            (FieldValue::StrList(a), FieldValue::Str(b)) => a.iter().min().cmp(&Some(b)),
            (FieldValue::Null, FieldValue::Null) => Ordering::Equal,
            (FieldValue::Null, _) => Ordering::Less,
            (_, FieldValue::Null) => Ordering::Greater,
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Int(_) => 1,
            FieldValue::Date(_) => 2,
            FieldValue::Time(_) => 3,
            FieldValue::Str(_) | FieldValue::StrList(_) => 4,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Str(value.to_string())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Int(value)
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Str(s) => write!(f, "'{}'", s),
            FilterValue::Int(i) => write!(f, "{}", i),
            FilterValue::Date(d) => write!(f, "{}", d),
            FilterValue::Time(t) => write!(f, "{}", t),
        }
    }
}
