//! Filter parsing and validation.
//!
//! Client queries arrive as an ordered list of `(field, operator, value)`
//! token triples. Field and operator tokens resolve through fixed tables;
//! values for integer fields coerce on the way in. Everything downstream
//! of this module works with validated, typed [`FilterSpec`]s only.

use crate::error::{Error, Result};
use crate::record::FieldName;
use crate::records::ConferenceField;
use crate::value::{FieldValue, FilterValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operator of a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOperator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `>=`
    Gteq,
    /// `<`
    Lt,
    /// `<=`
    Lteq,
    /// `!=`
    Ne,
}

impl FilterOperator {
    /// Maps a client operator token to an operator.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "EQ" => Some(FilterOperator::Eq),
            "GT" => Some(FilterOperator::Gt),
            "GTEQ" => Some(FilterOperator::Gteq),
            "LT" => Some(FilterOperator::Lt),
            "LTEQ" => Some(FilterOperator::Lteq),
            "NE" => Some(FilterOperator::Ne),
            _ => None,
        }
    }

    /// The comparison symbol the operator stands for.
    pub fn symbol(self) -> &'static str {
        match self {
            FilterOperator::Eq => "=",
            FilterOperator::Gt => ">",
            FilterOperator::Gteq => ">=",
            FilterOperator::Lt => "<",
            FilterOperator::Lteq => "<=",
            FilterOperator::Ne => "!=",
        }
    }

    /// Every operation except `=` is an inequality.
    pub fn is_equality(self) -> bool {
        matches!(self, FilterOperator::Eq)
    }

    /// Whether a field-to-value ordering satisfies the operator.
    pub fn holds(self, ordering: std::cmp::Ordering) -> bool {
        use std::cmp::Ordering::*;
        match self {
            FilterOperator::Eq => ordering == Equal,
            FilterOperator::Ne => ordering != Equal,
            FilterOperator::Gt => ordering == Greater,
            FilterOperator::Gteq => ordering != Less,
            FilterOperator::Lt => ordering == Less,
            FilterOperator::Lteq => ordering != Greater,
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One unvalidated filter as supplied by the client.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawFilter {
    /// Field token, e.g. `CITY`
    pub field: String,
    /// Operator token, e.g. `GTEQ`
    pub operator: String,
    /// Comparison value; integer fields coerce during validation
    pub value: String,
}

impl RawFilter {
    /// Convenience constructor for building queries in code and tests.
    pub fn new(field: &str, operator: &str, value: &str) -> Self {
        RawFilter {
            field: field.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        }
    }
}

/// One validated filter; immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSpec<F> {
    field: F,
    op: FilterOperator,
    value: FilterValue,
}

impl<F: FieldName> FilterSpec<F> {
    /// Builds a filter from already-typed parts (internal queries).
    pub fn new(field: F, op: FilterOperator, value: FilterValue) -> Self {
        FilterSpec { field, op, value }
    }

    /// The field the filter constrains.
    pub fn field(&self) -> F {
        self.field
    }

    /// The filter's comparison operator.
    pub fn op(&self) -> FilterOperator {
        self.op
    }

    /// The value the field is compared against.
    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    /// Evaluates the filter against one field value.
    pub fn matches(&self, field_value: &FieldValue) -> bool {
        field_value.satisfies(self.op, &self.value)
    }
}

impl FilterSpec<ConferenceField> {
    /// Validates one client-supplied filter.
    ///
    /// Resolves both tokens through the fixed tables and coerces the value
    /// for integer fields; any failure is an [`Error::InvalidFilter`].
    pub fn from_raw(raw: &RawFilter) -> Result<Self> {
        let field = ConferenceField::from_token(&raw.field)
            .ok_or_else(|| Error::InvalidFilter(format!("unknown field '{}'", raw.field)))?;
        let op = FilterOperator::from_token(&raw.operator)
            .ok_or_else(|| Error::InvalidFilter(format!("unknown operator '{}'", raw.operator)))?;
        let value = if field.is_integer_valued() {
            let parsed = raw.value.trim().parse::<i64>().map_err(|_| {
                Error::InvalidFilter(format!(
                    "field '{}' requires an integer value, got '{}'",
                    field.property_name(),
                    raw.value
                ))
            })?;
            FilterValue::Int(parsed)
        } else {
            FilterValue::Str(raw.value.clone())
        };
        Ok(FilterSpec { field, op, value })
    }
}

impl<F: FieldName> fmt::Display for FilterSpec<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.field.property_name(),
            self.op,
            self.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(FilterOperator::from_token("EQ"), Some(FilterOperator::Eq));
        assert_eq!(FilterOperator::from_token("GT"), Some(FilterOperator::Gt));
        assert_eq!(FilterOperator::from_token("GTEQ"), Some(FilterOperator::Gteq));
        assert_eq!(FilterOperator::from_token("LT"), Some(FilterOperator::Lt));
        assert_eq!(FilterOperator::from_token("LTEQ"), Some(FilterOperator::Lteq));
        assert_eq!(FilterOperator::from_token("NE"), Some(FilterOperator::Ne));
        assert_eq!(FilterOperator::from_token("LIKE"), None);
        assert_eq!(FilterOperator::from_token("eq"), None);
    }

    #[test]
    fn test_parse_string_filter() {
        let spec = FilterSpec::from_raw(&RawFilter::new("CITY", "EQ", "London")).unwrap();
        assert_eq!(spec.field(), ConferenceField::City);
        assert_eq!(spec.op(), FilterOperator::Eq);
        assert_eq!(spec.value(), &FilterValue::Str("London".to_string()));
        assert_eq!(spec.to_string(), "city = 'London'");
    }

    #[test]
    fn test_parse_integer_filter() {
        let spec = FilterSpec::from_raw(&RawFilter::new("MONTH", "EQ", "6")).unwrap();
        assert_eq!(spec.value(), &FilterValue::Int(6));

        let spec = FilterSpec::from_raw(&RawFilter::new("MAX_ATTENDEES", "GT", " 10 ")).unwrap();
        assert_eq!(spec.value(), &FilterValue::Int(10));
    }

    #[test]
    fn test_unknown_field_token() {
        let err = FilterSpec::from_raw(&RawFilter::new("SPEAKER", "EQ", "x")).unwrap_err();
        assert!(matches!(err, Error::InvalidFilter(_)));
    }

    #[test]
    fn test_unknown_operator_token() {
        let err = FilterSpec::from_raw(&RawFilter::new("CITY", "CONTAINS", "x")).unwrap_err();
        assert!(matches!(err, Error::InvalidFilter(_)));
    }

    #[test]
    fn test_non_numeric_value_for_integer_field() {
        let err = FilterSpec::from_raw(&RawFilter::new("MONTH", "EQ", "June")).unwrap_err();
        assert!(matches!(err, Error::InvalidFilter(_)));
    }

    #[test]
    fn test_raw_filter_wire_shape() {
        let raw: RawFilter =
            serde_json::from_str(r#"{"field":"CITY","operator":"EQ","value":"London"}"#).unwrap();
        assert_eq!(raw, RawFilter::new("CITY", "EQ", "London"));
    }

    #[test]
    fn test_operator_holds() {
        use std::cmp::Ordering::*;
        assert!(FilterOperator::Eq.holds(Equal));
        assert!(!FilterOperator::Eq.holds(Less));
        assert!(FilterOperator::Ne.holds(Greater));
        assert!(FilterOperator::Gteq.holds(Equal));
        assert!(FilterOperator::Gteq.holds(Greater));
        assert!(!FilterOperator::Lt.holds(Equal));
        assert!(FilterOperator::Lteq.holds(Less));
    }
}
