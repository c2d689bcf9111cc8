//! Input validation for service operations.
//!
//! Every check here guards a client-supplied value and surfaces
//! [`Error::BadRequest`] on failure, before any record is touched.

use summit_core::{Error, Result};

/// Longest accepted value for short text fields (names, cities, topics).
const MAX_STRING_LEN: usize = 500;

/// Requires a non-empty string field.
///
/// # Errors
///
/// Returns `Error::BadRequest` naming the field when it is absent or empty.
pub(crate) fn required<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(Error::BadRequest(format!("{} field required", what))),
    }
}

/// Rejects oversized short text fields.
pub(crate) fn bounded(value: &str, what: &str) -> Result<()> {
    if value.len() > MAX_STRING_LEN {
        return Err(Error::BadRequest(format!(
            "{} length {} exceeds maximum {}",
            what,
            value.len(),
            MAX_STRING_LEN
        )));
    }
    Ok(())
}

/// Validates an optional inclusive integer range: bounds must be
/// non-negative and `min` strictly below `max` when both are given.
pub(crate) fn integer_range(min: Option<i64>, max: Option<i64>) -> Result<()> {
    if let Some(min) = min {
        if min < 0 {
            return Err(Error::BadRequest(
                "\"min\" has to be a positive number".to_string(),
            ));
        }
    }
    if let Some(max) = max {
        if max < 0 {
            return Err(Error::BadRequest(
                "\"max\" has to be a positive number".to_string(),
            ));
        }
    }
    ordered(min, max)
}

/// Requires `min` strictly below `max` when both bounds are given.
pub(crate) fn ordered<T: PartialOrd>(min: Option<T>, max: Option<T>) -> Result<()> {
    if let (Some(min), Some(max)) = (&min, &max) {
        if min >= max {
            return Err(Error::BadRequest(
                "\"min\" must be lesser than \"max\"".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert_eq!(
            required(&Some("RustConf".to_string()), "Conference 'name'").unwrap(),
            "RustConf"
        );
        assert!(matches!(
            required(&None, "Conference 'name'"),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            required(&Some(String::new()), "Conference 'name'"),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn test_bounded() {
        assert!(bounded("ok", "name").is_ok());
        assert!(matches!(
            bounded(&"x".repeat(501), "name"),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn test_integer_range() {
        assert!(integer_range(None, None).is_ok());
        assert!(integer_range(Some(10), Some(20)).is_ok());
        assert!(integer_range(Some(10), None).is_ok());
        assert!(matches!(
            integer_range(Some(-1), None),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            integer_range(None, Some(-5)),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            integer_range(Some(20), Some(10)),
            Err(Error::BadRequest(_))
        ));
        assert!(matches!(
            integer_range(Some(10), Some(10)),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn test_ordered_over_dates() {
        use time::macros::date;
        assert!(ordered(Some(date!(2024 - 01 - 01)), Some(date!(2024 - 02 - 01))).is_ok());
        assert!(matches!(
            ordered(Some(date!(2024 - 02 - 01)), Some(date!(2024 - 01 - 01))),
            Err(Error::BadRequest(_))
        ));
    }
}
