//! The user profile record.

use crate::error::{Error, Result};
use crate::key::Kind;
use crate::record::{FieldName, Record};
use crate::value::FieldValue;
use serde::{Deserialize, Serialize};

/// T-shirt size preference recorded on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TeeShirtSize {
    /// No preference given
    #[default]
    NotSpecified,
    /// Extra small
    Xs,
    /// Small
    S,
    /// Medium
    M,
    /// Large
    L,
    /// Extra large
    Xl,
    /// Double extra large
    Xxl,
    /// Triple extra large
    Xxxl,
}

impl TeeShirtSize {
    /// Wire token for the size.
    pub fn as_token(self) -> &'static str {
        match self {
            TeeShirtSize::NotSpecified => "NOT_SPECIFIED",
            TeeShirtSize::Xs => "XS",
            TeeShirtSize::S => "S",
            TeeShirtSize::M => "M",
            TeeShirtSize::L => "L",
            TeeShirtSize::Xl => "XL",
            TeeShirtSize::Xxl => "XXL",
            TeeShirtSize::Xxxl => "XXXL",
        }
    }

    /// Parses a wire token; unknown tokens are a client error.
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "NOT_SPECIFIED" => Ok(TeeShirtSize::NotSpecified),
            "XS" => Ok(TeeShirtSize::Xs),
            "S" => Ok(TeeShirtSize::S),
            "M" => Ok(TeeShirtSize::M),
            "L" => Ok(TeeShirtSize::L),
            "XL" => Ok(TeeShirtSize::Xl),
            "XXL" => Ok(TeeShirtSize::Xxl),
            "XXXL" => Ok(TeeShirtSize::Xxxl),
            other => Err(Error::BadRequest(format!(
                "unknown t-shirt size '{}'",
                other
            ))),
        }
    }
}

/// A user profile, keyed by user id.
///
/// Registration and wishlist membership are stored as websafe key strings,
/// exactly as they travel on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Profile {
    /// Display name shown on conferences the user organizes
    pub display_name: String,
    /// Primary email address
    pub main_email: String,
    /// T-shirt size preference
    pub tee_shirt_size: TeeShirtSize,
    /// Websafe keys of conferences the user is registered for
    pub conference_keys_to_attend: Vec<String>,
    /// Websafe keys of sessions on the user's wishlist
    pub session_keys_wishlist: Vec<String>,
}

/// Profiles are key-addressed only; no field is queryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {}

impl FieldName for ProfileField {
    fn property_name(self) -> &'static str {
        match self {}
    }
}

impl Record for Profile {
    type Field = ProfileField;

    fn kind() -> Kind {
        Kind::Profile
    }

    fn field(&self, field: ProfileField) -> FieldValue {
        match field {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tee_shirt_tokens_round_trip() {
        for size in [
            TeeShirtSize::NotSpecified,
            TeeShirtSize::Xs,
            TeeShirtSize::S,
            TeeShirtSize::M,
            TeeShirtSize::L,
            TeeShirtSize::Xl,
            TeeShirtSize::Xxl,
            TeeShirtSize::Xxxl,
        ] {
            assert_eq!(TeeShirtSize::from_token(size.as_token()).unwrap(), size);
        }
    }

    #[test]
    fn test_unknown_tee_shirt_token() {
        assert!(matches!(
            TeeShirtSize::from_token("MEDIUM"),
            Err(Error::BadRequest(_))
        ));
    }

    #[test]
    fn test_default_profile() {
        let profile = Profile::default();
        assert_eq!(profile.tee_shirt_size, TeeShirtSize::NotSpecified);
        assert!(profile.conference_keys_to_attend.is_empty());
        assert!(profile.session_keys_wishlist.is_empty());
    }
}
