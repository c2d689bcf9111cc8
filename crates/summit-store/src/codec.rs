//! Record encode/decode and key/kind agreement checks.

use summit_core::{EntityKey, Error, Record, Result};

pub(crate) fn encode<R: Record>(record: &R) -> Result<Vec<u8>> {
    bincode::serialize(record).map_err(|e| Error::Serialization(e.to_string()))
}

pub(crate) fn decode<R: Record>(bytes: &[u8]) -> Result<R> {
    bincode::deserialize(bytes).map_err(|e| Error::Serialization(e.to_string()))
}

/// Every typed access checks that the key actually addresses the record's
/// kind; a mismatch is a caller bug surfaced as an error rather than a
/// silently-empty read.
pub(crate) fn check_kind<R: Record>(key: &EntityKey) -> Result<()> {
    if key.kind() == R::kind() {
        Ok(())
    } else {
        Err(Error::InvalidKey(format!(
            "key of kind {} used for {} record",
            key.kind(),
            R::kind()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_core::records::Profile;
    use summit_core::{KeyId, Kind};

    #[test]
    fn test_round_trip() {
        let profile = Profile {
            display_name: "Alice".to_string(),
            main_email: "alice@example.com".to_string(),
            ..Profile::default()
        };
        let bytes = encode(&profile).unwrap();
        let decoded: Profile = decode(&bytes).unwrap();
        assert_eq!(decoded, profile);
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let key = EntityKey::root(Kind::Conference, KeyId::Id(1));
        assert!(matches!(
            check_kind::<Profile>(&key),
            Err(Error::InvalidKey(_))
        ));
    }
}
