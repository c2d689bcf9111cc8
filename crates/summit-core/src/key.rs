//! Hierarchical entity keys.
//!
//! Every record in the store is addressed by an [`EntityKey`]: a root-first
//! path of `(kind, id)` segments. Child records embed their ancestor path,
//! so a session key carries the conference and profile it belongs to. Keys
//! cross the wire as *websafe* strings: a reversible, URL-safe encoding of
//! the path.

use crate::error::{Error, Result};
use std::fmt;

/// The kinds of record stored by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// A user profile, keyed by user id
    Profile,
    /// A conference, keyed by an allocated id under its organizer's profile
    Conference,
    /// A session, keyed by an allocated id under its conference
    Session,
}

impl Kind {
    /// Stable name used in key paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Profile => "Profile",
            Kind::Conference => "Conference",
            Kind::Session => "Session",
        }
    }

    fn from_path_str(s: &str) -> Option<Self> {
        match s {
            "Profile" => Some(Kind::Profile),
            "Conference" => Some(Kind::Conference),
            "Session" => Some(Kind::Session),
            _ => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier part of a key segment.
///
/// Profiles are keyed by a caller-supplied name (the user id); conferences
/// and sessions get numeric ids allocated by the store.
///
/// Names must be non-empty and must not contain `/`; the identity layer
/// derives them from email addresses, which satisfy both.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyId {
    /// Caller-assigned string id
    Name(String),
    /// Store-allocated numeric id
    Id(u64),
}

/// One `(kind, id)` step of a key path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Segment {
    kind: Kind,
    id: KeyId,
}

/// A hierarchical record key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey {
    // Root-first; never empty.
    segments: Vec<Segment>,
}

impl EntityKey {
    /// Creates a root-level key.
    pub fn root(kind: Kind, id: KeyId) -> Self {
        let segment = Segment { kind, id };
        debug_assert!(segment_is_well_formed(&segment));
        EntityKey {
            segments: vec![segment],
        }
    }

    /// Creates a key one level below `self`.
    pub fn child(&self, kind: Kind, id: KeyId) -> Self {
        let segment = Segment { kind, id };
        debug_assert!(segment_is_well_formed(&segment));
        let mut segments = self.segments.clone();
        segments.push(segment);
        EntityKey { segments }
    }

    /// The key of this key's immediate ancestor, if any.
    pub fn parent(&self) -> Option<EntityKey> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(EntityKey {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// The kind of the record this key addresses (its last segment).
    pub fn kind(&self) -> Kind {
        self.segments[self.segments.len() - 1].kind
    }

    /// The id of the record this key addresses (its last segment).
    pub fn id(&self) -> &KeyId {
        &self.segments[self.segments.len() - 1].id
    }

    /// True when `self` lies at or below `ancestor` in the key hierarchy.
    pub fn has_ancestor(&self, ancestor: &EntityKey) -> bool {
        self.segments.len() >= ancestor.segments.len()
            && self.segments[..ancestor.segments.len()] == ancestor.segments[..]
    }

    /// Renders the key path, root first: `Profile:n:alice/Conference:i:42`.
    fn path(&self) -> String {
        let mut out = String::new();
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('/');
            }
            out.push_str(segment.kind.as_str());
            match &segment.id {
                KeyId::Name(name) => {
                    out.push_str(":n:");
                    out.push_str(name);
                }
                KeyId::Id(id) => {
                    out.push_str(":i:");
                    out.push_str(&id.to_string());
                }
            }
        }
        out
    }

    /// The byte form under which the record is stored.
    ///
    /// Descendant keys share their ancestor's path prefix.
    pub fn storage_bytes(&self) -> Vec<u8> {
        self.path().into_bytes()
    }

    /// Decodes a key from its stored byte form.
    pub fn from_storage_bytes(bytes: &[u8]) -> Result<Self> {
        let path = std::str::from_utf8(bytes)
            .map_err(|_| Error::InvalidKey("stored key is not valid UTF-8".to_string()))?;
        Self::from_path(path)
    }

    /// Renders the key as a websafe string suitable for URLs and wire forms.
    pub fn websafe(&self) -> String {
        hex_encode(self.path().as_bytes())
    }

    /// Decodes a websafe key string.
    ///
    /// Malformed input is a client error ([`Error::InvalidKey`]), never a
    /// panic.
    pub fn from_websafe(websafe: &str) -> Result<Self> {
        let bytes = hex_decode(websafe)
            .ok_or_else(|| Error::InvalidKey(format!("malformed websafe key '{}'", websafe)))?;
        let path = String::from_utf8(bytes)
            .map_err(|_| Error::InvalidKey(format!("malformed websafe key '{}'", websafe)))?;
        Self::from_path(&path)
    }

    fn from_path(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for part in path.split('/') {
            let mut pieces = part.splitn(3, ':');
            let (kind, tag, id) = match (pieces.next(), pieces.next(), pieces.next()) {
                (Some(kind), Some(tag), Some(id)) => (kind, tag, id),
                _ => {
                    return Err(Error::InvalidKey(format!("malformed key segment '{}'", part)));
                }
            };
            let kind = Kind::from_path_str(kind)
                .ok_or_else(|| Error::InvalidKey(format!("unknown kind '{}'", kind)))?;
            let id = match tag {
                "n" if !id.is_empty() => KeyId::Name(id.to_string()),
                "i" => KeyId::Id(
                    id.parse()
                        .map_err(|_| Error::InvalidKey(format!("non-numeric id '{}'", id)))?,
                ),
                _ => {
                    return Err(Error::InvalidKey(format!("malformed key segment '{}'", part)));
                }
            };
            segments.push(Segment { kind, id });
        }
        if segments.is_empty() {
            return Err(Error::InvalidKey("empty key path".to_string()));
        }
        Ok(EntityKey { segments })
    }
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn segment_is_well_formed(segment: &Segment) -> bool {
    match &segment.id {
        KeyId::Name(name) => !name.is_empty() && !name.contains('/'),
        KeyId::Id(_) => true,
    }
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

fn hex_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

fn hex_decode(text: &str) -> Option<Vec<u8>> {
    if text.len() % 2 != 0 {
        return None;
    }
    let digits = text.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        out.push(((hi << 4) | lo) as u8);
    }
    Some(out)
}
