//! The conference service facade.
//!
//! One [`ConferenceService`] owns the record store and the platform
//! services and exposes every operation of the API. Operations are
//! synchronous and stateless per request; operations that act on behalf
//! of a caller take `Option<&AuthUser>` and reject `None` with
//! [`Error::Unauthorized`](summit_core::Error::Unauthorized).

use std::sync::Arc;
use summit_core::{EntityKey, Error, KeyId, Kind, Result};
use summit_platform::{AuthUser, Cache, Clock, SystemClock, TaskQueue};
use summit_store::Datastore;

mod announcement;
mod conference;
mod profile;
mod registration;
mod session;
mod wishlist;

/// Cache key the announcement cron writes and `get_announcement` reads.
pub(crate) const ANNOUNCEMENT_CACHE_KEY: &str = "announcements";

/// Cache key for the most recently featured speaker.
pub(crate) const FEATURED_SPEAKER_CACHE_KEY: &str = "featured_speaker";

/// The conference management service.
pub struct ConferenceService {
    store: Datastore,
    cache: Cache,
    tasks: TaskQueue,
    clock: Arc<dyn Clock>,
}

impl ConferenceService {
    /// Creates a service with empty state and the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates a service with a caller-supplied clock.
    ///
    /// The clock only feeds the default start time of new sessions; tests
    /// pin it to make created records deterministic.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        ConferenceService {
            store: Datastore::new(),
            cache: Cache::new(),
            tasks: TaskQueue::new(),
            clock,
        }
    }

    /// The underlying record store.
    pub fn store(&self) -> &Datastore {
        &self.store
    }

    /// The shared cache (announcements, featured speaker).
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// The deferred-work task queue.
    pub fn tasks(&self) -> &TaskQueue {
        &self.tasks
    }

    /// The profile key of an authenticated caller.
    pub(crate) fn profile_key(user: &AuthUser) -> EntityKey {
        EntityKey::root(Kind::Profile, KeyId::Name(user.user_id.clone()))
    }
}

impl Default for ConferenceService {
    fn default() -> Self {
        Self::new()
    }
}

/// Rejects unauthenticated requests.
pub(crate) fn require_user(user: Option<&AuthUser>) -> Result<&AuthUser> {
    user.ok_or(Error::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_user() {
        assert!(matches!(require_user(None), Err(Error::Unauthorized)));
        let user = AuthUser::new("a@example.com", "a");
        assert!(require_user(Some(&user)).is_ok());
    }

    #[test]
    fn test_profile_key_is_stable_per_user() {
        let a = AuthUser::new("a@example.com", "a");
        assert_eq!(
            ConferenceService::profile_key(&a),
            ConferenceService::profile_key(&a)
        );
        let b = AuthUser::new("b@example.com", "b");
        assert_ne!(
            ConferenceService::profile_key(&a),
            ConferenceService::profile_key(&b)
        );
    }
}
