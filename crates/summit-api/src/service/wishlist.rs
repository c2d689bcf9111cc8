//! Session wishlist operations.

use super::{require_user, ConferenceService};
use crate::forms::SessionForm;
use crate::mapping;
use summit_core::records::Session;
use summit_core::{EntityKey, Error, Result};
use summit_platform::AuthUser;

impl ConferenceService {
    /// Adds a session to the caller's wishlist.
    ///
    /// The session must exist and must not already be wishlisted.
    pub fn add_session_to_wishlist(
        &self,
        user: Option<&AuthUser>,
        websafe_session_key: &str,
    ) -> Result<bool> {
        let user = require_user(user)?;
        let session_key = self.existing_session_key(websafe_session_key)?;
        // Store the canonical rendering so membership checks are exact
        let websafe = session_key.websafe();

        let mut profile = self.get_or_create_profile(user)?;
        if profile.session_keys_wishlist.contains(&websafe) {
            return Err(Error::Conflict(
                "you already have this session in your wishlist".to_string(),
            ));
        }
        profile.session_keys_wishlist.push(websafe);
        self.store().put(&Self::profile_key(user), &profile)?;
        Ok(true)
    }

    /// Lists the sessions on the caller's wishlist.
    ///
    /// Sessions deleted since they were wishlisted are skipped.
    pub fn get_sessions_in_wishlist(&self, user: Option<&AuthUser>) -> Result<Vec<SessionForm>> {
        let user = require_user(user)?;
        let profile = self.get_or_create_profile(user)?;

        let keys = profile
            .session_keys_wishlist
            .iter()
            .map(|websafe| EntityKey::from_websafe(websafe))
            .collect::<Result<Vec<_>>>()?;
        let sessions = self.store().get_multi::<Session>(&keys)?;

        keys.iter()
            .zip(&sessions)
            .filter_map(|(key, session)| {
                session
                    .as_ref()
                    .map(|session| mapping::session_to_form(key, session))
            })
            .collect()
    }

    /// Removes a session from the caller's wishlist.
    ///
    /// Returns `false` when the session was not wishlisted.
    pub fn delete_session_in_wishlist(
        &self,
        user: Option<&AuthUser>,
        websafe_session_key: &str,
    ) -> Result<bool> {
        let user = require_user(user)?;
        let session_key = self.existing_session_key(websafe_session_key)?;
        let websafe = session_key.websafe();

        let mut profile = self.get_or_create_profile(user)?;
        let Some(position) = profile
            .session_keys_wishlist
            .iter()
            .position(|key| key == &websafe)
        else {
            return Ok(false);
        };
        profile.session_keys_wishlist.remove(position);
        self.store().put(&Self::profile_key(user), &profile)?;
        Ok(true)
    }

    /// Parses a session key and checks the session exists.
    fn existing_session_key(&self, websafe_key: &str) -> Result<EntityKey> {
        let key = EntityKey::from_websafe(websafe_key)?;
        if self.store().get::<Session>(&key)?.is_none() {
            return Err(Error::NotFound(format!(
                "no session found with key: {}",
                websafe_key
            )));
        }
        Ok(key)
    }
}
