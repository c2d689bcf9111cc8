//! Conference registration.
//!
//! Registration touches two records at once: the caller's profile gains
//! (or loses) the conference key, and the conference's seat counter moves
//! in step. Both writes go through the store's transaction primitive, so
//! either both commit or neither does.

use super::{require_user, ConferenceService};
use crate::forms::ConferenceForm;
use crate::mapping;
use summit_core::records::{Conference, Profile};
use summit_core::{EntityKey, Error, Result};
use summit_platform::AuthUser;
use tracing::info;

impl ConferenceService {
    /// Registers the caller for a conference, taking one seat.
    ///
    /// Fails with [`Error::Conflict`] when the caller is already
    /// registered or no seats remain; nothing is written in that case.
    pub fn register_for_conference(
        &self,
        user: Option<&AuthUser>,
        websafe_key: &str,
    ) -> Result<bool> {
        let user = require_user(user)?;
        let registered = self.registration(user, websafe_key, true)?;
        info!(user = %user.user_id, key = websafe_key, "registered for conference");
        Ok(registered)
    }

    /// Unregisters the caller from a conference, returning the seat.
    ///
    /// Returns `false` when the caller was not registered.
    pub fn unregister_from_conference(
        &self,
        user: Option<&AuthUser>,
        websafe_key: &str,
    ) -> Result<bool> {
        let user = require_user(user)?;
        self.registration(user, websafe_key, false)
    }

    /// Lists the conferences the caller is registered for.
    pub fn get_conferences_to_attend(
        &self,
        user: Option<&AuthUser>,
    ) -> Result<Vec<ConferenceForm>> {
        let user = require_user(user)?;
        let profile = self.get_or_create_profile(user)?;

        let keys = profile
            .conference_keys_to_attend
            .iter()
            .map(|websafe| EntityKey::from_websafe(websafe))
            .collect::<Result<Vec<_>>>()?;
        let conferences = self.store().get_multi::<Conference>(&keys)?;

        keys.iter()
            .zip(&conferences)
            .filter_map(|(key, conference)| {
                conference
                    .as_ref()
                    .map(|conference| mapping::conference_to_form(key, conference, None))
            })
            .collect()
    }

    /// The one cross-record mutation in the service, executed atomically.
    fn registration(&self, user: &AuthUser, websafe_key: &str, register: bool) -> Result<bool> {
        let conference_key = EntityKey::from_websafe(websafe_key)?;
        let websafe = conference_key.websafe();
        let profile_key = Self::profile_key(user);

        self.store().transact(|txn| {
            let mut profile = match txn.get::<Profile>(&profile_key)? {
                Some(profile) => profile,
                None => Profile {
                    display_name: user.nickname.clone(),
                    main_email: user.email.clone(),
                    ..Profile::default()
                },
            };
            let mut conference = txn.get::<Conference>(&conference_key)?.ok_or_else(|| {
                Error::NotFound(format!("no conference found with key: {}", websafe_key))
            })?;

            let position = profile
                .conference_keys_to_attend
                .iter()
                .position(|key| key == &websafe);

            let outcome = if register {
                if position.is_some() {
                    return Err(Error::Conflict(
                        "you have already registered for this conference".to_string(),
                    ));
                }
                if conference.seats_available <= 0 {
                    return Err(Error::Conflict("there are no seats available".to_string()));
                }
                profile.conference_keys_to_attend.push(websafe.clone());
                conference.seats_available -= 1;
                true
            } else {
                match position {
                    Some(position) => {
                        profile.conference_keys_to_attend.remove(position);
                        conference.seats_available += 1;
                        true
                    }
                    None => false,
                }
            };

            txn.put(&profile_key, &profile)?;
            txn.put(&conference_key, &conference)?;
            Ok(outcome)
        })
    }
}
