//! Profile operations.

use super::{require_user, ConferenceService};
use crate::forms::{ProfileForm, ProfileMiniForm};
use crate::{mapping, validate};
use summit_core::records::{Profile, TeeShirtSize};
use summit_core::Result;
use summit_platform::AuthUser;

impl ConferenceService {
    /// Returns the caller's profile, creating it on first access.
    pub fn get_profile(&self, user: Option<&AuthUser>) -> Result<ProfileForm> {
        let user = require_user(user)?;
        let profile = self.get_or_create_profile(user)?;
        Ok(mapping::profile_to_form(&profile))
    }

    /// Updates the caller's display name and/or t-shirt size, returning
    /// the updated profile.
    ///
    /// Absent or empty fields leave the stored value unchanged.
    pub fn save_profile(
        &self,
        user: Option<&AuthUser>,
        form: &ProfileMiniForm,
    ) -> Result<ProfileForm> {
        let user = require_user(user)?;
        let mut profile = self.get_or_create_profile(user)?;

        if let Some(display_name) = form.display_name.as_deref() {
            if !display_name.is_empty() {
                validate::bounded(display_name, "displayName")?;
                profile.display_name = display_name.to_string();
            }
        }
        if let Some(size) = form.tee_shirt_size.as_deref() {
            if !size.is_empty() {
                profile.tee_shirt_size = TeeShirtSize::from_token(size)?;
            }
        }

        self.store().put(&Self::profile_key(user), &profile)?;
        Ok(mapping::profile_to_form(&profile))
    }

    /// Loads the caller's profile, seeding a fresh one from the verified
    /// identity when none is stored yet.
    pub(crate) fn get_or_create_profile(&self, user: &AuthUser) -> Result<Profile> {
        let key = Self::profile_key(user);
        if let Some(profile) = self.store().get::<Profile>(&key)? {
            return Ok(profile);
        }
        let profile = Profile {
            display_name: user.nickname.clone(),
            main_email: user.email.clone(),
            ..Profile::default()
        };
        self.store().put(&key, &profile)?;
        Ok(profile)
    }
}
