//! Conference operations.

use super::{require_user, ConferenceService};
use crate::forms::ConferenceForm;
use crate::{mapping, validate};
use summit_core::query::{QueryPlan, RawFilter};
use summit_core::records::{
    Conference, ConferenceField, Profile, DEFAULT_CITY, DEFAULT_TOPICS,
};
use summit_core::{EntityKey, Error, KeyId, Kind, Result};
use summit_platform::{AuthUser, Task};
use tracing::info;

impl ConferenceService {
    /// Creates a conference organized by the caller.
    ///
    /// The name is required; missing city and topics fall back to creation
    /// defaults, the start month is derived from the start date, and the
    /// seat counter starts at the capacity. A confirmation-email task is
    /// enqueued for the worker to deliver.
    pub fn create_conference(
        &self,
        user: Option<&AuthUser>,
        form: &ConferenceForm,
    ) -> Result<ConferenceForm> {
        let user = require_user(user)?;
        let name = validate::required(&form.name, "Conference 'name'")?;
        validate::bounded(name, "name")?;

        let city = match form.city.as_deref() {
            Some(city) if !city.is_empty() => {
                validate::bounded(city, "city")?;
                city.to_string()
            }
            _ => DEFAULT_CITY.to_string(),
        };
        let topics = if form.topics.is_empty() {
            DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
        } else {
            for topic in &form.topics {
                validate::bounded(topic, "topics")?;
            }
            form.topics.clone()
        };

        let start_date = form
            .start_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(mapping::parse_date)
            .transpose()?;
        let end_date = form
            .end_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(mapping::parse_date)
            .transpose()?;
        let month = start_date.map_or(0, |date| i64::from(u8::from(date.month())));

        let max_attendees = form.max_attendees.unwrap_or(0);
        if max_attendees < 0 {
            return Err(Error::BadRequest(
                "'maxAttendees' has to be a positive number".to_string(),
            ));
        }
        let seats_available = if max_attendees > 0 {
            max_attendees
        } else {
            form.seats_available.unwrap_or(0)
        };

        let conference = Conference {
            name: name.to_string(),
            description: form.description.clone().unwrap_or_default(),
            organizer_user_id: user.user_id.clone(),
            topics,
            city,
            start_date,
            month,
            end_date,
            max_attendees,
            seats_available,
        };

        let profile = self.get_or_create_profile(user)?;
        let key = Self::profile_key(user).child(Kind::Conference, KeyId::Id(self.store().allocate_id()));
        self.store().put(&key, &conference)?;

        self.tasks().push(Task::SendConfirmationEmail {
            email: user.email.clone(),
            summary: summary(&conference),
        })?;
        info!(key = %key, name = %conference.name, "conference created");

        mapping::conference_to_form(&key, &conference, Some(profile.display_name))
    }

    /// Runs a client conference query.
    ///
    /// Filters validate and compose into a query plan before the store is
    /// touched; invalid filters and a second inequality field reject the
    /// whole request.
    pub fn query_conferences(&self, filters: &[RawFilter]) -> Result<Vec<ConferenceForm>> {
        let plan = QueryPlan::for_conferences(filters)?;
        let results = self.store().query::<Conference>(None, &plan)?;
        results
            .iter()
            .map(|entity| mapping::conference_to_form(&entity.key, &entity.record, None))
            .collect()
    }

    /// Lists conferences organized by the caller, name-ordered.
    pub fn get_conferences_created(&self, user: Option<&AuthUser>) -> Result<Vec<ConferenceForm>> {
        let user = require_user(user)?;
        let profile_key = Self::profile_key(user);
        let display_name = self
            .store()
            .get::<Profile>(&profile_key)?
            .map(|profile| profile.display_name);

        let plan = QueryPlan::unfiltered(ConferenceField::Name);
        let results = self.store().query::<Conference>(Some(&profile_key), &plan)?;
        results
            .iter()
            .map(|entity| {
                mapping::conference_to_form(&entity.key, &entity.record, display_name.clone())
            })
            .collect()
    }

    /// Returns one conference by websafe key.
    pub fn get_conference(&self, websafe_key: &str) -> Result<ConferenceForm> {
        let key = EntityKey::from_websafe(websafe_key)?;
        let conference = self.store().get::<Conference>(&key)?.ok_or_else(|| {
            Error::NotFound(format!("no conference found with key: {}", websafe_key))
        })?;
        let display_name = match key.parent() {
            Some(parent) => self
                .store()
                .get::<Profile>(&parent)?
                .map(|profile| profile.display_name),
            None => None,
        };
        mapping::conference_to_form(&key, &conference, display_name)
    }
}

/// One-line summary used in the confirmation email.
fn summary(conference: &Conference) -> String {
    match conference.start_date {
        Some(start) => format!(
            "{} in {}, starting {}",
            conference.name, conference.city, start
        ),
        None => format!("{} in {}", conference.name, conference.city),
    }
}
