//! Session operations.

use super::{require_user, ConferenceService, FEATURED_SPEAKER_CACHE_KEY};
use crate::forms::{DateRange, IntegerRange, SessionForm, TimeRange};
use crate::{mapping, validate};
use summit_core::query::{FilterOperator, FilterSpec, QueryPlan};
use summit_core::records::{
    Conference, Session, SessionField, DEFAULT_DURATION_MINUTES, DEFAULT_HIGHLIGHTS,
};
use summit_core::{EntityKey, Error, FilterValue, KeyId, Kind, Result};
use summit_platform::AuthUser;
use tracing::info;

impl ConferenceService {
    /// Creates a session in a conference.
    ///
    /// The conference key and session name are required and the conference
    /// must exist. Missing fields fall back to session defaults: the
    /// conference's start date, the current time of day, a standard
    /// duration, the creator as speaker, and stock highlights. When the
    /// speaker now has more than one session in the conference, the
    /// featured-speaker cache entry is refreshed.
    pub fn create_session(
        &self,
        user: Option<&AuthUser>,
        form: &SessionForm,
    ) -> Result<SessionForm> {
        let user = require_user(user)?;
        let conference_websafe =
            validate::required(&form.conference_websafe_key, "Session 'conferenceWebsafeKey'")?;
        let name = validate::required(&form.name, "Session 'name'")?;
        validate::bounded(name, "name")?;

        let conference_key = EntityKey::from_websafe(conference_websafe)?;
        let conference = self
            .store()
            .get::<Conference>(&conference_key)?
            .ok_or_else(|| {
                Error::NotFound(format!(
                    "no conference found with key: {}",
                    conference_websafe
                ))
            })?;

        let date = match form.date.as_deref() {
            Some(date) if !date.is_empty() => Some(mapping::parse_date(date)?),
            _ => conference.start_date,
        };
        let start_time = match form.start_time.as_deref() {
            Some(time) if !time.is_empty() => Some(mapping::parse_time(time)?),
            _ => Some(self.clock.now_time()),
        };
        let duration = match form.duration {
            Some(duration) if duration < 0 => {
                return Err(Error::BadRequest(
                    "'duration' has to be a positive number".to_string(),
                ));
            }
            Some(duration) if duration > 0 => duration,
            _ => DEFAULT_DURATION_MINUTES,
        };
        let speaker = match form.speaker.as_deref() {
            Some(speaker) if !speaker.is_empty() => speaker.to_string(),
            _ => self.get_or_create_profile(user)?.display_name,
        };
        let highlights = match form.highlights.as_deref() {
            Some(highlights) if !highlights.is_empty() => highlights.to_string(),
            _ => DEFAULT_HIGHLIGHTS.to_string(),
        };

        let session = Session {
            name: name.to_string(),
            highlights,
            speaker,
            duration,
            type_of_session: form.type_of_session.clone().unwrap_or_default(),
            date,
            start_time,
        };

        let key = conference_key.child(Kind::Session, KeyId::Id(self.store().allocate_id()));
        self.store().put(&key, &session)?;
        info!(key = %key, name = %session.name, "session created");

        self.refresh_featured_speaker(&conference_key, &session.speaker)?;

        mapping::session_to_form(&key, &session)
    }

    /// Lists every session of a conference, name-ordered.
    pub fn get_conference_sessions(&self, websafe_key: &str) -> Result<Vec<SessionForm>> {
        let conference_key = self.existing_conference_key(websafe_key)?;
        let plan = QueryPlan::unfiltered(SessionField::Name);
        self.session_forms(Some(&conference_key), &plan)
    }

    /// Lists a conference's sessions of one type.
    pub fn get_conference_sessions_by_type(
        &self,
        websafe_key: &str,
        type_of_session: &str,
    ) -> Result<Vec<SessionForm>> {
        let conference_key = self.existing_conference_key(websafe_key)?;
        let plan = QueryPlan::compose(
            vec![FilterSpec::new(
                SessionField::TypeOfSession,
                FilterOperator::Eq,
                FilterValue::from(type_of_session),
            )],
            SessionField::Name,
        )?;
        self.session_forms(Some(&conference_key), &plan)
    }

    /// Lists every session held by a speaker, across all conferences.
    pub fn get_sessions_by_speaker(&self, speaker: &str) -> Result<Vec<SessionForm>> {
        let plan = QueryPlan::compose(
            vec![FilterSpec::new(
                SessionField::Speaker,
                FilterOperator::Eq,
                FilterValue::from(speaker),
            )],
            SessionField::Name,
        )?;
        self.session_forms(None, &plan)
    }

    /// Lists sessions whose duration falls inside the range, shortest
    /// first.
    pub fn get_sessions_by_duration(&self, range: &IntegerRange) -> Result<Vec<SessionForm>> {
        validate::integer_range(range.min, range.max)?;

        let mut filters = Vec::new();
        if let Some(min) = range.min {
            filters.push(FilterSpec::new(
                SessionField::Duration,
                FilterOperator::Gteq,
                FilterValue::Int(min),
            ));
        }
        if let Some(max) = range.max {
            filters.push(FilterSpec::new(
                SessionField::Duration,
                FilterOperator::Lteq,
                FilterValue::Int(max),
            ));
        }
        let plan = Self::range_plan(filters, SessionField::Duration)?;
        self.session_forms(None, &plan)
    }

    /// Lists sessions scheduled inside the date range, earliest first.
    ///
    /// Unscheduled sessions never match a bounded query.
    pub fn get_sessions_by_date(&self, range: &DateRange) -> Result<Vec<SessionForm>> {
        let min = range
            .min
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(mapping::parse_date)
            .transpose()?;
        let max = range
            .max
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(mapping::parse_date)
            .transpose()?;
        validate::ordered(min, max)?;

        let mut filters = Vec::new();
        if let Some(min) = min {
            filters.push(FilterSpec::new(
                SessionField::Date,
                FilterOperator::Gteq,
                FilterValue::Date(min),
            ));
        }
        if let Some(max) = max {
            filters.push(FilterSpec::new(
                SessionField::Date,
                FilterOperator::Lteq,
                FilterValue::Date(max),
            ));
        }
        let plan = Self::range_plan(filters, SessionField::Date)?;
        self.session_forms(None, &plan)
    }

    /// Lists sessions starting inside the time-of-day range, earliest
    /// first.
    pub fn get_sessions_by_start_time(&self, range: &TimeRange) -> Result<Vec<SessionForm>> {
        let min = range
            .min
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(mapping::parse_time)
            .transpose()?;
        let max = range
            .max
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(mapping::parse_time)
            .transpose()?;
        validate::ordered(min, max)?;

        let mut filters = Vec::new();
        if let Some(min) = min {
            filters.push(FilterSpec::new(
                SessionField::StartTime,
                FilterOperator::Gteq,
                FilterValue::Time(min),
            ));
        }
        if let Some(max) = max {
            filters.push(FilterSpec::new(
                SessionField::StartTime,
                FilterOperator::Lteq,
                FilterValue::Time(max),
            ));
        }
        let plan = Self::range_plan(filters, SessionField::StartTime)?;
        self.session_forms(None, &plan)
    }

    /// Range queries sort by the bounded field even when no bound is
    /// given.
    fn range_plan(
        filters: Vec<FilterSpec<SessionField>>,
        field: SessionField,
    ) -> Result<QueryPlan<SessionField>> {
        if filters.is_empty() {
            Ok(QueryPlan::sorted_by(field, SessionField::Name))
        } else {
            QueryPlan::compose(filters, SessionField::Name)
        }
    }

    fn session_forms(
        &self,
        ancestor: Option<&EntityKey>,
        plan: &QueryPlan<SessionField>,
    ) -> Result<Vec<SessionForm>> {
        let results = self.store().query::<Session>(ancestor, plan)?;
        results
            .iter()
            .map(|entity| mapping::session_to_form(&entity.key, &entity.record))
            .collect()
    }

    /// Parses a conference key and checks the conference exists.
    fn existing_conference_key(&self, websafe_key: &str) -> Result<EntityKey> {
        let key = EntityKey::from_websafe(websafe_key)?;
        if self.store().get::<Conference>(&key)?.is_none() {
            return Err(Error::NotFound(format!(
                "no conference found with key: {}",
                websafe_key
            )));
        }
        Ok(key)
    }

    /// Refreshes the featured-speaker cache entry after a session insert.
    ///
    /// A speaker with more than one session in the conference becomes
    /// featured, with their session names listed alongside.
    fn refresh_featured_speaker(&self, conference_key: &EntityKey, speaker: &str) -> Result<()> {
        let plan = QueryPlan::compose(
            vec![FilterSpec::new(
                SessionField::Speaker,
                FilterOperator::Eq,
                FilterValue::from(speaker),
            )],
            SessionField::Name,
        )?;
        let sessions = self.store().query::<Session>(Some(conference_key), &plan)?;
        if sessions.len() > 1 {
            let names: Vec<&str> = sessions
                .iter()
                .map(|entity| entity.record.name.as_str())
                .collect();
            self.cache().set(
                FEATURED_SPEAKER_CACHE_KEY,
                &format!("{}: {}", speaker, names.join(", ")),
            )?;
        }
        Ok(())
    }
}
