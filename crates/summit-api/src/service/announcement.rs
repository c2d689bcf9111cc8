//! Announcements and the featured speaker.

use super::{ConferenceService, ANNOUNCEMENT_CACHE_KEY, FEATURED_SPEAKER_CACHE_KEY};
use summit_core::query::{FilterOperator, FilterSpec, QueryPlan};
use summit_core::records::{Conference, ConferenceField};
use summit_core::{FilterValue, Result};
use tracing::info;

/// A conference with this many open seats or fewer is nearly sold out.
const NEARLY_SOLD_OUT_SEATS: i64 = 5;

impl ConferenceService {
    /// Rebuilds the announcement cache entry; run from the cron trigger.
    ///
    /// Sweeps for conferences with `0 < seats <= 5` open seats. When any
    /// exist the announcement is formatted and cached; otherwise the cache
    /// entry is cleared. Returns the announcement (empty when cleared).
    pub fn cache_announcement(&self) -> Result<String> {
        let plan = QueryPlan::compose(
            vec![
                FilterSpec::new(
                    ConferenceField::SeatsAvailable,
                    FilterOperator::Lteq,
                    FilterValue::Int(NEARLY_SOLD_OUT_SEATS),
                ),
                FilterSpec::new(
                    ConferenceField::SeatsAvailable,
                    FilterOperator::Gt,
                    FilterValue::Int(0),
                ),
            ],
            ConferenceField::Name,
        )?;
        let nearly_sold_out = self.store().query::<Conference>(None, &plan)?;

        if nearly_sold_out.is_empty() {
            self.cache().delete(ANNOUNCEMENT_CACHE_KEY)?;
            return Ok(String::new());
        }

        let names: Vec<&str> = nearly_sold_out
            .iter()
            .map(|entity| entity.record.name.as_str())
            .collect();
        let announcement = format!(
            "Last chance to attend! The following conferences are nearly sold out: {}",
            names.join(", ")
        );
        self.cache().set(ANNOUNCEMENT_CACHE_KEY, &announcement)?;
        info!(conferences = names.len(), "announcement cached");
        Ok(announcement)
    }

    /// Returns the cached announcement, or an empty string when none is
    /// set.
    pub fn get_announcement(&self) -> Result<String> {
        Ok(self.cache().get(ANNOUNCEMENT_CACHE_KEY)?.unwrap_or_default())
    }

    /// Returns the cached featured speaker line, or an empty string when
    /// none is set.
    pub fn get_featured_speaker(&self) -> Result<String> {
        Ok(self
            .cache()
            .get(FEATURED_SPEAKER_CACHE_KEY)?
            .unwrap_or_default())
    }
}
