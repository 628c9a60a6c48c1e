use crate::error::{GraphError, Result};
use crate::model::DayBucket;
use crate::util::days_between;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Gapless per-day commit counts, oldest first, ending on "today".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    buckets: Vec<DayBucket>,
}

impl Timeline {
    /// Reduce commit timestamps to calendar dates in `tz` and build the
    /// timeline through `today`.
    pub fn from_timestamps<I, Tz>(timestamps: I, tz: &Tz, today: NaiveDate) -> Result<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
        Tz: TimeZone,
    {
        Self::from_dates(
            timestamps.into_iter().map(|ts| ts.with_timezone(tz).date_naive()),
            today,
        )
    }

    /// Build the timeline from commit dates in any order. Commits dated after
    /// `today` are counted on `today`.
    pub fn from_dates<I>(dates: I, today: NaiveDate) -> Result<Self>
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        let mut future = 0usize;

        for date in dates {
            let date = if date > today {
                future += 1;
                today
            } else {
                date
            };
            *per_day.entry(date).or_insert(0) += 1;
        }

        if future > 0 {
            warn!(commits = future, %today, "commits dated in the future counted on today");
        }

        let first = *per_day.keys().next().ok_or(GraphError::EmptyHistory)?;

        let buckets: Vec<DayBucket> = days_between(first, today)
            .map(|day| DayBucket::new(day, per_day.get(&day).copied().unwrap_or(0)))
            .collect();

        debug!(
            %first,
            %today,
            days = buckets.len(),
            active_days = per_day.len(),
            "built timeline"
        );

        Ok(Self { buckets })
    }

    pub fn buckets(&self) -> &[DayBucket] {
        &self.buckets
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn total_commits(&self) -> u64 {
        self.buckets.iter().map(|b| u64::from(b.commits)).sum()
    }

    /// The most recent `days` buckets in chronological order, or the whole
    /// timeline when it is shorter.
    pub fn window(&self, days: usize) -> &[DayBucket] {
        let start = self.buckets.len().saturating_sub(days);
        &self.buckets[start..]
    }
}
