use crate::errors::StorageError;
use crate::keys::StorageKey;
use crate::storage::KeyValueStore;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;
use tracing::warn;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days on which at least one workout category was fully completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedDates {
    dates: BTreeSet<NaiveDate>,
}

impl CompletedDates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Returns `true` if the date was not present yet.
    pub fn insert(&mut self, date: NaiveDate) -> bool {
        self.dates.insert(date)
    }

    /// Returns `true` if the date was present.
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.dates.remove(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    pub fn count_in_month(&self, year: i32, month: u32) -> usize {
        self.iter()
            .filter(|date| date.year() == year && date.month() == month)
            .count()
    }

    pub fn to_strings(&self) -> Vec<String> {
        self.iter().map(format_date).collect()
    }
}

impl FromIterator<NaiveDate> for CompletedDates {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a strictly zero-padded `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != 10 {
        return None;
    }
    let date = NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()?;
    (format_date(date) == raw).then_some(date)
}

/// Reads the completed-date set.
///
/// A missing entry is an empty set. A payload that is not a JSON array of
/// strings is an error the caller recovers from; individual entries that
/// are not valid dates are dropped with a warning.
pub fn load_completed_dates(store: &impl KeyValueStore) -> Result<CompletedDates, StorageError> {
    let key = StorageKey::CompletedDates;
    let Some(raw) = store.get(&key) else {
        return Ok(CompletedDates::new());
    };

    let entries: Vec<String> = serde_json::from_str(&raw).map_err(|err| StorageError::Read {
        key: key.to_string(),
        reason: err.to_string(),
    })?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let date = parse_date(entry);
            if date.is_none() {
                warn!(entry = %entry, "dropping malformed completed date");
            }
            date
        })
        .collect())
}

/// Replaces the persisted set with `dates`.
pub fn save_completed_dates(
    store: &mut impl KeyValueStore,
    dates: &CompletedDates,
) -> Result<(), StorageError> {
    let key = StorageKey::CompletedDates;
    let payload = serde_json::to_string(&dates.to_strings()).map_err(|err| StorageError::Write {
        key: key.to_string(),
        reason: err.to_string(),
    })?;
    store.set(&key, payload)
}
