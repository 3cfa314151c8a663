use anyhow::bail;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::storage::hour::Hour;
use crate::storage::record::HourRecord;
use crate::storage::store::WeatherStore;

/// One (date, hour) row of a snapshot.
///
/// Serialized as a single JSON object with the record's fields inlined:
/// `{"date":"2024-01-15","hour":10,"rainfall":5.5}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyEntry {
    pub date: String,
    pub hour: Hour,
    #[serde(flatten)]
    pub record: HourRecord,
}

impl WeatherStore {
    /// All stored hours, ordered by date then hour.
    pub fn entries(&self) -> impl Iterator<Item = HourlyEntry> + '_ {
        self.days().iter().flat_map(|(date, day)| {
            day.iter().map(move |(hour, record)| HourlyEntry {
                date: date.clone(),
                hour: *hour,
                record: record.clone(),
            })
        })
    }

    /// Encode the store as newline-delimited JSON, one line per entry.
    ///
    /// Fails on NaN or infinite readings, which JSON would turn into `null`.
    pub fn to_ndjson(&self) -> anyhow::Result<Vec<u8>> {
        let mut out = Vec::new();
        for entry in self.entries() {
            if let Some(m) = entry.record.measurements().find(|m| !m.is_finite()) {
                bail!(
                    "cannot export non-finite {} at {} hour {}",
                    m.kind(),
                    entry.date,
                    entry.hour
                );
            }
            serde_json::to_writer(&mut out, &entry)?;
            out.push(b'\n');
        }
        Ok(out)
    }

    /// Rebuild a store from newline-delimited JSON.
    ///
    /// Lines are applied in order as ordinary writes, so later lines win per
    /// kind and kinds from different lines merge. Unreadable lines, including
    /// ones with an hour outside the day, are skipped.
    pub fn replay_ndjson(data: &[u8]) -> Self {
        let mut store = WeatherStore::new();
        for (lineno, line) in data.split(|b| *b == b'\n').enumerate() {
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }
            match serde_json::from_slice::<HourlyEntry>(line) {
                Ok(entry) => {
                    for measurement in entry.record.measurements() {
                        store.record_at(&entry.date, entry.hour, measurement);
                    }
                }
                Err(e) => warn!(line = lineno + 1, "skipping snapshot line: {}", e),
            }
        }
        store
    }
}
