use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::error::Result;
use crate::storage::hour::Hour;
use crate::storage::record::{HourRecord, Measurement, MeasurementKind, Temperature, WindSpeed};

/// Hour records of a single date.
pub type Day = BTreeMap<Hour, HourRecord>;

/// Weather readings keyed by date, then by hour.
///
/// The date is an opaque key; `"2024-01-15"` and `"15/01/2024"` are simply
/// two different days. Entries are created on first write and never removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherStore {
    days: BTreeMap<String, Day>,
}

impl WeatherStore {
    pub fn new() -> Self {
        Self { days: BTreeMap::new() }
    }

    /// Validate `hour`, then write `measurement` into the (date, hour) slot
    /// for its kind. On error the store is untouched.
    pub fn record(&mut self, date: &str, hour: i64, measurement: Measurement) -> Result<()> {
        let hour = Hour::new(hour).map_err(|e| {
            warn!(date, hour, kind = %measurement.kind(), "rejected measurement: {}", e);
            e
        })?;
        self.record_at(date, hour, measurement);
        Ok(())
    }

    pub(crate) fn record_at(&mut self, date: &str, hour: Hour, measurement: Measurement) {
        debug!(date, hour = hour.get(), kind = %measurement.kind(), "storing measurement");
        self.days
            .entry(date.to_string())
            .or_default()
            .entry(hour)
            .or_default()
            .set(measurement);
    }

    pub fn day(&self, date: &str) -> Option<&Day> {
        self.days.get(date)
    }

    /// Out-of-range hours simply have no record.
    pub fn hour_record(&self, date: &str, hour: i64) -> Option<&HourRecord> {
        let hour = Hour::new(hour).ok()?;
        self.days.get(date)?.get(&hour)
    }

    pub fn get(&self, date: &str, hour: i64, kind: MeasurementKind) -> Option<Measurement> {
        self.hour_record(date, hour)?.get(kind)
    }

    pub fn temperature(&self, date: &str, hour: i64) -> Option<Temperature> {
        self.hour_record(date, hour)?.temperature
    }

    pub fn rainfall(&self, date: &str, hour: i64) -> Option<f64> {
        self.hour_record(date, hour)?.rainfall
    }

    pub fn wind_speed(&self, date: &str, hour: i64) -> Option<WindSpeed> {
        self.hour_record(date, hour)?.wind_speed
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub(crate) fn days(&self) -> &BTreeMap<String, Day> {
        &self.days
    }

    /// Number of dates holding at least one hour.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

pub fn store_temperature(
    date: &str,
    hour: i64,
    temperature: Temperature,
    store: &mut WeatherStore,
) -> Result<()> {
    store.record(date, hour, Measurement::Temperature(temperature))
}

pub fn store_rainfall(
    date: &str,
    hour: i64,
    rainfall: f64,
    store: &mut WeatherStore,
) -> Result<()> {
    store.record(date, hour, Measurement::Rainfall(rainfall))
}

pub fn store_wind_speed(
    date: &str,
    hour: i64,
    wind_speed: WindSpeed,
    store: &mut WeatherStore,
) -> Result<()> {
    store.record(date, hour, Measurement::WindSpeed(wind_speed))
}
