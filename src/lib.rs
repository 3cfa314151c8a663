//! Hourly weather readings (temperature, rainfall, wind speed) kept in memory,
//! keyed by date and hour of day.
//!
//! ```
//! use skypulse_hourly::{store_rainfall, store_temperature, Temperature, WeatherStore};
//!
//! let mut store = WeatherStore::new();
//! let temp = Temperature { max: 20.0, min: 10.0, average: 15.0 };
//! store_temperature("2024-01-15", 10, temp, &mut store)?;
//! store_rainfall("2024-01-15", 10, 5.5, &mut store)?;
//!
//! assert_eq!(store.temperature("2024-01-15", 10), Some(temp));
//! assert_eq!(store.rainfall("2024-01-15", 10), Some(5.5));
//! assert!(store_rainfall("2024-01-15", 24, 1.0, &mut store).is_err());
//! # Ok::<(), skypulse_hourly::StoreError>(())
//! ```
pub mod error;
pub mod storage;

pub use error::{Result, StoreError};
pub use storage::{
    store_rainfall, store_temperature, store_wind_speed, Day, Hour, HourRecord, HourlyEntry,
    Measurement, MeasurementKind, Temperature, WeatherStore, WindSpeed, FIRST_HOUR, LAST_HOUR,
};
