pub mod hour;
pub mod record;
pub mod snapshot;
pub mod store;

pub use hour::{Hour, FIRST_HOUR, LAST_HOUR};
pub use record::{HourRecord, Measurement, MeasurementKind, Temperature, WindSpeed};
pub use snapshot::HourlyEntry;
pub use store::{store_rainfall, store_temperature, store_wind_speed, Day, WeatherStore};
