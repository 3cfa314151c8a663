use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum, minimum and average temperature over one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub max: f64,
    pub min: f64,
    pub average: f64,
}

/// Lowest and highest wind speed over one hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSpeed {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeasurementKind {
    Temperature,
    Rainfall,
    WindSpeed,
}

impl MeasurementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MeasurementKind::Temperature => "temperature",
            MeasurementKind::Rainfall => "rainfall",
            MeasurementKind::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for MeasurementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading of a single kind, as handed to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    Temperature(Temperature),
    Rainfall(f64),
    WindSpeed(WindSpeed),
}

impl Measurement {
    pub fn kind(&self) -> MeasurementKind {
        match self {
            Measurement::Temperature(_) => MeasurementKind::Temperature,
            Measurement::Rainfall(_) => MeasurementKind::Rainfall,
            Measurement::WindSpeed(_) => MeasurementKind::WindSpeed,
        }
    }

    /// False if any value is NaN or infinite. JSON has no encoding for those.
    pub fn is_finite(&self) -> bool {
        match self {
            Measurement::Temperature(t) => {
                t.max.is_finite() && t.min.is_finite() && t.average.is_finite()
            }
            Measurement::Rainfall(r) => r.is_finite(),
            Measurement::WindSpeed(w) => w.min.is_finite() && w.max.is_finite(),
        }
    }
}

/// Everything known about one hour of one date. Each kind has its own slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rainfall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<WindSpeed>,
}

impl HourRecord {
    /// Replace the slot for `measurement`'s kind, leaving the others alone.
    pub fn set(&mut self, measurement: Measurement) {
        match measurement {
            Measurement::Temperature(t) => self.temperature = Some(t),
            Measurement::Rainfall(r) => self.rainfall = Some(r),
            Measurement::WindSpeed(w) => self.wind_speed = Some(w),
        }
    }

    pub fn get(&self, kind: MeasurementKind) -> Option<Measurement> {
        match kind {
            MeasurementKind::Temperature => self.temperature.map(Measurement::Temperature),
            MeasurementKind::Rainfall => self.rainfall.map(Measurement::Rainfall),
            MeasurementKind::WindSpeed => self.wind_speed.map(Measurement::WindSpeed),
        }
    }

    /// The measurements currently held, in temperature, rainfall, wind order.
    pub fn measurements(&self) -> impl Iterator<Item = Measurement> + '_ {
        [
            MeasurementKind::Temperature,
            MeasurementKind::Rainfall,
            MeasurementKind::WindSpeed,
        ]
        .into_iter()
        .filter_map(|kind| self.get(kind))
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.rainfall.is_none() && self.wind_speed.is_none()
    }
}
