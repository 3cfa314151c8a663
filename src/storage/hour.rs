use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

pub const FIRST_HOUR: u8 = 0;
pub const LAST_HOUR: u8 = 23;

/// An hour of the day, guaranteed to lie in `FIRST_HOUR..=LAST_HOUR`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Hour(u8);

impl Hour {
    pub fn new(hour: i64) -> Result<Self> {
        if hour < FIRST_HOUR as i64 || hour > LAST_HOUR as i64 {
            return Err(StoreError::InvalidHour {
                hour,
                min: FIRST_HOUR,
                max: LAST_HOUR,
            });
        }
        Ok(Self(hour as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Hour {
    type Error = StoreError;

    fn try_from(hour: i64) -> Result<Self> {
        Self::new(hour)
    }
}

impl From<Hour> for u8 {
    fn from(hour: Hour) -> u8 {
        hour.0
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
