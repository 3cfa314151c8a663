use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The hour is outside `min..=max`. Nothing was written.
    #[error("hour must be between {min} and {max}, got {hour}")]
    InvalidHour { hour: i64, min: u8, max: u8 },
}
