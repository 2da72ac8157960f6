use thiserror::Error;

/// The only way the simulator can fail: it was asked about an hour that does not exist.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InvalidInput {
    #[error("hour of day must be within 0..=23, got {0}")]
    HourOutOfRange(i64),

    #[error("hour of day must be a whole number, got {0}")]
    FractionalHour(f64),

    #[error("`{0}` is not an hour of day")]
    Unparsable(String),
}
