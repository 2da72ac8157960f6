use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

use crate::core::error::InvalidInput;

/// Simulated time of day, whole hours within `0..=23`.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub const MIDNIGHT: Self = Self(0);
    pub const NOON: Self = Self(12);
    pub const N_HOURS: usize = 24;

    pub const fn new(hour: u8) -> Option<Self> {
        if hour < 24 { Some(Self(hour)) } else { None }
    }

    /// Current hour on the local wall clock.
    #[expect(clippy::cast_possible_truncation)]
    pub fn now() -> Self {
        Self(Local::now().hour() as u8)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Iterate through the day starting with midnight.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..24).map(Self)
    }
}

impl From<HourOfDay> for u8 {
    fn from(hour: HourOfDay) -> Self {
        hour.0
    }
}

impl TryFrom<i64> for HourOfDay {
    type Error = InvalidInput;

    fn try_from(hour: i64) -> Result<Self, Self::Error> {
        u8::try_from(hour)
            .ok()
            .and_then(Self::new)
            .ok_or(InvalidInput::HourOutOfRange(hour))
    }
}

impl TryFrom<f64> for HourOfDay {
    type Error = InvalidInput;

    #[expect(clippy::cast_possible_truncation)]
    fn try_from(hour: f64) -> Result<Self, Self::Error> {
        if !hour.is_finite() || hour.fract() != 0.0 {
            return Err(InvalidInput::FractionalHour(hour));
        }
        Self::try_from(hour as i64)
    }
}

impl FromStr for HourOfDay {
    type Err = InvalidInput;

    /// Accepts `12` as well as the `12:00` form the dashboard displays.
    ///
    /// A plain decimal like `6.5` is a [`InvalidInput::FractionalHour`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let hour = trimmed.strip_suffix(":00").unwrap_or(trimmed);
        let digits = hour.strip_prefix('-').unwrap_or(hour);
        if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
            return Err(InvalidInput::Unparsable(s.to_string()));
        }
        if let Ok(hour) = hour.parse::<i64>() {
            Self::try_from(hour)
        } else if let Ok(hour) = hour.parse::<f64>() {
            Self::try_from(hour)
        } else {
            Err(InvalidInput::Unparsable(s.to_string()))
        }
    }
}

impl Display for HourOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_i64_ok() {
        assert_eq!(HourOfDay::try_from(0_i64), Ok(HourOfDay::MIDNIGHT));
        assert_eq!(HourOfDay::try_from(23_i64).map(HourOfDay::get), Ok(23));
    }

    #[test]
    fn try_from_i64_out_of_range() {
        assert_eq!(HourOfDay::try_from(24_i64), Err(InvalidInput::HourOutOfRange(24)));
        assert_eq!(HourOfDay::try_from(-1_i64), Err(InvalidInput::HourOutOfRange(-1)));
        assert_eq!(HourOfDay::try_from(i64::MAX), Err(InvalidInput::HourOutOfRange(i64::MAX)));
    }

    #[test]
    fn try_from_f64() {
        assert_eq!(HourOfDay::try_from(12.0), Ok(HourOfDay::NOON));
        assert_eq!(HourOfDay::try_from(12.5), Err(InvalidInput::FractionalHour(12.5)));
        assert_eq!(HourOfDay::try_from(24.0), Err(InvalidInput::HourOutOfRange(24)));
        assert!(HourOfDay::try_from(f64::NAN).is_err());
    }

    #[test]
    fn from_str_ok() {
        assert_eq!("12".parse::<HourOfDay>(), Ok(HourOfDay::NOON));
        assert_eq!(" 12:00 ".parse::<HourOfDay>(), Ok(HourOfDay::NOON));
        assert_eq!("7".parse::<HourOfDay>().map(HourOfDay::get), Ok(7));
    }

    #[test]
    fn from_str_err() {
        assert_eq!("6.5".parse::<HourOfDay>(), Err(InvalidInput::FractionalHour(6.5)));
        assert_eq!("25".parse::<HourOfDay>(), Err(InvalidInput::HourOutOfRange(25)));
        assert_eq!("noon".parse::<HourOfDay>(), Err(InvalidInput::Unparsable("noon".into())));
        assert_eq!("-1".parse::<HourOfDay>(), Err(InvalidInput::HourOutOfRange(-1)));
    }

    #[test]
    fn from_str_rejects_exotic_numbers() {
        for input in ["1e1", "+5", "inf", "NaN", "", ":00", "12:30", "0x0c"] {
            assert_eq!(
                input.parse::<HourOfDay>(),
                Err(InvalidInput::Unparsable(input.into())),
                "{input:?}",
            );
        }
    }

    #[test]
    fn display_ok() {
        assert_eq!(HourOfDay::new(7).unwrap().to_string(), "07:00");
        assert_eq!(HourOfDay::NOON.to_string(), "12:00");
    }

    #[test]
    fn all_ok() {
        let hours: Vec<u8> = HourOfDay::all().map(HourOfDay::get).collect();
        assert_eq!(hours, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<HourOfDay>("24").is_err());
        assert_eq!(serde_json::from_str::<HourOfDay>("18").unwrap().get(), 18);
    }
}
