use crate::{core::hour::HourOfDay, quantity::ratios::Percentage};

/// Battery state of charge at the given hour.
///
/// This is a pure function of the hour rather than an accumulated state:
/// the same hour always yields the same charge regardless of how the clock got there.
///
/// - `00:00..06:00`: night drain from 50% down to 20%,
/// - `06:00..11:00`: morning charge from 20% up to 100%,
/// - `11:00..16:00`: saturated,
/// - `16:00..24:00`: evening drain from 100% towards 50%.
pub fn state_of_charge(hour: HourOfDay) -> Percentage {
    let h = hour.as_f64();
    let percent = match hour.get() {
        0..6 => (h / 6.0).mul_add(-30.0, 50.0),
        6..11 => ((h - 6.0) / 5.0).mul_add(80.0, 20.0),
        11..16 => 100.0,
        _ => ((h - 16.0) / 7.0).mul_add(-50.0, 100.0),
    };
    Percentage(percent).normalize()
}
