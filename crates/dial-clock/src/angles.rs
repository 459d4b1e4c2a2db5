//! Time-to-angle conversion.
//!
//! Angles are degrees clockwise from 12 o'clock, always in `[0, 360)`.
//! Sub-second precision is not consulted; the refresh rate bounds what is
//! visible anyway.

use crate::timestamp::Timestamp;

/// Rotation of the second hand.
#[inline]
pub fn second_angle(t: Timestamp) -> f64 {
    f64::from(t.second()) / 60.0 * 360.0
}

/// Rotation of the minute hand; advances continuously with the seconds.
#[inline]
pub fn minute_angle(t: Timestamp) -> f64 {
    let minutes = f64::from(t.minute()) + f64::from(t.second()) / 60.0;
    minutes / 60.0 * 360.0
}

/// Rotation of the hour hand on a 12-hour dial; advances with the minutes.
#[inline]
pub fn hour_angle(t: Timestamp) -> f64 {
    let hours = f64::from(t.hour_of_dial()) + f64::from(t.minute()) / 60.0;
    hours / 12.0 * 360.0
}

/// All three hand rotations for one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandAngles {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

impl HandAngles {
    pub fn at(t: Timestamp) -> Self {
        Self {
            hour: hour_angle(t),
            minute: minute_angle(t),
            second: second_angle(t),
        }
    }
}
