use std::sync::{Mutex, PoisonError};

use chrono::Timelike;

/// Local wall-clock time of day, to whole-second precision.
///
/// Every value is valid: hour in `0..24`, minute and second in `0..60`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Timestamp {
    hour: u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    pub const MIDNIGHT: Timestamp = Timestamp { hour: 0, minute: 0, second: 0 };

    /// Returns `None` if any component is out of range.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Option<Self> {
        if hour < 24 && minute < 60 && second < 60 {
            Some(Self { hour, minute, second })
        } else {
            None
        }
    }

    /// Truncates a chrono time to whole seconds.
    ///
    /// A leap second (reported by chrono as second 59 with an oversized
    /// nanosecond field) maps to second 59.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        // chrono guarantees hour < 24, minute < 60, second < 60.
        let clamp = |v: u32, max: u8| u8::try_from(v).unwrap_or(max).min(max);
        Self {
            hour: clamp(t.hour(), 23),
            minute: clamp(t.minute(), 59),
            second: clamp(t.second(), 59),
        }
    }

    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }

    /// Hour on a 12-hour dial (`0..12`).
    #[inline]
    pub const fn hour_of_dial(self) -> u8 {
        self.hour % 12
    }
}

/// Source of the current local time.
pub trait WallClock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// The host's local system clock.
#[derive(Debug, Copy, Clone, Default)]
pub struct LocalClock;

impl WallClock for LocalClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_time(&chrono::Local::now())
    }
}

/// A clock that reports whatever time it was last set to.
#[derive(Debug, Default)]
pub struct FixedClock {
    now: Mutex<Timestamp>,
}

impl FixedClock {
    pub fn new(now: Timestamp) -> Self {
        Self { now: Mutex::new(now) }
    }

    pub fn set(&self, now: Timestamp) {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner) = now;
    }
}

impl WallClock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn out_of_range_components_are_rejected() {
        assert!(Timestamp::new(24, 0, 0).is_none());
        assert!(Timestamp::new(0, 60, 0).is_none());
        assert!(Timestamp::new(0, 0, 60).is_none());
        assert!(Timestamp::new(23, 59, 59).is_some());
    }

    #[test]
    fn dial_hour_wraps_at_noon() {
        let t = |h| Timestamp::new(h, 0, 0).unwrap();
        assert_eq!(t(0).hour_of_dial(), 0);
        assert_eq!(t(12).hour_of_dial(), 0);
        assert_eq!(t(15).hour_of_dial(), 3);
        assert_eq!(t(23).hour_of_dial(), 11);
    }

    #[test]
    fn from_chrono_truncates_fractional_seconds() {
        let time = NaiveTime::from_hms_milli_opt(14, 7, 42, 999).unwrap();
        assert_eq!(Timestamp::from_time(&time), Timestamp::new(14, 7, 42).unwrap());
    }

    #[test]
    fn leap_second_maps_to_fifty_nine() {
        let leap = NaiveTime::from_hms_nano_opt(23, 59, 59, 1_500_000_000).unwrap();
        assert_eq!(Timestamp::from_time(&leap).second(), 59);
    }

    #[test]
    fn fixed_clock_reports_last_set_time() {
        let clock = FixedClock::new(Timestamp::MIDNIGHT);
        assert_eq!(clock.now(), Timestamp::MIDNIGHT);

        let later = Timestamp::new(9, 30, 0).unwrap();
        clock.set(later);
        assert_eq!(clock.now(), later);
    }

    #[test]
    fn local_clock_yields_valid_time() {
        let now = LocalClock.now();
        assert!(Timestamp::new(now.hour(), now.minute(), now.second()).is_some());
    }
}
