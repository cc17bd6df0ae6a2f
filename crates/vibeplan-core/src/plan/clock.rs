//! Time source for plan generation.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Supplies the current local date and time.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Used for reproducible output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Midnight on the given date. Returns `None` for an invalid date.
    pub fn on(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock::on(2025, 3, 14).unwrap();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now().year(), 2025);
        assert_eq!(clock.now().day(), 14);
    }

    #[test]
    fn fixed_clock_rejects_invalid_date() {
        assert!(FixedClock::on(2025, 2, 30).is_none());
    }
}
