use chrono::{DateTime, FixedOffset, Local};

/// Source of "now" for the scheduler. The offset of the returned instant is
/// the zone the calendar is evaluated in.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Host local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Midnight of `date` at the given offset from UTC
    pub fn at_midnight(date: chrono::NaiveDate, offset: FixedOffset) -> Self {
        let local = date.and_time(chrono::NaiveTime::MIN);
        let utc = local - chrono::Duration::seconds(offset.local_minus_utc() as i64);
        Self(DateTime::from_naive_utc_and_offset(utc, offset))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixed_clock_keeps_local_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        let bst = FixedOffset::east_opt(3600).unwrap();
        let clock = FixedClock::at_midnight(date, bst);

        assert_eq!(clock.now().date_naive(), date);
        assert_eq!(clock.now().offset(), &bst);
        assert_eq!(clock.now().to_rfc3339(), "2024-06-15T00:00:00+01:00");
    }
}
