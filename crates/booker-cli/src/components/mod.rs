pub mod calendar;
pub mod select;
pub mod slots;

use booker_core::{get_booker_setting, Clock, FixedClock, GenericError, SystemClock};
use chrono::{DateTime, FixedOffset, NaiveDate};

/// Offset given on the command line, else `BOOKER_UTC_OFFSET_MINUTES`
fn resolve_offset(utc_offset_minutes: Option<i64>) -> Result<FixedOffset, GenericError> {
    let minutes =
        utc_offset_minutes.unwrap_or_else(|| get_booker_setting!(BOOKER_UTC_OFFSET_MINUTES, i64));
    minutes
        .checked_mul(60)
        .and_then(|secs| i32::try_from(secs).ok())
        .and_then(FixedOffset::east_opt)
        .ok_or_else(|| GenericError::ParseError(format!("UTC offset out of range: {minutes}m")))
}

/// "Now" for a headless command: midnight of `today` when pinned, else the
/// host clock, shifted to an explicit offset when one was given
pub(crate) fn resolve_now(
    today: Option<NaiveDate>,
    utc_offset_minutes: Option<i64>,
) -> Result<DateTime<FixedOffset>, GenericError> {
    match (today, utc_offset_minutes) {
        (Some(date), _) => Ok(FixedClock::at_midnight(date, resolve_offset(utc_offset_minutes)?).now()),
        (None, Some(_)) => {
            let offset = resolve_offset(utc_offset_minutes)?;
            Ok(SystemClock.now().with_timezone(&offset))
        }
        (None, None) => Ok(SystemClock.now()),
    }
}
