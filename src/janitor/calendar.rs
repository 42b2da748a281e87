// file: src/janitor/calendar.rs
// description: wall clock access and calendar month arithmetic for staleness checks
// reference: https://docs.rs/chrono

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Offset, TimeZone, Utc};

/// Source of "now" for classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(instant) => *instant,
        }
    }

    /// The instant `months` calendar months before now. The system clock counts months
    /// in the local time zone.
    pub fn cutoff(&self, months: u32) -> Option<DateTime<Utc>> {
        match self {
            Clock::System => months_before(Local::now(), months),
            Clock::Fixed(instant) => months_before(*instant, months),
        }
    }
}

/// Subtracts whole calendar months in the instant's own time zone, keeping the day of
/// month and the wall-clock time.
///
/// A day that does not exist in the target month rolls forward into the next one,
/// so March 31st minus one month is March 3rd (or March 2nd in a leap year). A wall-clock
/// time skipped by a DST change keeps the original offset.
pub fn months_before<Tz: TimeZone>(instant: DateTime<Tz>, months: u32) -> Option<DateTime<Utc>> {
    let local = instant.naive_local();
    let total = local.year() * 12 + local.month0() as i32 - i32::try_from(months).ok()?;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;

    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let date = first_of_month.checked_add_days(Days::new(u64::from(local.day0())))?;
    let shifted = date.and_time(local.time());

    match instant.timezone().from_local_datetime(&shifted).earliest() {
        Some(resolved) => Some(resolved.with_timezone(&Utc)),
        None => Some((shifted - instant.offset().fix()).and_utc()),
    }
}
