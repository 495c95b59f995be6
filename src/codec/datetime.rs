// Timestamp parsing and epoch conversion
// Accepted grammar: YYYY:MM:DD HH:MM:SS with fixed field widths

use chrono::{Duration, LocalResult, NaiveDate, TimeZone};
use nom::bytes::complete::take_while_m_n;
use nom::character::complete::char;
use nom::combinator::{all_consuming, map_res};
use nom::{IResult, Parser};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateTimeError {
    #[error("timestamp does not match YYYY:MM:DD HH:MM:SS")]
    Format,

    #[error("timestamp {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },
}

pub type Result<T> = std::result::Result<T, DateTimeError>;

/// Calendar fields of a validated timestamp.
///
/// Day is only range-checked against 1..=31; a day past the end of its month
/// is accepted and rolls forward during epoch conversion, the way `mktime`
/// normalizes its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

fn digits<const N: usize>(input: &str) -> IResult<&str, u32> {
    map_res(
        take_while_m_n(N, N, |c: char| c.is_ascii_digit()),
        |s: &str| s.parse::<u32>(),
    )
    .parse(input)
}

fn timestamp_fields(input: &str) -> IResult<&str, (u32, u32, u32, u32, u32, u32)> {
    let (input, year) = digits::<4>(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, month) = digits::<2>(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, day) = digits::<2>(input)?;
    let (input, _) = char(' ').parse(input)?;
    let (input, hour) = digits::<2>(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, minute) = digits::<2>(input)?;
    let (input, _) = char(':').parse(input)?;
    let (input, second) = digits::<2>(input)?;
    Ok((input, (year, month, day, hour, minute, second)))
}

fn check_range(field: &'static str, value: u32, min: u32, max: u32) -> Result<u32> {
    if value < min || value > max {
        return Err(DateTimeError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Parse and validate a timestamp string.
///
/// Range rules: month 1-12, day 1-31 (no month-length or leap-year check),
/// hour 0-23, minute and second 0-59. Anything that is not exactly the
/// fixed-width grammar is a format error.
pub fn parse(input: &str) -> Result<Timestamp> {
    let (_, (year, month, day, hour, minute, second)) = all_consuming(timestamp_fields)
        .parse(input)
        .map_err(|_| DateTimeError::Format)?;

    Ok(Timestamp {
        year: year as i32,
        month: check_range("month", month, 1, 12)?,
        day: check_range("day", day, 1, 31)?,
        hour: check_range("hour", hour, 0, 23)?,
        minute: check_range("minute", minute, 0, 59)?,
        second: check_range("second", second, 0, 59)?,
    })
}

impl Timestamp {
    /// Seconds since the Unix epoch, interpreting the fields as wall-clock
    /// time in `tz`.
    ///
    /// Overflow days roll into the following month. Returns `None` for a
    /// wall-clock time that does not exist in `tz` (DST gap); an ambiguous
    /// time resolves to its earliest instant.
    pub fn epoch_seconds_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<i64> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_signed(Duration::days(i64::from(self.day) - 1))?;
        let naive = date.and_hms_opt(self.hour, self.minute, self.second)?;

        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Some(dt.timestamp()),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.timestamp()),
            LocalResult::None => None,
        }
    }
}
