//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the textual face of an [`Instant`]: what a user types on
//! the command line and what gets printed back.

use chrono::{NaiveDateTime, Timelike};

use crate::error::TimeError;
use crate::instant::Instant;
use crate::julian::{calendar_to_jd, split_day};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Parse `YYYY-MM-DDTHH:MM[:SS[.fff]][Z]`; a space may replace the `T`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        let trimmed = s.trim().trim_end_matches('Z').replacen(' ', "T", 1);
        let dt = NaiveDateTime::parse_from_str(&trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(&trimmed, "%Y-%m-%dT%H:%M"))?;
        let date = dt.date();
        Ok(Self {
            year: chrono::Datelike::year(&date),
            month: chrono::Datelike::month(&date),
            day: chrono::Datelike::day(&date),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second() as f64 + dt.nanosecond() as f64 * 1e-9,
        })
    }

    /// Convert to a Universal instant, rejecting out-of-range fields.
    pub fn to_instant(&self) -> Result<Instant, TimeError> {
        if chrono::NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 || !(0.0..61.0).contains(&self.second) {
            return Err(TimeError::InvalidTime {
                hour: self.hour,
                minute: self.minute,
                second: self.second,
            });
        }
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / 86_400.0;
        Ok(Instant::from_jd_ut(calendar_to_jd(self.year, self.month, day_frac)))
    }

    /// Calendar form of an instant, rounded to the millisecond.
    pub fn from_instant(t: Instant) -> Self {
        let (year, month, day, secs) = split_day(t.jd_ut(), 1e-3);
        let hour = (secs / 3600.0).floor() as u32;
        let minute = ((secs % 3600.0) / 60.0).floor() as u32;
        let second = ((secs % 60.0) * 1e3).round() / 1e3;
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}
