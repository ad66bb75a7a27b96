//! The civil calendar day a panchang is drawn up for.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::instant::Instant;
use crate::julian::{calendar_to_jd, jd_to_calendar};

/// A validated proleptic Gregorian date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CivilDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CivilDate {
    /// Build a date, rejecting combinations such as February 30.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?.into())
    }

    /// The date on which a Julian Date falls, on the clock that Julian Date
    /// is expressed in.
    pub fn containing(jd: f64) -> Self {
        let midnight = (jd + 0.5).floor() - 0.5;
        let (year, month, day) = jd_to_calendar(midnight);
        Self {
            year,
            month,
            day: day.round() as u32,
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Julian Date of 00:00 on this date.
    pub fn jd_midnight(self) -> f64 {
        calendar_to_jd(self.year, self.month, self.day as f64)
    }

    /// Julian Day Number (the integer JD of noon on this date).
    pub fn julian_day_number(self) -> i64 {
        (self.jd_midnight() + 0.5) as i64
    }

    /// Local civil midnight at the start of this date, as a Universal instant.
    pub fn midnight_universal(self, utc_offset_hours: f64) -> Instant {
        Instant::from_jd_ut(self.jd_midnight() - utc_offset_hours / 24.0)
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn weekday_index(self) -> u8 {
        (self.julian_day_number() + 1).rem_euclid(7) as u8
    }

    /// Whole days from `self` to `later` (negative if `later` is earlier).
    pub fn days_until(self, later: CivilDate) -> i64 {
        later.julian_day_number() - self.julian_day_number()
    }

    /// The following date.
    pub fn succ(self) -> Self {
        Self::containing(self.jd_midnight() + 1.0)
    }

    /// The preceding date.
    pub fn pred(self) -> Self {
        Self::containing(self.jd_midnight() - 1.0)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
            day: d.day(),
        }
    }
}

impl TryFrom<CivilDate> for NaiveDate {
    type Error = TimeError;

    fn try_from(d: CivilDate) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(d.year, d.month, d.day).ok_or(TimeError::InvalidDate {
            year: d.year,
            month: d.month,
            day: d.day,
        })
    }
}

impl FromStr for CivilDate {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CivilDate {
    type Error = TimeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<CivilDate> for String {
    fn from(d: CivilDate) -> Self {
        d.to_string()
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_day() {
        assert!(matches!(
            CivilDate::new(2023, 2, 29),
            Err(TimeError::InvalidDate { .. })
        ));
        assert!(CivilDate::new(2024, 2, 29).is_ok());
    }

    #[test]
    fn weekday_of_known_dates() {
        // 2000-01-01 was a Saturday, 2024-01-14 a Sunday.
        assert_eq!(CivilDate::new(2000, 1, 1).unwrap().weekday_index(), 6);
        assert_eq!(CivilDate::new(2024, 1, 14).unwrap().weekday_index(), 0);
    }

    #[test]
    fn weekday_advances_by_one() {
        let mut d = CivilDate::new(2023, 12, 28).unwrap();
        for _ in 0..10 {
            let next = d.succ();
            assert_eq!(next.weekday_index(), (d.weekday_index() + 1) % 7);
            d = next;
        }
    }

    #[test]
    fn succ_crosses_year() {
        let d = CivilDate::new(2023, 12, 31).unwrap().succ();
        assert_eq!(d, CivilDate::new(2024, 1, 1).unwrap());
        assert_eq!(d.pred(), CivilDate::new(2023, 12, 31).unwrap());
    }

    #[test]
    fn midnight_universal_shifts_by_offset() {
        let d = CivilDate::new(2024, 1, 15).unwrap();
        let ist = d.midnight_universal(5.5);
        assert!((ist.jd_ut() - (d.jd_midnight() - 5.5 / 24.0)).abs() < 1e-12);
    }

    #[test]
    fn containing_noon() {
        let d = CivilDate::new(2024, 3, 20).unwrap();
        assert_eq!(CivilDate::containing(d.jd_midnight() + 0.5), d);
        assert_eq!(CivilDate::containing(d.jd_midnight() + 0.999), d);
    }

    #[test]
    fn days_between() {
        let a = CivilDate::new(2024, 2, 27).unwrap();
        let b = CivilDate::new(2024, 3, 2).unwrap();
        assert_eq!(a.days_until(b), 4);
        assert_eq!(b.days_until(a), -4);
    }

    #[test]
    fn parse_and_display() {
        let d: CivilDate = "2024-01-05".parse().unwrap();
        assert_eq!(d.to_string(), "2024-01-05");
        assert!(CivilDate::parse("2024-13-01").is_err());
    }

    #[test]
    fn serde_as_string() {
        let d = CivilDate::new(2024, 1, 5).unwrap();
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, "\"2024-01-05\"");
        let back: CivilDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
