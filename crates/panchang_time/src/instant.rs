//! Universal and Local instants.
//!
//! [`Instant`] is the only type an ephemeris ever sees. [`LocalInstant`]
//! carries its hour offset along, so a displayed time always knows which
//! clock it is on and how to get back to Universal.

use std::fmt::{Display, Formatter};

use panchang_math::{Dms, to_dms};
use serde::{Deserialize, Serialize};

use crate::civil_date::CivilDate;
use crate::delta_t::delta_t_seconds;
use crate::julian::{SECONDS_PER_DAY, split_day};

/// A moment on the Universal (UT) time scale, as a Julian Date.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Instant {
    jd_ut: f64,
}

impl Instant {
    pub const fn from_jd_ut(jd_ut: f64) -> Self {
        Self { jd_ut }
    }

    pub const fn jd_ut(self) -> f64 {
        self.jd_ut
    }

    /// Terrestrial Time Julian Date (UT + ΔT).
    pub fn jd_tt(self) -> f64 {
        self.jd_ut + delta_t_seconds(self.jd_ut) / SECONDS_PER_DAY
    }

    pub fn add_days(self, days: f64) -> Self {
        Self::from_jd_ut(self.jd_ut + days)
    }

    /// Signed days elapsed from `earlier` to `self`.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd_ut - earlier.jd_ut
    }

    /// The same moment on a clock `utc_offset_hours` ahead of Universal.
    pub fn to_local(self, utc_offset_hours: f64) -> LocalInstant {
        LocalInstant {
            jd_local: self.jd_ut + utc_offset_hours / 24.0,
            utc_offset_hours,
        }
    }
}

/// A moment expressed on a local civil clock.
///
/// `jd_local = jd_ut + utc_offset_hours / 24`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct LocalInstant {
    jd_local: f64,
    utc_offset_hours: f64,
}

impl LocalInstant {
    pub const fn new(jd_local: f64, utc_offset_hours: f64) -> Self {
        Self {
            jd_local,
            utc_offset_hours,
        }
    }

    pub const fn jd_local(self) -> f64 {
        self.jd_local
    }

    pub const fn utc_offset_hours(self) -> f64 {
        self.utc_offset_hours
    }

    pub fn to_universal(self) -> Instant {
        Instant::from_jd_ut(self.jd_local - self.utc_offset_hours / 24.0)
    }

    pub fn add_days(self, days: f64) -> Self {
        Self::new(self.jd_local + days, self.utc_offset_hours)
    }

    /// The local calendar date this moment falls on.
    pub fn civil_date(self) -> CivilDate {
        CivilDate::containing(self.jd_local)
    }

    /// Hours since local midnight starting `date`. Exceeds 24 for moments
    /// on a later day and is negative for an earlier one.
    pub fn hours_into_day(self, date: CivilDate) -> f64 {
        (self.jd_local - date.jd_midnight()) * 24.0
    }

    /// Hours since the midnight starting `date` as `HH:MM:SS`, truncated.
    ///
    /// Almanacs print a boundary on the following morning as e.g. `28:14:05`.
    pub fn clock_on(self, date: CivilDate) -> Dms {
        to_dms(self.hours_into_day(date))
    }

    /// Local wall-clock time rounded to the second.
    pub fn hms(self) -> (u32, u32, u32) {
        let (_, _, _, secs) = split_day(self.jd_local, 1.0);
        let secs = secs as u32;
        (secs / 3600, secs % 3600 / 60, secs % 60)
    }
}

impl Display for LocalInstant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let (year, month, day, secs) = split_day(self.jd_local, 1.0);
        let secs = secs as u32;
        write!(
            f,
            "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
            secs / 3600,
            secs % 3600 / 60,
            secs % 60
        )
    }
}
