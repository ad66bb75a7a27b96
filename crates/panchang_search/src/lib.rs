//! Panchang engine: the day's lunisolar elements for one place.
//!
//! This crate provides:
//! - Tithi, nakshatra, yoga and karana at sunrise with their end times,
//!   including periods that begin and end between two sunrises
//! - Amanta and purnimanta lunar months with adhika (leap) detection
//! - Kali, Shaka, Vikram and Gujarati year numbers with samvatsara names
//! - Rahu kalam, gulika kalam, yamaganda, abhijit, dur muhurtam, varjyam,
//!   amrit kalam and choghadiya windows
//! - [`compute`], which assembles all of the above into a [`PanchangResult`]
//!
//! Every query goes through an [`EphemerisProvider`](panchang_ephem::EphemerisProvider)
//! fixed to one sidereal frame; nothing here holds state between calls.

pub mod calendar;
pub mod config;
pub mod error;
pub mod intervals;
pub mod panchang;
pub mod panchang_types;
pub mod period;

#[cfg(test)]
mod test_support;

pub use calendar::{
    KALI_EPOCH_JD, MasaInfo, MasaLabel, Reckoning, SIDEREAL_YEAR_DAYS, SamvatInfo,
    SearchDirection, YearInfo, full_moon, masa_for_day, moon_sign, new_moon, pravishte,
    purnimanta_display_masa, samvat_for_day, sun_sign, weekday,
};
pub use config::{PanchangConfig, VarjyamTradition};
pub use error::PanchangError;
pub use intervals::{
    ChoghadiyaSlot, Interval, NakshatraSpan, NakshatraWindows, SolarDay, abhijit, choghadiya,
    dur_muhurtam, kalam, varjyam_amrit,
};
pub use panchang::{compute, compute_for_date};
pub use panchang_types::{
    DayIntervals, MonthInfo, NakshatraInfo, PanchangResult, TithiInfo, YogaInfo,
};
pub use period::{
    ALL_PERIOD_KINDS, KaranaDay, Period, PeriodKind, PeriodRun, karana_for_day, period_at_sunrise,
};
