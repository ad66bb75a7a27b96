//! Types for panchang results.

use panchang_ephem::Place;
use panchang_time::{CivilDate, LocalInstant};
use panchang_vedic_base::{Nakshatra, Paksha, Rashi, Tithi, Vaar, Yoga, YogaNature};
use serde::Serialize;

use crate::calendar::{MasaInfo, MasaLabel, SamvatInfo};
use crate::intervals::{ChoghadiyaSlot, Interval, NakshatraSpan};
use crate::period::{KaranaDay, PeriodRun};

/// Tithi in force at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiInfo {
    pub tithi: Tithi,
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// End time, plus any tithis skipped before the next sunrise.
    pub run: PeriodRun,
}

/// Nakshatra in force at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Pada (1-4) of the Moon at sunrise.
    pub pada: u8,
    pub run: PeriodRun,
}

/// Yoga in force at sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YogaInfo {
    pub yoga: Yoga,
    pub nature: YogaNature,
    pub run: PeriodRun,
}

/// Lunar months containing the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthInfo {
    /// New moon to new moon.
    pub amanta: MasaInfo,
    /// Full moon to full moon.
    pub purnimanta: MasaInfo,
    /// Month name purnimanta almanacs print for the day.
    pub purnimanta_display: MasaLabel,
}

/// Inauspicious and auspicious windows of the day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayIntervals {
    pub rahu_kalam: Interval,
    pub gulika_kalam: Interval,
    pub yamaganda: Interval,
    /// Absent on Wednesday.
    pub abhijit: Option<Interval>,
    pub dur_muhurtam: Vec<Interval>,
    pub varjyam: Vec<Interval>,
    pub amrit_kalam: Vec<Interval>,
    /// Nakshatras varjyam and amrit kalam were measured against.
    pub nakshatra_spans: Vec<NakshatraSpan>,
    /// Eight day slices followed by eight night slices.
    pub choghadiya: Vec<ChoghadiyaSlot>,
}

/// Complete panchang for one civil date at one place.
///
/// Every instant is on the place's clock.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangResult {
    pub date: CivilDate,
    pub place: Place,
    pub sunrise: LocalInstant,
    pub sunset: LocalInstant,
    /// Sunrise on the following date; the panchang day ends here.
    pub next_sunrise: LocalInstant,
    /// First moonrise after sunrise, if it belongs to this day.
    pub moonrise: Option<LocalInstant>,
    /// First moonset after sunrise, if before the next sunrise.
    pub moonset: Option<LocalInstant>,
    pub vaar: Vaar,
    pub tithi: TithiInfo,
    pub nakshatra: NakshatraInfo,
    pub yoga: YogaInfo,
    pub karana: KaranaDay,
    pub month: MonthInfo,
    pub samvat: SamvatInfo,
    /// Sidereal rashi of the Sun at sunrise.
    pub sun_sign: Rashi,
    /// Sidereal rashi of the Moon at sunrise.
    pub moon_sign: Rashi,
    /// Day of the solar month (1 on the date of the Sun's rashi ingress).
    pub pravishte: u32,
    pub intervals: DayIntervals,
}
