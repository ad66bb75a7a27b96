//! Lunar month, weekday, year eras and solar-month day count.
//!
//! Months are bracketed by syzygies found by inverse interpolation of the
//! lunar phase over 17 quarter-day samples around an estimate taken from
//! the tithi at sunrise. A month is adhika (leap) when the Sun stays in one
//! rashi across both bracketing syzygies.

use std::fmt::{Display, Formatter};

use panchang_ephem::{Body, EphemerisProvider, Place};
use panchang_math::{
    RootError, inverse_lagrange, normalize_180, normalize_360, try_bisection_search,
    unwrap_ascending,
};
use panchang_time::{CivilDate, Instant, LocalInstant};
use panchang_vedic_base::{
    GUJARATI_CYCLE_OFFSET, Masa, Paksha, Rashi, SHAKA_CYCLE_OFFSET, Samvatsara, Tithi,
    VIKRAM_CYCLE_OFFSET, Vaar,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PanchangError;

/// Mean synodic month in days.
const SYNODIC_MONTH_DAYS: f64 = 29.530_588;

/// Phase samples around a syzygy estimate: offsets −2 to +2 days, 1/4 apart.
const SYZYGY_SAMPLES: usize = 17;

/// A syzygy further than this from its estimate means the estimate was bad.
const SYZYGY_REACH_DAYS: f64 = 2.5;

/// Sidereal year used for elapsed-year counts, in days.
pub const SIDEREAL_YEAR_DAYS: f64 = 365.256_360_417;

/// Julian Date of the midnight starting the Kali Yuga.
pub const KALI_EPOCH_JD: f64 = 588_465.5;

/// Kali year minus Shaka year.
const SHAKA_FROM_KALI: i32 = 3179;

/// Vikram year minus Shaka year.
const VIKRAM_FROM_SHAKA: i32 = 135;

/// How far back the Sun's last rashi ingress is searched, in days.
const INGRESS_LOOKBACK_DAYS: f64 = 32.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Month reckoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reckoning {
    /// New moon to new moon.
    Amanta,
    /// Full moon to full moon.
    Purnimanta,
}

/// Direction of a syzygy search relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchDirection {
    Backward,
    Forward,
}

/// A month name with its adhika flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MasaLabel {
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub leap: bool,
}

impl Display for MasaLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.leap {
            write!(f, "{} (Adhik)", self.masa.name())
        } else {
            f.write_str(self.masa.name())
        }
    }
}

/// Lunar month classification result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MasaInfo {
    /// The masa (lunar month).
    pub masa: Masa,
    /// Whether this is an adhika (intercalary) month.
    pub leap: bool,
    /// Opening syzygy.
    pub start: LocalInstant,
    /// Closing syzygy.
    pub end: LocalInstant,
}

impl MasaInfo {
    pub fn label(&self) -> MasaLabel {
        MasaLabel {
            masa: self.masa,
            leap: self.leap,
        }
    }
}

/// A year number in one era and its samvatsara.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearInfo {
    pub number: i32,
    pub samvatsara: Samvatsara,
}

impl YearInfo {
    fn new(number: i32, cycle_offset: i32) -> Self {
        Self {
            number,
            samvatsara: Samvatsara::for_year(number, cycle_offset),
        }
    }
}

/// Elapsed years in the eras a panchang prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SamvatInfo {
    /// Years elapsed since the start of the Kali Yuga.
    pub kali: i32,
    pub shaka: YearInfo,
    pub vikram: YearInfo,
    /// Kartikadi Vikram: the year turns in Kartika rather than Chaitra.
    pub gujarati: YearInfo,
}

// ---------------------------------------------------------------------------
// Syzygies
// ---------------------------------------------------------------------------

/// Instant near `estimate` at which the lunar phase reaches `target_deg`.
fn syzygy<P>(provider: &P, estimate: Instant, target_deg: f64) -> Result<Instant, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let mut xs = [0.0; SYZYGY_SAMPLES];
    let mut ys = [0.0; SYZYGY_SAMPLES];
    for (k, (x, y)) in xs.iter_mut().zip(ys.iter_mut()).enumerate() {
        *x = -2.0 + k as f64 / 4.0;
        *y = provider.lunar_phase(estimate.add_days(*x))?;
    }
    unwrap_ascending(&mut ys);
    let dx = inverse_lagrange(&xs, &ys, target_deg)?;
    if !(dx.is_finite() && dx.abs() <= SYZYGY_REACH_DAYS) {
        return Err(RootError::DegenerateSamples("syzygy outside the sampled window").into());
    }
    Ok(estimate.add_days(dx))
}

/// New moon before (`Backward`) or after (`Forward`) `anchor`, where
/// `tithi` is the tithi in force at `anchor`.
pub fn new_moon<P>(
    provider: &P,
    anchor: Instant,
    tithi: Tithi,
    direction: SearchDirection,
) -> Result<Instant, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let t = f64::from(tithi.number());
    let estimate = match direction {
        SearchDirection::Backward => anchor.add_days(-t),
        SearchDirection::Forward => anchor.add_days(30.0 - t),
    };
    let found = syzygy(provider, estimate, 360.0)?;
    debug!(jd_ut = found.jd_ut(), ?direction, "new moon");
    Ok(found)
}

/// Full moon before (`Backward`) or after (`Forward`) `anchor`, where
/// `tithi` is the tithi in force at `anchor`.
pub fn full_moon<P>(
    provider: &P,
    anchor: Instant,
    tithi: Tithi,
    direction: SearchDirection,
) -> Result<Instant, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let t = f64::from(tithi.number());
    let back = match direction {
        SearchDirection::Backward if t > 15.0 => t - 15.0,
        SearchDirection::Backward => t + 15.0,
        SearchDirection::Forward if t <= 15.0 => t - 15.0,
        SearchDirection::Forward => t - 45.0,
    };
    let found = syzygy(provider, anchor.add_days(-back), 180.0)?;
    debug!(jd_ut = found.jd_ut(), ?direction, "full moon");
    Ok(found)
}

fn sun_rashi<P>(provider: &P, at: Instant) -> Result<Rashi, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    Ok(Rashi::from_longitude(
        provider.sidereal_longitude(Body::Sun, at)?,
    ))
}

// ---------------------------------------------------------------------------
// Masa
// ---------------------------------------------------------------------------

/// Lunar month containing `sunrise`, whose tithi is `tithi`.
///
/// Amanta months are named for the rashi after the Sun's rashi at the
/// opening new moon. A purnimanta month takes the name of the amanta month
/// whose bright half it closes with, i.e. of the new moon between its two
/// full moons. Either month is adhika when the Sun's rashi is the same at
/// both bracketing syzygies.
pub fn masa_for_day<P>(
    provider: &P,
    sunrise: Instant,
    tithi: Tithi,
    reckoning: Reckoning,
    place: &Place,
) -> Result<MasaInfo, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let (start, end, naming_new_moon) = match reckoning {
        Reckoning::Amanta => {
            let start = new_moon(provider, sunrise, tithi, SearchDirection::Backward)?;
            let end = new_moon(provider, sunrise, tithi, SearchDirection::Forward)?;
            (start, end, start)
        }
        Reckoning::Purnimanta => {
            let start = full_moon(provider, sunrise, tithi, SearchDirection::Backward)?;
            let end = full_moon(provider, sunrise, tithi, SearchDirection::Forward)?;
            let middle = syzygy(provider, start.add_days(SYNODIC_MONTH_DAYS / 2.0), 360.0)?;
            (start, end, middle)
        }
    };

    let leap = sun_rashi(provider, start)? == sun_rashi(provider, end)?;
    let masa = Masa::from_number(sun_rashi(provider, naming_new_moon)?.number() + 1);
    debug!(?reckoning, masa = masa.name(), leap, "masa");

    let offset = place.utc_offset_hours;
    Ok(MasaInfo {
        masa,
        leap,
        start: start.to_local(offset),
        end: end.to_local(offset),
    })
}

/// Month printed by purnimanta almanacs, derived from the amanta month.
///
/// The same as amanta in an adhika month and during Shukla paksha; during
/// Krishna paksha it is the following month.
pub fn purnimanta_display_masa(amanta: &MasaInfo, tithi: Tithi) -> MasaLabel {
    if amanta.leap || tithi.paksha() == Paksha::Shukla {
        amanta.label()
    } else {
        MasaLabel {
            masa: amanta.masa.next(),
            leap: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Weekday and years
// ---------------------------------------------------------------------------

/// Weekday of a civil date.
pub fn weekday(date: CivilDate) -> Vaar {
    Vaar::from_index(date.weekday_index())
}

/// Elapsed Kali, Shaka, Vikram and Gujarati years on `date`.
///
/// `masa` is the amanta month and `tithi` the tithi at sunrise.
pub fn samvat_for_day(date: CivilDate, masa: Masa, tithi: Tithi) -> SamvatInfo {
    let ahargana = date.jd_midnight() - KALI_EPOCH_JD;
    let month_shift = f64::from(4 - i32::from(masa.number())) * 30.0;
    let kali = ((ahargana + month_shift) / SIDEREAL_YEAR_DAYS).trunc() as i32;
    let shaka = kali - SHAKA_FROM_KALI;
    let vikram = shaka + VIKRAM_FROM_SHAKA;

    let m = masa.number();
    let turned = m > Masa::Kartika.number()
        || (m == Masa::Kartika.number() && tithi.paksha() == Paksha::Shukla);
    let gujarati = if turned { vikram } else { vikram - 1 };

    SamvatInfo {
        kali,
        shaka: YearInfo::new(shaka, SHAKA_CYCLE_OFFSET),
        vikram: YearInfo::new(vikram, VIKRAM_CYCLE_OFFSET),
        gujarati: YearInfo::new(gujarati, GUJARATI_CYCLE_OFFSET),
    }
}

// ---------------------------------------------------------------------------
// Solar month and signs
// ---------------------------------------------------------------------------

/// Day of the solar month at `sunrise`: 1 on the civil date of the Sun's
/// ingress into its current rashi.
pub fn pravishte<P>(provider: &P, sunrise: Instant, place: &Place) -> Result<u32, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let start = sun_rashi(provider, sunrise)?.start_deg();
    let ingress = try_bisection_search(
        |jd| {
            let sun = provider.sidereal_longitude(Body::Sun, Instant::from_jd_ut(jd))?;
            Ok::<f64, PanchangError>(normalize_180(normalize_360(sun - start)))
        },
        sunrise.jd_ut() - INGRESS_LOOKBACK_DAYS,
        sunrise.jd_ut(),
    )?;

    let offset = place.utc_offset_hours;
    let ingress_date = Instant::from_jd_ut(ingress).to_local(offset).civil_date();
    let days = ingress_date.days_until(sunrise.to_local(offset).civil_date());
    debug!(ingress_jd_ut = ingress, days, "solar ingress");
    Ok((days + 1).max(1) as u32)
}

/// Rashi of the Sun at `at`.
pub fn sun_sign<P>(provider: &P, at: Instant) -> Result<Rashi, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    sun_rashi(provider, at)
}

/// Rashi of the Moon at `at`.
pub fn moon_sign<P>(provider: &P, at: Instant) -> Result<Rashi, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    Ok(Rashi::from_longitude(
        provider.sidereal_longitude(Body::Moon, at)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem};

    use crate::period::PeriodKind;

    fn delhi() -> Place {
        Place::new(28.6139, 77.2090, 5.5).unwrap()
    }

    fn eph() -> AnalyticEphemeris {
        AnalyticEphemeris::new(AyanamshaSystem::Lahiri)
    }

    fn sunrise_and_tithi(y: i32, m: u32, d: u32) -> (Instant, Tithi) {
        let date = CivilDate::new(y, m, d).unwrap();
        let rise = eph()
            .next_sunrise(date.midnight_universal(5.5), &delhi())
            .unwrap()
            .event()
            .unwrap();
        let phase = eph().lunar_phase(rise).unwrap();
        (rise, Tithi::from_number(PeriodKind::Tithi.number_at(phase)))
    }

    #[test]
    fn new_moons_around_mid_january_2024() {
        let (rise, tithi) = sunrise_and_tithi(2024, 1, 15);
        let prev = new_moon(&eph(), rise, tithi, SearchDirection::Backward).unwrap();
        let next = new_moon(&eph(), rise, tithi, SearchDirection::Forward).unwrap();
        // 2024-01-11 11:57 UT and 2024-02-09 22:59 UT.
        assert!((prev.jd_ut() - 2_460_320.998).abs() < 0.02, "prev {}", prev.jd_ut());
        assert!((next.jd_ut() - 2_460_350.458).abs() < 0.02, "next {}", next.jd_ut());
    }

    #[test]
    fn full_moon_forward() {
        let (rise, tithi) = sunrise_and_tithi(2024, 1, 15);
        let next = full_moon(&eph(), rise, tithi, SearchDirection::Forward).unwrap();
        // 2024-01-25 17:54 UT.
        assert!((next.jd_ut() - 2_460_335.246).abs() < 0.02, "next {}", next.jd_ut());
        let phase = eph().lunar_phase(next).unwrap();
        assert!((phase - 180.0).abs() < 0.01, "phase {phase}");
    }

    #[test]
    fn pausha_2024_both_reckonings() {
        let (rise, tithi) = sunrise_and_tithi(2024, 1, 15);
        assert_eq!(tithi.paksha(), Paksha::Shukla);
        let amanta = masa_for_day(&eph(), rise, tithi, Reckoning::Amanta, &delhi()).unwrap();
        assert_eq!(amanta.masa, Masa::Pausha, "got {}", amanta.masa);
        assert!(!amanta.leap);
        assert!(amanta.start.to_universal() < rise && rise < amanta.end.to_universal());

        let purnimanta =
            masa_for_day(&eph(), rise, tithi, Reckoning::Purnimanta, &delhi()).unwrap();
        assert_eq!(purnimanta.masa, Masa::Pausha, "got {}", purnimanta.masa);
        assert!(!purnimanta.leap);
        let span = purnimanta.end.jd_local() - purnimanta.start.jd_local();
        assert!((29.2..29.9).contains(&span), "span {span}");
    }

    #[test]
    fn adhik_shravana_2023() {
        let (rise, tithi) = sunrise_and_tithi(2023, 7, 25);
        let info = masa_for_day(&eph(), rise, tithi, Reckoning::Amanta, &delhi()).unwrap();
        assert_eq!(info.masa, Masa::Shravana);
        assert!(info.leap);
        assert_eq!(info.label().to_string(), "Shravana (Adhik)");
    }

    #[test]
    fn purnimanta_display_rule() {
        let info = MasaInfo {
            masa: Masa::Ashwina,
            leap: false,
            start: LocalInstant::new(0.0, 5.5),
            end: LocalInstant::new(29.5, 5.5),
        };
        assert_eq!(purnimanta_display_masa(&info, Tithi::ShuklaDashami).masa, Masa::Ashwina);
        assert_eq!(purnimanta_display_masa(&info, Tithi::KrishnaDashami).masa, Masa::Kartika);
        let leap = MasaInfo { leap: true, ..info };
        let shown = purnimanta_display_masa(&leap, Tithi::KrishnaDashami);
        assert_eq!((shown.masa, shown.leap), (Masa::Ashwina, true));
    }

    #[test]
    fn years_in_pausha_2024() {
        let date = CivilDate::new(2024, 1, 15).unwrap();
        let s = samvat_for_day(date, Masa::Pausha, Tithi::ShuklaChaturthi);
        assert_eq!(s.kali, 5124);
        assert_eq!(s.shaka.number, 1945);
        assert_eq!(s.vikram.number, 2080);
        assert_eq!(s.gujarati.number, 2080);
        assert_eq!(s.vikram.samvatsara.name(), "Anala");
        assert_eq!(s.shaka.samvatsara, Samvatsara::for_year(1945, SHAKA_CYCLE_OFFSET));
    }

    #[test]
    fn gujarati_year_turns_in_kartika() {
        let before = samvat_for_day(
            CivilDate::new(2024, 10, 20).unwrap(),
            Masa::Ashwina,
            Tithi::KrishnaTritiya,
        );
        assert_eq!(before.vikram.number, 2081);
        assert_eq!(before.gujarati.number, 2080);
        assert_eq!(before.vikram.samvatsara.name(), "Pingala");

        let after = samvat_for_day(
            CivilDate::new(2024, 11, 3).unwrap(),
            Masa::Kartika,
            Tithi::ShuklaDwitiya,
        );
        assert_eq!(after.gujarati.number, 2081);
        assert_eq!(after.gujarati.number, after.vikram.number);
    }

    #[test]
    fn weekday_of_known_dates() {
        assert_eq!(weekday(CivilDate::new(2024, 1, 15).unwrap()), Vaar::Monday);
        assert_eq!(weekday(CivilDate::new(2000, 1, 1).unwrap()), Vaar::Saturday);
    }

    #[test]
    fn pravishte_after_makara_sankranti() {
        // Sun entered Makara at about 02:44 IST on 2024-01-15.
        let (rise, _) = sunrise_and_tithi(2024, 1, 15);
        assert_eq!(pravishte(&eph(), rise, &delhi()).unwrap(), 1);
        let (rise, _) = sunrise_and_tithi(2024, 1, 20);
        assert_eq!(pravishte(&eph(), rise, &delhi()).unwrap(), 6);
        assert_eq!(sun_sign(&eph(), rise).unwrap(), Rashi::Makara);
    }

    #[test]
    fn moon_sign_matches_longitude() {
        let (rise, _) = sunrise_and_tithi(2024, 3, 10);
        let lon = eph().sidereal_longitude(Body::Moon, rise).unwrap();
        assert_eq!(moon_sign(&eph(), rise).unwrap(), Rashi::from_longitude(lon));
    }
}
