//! Panchang assembly: one civil date at one place, all elements at once.
//!
//! The day runs from sunrise to the next sunrise. Every element is keyed
//! off that sunrise, so a day without one fails as a whole; there are no
//! partial results.

use panchang_ephem::{Body, EphemerisProvider, Place, RiseSetResult};
use panchang_time::{CivilDate, Instant, LocalInstant};
use panchang_vedic_base::{Kalam, Nakshatra, Tithi, Yoga, pada_from_longitude};
use tracing::{debug, warn};

use crate::calendar::{
    Reckoning, masa_for_day, moon_sign, pravishte, purnimanta_display_masa, samvat_for_day,
    sun_sign, weekday,
};
use crate::config::PanchangConfig;
use crate::error::PanchangError;
use crate::intervals::{SolarDay, abhijit, choghadiya, dur_muhurtam, kalam, varjyam_amrit};
use crate::panchang_types::{
    DayIntervals, MonthInfo, NakshatraInfo, PanchangResult, TithiInfo, YogaInfo,
};
use crate::period::{PeriodKind, karana_for_day, period_at_sunrise};

/// Moonrise is kept only this many hours past local midnight.
const MOONRISE_HORIZON_HOURS: f64 = 48.0;

/// Moonset is kept only this many hours past local midnight.
const MOONSET_HORIZON_HOURS: f64 = 36.0;

/// Panchang for the civil date containing `instant` on the place's clock.
pub fn compute<P>(
    provider: &P,
    instant: Instant,
    place: &Place,
    config: &PanchangConfig,
) -> Result<PanchangResult, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let date = instant.to_local(place.utc_offset_hours).civil_date();
    compute_for_date(provider, date, place, config)
}

/// Panchang for `date` at `place`.
pub fn compute_for_date<P>(
    provider: &P,
    date: CivilDate,
    place: &Place,
    config: &PanchangConfig,
) -> Result<PanchangResult, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    config.validate()?;
    let place = place.validated()?;
    let offset = place.utc_offset_hours;
    let midnight = date.midnight_universal(offset);

    // -----------------------------------------------------------------------
    // Sun and Moon events
    // -----------------------------------------------------------------------

    let sunrise = match provider.next_sunrise(midnight, &place)? {
        RiseSetResult::Event(t) if t.days_since(midnight) < 1.0 => t,
        _ => return Err(PanchangError::NoSunrise(date)),
    };
    let sunset = provider
        .next_sunset(sunrise, &place)?
        .event()
        .ok_or(PanchangError::NoSunset(date))?;
    let next_sunrise = provider
        .next_sunrise(sunset, &place)?
        .event()
        .ok_or(PanchangError::NoSunrise(date.succ()))?;
    debug!(
        %date,
        sunrise = sunrise.jd_ut(),
        sunset = sunset.jd_ut(),
        next_sunrise = next_sunrise.jd_ut(),
        "solar day"
    );

    let moonrise = moon_event_within(
        provider.next_moonrise(sunrise, &place)?,
        date,
        offset,
        MOONRISE_HORIZON_HOURS,
    )
    .filter(|t| {
        let clear = t.days_since(sunrise) >= config.moonrise_gap_days();
        if !clear {
            warn!(%date, moonrise = t.jd_ut(), "moonrise at sunrise suppressed");
        }
        clear
    });
    let moonset = moon_event_within(
        provider.next_moonset(sunrise, &place)?,
        date,
        offset,
        MOONSET_HORIZON_HOURS,
    )
    .filter(|t| {
        let before_next = *t < next_sunrise;
        if !before_next {
            warn!(%date, moonset = t.jd_ut(), "moonset after next sunrise suppressed");
        }
        before_next
    });

    // -----------------------------------------------------------------------
    // Periods
    // -----------------------------------------------------------------------

    let tithi_run = period_at_sunrise(provider, PeriodKind::Tithi, sunrise, &place)?;
    let nakshatra_run = period_at_sunrise(provider, PeriodKind::Nakshatra, sunrise, &place)?;
    let yoga_run = period_at_sunrise(provider, PeriodKind::Yoga, sunrise, &place)?;
    let karana = karana_for_day(provider, midnight, sunrise, &place)?;

    let tithi = Tithi::from_number(tithi_run.primary().number);
    let nakshatra = Nakshatra::from_number(nakshatra_run.primary().number);
    let yoga = Yoga::from_number(yoga_run.primary().number);
    let moon_at_sunrise = provider.sidereal_longitude(Body::Moon, sunrise)?;

    // -----------------------------------------------------------------------
    // Calendar
    // -----------------------------------------------------------------------

    let amanta = masa_for_day(provider, sunrise, tithi, Reckoning::Amanta, &place)?;
    let purnimanta = masa_for_day(provider, sunrise, tithi, Reckoning::Purnimanta, &place)?;
    let month = MonthInfo {
        purnimanta_display: purnimanta_display_masa(&amanta, tithi),
        amanta,
        purnimanta,
    };
    let samvat = samvat_for_day(date, amanta.masa, tithi);
    let vaar = weekday(date);

    // -----------------------------------------------------------------------
    // Intervals
    // -----------------------------------------------------------------------

    let day = SolarDay {
        sunrise: sunrise.to_local(offset),
        sunset: sunset.to_local(offset),
        next_sunrise: next_sunrise.to_local(offset),
        vaar,
    };
    let windows = varjyam_amrit(provider, &day, nakshatra, config)?;
    let intervals = DayIntervals {
        rahu_kalam: kalam(&day, Kalam::Rahu),
        gulika_kalam: kalam(&day, Kalam::Gulika),
        yamaganda: kalam(&day, Kalam::Yamaganda),
        abhijit: abhijit(&day),
        dur_muhurtam: dur_muhurtam(&day),
        varjyam: windows.varjyam,
        amrit_kalam: windows.amrit_kalam,
        nakshatra_spans: windows.spans,
        choghadiya: choghadiya(&day),
    };

    Ok(PanchangResult {
        date,
        place,
        sunrise: day.sunrise,
        sunset: day.sunset,
        next_sunrise: day.next_sunrise,
        moonrise: moonrise.map(|t| t.to_local(offset)),
        moonset: moonset.map(|t| t.to_local(offset)),
        vaar,
        tithi: TithiInfo {
            tithi,
            paksha: tithi.paksha(),
            tithi_in_paksha: tithi.tithi_in_paksha(),
            run: tithi_run,
        },
        nakshatra: NakshatraInfo {
            nakshatra,
            pada: pada_from_longitude(moon_at_sunrise),
            run: nakshatra_run,
        },
        yoga: YogaInfo {
            yoga,
            nature: yoga.nature(),
            run: yoga_run,
        },
        karana,
        month,
        samvat,
        sun_sign: sun_sign(provider, sunrise)?,
        moon_sign: moon_sign(provider, sunrise)?,
        pravishte: pravishte(provider, sunrise, &place)?,
        intervals,
    })
}

/// A lunar rise or set, if it happens within `horizon_hours` of the local
/// midnight starting `date`.
fn moon_event_within(
    result: RiseSetResult,
    date: CivilDate,
    utc_offset_hours: f64,
    horizon_hours: f64,
) -> Option<Instant> {
    let t = result.event()?;
    let hours = LocalInstant::hours_into_day(t.to_local(utc_offset_hours), date);
    (0.0..horizon_hours).contains(&hours).then_some(t)
}
