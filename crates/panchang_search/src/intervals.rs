//! Time windows within a panchang day.
//!
//! Kalams, abhijit, dur muhurtam and choghadiya are fixed fractions of the
//! sunrise-to-sunset day or the sunset-to-sunrise night. Varjyam and amrit
//! kalam are fractions of the governing nakshatra's actual duration, so
//! they need that nakshatra's start and end found first.

use panchang_ephem::{Body, EphemerisProvider};
use panchang_math::{normalize_180, normalize_360, try_bisection_search};
use panchang_time::{Instant, LocalInstant};
use panchang_vedic_base::{
    ABHIJIT_EXCLUDED_WEEKDAY, ABHIJIT_MUHURTA_INDEX, CHOGHADIYA_SLICES, Choghadiya,
    ChoghadiyaQuality, DAY_CHOGHADIYA, DUR_MUHURTAM_LENGTH_TWELFTHS, KALAM_FRACTION, Kalam,
    MUHURTAS_PER_SPAN, MuhurtaSpan, NAKSHATRA_SPAN_27, NIGHT_CHOGHADIYA,
    NOMINAL_NAKSHATRA_HOURS, Nakshatra, Vaar, WINDOW_HOURS, amrit_kalam_start_hours,
    dur_muhurtam_slots, varjyam_start_hours,
};
use serde::Serialize;
use tracing::debug;

use crate::config::PanchangConfig;
use crate::error::PanchangError;

/// Bracket for the start of the nakshatra in force at sunrise, in days
/// relative to sunrise.
const NAKSHATRA_START_BRACKET: (f64, f64) = (-1.5, 0.2);

/// Bracket for its end, in days after sunrise.
const NAKSHATRA_END_REACH_DAYS: f64 = 2.0;

/// Bracket for the end of the following nakshatra, in days after its start.
const NEXT_NAKSHATRA_REACH_DAYS: f64 = 1.5;

/// Rounding slack for a window that ends exactly on its nakshatra's end.
const CONTAINMENT_SLACK_DAYS: f64 = 1e-8;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A named window on the place's clock, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval {
    pub name: &'static str,
    pub start: LocalInstant,
    pub end: LocalInstant,
}

impl Interval {
    pub fn duration_days(&self) -> f64 {
        self.end.jd_local() - self.start.jd_local()
    }

    /// Whether `[start, end)` lies within `[from, to)`.
    pub fn lies_within(&self, from: LocalInstant, to: LocalInstant) -> bool {
        self.start >= from && self.end <= to
    }
}

/// The instants a panchang day is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarDay {
    pub sunrise: LocalInstant,
    pub sunset: LocalInstant,
    pub next_sunrise: LocalInstant,
    pub vaar: Vaar,
}

impl SolarDay {
    /// Sunrise to sunset, in days.
    pub fn day_length(&self) -> f64 {
        self.sunset.jd_local() - self.sunrise.jd_local()
    }

    /// Sunset to the next sunrise, in days.
    pub fn night_length(&self) -> f64 {
        self.next_sunrise.jd_local() - self.sunset.jd_local()
    }

    fn weekday(&self) -> u8 {
        self.vaar.index()
    }
}

/// One nakshatra's actual extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraSpan {
    pub nakshatra: Nakshatra,
    pub start: LocalInstant,
    pub end: LocalInstant,
}

/// Varjyam and amrit kalam windows falling in one panchang day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NakshatraWindows {
    /// Nakshatras the windows were measured against: the one in force at
    /// sunrise, and its successor when that begins before the next sunrise.
    pub spans: Vec<NakshatraSpan>,
    pub varjyam: Vec<Interval>,
    pub amrit_kalam: Vec<Interval>,
}

/// One eighth of the day or of the night.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChoghadiyaSlot {
    pub choghadiya: Choghadiya,
    pub quality: ChoghadiyaQuality,
    pub span: MuhurtaSpan,
    pub start: LocalInstant,
    pub end: LocalInstant,
}

// ---------------------------------------------------------------------------
// Day fractions
// ---------------------------------------------------------------------------

/// Rahu kalam, gulika kalam or yamaganda: one eighth of the day span.
pub fn kalam(day: &SolarDay, which: Kalam) -> Interval {
    let length = day.day_length();
    let start = day
        .sunrise
        .add_days(length * which.start_fraction(day.weekday()));
    Interval {
        name: which.name(),
        start,
        end: start.add_days(length * KALAM_FRACTION),
    }
}

/// The 8th of 15 day muhurtas. Not observed on Wednesday.
pub fn abhijit(day: &SolarDay) -> Option<Interval> {
    if day.weekday() == ABHIJIT_EXCLUDED_WEEKDAY {
        return None;
    }
    let muhurta = day.day_length() / MUHURTAS_PER_SPAN;
    let start = day
        .sunrise
        .add_days(muhurta * f64::from(ABHIJIT_MUHURTA_INDEX));
    Some(Interval {
        name: "Abhijit",
        start,
        end: start.add_days(muhurta),
    })
}

/// The weekday's one or two dur muhurtam slices.
///
/// A slice that starts after sunset is snapped onto the night's own
/// muhurta grid (night span / 15) and lasts one night muhurta.
pub fn dur_muhurtam(day: &SolarDay) -> Vec<Interval> {
    let day_length = day.day_length();
    let night_length = day.night_length();
    dur_muhurtam_slots(day.weekday())
        .map(|slot| {
            let (base, span) = match slot.span {
                MuhurtaSpan::Day => (day.sunrise, day_length),
                MuhurtaSpan::Night => (day.sunset, night_length),
            };
            let start = base.add_days(span * slot.offset_twelfths / 12.0);
            let (start, end) = if start >= day.sunset {
                let muhurta = night_length / MUHURTAS_PER_SPAN;
                let index = ((start.jd_local() - day.sunset.jd_local()) / muhurta).round();
                let start = day.sunset.add_days(index * muhurta);
                (start, start.add_days(muhurta))
            } else {
                let length = day_length * DUR_MUHURTAM_LENGTH_TWELFTHS / 12.0;
                (start, start.add_days(length))
            };
            Interval {
                name: "Dur Muhurtam",
                start,
                end,
            }
        })
        .collect()
}

/// Eight day slices from sunrise and eight night slices from sunset.
pub fn choghadiya(day: &SolarDay) -> Vec<ChoghadiyaSlot> {
    let wd = usize::from(day.weekday());
    let halves = [
        (MuhurtaSpan::Day, day.sunrise, day.day_length(), &DAY_CHOGHADIYA[wd]),
        (MuhurtaSpan::Night, day.sunset, day.night_length(), &NIGHT_CHOGHADIYA[wd]),
    ];
    halves
        .into_iter()
        .flat_map(|(span, base, length, sequence)| {
            let slice = length / CHOGHADIYA_SLICES as f64;
            sequence.iter().enumerate().map(move |(i, &c)| ChoghadiyaSlot {
                choghadiya: c,
                quality: c.quality(),
                span,
                start: base.add_days(slice * i as f64),
                end: base.add_days(slice * (i + 1) as f64),
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Varjyam and amrit kalam
// ---------------------------------------------------------------------------

/// Instant in `[lo, hi]` at which the Moon reaches `target_deg`.
///
/// Searches the signed deviation from the target so the 360°/0° seam never
/// reads as a sign change.
fn moon_reaches<P>(
    provider: &P,
    target_deg: f64,
    lo: Instant,
    hi: Instant,
) -> Result<Instant, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let jd = try_bisection_search(
        |jd| {
            let moon = provider.sidereal_longitude(Body::Moon, Instant::from_jd_ut(jd))?;
            Ok::<f64, PanchangError>(normalize_180(normalize_360(moon - target_deg)))
        },
        lo.jd_ut(),
        hi.jd_ut(),
    )?;
    Ok(Instant::from_jd_ut(jd))
}

fn scaled_window(name: &'static str, span: &NakshatraSpan, start_hours: f64) -> Interval {
    let duration = span.end.jd_local() - span.start.jd_local();
    let start = span
        .start
        .add_days(duration * start_hours / NOMINAL_NAKSHATRA_HOURS);
    Interval {
        name,
        start,
        end: start.add_days(duration * WINDOW_HOURS / NOMINAL_NAKSHATRA_HOURS),
    }
}

/// Varjyam and amrit kalam for `current`, the nakshatra in force at
/// sunrise, and for its successor when `current` ends before the next
/// sunrise.
///
/// A window is kept only when it starts in `[sunrise, next_sunrise)`, ends
/// by both the nakshatra's end and the next sunrise, and is at least
/// `config.min_window_minutes` long. A window that starts before the next
/// sunrise but runs past it is left out, not clipped.
pub fn varjyam_amrit<P>(
    provider: &P,
    day: &SolarDay,
    current: Nakshatra,
    config: &PanchangConfig,
) -> Result<NakshatraWindows, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let offset = day.sunrise.utc_offset_hours();
    let sunrise = day.sunrise.to_universal();
    let next_sunrise = day.next_sunrise.to_universal();

    let n = f64::from(current.index());
    let start = moon_reaches(
        provider,
        n * NAKSHATRA_SPAN_27,
        sunrise.add_days(NAKSHATRA_START_BRACKET.0),
        sunrise.add_days(NAKSHATRA_START_BRACKET.1),
    )?;
    let end = moon_reaches(
        provider,
        (n + 1.0) * NAKSHATRA_SPAN_27,
        sunrise,
        sunrise.add_days(NAKSHATRA_END_REACH_DAYS),
    )?;
    let mut spans = vec![NakshatraSpan {
        nakshatra: current,
        start: start.to_local(offset),
        end: end.to_local(offset),
    }];

    if end < next_sunrise {
        let following = current.next();
        let following_end = moon_reaches(
            provider,
            (n + 2.0) * NAKSHATRA_SPAN_27,
            end,
            end.add_days(NEXT_NAKSHATRA_REACH_DAYS),
        )?;
        spans.push(NakshatraSpan {
            nakshatra: following,
            start: end.to_local(offset),
            end: following_end.to_local(offset),
        });
    }
    for s in &spans {
        debug!(
            nakshatra = s.nakshatra.name(),
            start = s.start.jd_local(),
            end = s.end.jd_local(),
            "nakshatra span"
        );
    }

    let min_length = config.min_window_days();
    let keep = |w: &Interval, span: &NakshatraSpan| {
        w.start >= day.sunrise
            && w.start < day.next_sunrise
            && w.duration_days() >= min_length
            && w.end.jd_local() <= span.end.jd_local() + CONTAINMENT_SLACK_DAYS
            && w.end <= day.next_sunrise
    };

    let double_moola = config.varjyam_tradition.double_moola();
    let mut varjyam = Vec::new();
    let mut amrit_kalam = Vec::new();
    for span in &spans {
        for hours in varjyam_start_hours(span.nakshatra, double_moola) {
            let w = scaled_window("Varjyam", span, hours);
            if keep(&w, span) {
                varjyam.push(w);
            }
        }
        let w = scaled_window("Amrit Kalam", span, amrit_kalam_start_hours(span.nakshatra));
        if keep(&w, span) {
            amrit_kalam.push(w);
        }
    }

    Ok(NakshatraWindows {
        spans,
        varjyam,
        amrit_kalam,
    })
}
