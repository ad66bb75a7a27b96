//! Tithi, nakshatra, yoga and karana in force at sunrise, with end times.
//!
//! Each period is an equal slice of one angle: Moon − Sun for tithi and
//! karana, the Moon's longitude for nakshatra, Moon + Sun for yoga. The
//! angle's motion over the day after sunrise is sampled at quarter-day
//! offsets and the boundary instant is read off an inverse Lagrange
//! interpolant. Boundary targets are kept unwrapped (`n · span − angle`
//! with `n` allowed past the cycle length), so the 30→1 and 27→1 wraps need
//! no special casing.
//!
//! When the angle advances more than one period by the next sunrise, the
//! extra periods that begin and end inside the day are reported as skips.

use panchang_ephem::{Body, EphemerisProvider, Place};
use panchang_math::{RootError, inverse_lagrange, normalize_360};
use panchang_time::{Instant, LocalInstant};
use panchang_vedic_base::{
    KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, NAKSHATRA_SPAN_27, Nakshatra, TITHI_COUNT,
    TITHI_SEGMENT_DEG, Tithi, YOGA_SEGMENT_DEG, Yoga,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::PanchangError;

/// Day fractions after the anchor at which motion is sampled.
const SAMPLE_OFFSETS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Nakshatra interpolation also uses the anchor itself.
const SAMPLE_OFFSETS_WITH_ANCHOR: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Skipped periods reported beyond the one in force at sunrise.
const MAX_SKIPPED: u8 = 2;

/// An interpolated boundary further than this from its anchor is rejected.
const MAX_BOUNDARY_REACH_DAYS: f64 = 3.0;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The four periods of the panchang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodKind {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

/// All kinds in display order.
pub const ALL_PERIOD_KINDS: [PeriodKind; 4] = [
    PeriodKind::Tithi,
    PeriodKind::Nakshatra,
    PeriodKind::Yoga,
    PeriodKind::Karana,
];

impl PeriodKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tithi => "Tithi",
            Self::Nakshatra => "Nakshatra",
            Self::Yoga => "Yoga",
            Self::Karana => "Karana",
        }
    }

    /// Periods in one full turn of the angle.
    pub const fn count(self) -> u8 {
        match self {
            Self::Tithi => TITHI_COUNT,
            Self::Nakshatra | Self::Yoga => 27,
            Self::Karana => KARANA_COUNT,
        }
    }

    /// Width of one period in degrees.
    pub const fn span_deg(self) -> f64 {
        match self {
            Self::Tithi => TITHI_SEGMENT_DEG,
            Self::Nakshatra => NAKSHATRA_SPAN_27,
            Self::Yoga => YOGA_SEGMENT_DEG,
            Self::Karana => KARANA_SEGMENT_DEG,
        }
    }

    /// The angle this kind divides, in [0, 360), from sidereal longitudes.
    pub fn angle(self, sun_deg: f64, moon_deg: f64) -> f64 {
        match self {
            Self::Tithi | Self::Karana => normalize_360(moon_deg - sun_deg),
            Self::Nakshatra => normalize_360(moon_deg),
            Self::Yoga => normalize_360(moon_deg + sun_deg),
        }
    }

    /// 1-based number of the period containing `angle_deg`.
    pub fn number_at(self, angle_deg: f64) -> u8 {
        let slot = (normalize_360(angle_deg) / self.span_deg()).floor() as u8;
        slot.min(self.count() - 1) + 1
    }

    /// Reduce an unwrapped 1-based number into `1..=count`.
    fn wrap(self, unwrapped: u16) -> u8 {
        ((unwrapped - 1) % u16::from(self.count()) + 1) as u8
    }

    /// Forward motion of the angle given the Sun's and Moon's own forward
    /// motions, each in [0, 360).
    fn motion(self, sun_motion: f64, moon_motion: f64) -> f64 {
        match self {
            Self::Tithi | Self::Karana => moon_motion - sun_motion,
            Self::Nakshatra => moon_motion,
            Self::Yoga => moon_motion + sun_motion,
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One period and the instant it ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Period {
    pub kind: PeriodKind,
    /// 1-based position in the kind's cycle.
    pub number: u8,
    /// End of the period on the place's clock. A skipped period starts at
    /// the end of the one before it.
    pub end: LocalInstant,
}

impl Period {
    /// Traditional name of the period.
    pub fn name(&self) -> &'static str {
        match self.kind {
            PeriodKind::Tithi => Tithi::from_number(self.number).name(),
            PeriodKind::Nakshatra => Nakshatra::from_number(self.number).name(),
            PeriodKind::Yoga => Yoga::from_number(self.number).name(),
            PeriodKind::Karana => Karana::from_number(self.number).name(),
        }
    }
}

/// The period in force at sunrise and up to two that start and end before
/// the next sunrise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PeriodRun {
    Single(Period),
    WithSkip([Period; 2]),
    WithTwoSkips([Period; 3]),
}

impl PeriodRun {
    /// Every period in order of their end times.
    pub fn as_slice(&self) -> &[Period] {
        match self {
            Self::Single(p) => std::slice::from_ref(p),
            Self::WithSkip(ps) => ps,
            Self::WithTwoSkips(ps) => ps,
        }
    }

    /// The period in force at sunrise.
    pub fn primary(&self) -> &Period {
        &self.as_slice()[0]
    }

    /// Periods that began after sunrise and ended before the next.
    pub fn skipped(&self) -> &[Period] {
        &self.as_slice()[1..]
    }

    /// The last period of the run, whose end is the latest.
    pub fn last(&self) -> &Period {
        let all = self.as_slice();
        &all[all.len() - 1]
    }
}

/// Karanas of one civil day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KaranaDay {
    /// Karana in force at local midnight when it ends before sunrise.
    pub before_sunrise: Option<Period>,
    pub run: PeriodRun,
}

impl KaranaDay {
    /// All karanas of the day, midnight first.
    pub fn periods(&self) -> impl Iterator<Item = &Period> {
        self.before_sunrise.iter().chain(self.run.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Sampling
// ---------------------------------------------------------------------------

/// Longitudes at an anchor and their forward motion over the next day.
#[derive(Debug, Clone, Copy)]
struct DaySamples {
    anchor: Instant,
    sun: f64,
    moon: f64,
    /// (Sun, Moon) motion since the anchor at each of `SAMPLE_OFFSETS`,
    /// each in [0, 360).
    motion: [(f64, f64); 4],
}

impl DaySamples {
    fn collect<P>(provider: &P, anchor: Instant) -> Result<Self, PanchangError>
    where
        P: EphemerisProvider + ?Sized,
    {
        let sun = provider.sidereal_longitude(Body::Sun, anchor)?;
        let moon = provider.sidereal_longitude(Body::Moon, anchor)?;
        let mut motion = [(0.0, 0.0); 4];
        for (slot, dt) in motion.iter_mut().zip(SAMPLE_OFFSETS) {
            let t = anchor.add_days(dt);
            let s = provider.sidereal_longitude(Body::Sun, t)?;
            let m = provider.sidereal_longitude(Body::Moon, t)?;
            *slot = (normalize_360(s - sun), normalize_360(m - moon));
        }
        trace!(anchor = anchor.jd_ut(), sun, moon, ?motion, "day samples");
        Ok(Self {
            anchor,
            sun,
            moon,
            motion,
        })
    }

    fn angle(&self, kind: PeriodKind) -> f64 {
        kind.angle(self.sun, self.moon)
    }

    fn angle_one_day_later(&self, kind: PeriodKind) -> f64 {
        let (ds, dm) = self.motion[3];
        kind.angle(self.sun + ds, self.moon + dm)
    }

    /// Days after the anchor at which the angle has advanced `degrees`.
    fn days_to_advance(&self, kind: PeriodKind, degrees: f64) -> Result<f64, RootError> {
        let ys = self.motion.map(|(ds, dm)| kind.motion(ds, dm));
        let days = if kind == PeriodKind::Nakshatra {
            let with_anchor = [0.0, ys[0], ys[1], ys[2], ys[3]];
            inverse_lagrange(&SAMPLE_OFFSETS_WITH_ANCHOR, &with_anchor, degrees)?
        } else {
            inverse_lagrange(&SAMPLE_OFFSETS, &ys, degrees)?
        };
        if !days.is_finite() {
            return Err(RootError::NonFinite("period boundary"));
        }
        if days.abs() > MAX_BOUNDARY_REACH_DAYS {
            return Err(RootError::DegenerateSamples(
                "period boundary outside the sampled day",
            ));
        }
        Ok(days)
    }

    /// End of the period whose unwrapped number is `unwrapped`.
    fn boundary(
        &self,
        kind: PeriodKind,
        unwrapped: u16,
        utc_offset_hours: f64,
    ) -> Result<Period, PanchangError> {
        let degrees = f64::from(unwrapped) * kind.span_deg() - self.angle(kind);
        let end = self.anchor.add_days(self.days_to_advance(kind, degrees)?);
        let number = kind.wrap(unwrapped);
        debug!(
            kind = kind.name(),
            number,
            end_jd_ut = end.jd_ut(),
            "period boundary"
        );
        Ok(Period {
            kind,
            number,
            end: end.to_local(utc_offset_hours),
        })
    }

    fn run(&self, kind: PeriodKind, utc_offset_hours: f64) -> Result<PeriodRun, PanchangError> {
        let count = kind.count();
        let today = kind.number_at(self.angle(kind));
        let tomorrow = kind.number_at(self.angle_one_day_later(kind));
        let advanced = (tomorrow + count - today) % count;
        let skipped = advanced.saturating_sub(1).min(MAX_SKIPPED);

        let first = u16::from(today);
        let period = |k: u16| self.boundary(kind, first + k, utc_offset_hours);
        Ok(match skipped {
            0 => PeriodRun::Single(period(0)?),
            1 => PeriodRun::WithSkip([period(0)?, period(1)?]),
            _ => PeriodRun::WithTwoSkips([period(0)?, period(1)?, period(2)?]),
        })
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The `kind` period in force at `sunrise`, its end, and any periods
/// skipped before the next sunrise.
pub fn period_at_sunrise<P>(
    provider: &P,
    kind: PeriodKind,
    sunrise: Instant,
    place: &Place,
) -> Result<PeriodRun, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    DaySamples::collect(provider, sunrise)?.run(kind, place.utc_offset_hours)
}

/// Karanas of the civil day beginning at `midnight` (Universal instant of
/// local midnight) whose sunrise is `sunrise`.
///
/// A karana in force at midnight that ends before sunrise is reported in
/// `before_sunrise`, timed from samples anchored at midnight.
pub fn karana_for_day<P>(
    provider: &P,
    midnight: Instant,
    sunrise: Instant,
    place: &Place,
) -> Result<KaranaDay, PanchangError>
where
    P: EphemerisProvider + ?Sized,
{
    let kind = PeriodKind::Karana;
    let offset = place.utc_offset_hours;
    let run = DaySamples::collect(provider, sunrise)?.run(kind, offset)?;

    let at_midnight = kind.number_at(provider.lunar_phase(midnight)?);
    let before_sunrise = if at_midnight != run.primary().number {
        let samples = DaySamples::collect(provider, midnight)?;
        Some(samples.boundary(kind, u16::from(at_midnight), offset)?)
    } else {
        None
    };

    Ok(KaranaDay {
        before_sunrise,
        run,
    })
}
