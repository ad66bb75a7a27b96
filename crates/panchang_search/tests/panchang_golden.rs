//! End-to-end panchang checks at New Delhi with the analytic provider.

use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem, Place};
use panchang_search::{
    PanchangConfig, PanchangResult, Period, PeriodRun, compute, compute_for_date,
};
use panchang_time::{CivilDate, Instant};
use panchang_vedic_base::{Masa, Paksha, Rashi, Tithi, Vaar};

fn delhi() -> Place {
    Place::new(28.6139, 77.2090, 5.5).unwrap()
}

fn provider() -> AnalyticEphemeris {
    AnalyticEphemeris::new(AyanamshaSystem::Lahiri)
}

fn day(y: i32, m: u32, d: u32) -> PanchangResult {
    let date = CivilDate::new(y, m, d).unwrap();
    compute_for_date(&provider(), date, &delhi(), &PanchangConfig::default()).unwrap()
}

fn ends_increase(periods: &[Period]) -> bool {
    periods
        .windows(2)
        .all(|w| w[1].end.jd_local() > w[0].end.jd_local())
}

#[test]
fn makar_sankranti_2024() {
    let r = day(2024, 1, 15);
    assert_eq!(r.vaar, Vaar::Monday);
    assert_eq!(r.tithi.paksha, Paksha::Shukla);
    assert_eq!(r.month.amanta.masa, Masa::Pausha);
    assert!(!r.month.amanta.leap);
    assert_eq!(r.month.purnimanta.masa, Masa::Pausha);
    assert_eq!(r.sun_sign, Rashi::Makara);
    assert_eq!(r.pravishte, 1);
    assert_eq!(r.samvat.kali, 5124);
    assert_eq!(r.samvat.shaka.number, 1945);
    assert_eq!(r.samvat.vikram.number, 2080);
}

#[test]
fn solar_day_spans_season() {
    for (m, d) in [(1, 15), (3, 20), (6, 21), (9, 23), (12, 21)] {
        let r = day(2024, m, d);
        let hours = (r.sunset.jd_local() - r.sunrise.jd_local()) * 24.0;
        assert!((9.0..15.0).contains(&hours), "2024-{m}-{d}: day of {hours} h");
        let clock = r.sunrise.hours_into_day(r.date);
        assert!((5.0..8.0).contains(&clock), "2024-{m}-{d}: sunrise at {clock} h");
        let full = (r.next_sunrise.jd_local() - r.sunrise.jd_local()) * 24.0;
        assert!((23.9..24.1).contains(&full), "2024-{m}-{d}: day of {full} h");
    }
}

#[test]
fn weekday_matches_julian_day_number() {
    for d in 1..=14 {
        let r = day(2024, 2, d);
        let expected = ((r.date.julian_day_number() + 1) % 7) as u8;
        assert_eq!(r.vaar.index(), expected, "2024-02-{d}");
    }
}

#[test]
fn year_numbers_non_negative() {
    for (y, m) in [(2000, 6), (2024, 4), (2035, 11)] {
        let r = day(y, m, 10);
        assert!(r.samvat.kali > 0);
        assert!(r.samvat.shaka.number >= 0);
        assert!(r.samvat.vikram.number >= 0);
        assert!(r.samvat.gujarati.number >= 0);
    }
}

#[test]
fn tithi_run_closes_within_day() {
    for d in 1..=10 {
        let r = day(2024, 5, d);
        let sunrise = r.sunrise.jd_local();
        let next = r.next_sunrise.jd_local();
        let run = r.tithi.run.as_slice();
        assert!(run[0].end.jd_local() > sunrise, "2024-05-{d}");
        assert!(ends_increase(run), "2024-05-{d}");
        for skipped in r.tithi.run.skipped() {
            assert!(skipped.end.jd_local() < next, "2024-05-{d}");
        }
        for p in &run[..run.len() - 1] {
            assert!(p.end.jd_local() < next, "2024-05-{d}: {} outlives the day", p.name());
        }
    }
}

#[test]
fn amavasya_ends_at_new_moon() {
    let r = day(2024, 1, 11);
    assert_eq!(r.tithi.tithi, Tithi::Amavasya);
    let end = r.tithi.run.primary().end.to_universal().jd_ut();
    assert!((end - 2_460_320.998).abs() < 0.02, "new moon at {end}");

    let next = day(2024, 1, 12);
    assert_eq!(next.tithi.tithi, Tithi::ShuklaPratipada);
    assert!(next.tithi.run.primary().end.jd_local() > r.tithi.run.primary().end.jd_local());
}

/// Periods of consecutive days in order, each period once.
fn chained(days: &[PanchangResult], run: impl Fn(&PanchangResult) -> &[Period]) -> Vec<Period> {
    let mut out: Vec<Period> = Vec::new();
    for r in days {
        for p in run(r) {
            if out.last().is_none_or(|last| last.number != p.number) {
                out.push(*p);
            }
        }
    }
    out
}

#[test]
fn cycles_close_across_days() {
    let start = CivilDate::new(2024, 1, 1).unwrap();
    let days: Vec<_> = std::iter::successors(Some(start), |d| Some(d.succ()))
        .take(60)
        .map(|d| {
            compute_for_date(&provider(), d, &delhi(), &PanchangConfig::default()).unwrap()
        })
        .collect();

    let sequences = [
        (30, chained(&days, |r| r.tithi.run.as_slice())),
        (27, chained(&days, |r| r.nakshatra.run.as_slice())),
        (27, chained(&days, |r| r.yoga.run.as_slice())),
    ];
    for (count, periods) in sequences {
        let mut wrapped = false;
        for w in periods.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            let (from, to) = (a.name(), b.name());
            assert_eq!(b.number, a.number % count + 1, "{to} followed {from}");
            assert!(b.end.jd_local() > a.end.jd_local(), "{to} ends before {from}");
            wrapped |= b.number == 1;
        }
        assert!(wrapped, "no wrap in 60 days of a {count}-cycle");
    }
}

#[test]
fn skipped_nakshatra_ends_before_next_sunrise() {
    let start = CivilDate::new(2024, 1, 1).unwrap();
    let mut found = 0;
    for date in std::iter::successors(Some(start), |d| Some(d.succ())).take(366) {
        let r = compute_for_date(&provider(), date, &delhi(), &PanchangConfig::default()).unwrap();
        let PeriodRun::WithSkip([primary, skipped]) = r.nakshatra.run else {
            continue;
        };
        found += 1;
        assert_eq!(r.nakshatra.run.skipped().len(), 1, "{date}");
        assert_eq!(skipped.number, primary.number % 27 + 1, "{date}");
        assert!(primary.end.jd_local() < skipped.end.jd_local(), "{date}");
        assert!(skipped.end.jd_local() < r.next_sunrise.jd_local(), "{date}");
        assert!(primary.end.jd_local() > r.sunrise.jd_local(), "{date}");
    }
    assert!(found > 0, "no skipped nakshatra at New Delhi in 2024");
}

#[test]
fn karana_day_orders_midnight_first() {
    for d in 1..=10 {
        let r = day(2024, 8, d);
        let periods: Vec<_> = r.karana.periods().copied().collect();
        assert!(ends_increase(&periods), "2024-08-{d}");
        if let Some(early) = r.karana.before_sunrise {
            assert!(early.end.jd_local() <= r.sunrise.jd_local() + 1e-6);
        }
    }
}

#[test]
fn windows_stay_inside_day() {
    for d in 1..=15 {
        let r = day(2024, 9, d);
        let iv = &r.intervals;
        let from = r.sunrise.jd_local();
        let to = r.next_sunrise.jd_local();
        for w in iv.varjyam.iter().chain(&iv.amrit_kalam) {
            assert!(w.start.jd_local() >= from && w.end.jd_local() <= to + 1e-8);
            let within_span = iv.nakshatra_spans.iter().any(|s| {
                w.start.jd_local() >= s.start.jd_local() - 1e-8
                    && w.end.jd_local() <= s.end.jd_local() + 1e-8
            });
            assert!(within_span, "2024-09-{d}: {} outside its nakshatra", w.name);
            assert!(w.duration_days() * 24.0 * 60.0 >= 5.0);
        }
        for k in [&iv.rahu_kalam, &iv.gulika_kalam, &iv.yamaganda] {
            assert!(k.start >= r.sunrise, "2024-09-{d}: {}", k.name);
            assert!(k.end.jd_local() <= r.sunset.jd_local() + 1e-8, "2024-09-{d}: {}", k.name);
        }
    }
}

#[test]
fn moon_events_belong_to_day() {
    for d in 1..=30 {
        let r = day(2024, 4, d);
        if let Some(rise) = r.moonrise {
            let h = rise.hours_into_day(r.date);
            assert!((0.0..48.0).contains(&h));
            assert!(rise.jd_local() > r.sunrise.jd_local());
        }
        if let Some(set) = r.moonset {
            assert!(set < r.next_sunrise);
        }
    }
}

#[test]
fn dur_muhurtam_night_slice_uses_night_span() {
    // Tuesday near the June solstice at 55.75°N: nights are under seven hours.
    let moscow = Place::new(55.7558, 37.6173, 3.0).unwrap();
    let date = CivilDate::new(2024, 6, 18).unwrap();
    let r = compute_for_date(&provider(), date, &moscow, &PanchangConfig::default()).unwrap();
    assert_eq!(r.vaar, Vaar::Tuesday);

    let slices = &r.intervals.dur_muhurtam;
    assert_eq!(slices.len(), 2);
    let night = r.next_sunrise.jd_local() - r.sunset.jd_local();
    let day_span = r.sunset.jd_local() - r.sunrise.jd_local();
    let late = &slices[1];
    assert!(late.start >= r.sunset);
    assert!((late.duration_days() - night / 15.0).abs() < 1e-9);
    assert!((late.duration_days() - day_span / 15.0).abs() > 10.0 / (24.0 * 60.0));
}

#[test]
fn instant_and_date_agree() {
    let date = CivilDate::new(2024, 3, 8).unwrap();
    // 2024-03-08 12:00 IST.
    let noon = Instant::from_jd_ut(date.jd_midnight() + (12.0 - 5.5) / 24.0);
    let config = PanchangConfig::default();
    let a = compute(&provider(), noon, &delhi(), &config).unwrap();
    let b = compute_for_date(&provider(), date, &delhi(), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn repeated_calls_are_identical() {
    let a = day(2024, 10, 31);
    let b = day(2024, 10, 31);
    assert_eq!(a, b);
    let ja = serde_json::to_string(&a).unwrap();
    let jb = serde_json::to_string(&b).unwrap();
    assert_eq!(ja, jb);
}
