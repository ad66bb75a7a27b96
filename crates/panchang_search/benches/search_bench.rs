use criterion::{Criterion, black_box, criterion_group, criterion_main};
use panchang_ephem::{AnalyticEphemeris, AyanamshaSystem, EphemerisProvider, Place};
use panchang_search::{PanchangConfig, PeriodKind, compute_for_date, period_at_sunrise};
use panchang_time::CivilDate;

fn delhi() -> Place {
    Place::new(28.6139, 77.2090, 5.5).expect("valid place")
}

fn period_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new(AyanamshaSystem::Lahiri);
    let place = delhi();
    let date = CivilDate::new(2024, 3, 20).expect("valid date");
    let sunrise = eph
        .next_sunrise(date.midnight_universal(place.utc_offset_hours), &place)
        .expect("rise/set should succeed")
        .event()
        .expect("sun should rise");

    let mut group = c.benchmark_group("search_period");
    for kind in [PeriodKind::Tithi, PeriodKind::Nakshatra] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                period_at_sunrise(black_box(&eph), kind, black_box(sunrise), &place)
                    .expect("period should resolve")
            })
        });
    }
    group.finish();
}

fn compute_bench(c: &mut Criterion) {
    let config = PanchangConfig::default();
    let eph = config.analytic_provider();
    let place = delhi();
    let date = CivilDate::new(2024, 3, 20).expect("valid date");

    let mut group = c.benchmark_group("search_panchang");
    group.sample_size(20);
    group.bench_function("compute_for_date", |b| {
        b.iter(|| {
            compute_for_date(black_box(&eph), black_box(date), &place, &config)
                .expect("panchang should compute")
        })
    });
    group.finish();
}

criterion_group!(benches, period_bench, compute_bench);
criterion_main!(benches);
