use panchang_time::{CivilDate, Instant, calendar_to_jd, jd_to_calendar};
use proptest::prelude::*;

proptest! {
    #[test]
    fn calendar_round_trip(jd in 2_300_000.0f64..2_600_000.0) {
        let (y, m, d) = jd_to_calendar(jd);
        let back = calendar_to_jd(y, m, d);
        prop_assert!((back - jd).abs() < 1e-6, "jd={jd} back={back}");
    }

    #[test]
    fn weekday_cycles(jdn in 2_400_000i64..2_500_000) {
        let d = CivilDate::containing(jdn as f64);
        prop_assert_eq!(d.succ().weekday_index(), (d.weekday_index() + 1) % 7);
        prop_assert_eq!(d.julian_day_number(), jdn);
    }

    #[test]
    fn local_date_contains_instant(jd in 2_440_000.0f64..2_480_000.0, offset in -12.0f64..14.0) {
        let local = Instant::from_jd_ut(jd).to_local(offset);
        let hours = local.hours_into_day(local.civil_date());
        prop_assert!((0.0..24.0).contains(&hours), "hours={hours}");
    }
}
