//! Varjyam and amrit kalam offset tables.
//!
//! Offsets are in "ghati hours" of a nominal 24-hour nakshatra: a window
//! starts `hours / 24` of the way through the nakshatra's actual duration
//! and lasts `1.6 / 24` of it (1/15).

use crate::nakshatra::Nakshatra;

/// Nominal nakshatra length the tables are scaled against, in hours.
pub const NOMINAL_NAKSHATRA_HOURS: f64 = 24.0;

/// Window length on the nominal scale, in hours.
pub const WINDOW_HOURS: f64 = 1.6;

/// Varjyam start offsets, Ashwini first.
pub const VARJYAM_START_HOURS: [f64; 27] = [
    20.0, 9.6, 12.0, 16.0, 5.6, 8.4, 12.0, 8.0, 12.8, 12.0, 8.0, 7.2, 8.4, 8.0, 5.6, 5.6, 4.0,
    5.6, 8.0, 9.6, 8.0, 4.0, 4.0, 7.2, 6.4, 9.6, 12.0,
];

/// Moola's second varjyam window.
pub const MOOLA_SECOND_VARJYAM_HOURS: f64 = 22.4;

/// Amrit kalam start offsets, Ashwini first.
pub const AMRIT_KALAM_START_HOURS: [f64; 27] = [
    16.8, 19.2, 21.6, 20.8, 15.2, 14.0, 21.6, 17.6, 22.4, 21.6, 17.6, 16.8, 18.0, 17.6, 15.2,
    15.2, 13.6, 15.2, 17.6, 19.2, 17.6, 13.6, 13.6, 16.8, 16.0, 19.2, 21.6,
];

/// Varjyam start offsets for `nak`; Moola has a second window when
/// `double_moola` is set.
pub fn varjyam_start_hours(nak: Nakshatra, double_moola: bool) -> impl Iterator<Item = f64> {
    let second = (double_moola && nak == Nakshatra::Moola).then_some(MOOLA_SECOND_VARJYAM_HOURS);
    std::iter::once(VARJYAM_START_HOURS[nak.index() as usize]).chain(second)
}

pub fn amrit_kalam_start_hours(nak: Nakshatra) -> f64 {
    AMRIT_KALAM_START_HOURS[nak.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_fit_inside_nominal_nakshatra() {
        for h in VARJYAM_START_HOURS.iter().chain(&AMRIT_KALAM_START_HOURS) {
            assert!(h + WINDOW_HOURS <= NOMINAL_NAKSHATRA_HOURS, "offset {h}");
        }
        assert!(MOOLA_SECOND_VARJYAM_HOURS + WINDOW_HOURS <= NOMINAL_NAKSHATRA_HOURS);
    }

    #[test]
    fn moola_has_two_disjoint_varjyams() {
        let v: Vec<f64> = varjyam_start_hours(Nakshatra::Moola, true).collect();
        assert_eq!(v, vec![8.0, 22.4]);
        assert!(v[0] + WINDOW_HOURS < v[1]);
        assert_eq!(varjyam_start_hours(Nakshatra::Moola, false).count(), 1);
        assert_eq!(varjyam_start_hours(Nakshatra::Revati, true).count(), 1);
    }

    #[test]
    fn lookups() {
        assert!((amrit_kalam_start_hours(Nakshatra::Ashlesha) - 22.4).abs() < 1e-12);
        let a: Vec<f64> = varjyam_start_hours(Nakshatra::Ashwini, true).collect();
        assert_eq!(a, vec![20.0]);
    }
}
