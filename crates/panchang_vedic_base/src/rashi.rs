//! Rashi (zodiac sign) identification.
//!
//! The sidereal ecliptic is divided into 12 equal signs of 30 degrees each,
//! starting from Mesha (Aries) at 0 degrees.

use serde::{Deserialize, Serialize};

/// Span of one rashi in degrees.
pub const RASHI_SPAN_DEG: f64 = 30.0;

/// The 12 rashis (zodiac signs) starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name of the rashi.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrishchika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name of the rashi.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrishchika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number, 1..=12.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi for a 1-based number. Numbers outside 1..=12 wrap.
    pub const fn from_number(n: u8) -> Self {
        ALL_RASHIS[(n as usize + 11) % 12]
    }

    /// Rashi containing a sidereal longitude in degrees.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let lon = sidereal_lon_deg.rem_euclid(360.0);
        ALL_RASHIS[((lon / RASHI_SPAN_DEG).floor() as usize).min(11)]
    }

    /// Sidereal longitude at which the rashi begins, in degrees.
    pub fn start_deg(self) -> f64 {
        f64::from(self.index()) * RASHI_SPAN_DEG
    }

    /// All 12 rashis in order.
    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_rashis_count() {
        assert_eq!(ALL_RASHIS.len(), 12);
        for (i, r) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(r.index() as usize, i);
        }
    }

    #[test]
    fn rashi_from_longitude_boundaries() {
        assert_eq!(Rashi::from_longitude(0.0), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(29.999), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(30.0), Rashi::Vrishabha);
        assert_eq!(Rashi::from_longitude(270.5), Rashi::Makara);
        assert_eq!(Rashi::from_longitude(360.0), Rashi::Mesha);
        assert_eq!(Rashi::from_longitude(-1.0), Rashi::Meena);
    }

    #[test]
    fn numbering_and_start() {
        assert_eq!(Rashi::from_number(12), Rashi::Meena);
        assert_eq!(Rashi::from_number(13), Rashi::Mesha);
        assert!((Rashi::Makara.start_deg() - 270.0).abs() < 1e-12);
    }
}
