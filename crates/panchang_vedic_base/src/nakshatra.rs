//! Nakshatra (lunar mansion) names and pada arithmetic.
//!
//! The sidereal ecliptic is divided into 27 equal nakshatras of 13 deg 20'
//! (13.3333... deg) each, starting from Ashwini at 0 deg. Each nakshatra
//! has 4 padas (quarters) of 3 deg 20'.

use serde::{Deserialize, Serialize};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Moola,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Moola,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Vimshottari lords, repeating every nine nakshatras from Ashwini.
const LORDS: [&str; 9] = [
    "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
];

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Moola => "Moola",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number, 1..=27.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Nakshatra for a 1-based number. Numbers outside 1..=27 wrap.
    pub const fn from_number(n: u8) -> Self {
        ALL_NAKSHATRAS_27[(n as usize + 26) % 27]
    }

    /// Nakshatra containing a sidereal longitude in degrees.
    pub fn from_longitude(sidereal_lon_deg: f64) -> Self {
        let lon = sidereal_lon_deg.rem_euclid(360.0);
        let idx = ((lon / NAKSHATRA_SPAN_27).floor() as usize).min(26);
        ALL_NAKSHATRAS_27[idx]
    }

    /// Dasha lord of the nakshatra.
    pub const fn lord(self) -> &'static str {
        LORDS[(self.index() % 9) as usize]
    }

    /// The following nakshatra, Revati wrapping to Ashwini.
    pub const fn next(self) -> Self {
        Self::from_number(self.number() + 1)
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Pada (1..=4) of a sidereal longitude within its nakshatra.
pub fn pada_from_longitude(sidereal_lon_deg: f64) -> u8 {
    let lon = sidereal_lon_deg.rem_euclid(360.0);
    let offset = lon % NAKSHATRA_SPAN_27;
    ((offset / PADA_SPAN).floor() as u8).min(3) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_value() {
        assert!((NAKSHATRA_SPAN_27 - 13.333_333_333).abs() < 1e-6);
        assert!((PADA_SPAN * 4.0 - NAKSHATRA_SPAN_27).abs() < 1e-12);
    }

    #[test]
    fn longitude_boundaries() {
        assert_eq!(Nakshatra::from_longitude(0.0), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_longitude(13.3), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_longitude(13.34), Nakshatra::Bharani);
        assert_eq!(Nakshatra::from_longitude(245.0), Nakshatra::Moola);
        assert_eq!(Nakshatra::from_longitude(359.99), Nakshatra::Revati);
        assert_eq!(Nakshatra::from_longitude(-0.01), Nakshatra::Revati);
    }

    #[test]
    fn padas() {
        assert_eq!(pada_from_longitude(0.0), 1);
        assert_eq!(pada_from_longitude(3.4), 2);
        assert_eq!(pada_from_longitude(13.3), 4);
        assert_eq!(pada_from_longitude(13.34), 1);
    }

    #[test]
    fn revati_wraps_to_ashwini() {
        assert_eq!(Nakshatra::Revati.next(), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::from_number(28), Nakshatra::Ashwini);
        assert_eq!(Nakshatra::Moola.number(), 19);
    }

    #[test]
    fn lords_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), "Ketu");
        assert_eq!(Nakshatra::Magha.lord(), "Ketu");
        assert_eq!(Nakshatra::Revati.lord(), "Mercury");
    }
}
