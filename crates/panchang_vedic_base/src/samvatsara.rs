//! Samvatsara (60-year cycle) names.
//!
//! Each year-numbering era maps its year number onto the shared cycle with
//! its own additive offset: `(year + offset) mod 60`. The offsets are
//! calibrated constants of the respective traditions.

use serde::{Deserialize, Serialize};

/// Cycle offset for Shaka samvat years.
pub const SHAKA_CYCLE_OFFSET: i32 = 11;
/// Cycle offset for Vikram samvat years.
pub const VIKRAM_CYCLE_OFFSET: i32 = 9;
/// Cycle offset for Gujarati (Kartikadi Vikram) samvat years.
pub const GUJARATI_CYCLE_OFFSET: i32 = 8;

/// The 60 samvatsaras (years) of the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramoda,
    Prajapati,
    Angirasa,
    Shrimukha,
    Bhava,
    Yuva,
    Dhatri,
    Ishvara,
    Bahudhanya,
    Pramathi,
    Vikrama,
    Vrisha,
    Chitrabhanu,
    Svabhanu,
    Tarana,
    Parthiva,
    Vyaya,
    Sarvajit,
    Sarvadharin,
    Virodhin,
    Vikrita,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukha,
    Hemalamba,
    Vilamba,
    Vikarin,
    Sharvari,
    Plava,
    Shubhakrit,
    Shobhana,
    Krodhin,
    Vishvavasu,
    Parabhava,
    Plavanga,
    Kilaka,
    Saumya,
    Sadharana,
    Virodhikrit,
    Paridhavi,
    Pramadin,
    Ananda,
    Rakshasa,
    Anala,
    Pingala,
    Kalayukta,
    Siddharthi,
    Raudra,
    Durmati,
    Dundubhi,
    Rudhirodgarin,
    Raktaksha,
    Krodhana,
    Akshaya,
}

/// All 60 samvatsaras in order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramoda,
    Samvatsara::Prajapati,
    Samvatsara::Angirasa,
    Samvatsara::Shrimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhatri,
    Samvatsara::Ishvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrisha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Svabhanu,
    Samvatsara::Tarana,
    Samvatsara::Parthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajit,
    Samvatsara::Sarvadharin,
    Samvatsara::Virodhin,
    Samvatsara::Vikrita,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukha,
    Samvatsara::Hemalamba,
    Samvatsara::Vilamba,
    Samvatsara::Vikarin,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakrit,
    Samvatsara::Shobhana,
    Samvatsara::Krodhin,
    Samvatsara::Vishvavasu,
    Samvatsara::Parabhava,
    Samvatsara::Plavanga,
    Samvatsara::Kilaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikrit,
    Samvatsara::Paridhavi,
    Samvatsara::Pramadin,
    Samvatsara::Ananda,
    Samvatsara::Rakshasa,
    Samvatsara::Anala,
    Samvatsara::Pingala,
    Samvatsara::Kalayukta,
    Samvatsara::Siddharthi,
    Samvatsara::Raudra,
    Samvatsara::Durmati,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgarin,
    Samvatsara::Raktaksha,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

const SAMVATSARA_NAMES: [&str; 60] = [
    "Prabhava",
    "Vibhava",
    "Shukla",
    "Pramoda",
    "Prajapati",
    "Angirasa",
    "Shrimukha",
    "Bhava",
    "Yuva",
    "Dhatri",
    "Ishvara",
    "Bahudhanya",
    "Pramathi",
    "Vikrama",
    "Vrisha",
    "Chitrabhanu",
    "Svabhanu",
    "Tarana",
    "Parthiva",
    "Vyaya",
    "Sarvajit",
    "Sarvadharin",
    "Virodhin",
    "Vikrita",
    "Khara",
    "Nandana",
    "Vijaya",
    "Jaya",
    "Manmatha",
    "Durmukha",
    "Hemalamba",
    "Vilamba",
    "Vikarin",
    "Sharvari",
    "Plava",
    "Shubhakrit",
    "Shobhana",
    "Krodhin",
    "Vishvavasu",
    "Parabhava",
    "Plavanga",
    "Kilaka",
    "Saumya",
    "Sadharana",
    "Virodhikrit",
    "Paridhavi",
    "Pramadin",
    "Ananda",
    "Rakshasa",
    "Anala",
    "Pingala",
    "Kalayukta",
    "Siddharthi",
    "Raudra",
    "Durmati",
    "Dundubhi",
    "Rudhirodgarin",
    "Raktaksha",
    "Krodhana",
    "Akshaya",
];

impl Samvatsara {
    pub const fn name(self) -> &'static str {
        SAMVATSARA_NAMES[self.index() as usize]
    }

    /// 0-based position in the cycle (Prabhava=0 .. Akshaya=59).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Samvatsara at a cycle index; any integer is reduced mod 60.
    pub const fn from_cycle_index(i: i32) -> Self {
        ALL_SAMVATSARAS[i.rem_euclid(60) as usize]
    }

    /// Samvatsara of `year` in an era whose cycle offset is `offset`.
    pub const fn for_year(year: i32, offset: i32) -> Self {
        Self::from_cycle_index(year + offset)
    }

    pub const fn all() -> &'static [Samvatsara; 60] {
        &ALL_SAMVATSARAS
    }
}

impl std::fmt::Display for Samvatsara {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_and_names_agree() {
        for (i, s) in ALL_SAMVATSARAS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(format!("{s:?}"), s.name());
        }
    }

    #[test]
    fn era_offsets() {
        // Shaka 1946 is Krodhin; Vikram 2081 is Pingala.
        assert_eq!(
            Samvatsara::for_year(1946, SHAKA_CYCLE_OFFSET),
            Samvatsara::Krodhin
        );
        assert_eq!(
            Samvatsara::for_year(2081, VIKRAM_CYCLE_OFFSET),
            Samvatsara::Pingala
        );
        assert_eq!(
            Samvatsara::for_year(2080, GUJARATI_CYCLE_OFFSET),
            Samvatsara::Rakshasa
        );
    }

    #[test]
    fn negative_indices_wrap() {
        assert_eq!(Samvatsara::from_cycle_index(-1), Samvatsara::Akshaya);
        assert_eq!(Samvatsara::from_cycle_index(120), Samvatsara::Prabhava);
    }
}
