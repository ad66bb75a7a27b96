//! Tithi (lunar day) names and paksha (fortnight).
//!
//! Thirty tithis span one synodic month, each covering 12 degrees of
//! Moon-minus-Sun elongation. Tithis 1-15 form Shukla paksha (waxing,
//! ending at Purnima) and 16-30 form Krishna paksha (waning, ending at
//! Amavasya).

use serde::{Deserialize, Serialize};

/// Elongation covered by one tithi, in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Number of tithis in a lunar month.
pub const TITHI_COUNT: u8 = 30;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight, new moon to full moon.
    Shukla,
    /// Waning fortnight, full moon to new moon.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla Paksha",
            Self::Krishna => "Krishna Paksha",
        }
    }
}

/// The 30 tithis in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (index 0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

/// Names of the tithis within one paksha; the 15th differs per paksha.
const PAKSHA_TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (Shukla Pratipada = 0 .. Amavasya = 29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based cycle number, 1..=30.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Tithi for a 1-based cycle number. Numbers outside 1..=30 wrap.
    pub const fn from_number(n: u8) -> Self {
        ALL_TITHIS[(n as usize + 29) % 30]
    }

    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// Position within the paksha, 1..=15.
    pub const fn tithi_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Traditional name, without the paksha prefix.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            other => PAKSHA_TITHI_NAMES[(other.index() % 15) as usize],
        }
    }

    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

impl std::fmt::Display for Tithi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
