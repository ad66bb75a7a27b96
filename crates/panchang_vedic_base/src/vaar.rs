//! Vaar (weekday), numbered from Sunday.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All 7 weekdays in order (0 = Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Sunday,
    Vaar::Monday,
    Vaar::Tuesday,
    Vaar::Wednesday,
    Vaar::Thursday,
    Vaar::Friday,
    Vaar::Saturday,
];

impl Vaar {
    /// Weekday for a 0-based index (Sunday = 0). Indices wrap mod 7.
    pub const fn from_index(i: u8) -> Self {
        ALL_VAARS[(i % 7) as usize]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    pub const fn sanskrit_name(self) -> &'static str {
        match self {
            Self::Sunday => "Ravivar",
            Self::Monday => "Somvar",
            Self::Tuesday => "Mangalvar",
            Self::Wednesday => "Budhvar",
            Self::Thursday => "Guruvar",
            Self::Friday => "Shukravar",
            Self::Saturday => "Shanivar",
        }
    }

    /// Planetary lord of the day.
    pub const fn lord(self) -> &'static str {
        match self {
            Self::Sunday => "Sun",
            Self::Monday => "Moon",
            Self::Tuesday => "Mars",
            Self::Wednesday => "Mercury",
            Self::Thursday => "Jupiter",
            Self::Friday => "Venus",
            Self::Saturday => "Saturn",
        }
    }
}

impl std::fmt::Display for Vaar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
