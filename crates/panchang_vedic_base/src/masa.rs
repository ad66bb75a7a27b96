//! Masa (lunar month) names.

use serde::{Deserialize, Serialize};

/// The 12 lunar months starting from Chaitra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Masa {
    Chaitra,
    Vaisakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwina,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
}

/// All 12 masas in order (0 = Chaitra, 11 = Phalguna).
pub const ALL_MASAS: [Masa; 12] = [
    Masa::Chaitra,
    Masa::Vaisakha,
    Masa::Jyeshtha,
    Masa::Ashadha,
    Masa::Shravana,
    Masa::Bhadrapada,
    Masa::Ashwina,
    Masa::Kartika,
    Masa::Margashirsha,
    Masa::Pausha,
    Masa::Magha,
    Masa::Phalguna,
];

impl Masa {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Chaitra => "Chaitra",
            Self::Vaisakha => "Vaisakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwina => "Ashwina",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Chaitra = 1).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Masa for a 1-based number. Numbers outside 1..=12 wrap.
    pub const fn from_number(n: u8) -> Self {
        ALL_MASAS[(n as usize + 11) % 12]
    }

    /// The month after this one, Phalguna wrapping to Chaitra.
    pub const fn next(self) -> Self {
        Self::from_number(self.number() + 1)
    }
}

impl std::fmt::Display for Masa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_phalguna() {
        assert_eq!(Masa::Phalguna.next(), Masa::Chaitra);
        assert_eq!(Masa::from_number(13), Masa::Chaitra);
        assert_eq!(Masa::from_number(0), Masa::Phalguna);
    }
}
