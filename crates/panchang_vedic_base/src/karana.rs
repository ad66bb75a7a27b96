//! Karana: half-tithi divisions of the lunar month.
//!
//! Sixty karana slots of 6 degrees elongation each make one synodic month.
//! Eleven names fill them: four fixed karanas (Kimstughna at slot 1, then
//! Shakuni, Chatushpada and Naga at slots 58-60) and seven movable ones
//! that repeat eight times across slots 2-57.

use serde::{Deserialize, Serialize};

/// Elongation covered by one karana, in degrees.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

/// Number of karana slots in a lunar month.
pub const KARANA_COUNT: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Kimstughna,
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
}

/// The seven movable karanas in their repeating order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Kimstughna => "Kimstughna",
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
        }
    }

    /// Karana occupying a 1-based slot. Slots outside 1..=60 wrap.
    pub const fn from_number(n: u8) -> Self {
        match (n as usize + 59) % 60 + 1 {
            1 => Self::Kimstughna,
            58 => Self::Shakuni,
            59 => Self::Chatushpada,
            60 => Self::Naga,
            slot => MOVABLE_KARANAS[(slot - 2) % 7],
        }
    }

    /// Whether the karana is one of the four that occur once a month.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Kimstughna | Self::Shakuni | Self::Chatushpada | Self::Naga
        )
    }
}

impl std::fmt::Display for Karana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
