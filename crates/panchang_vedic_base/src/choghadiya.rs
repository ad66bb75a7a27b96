//! Choghadiya: eight equal slices of the day and of the night.
//!
//! Each weekday has its own day sequence (from sunrise) and night
//! sequence (from sunset) of the seven choghadiya names, the first name
//! repeating in the eighth slot.

use serde::{Deserialize, Serialize};

use Choghadiya::{Amrita, Chara, Kala, Labha, Roga, Shubha, Udvega};

/// Slices per day span and per night span.
pub const CHOGHADIYA_SLICES: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choghadiya {
    Udvega,
    Chara,
    Labha,
    Amrita,
    Kala,
    Shubha,
    Roga,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoghadiyaQuality {
    Bad,
    Neutral,
    Gain,
    Best,
    Loss,
    Good,
    Evil,
}

impl ChoghadiyaQuality {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bad => "Bad",
            Self::Neutral => "Neutral",
            Self::Gain => "Gain",
            Self::Best => "Best",
            Self::Loss => "Loss",
            Self::Good => "Good",
            Self::Evil => "Evil",
        }
    }

    /// Whether the slice is considered favourable for new work.
    pub const fn is_favourable(self) -> bool {
        matches!(self, Self::Gain | Self::Best | Self::Good | Self::Neutral)
    }
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udvega => "Udvega",
            Self::Chara => "Chara",
            Self::Labha => "Labha",
            Self::Amrita => "Amrita",
            Self::Kala => "Kala",
            Self::Shubha => "Shubha",
            Self::Roga => "Roga",
        }
    }

    pub const fn quality(self) -> ChoghadiyaQuality {
        match self {
            Self::Udvega => ChoghadiyaQuality::Bad,
            Self::Chara => ChoghadiyaQuality::Neutral,
            Self::Labha => ChoghadiyaQuality::Gain,
            Self::Amrita => ChoghadiyaQuality::Best,
            Self::Kala => ChoghadiyaQuality::Loss,
            Self::Shubha => ChoghadiyaQuality::Good,
            Self::Roga => ChoghadiyaQuality::Evil,
        }
    }
}

/// Day sequences from sunrise, Sunday first.
pub const DAY_CHOGHADIYA: [[Choghadiya; 8]; 7] = [
    [Shubha, Roga, Udvega, Chara, Labha, Amrita, Kala, Shubha],
    [Amrita, Kala, Shubha, Roga, Udvega, Chara, Labha, Amrita],
    [Roga, Udvega, Chara, Labha, Amrita, Kala, Shubha, Roga],
    [Labha, Amrita, Kala, Shubha, Roga, Udvega, Chara, Labha],
    [Shubha, Roga, Udvega, Chara, Labha, Amrita, Kala, Shubha],
    [Chara, Labha, Amrita, Kala, Shubha, Roga, Udvega, Chara],
    [Kala, Shubha, Roga, Udvega, Chara, Labha, Amrita, Kala],
];

/// Night sequences from sunset, Sunday first.
pub const NIGHT_CHOGHADIYA: [[Choghadiya; 8]; 7] = [
    [Roga, Kala, Labha, Udvega, Shubha, Amrita, Chara, Roga],
    [Chara, Roga, Kala, Labha, Udvega, Shubha, Amrita, Chara],
    [Kala, Labha, Udvega, Shubha, Amrita, Chara, Roga, Kala],
    [Udvega, Shubha, Amrita, Chara, Roga, Kala, Labha, Udvega],
    [Labha, Udvega, Shubha, Amrita, Chara, Roga, Kala, Labha],
    [Roga, Kala, Labha, Udvega, Shubha, Amrita, Chara, Roga],
    [Amrita, Chara, Roga, Kala, Labha, Udvega, Shubha, Amrita],
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sequence_repeats_its_first_slot() {
        for seq in DAY_CHOGHADIYA.iter().chain(&NIGHT_CHOGHADIYA) {
            assert_eq!(seq[0], seq[7]);
            let mut distinct = seq[..7].to_vec();
            distinct.sort_by_key(|c| *c as u8);
            distinct.dedup();
            assert_eq!(distinct.len(), 7, "{seq:?}");
        }
    }

    #[test]
    fn qualities() {
        assert_eq!(Amrita.quality(), ChoghadiyaQuality::Best);
        assert_eq!(Roga.quality().name(), "Evil");
        assert!(!Kala.quality().is_favourable());
    }
}
