//! Weekday offset tables for rahu kalam, gulika kalam and yamaganda.
//!
//! Each kalam is one eighth of the sunrise-to-sunset span. The tables hold
//! the start of that eighth as a fraction of the day span, indexed by
//! weekday (0 = Sunday).

use serde::{Deserialize, Serialize};

/// Length of every kalam as a fraction of the day span.
pub const KALAM_FRACTION: f64 = 0.125;

/// Rahu kalam start fractions, Sunday first.
pub const RAHU_KALAM_OFFSETS: [f64; 7] = [0.875, 0.125, 0.75, 0.5, 0.625, 0.375, 0.25];

/// Gulika kalam start fractions, Sunday first.
pub const GULIKA_KALAM_OFFSETS: [f64; 7] = [0.75, 0.625, 0.5, 0.375, 0.25, 0.125, 0.0];

/// Yamaganda start fractions, Sunday first.
pub const YAMAGANDA_OFFSETS: [f64; 7] = [0.5, 0.375, 0.25, 0.125, 0.0, 0.75, 0.625];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kalam {
    Rahu,
    Gulika,
    Yamaganda,
}

/// All kalams in display order.
pub const ALL_KALAMS: [Kalam; 3] = [Kalam::Rahu, Kalam::Gulika, Kalam::Yamaganda];

impl Kalam {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rahu => "Rahu Kalam",
            Self::Gulika => "Gulika Kalam",
            Self::Yamaganda => "Yamaganda",
        }
    }

    pub const fn offsets(self) -> &'static [f64; 7] {
        match self {
            Self::Rahu => &RAHU_KALAM_OFFSETS,
            Self::Gulika => &GULIKA_KALAM_OFFSETS,
            Self::Yamaganda => &YAMAGANDA_OFFSETS,
        }
    }

    /// Start fraction of the day span on `weekday` (0 = Sunday, wraps mod 7).
    pub const fn start_fraction(self, weekday: u8) -> f64 {
        self.offsets()[(weekday % 7) as usize]
    }
}
