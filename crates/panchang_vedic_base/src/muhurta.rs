//! Muhurta tables: abhijit and dur muhurtam.
//!
//! A muhurta is 1/15 of a day or night span. Dur muhurtam offsets are
//! expressed in twelfths of their governing span, and each slice lasts
//! 0.8 twelfths (one muhurta).

use serde::{Deserialize, Serialize};

use MuhurtaSpan::{Day, Night};

/// Muhurtas in a day span or a night span.
pub const MUHURTAS_PER_SPAN: f64 = 15.0;

/// Abhijit is the 8th muhurta of the day: [7/15, 8/15) of the day span.
pub const ABHIJIT_MUHURTA_INDEX: u8 = 7;

/// Weekday on which abhijit is not observed (Wednesday).
pub const ABHIJIT_EXCLUDED_WEEKDAY: u8 = 3;

/// Length of a dur muhurtam slice, in twelfths of its span.
pub const DUR_MUHURTAM_LENGTH_TWELFTHS: f64 = 0.8;

/// Span a dur muhurtam offset is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuhurtaSpan {
    /// From sunrise, in twelfths of sunrise-to-sunset.
    Day,
    /// From sunset, in twelfths of sunset-to-next-sunrise.
    Night,
}

/// One dur muhurtam slice position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurMuhurtamSlot {
    /// Start offset in twelfths of `span`.
    pub offset_twelfths: f64,
    pub span: MuhurtaSpan,
}

const fn slot(offset_twelfths: f64, span: MuhurtaSpan) -> DurMuhurtamSlot {
    DurMuhurtamSlot {
        offset_twelfths,
        span,
    }
}

/// Dur muhurtam slices per weekday (0 = Sunday): first slice, optional second.
pub const DUR_MUHURTAM_OFFSETS: [(DurMuhurtamSlot, Option<DurMuhurtamSlot>); 7] = [
    (slot(10.4, Day), None),
    (slot(6.4, Day), Some(slot(8.8, Day))),
    (slot(2.4, Day), Some(slot(4.8, Night))),
    (slot(5.6, Day), None),
    (slot(4.0, Day), Some(slot(8.8, Day))),
    (slot(2.4, Day), Some(slot(6.4, Day))),
    (slot(0.0, Day), Some(slot(0.8, Day))),
];

/// Dur muhurtam slices for `weekday` (0 = Sunday, wraps mod 7).
pub fn dur_muhurtam_slots(weekday: u8) -> impl Iterator<Item = DurMuhurtamSlot> {
    let (first, second) = DUR_MUHURTAM_OFFSETS[(weekday % 7) as usize];
    std::iter::once(first).chain(second)
}
