//! Name and lookup tables of the panchang.
//!
//! This crate provides:
//! - Enumerations for tithi, nakshatra, yoga, karana, rashi, masa, vaar
//!   and the 60-year samvatsara cycle, with numbering helpers
//! - Weekday tables for rahu kalam, gulika kalam, yamaganda and dur muhurtam
//! - Nakshatra tables for varjyam and amrit kalam
//! - Choghadiya day and night sequences
//!
//! Every table is an immutable constant array indexed by a small integer.

pub mod choghadiya;
pub mod kalam;
pub mod karana;
pub mod masa;
pub mod muhurta;
pub mod nakshatra;
pub mod rashi;
pub mod samvatsara;
pub mod tithi;
pub mod vaar;
pub mod varjyam;
pub mod yoga;

pub use choghadiya::{
    CHOGHADIYA_SLICES, Choghadiya, ChoghadiyaQuality, DAY_CHOGHADIYA, NIGHT_CHOGHADIYA,
};
pub use kalam::{
    ALL_KALAMS, GULIKA_KALAM_OFFSETS, KALAM_FRACTION, Kalam, RAHU_KALAM_OFFSETS,
    YAMAGANDA_OFFSETS,
};
pub use karana::{KARANA_COUNT, KARANA_SEGMENT_DEG, Karana, MOVABLE_KARANAS};
pub use masa::{ALL_MASAS, Masa};
pub use muhurta::{
    ABHIJIT_EXCLUDED_WEEKDAY, ABHIJIT_MUHURTA_INDEX, DUR_MUHURTAM_LENGTH_TWELFTHS,
    DUR_MUHURTAM_OFFSETS, DurMuhurtamSlot, MUHURTAS_PER_SPAN, MuhurtaSpan, dur_muhurtam_slots,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, PADA_SPAN, pada_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN_DEG, Rashi};
pub use samvatsara::{
    ALL_SAMVATSARAS, GUJARATI_CYCLE_OFFSET, SHAKA_CYCLE_OFFSET, Samvatsara, VIKRAM_CYCLE_OFFSET,
};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_COUNT, TITHI_SEGMENT_DEG, Tithi};
pub use vaar::{ALL_VAARS, Vaar};
pub use varjyam::{
    AMRIT_KALAM_START_HOURS, MOOLA_SECOND_VARJYAM_HOURS, NOMINAL_NAKSHATRA_HOURS,
    VARJYAM_START_HOURS, WINDOW_HOURS, amrit_kalam_start_hours, varjyam_start_hours,
};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaNature};
