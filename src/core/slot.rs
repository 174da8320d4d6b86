//! Half-hour slot labels as they appear in the consumption matrix header.

use chrono::NaiveTime;

use crate::errors::TariffError;

/// Parse a slot label (`"23:30"`, with a `"23:30:00"` fallback) into a time of day.
pub fn parse_slot_label(label: &str) -> Result<NaiveTime, TariffError> {
    NaiveTime::parse_from_str(label, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(label, "%H:%M:%S"))
        .map_err(|source| TariffError::MalformedSlotLabel { label: label.to_string(), source })
}

/// All 48 half-hour labels of a day, in calendar order.
pub fn half_hour_labels() -> Vec<String> {
    (0..24).flat_map(|hour| [format!("{hour:02}:00"), format!("{hour:02}:30")]).collect()
}
