use std::collections::BTreeMap;

use bon::Builder;
use chrono::NaiveTime;

use crate::{core::slot::parse_slot_label, errors::TariffError, quantity::rate::KilowattHourRate};

/// Overnight window: selects `time >= start || time < end`, wrapping past midnight.
#[derive(Copy, Clone, Debug)]
pub struct NightWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl NightWindow {
    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        time >= self.start || time < self.end
    }
}

/// Half-open interval within a single day, no wraparound.
#[derive(Copy, Clone, Debug)]
pub struct PeakWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl PeakWindow {
    #[must_use]
    pub fn contains(self, time: NaiveTime) -> bool {
        self.start <= time && time < self.end
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RateTier {
    Peak,
    Night,
    Day,
}

/// User-defined time-of-use tariff.
///
/// The windows are taken as given: `peak_start == peak_end` is an empty peak
/// window, and a degenerate night window may select the whole day. Daytime is
/// whatever neither window claims.
#[derive(Builder, Copy, Clone)]
pub struct TimeOfUseTariff {
    pub base_rate: KilowattHourRate,
    pub night: NightWindow,
    pub peak: PeakWindow,
    pub night_multiplier: f64,
    pub peak_multiplier: f64,
}

impl TimeOfUseTariff {
    /// Peak wins over night; multipliers never compound.
    #[must_use]
    pub fn tier(&self, time: NaiveTime) -> RateTier {
        if self.peak.contains(time) {
            RateTier::Peak
        } else if self.night.contains(time) {
            RateTier::Night
        } else {
            RateTier::Day
        }
    }

    #[must_use]
    pub fn rate(&self, tier: RateTier) -> KilowattHourRate {
        match tier {
            RateTier::Peak => self.base_rate * self.peak_multiplier,
            RateTier::Night => self.base_rate * self.night_multiplier,
            RateTier::Day => self.base_rate,
        }
    }

    /// Build the per-slot rate lookup for the given column labels.
    ///
    /// Fails on the first label that does not parse as a time of day.
    pub fn build_rates<'a>(
        &self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Result<RateTable, TariffError> {
        let mut rates = BTreeMap::new();
        for label in labels {
            let time = parse_slot_label(label)?;
            rates.insert(label.to_string(), self.rate(self.tier(time)));
        }
        Ok(RateTable(rates))
    }
}

/// Slot label → €/kWh lookup, built once per simulation run.
pub struct RateTable(BTreeMap<String, KilowattHourRate>);

impl RateTable {
    #[must_use]
    pub fn get(&self, label: &str) -> Option<KilowattHourRate> {
        self.0.get(label).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries in lexicographic label order, which for zero-padded `HH:MM`
    /// labels is calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, KilowattHourRate)> {
        self.0.iter().map(|(label, rate)| (label.as_str(), *rate))
    }
}
