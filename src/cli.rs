use std::path::PathBuf;

use chrono::NaiveTime;
use clap::{Parser, Subcommand};

use crate::{
    core::{
        simulator::SurchargePolicy,
        tariff::{NightWindow, PeakWindow, TimeOfUseTariff},
    },
    errors::TariffError,
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
};

mod rates;
mod simulate;

pub use self::{rates::rates, simulate::simulate};

#[derive(Parser)]
#[command(version, about, propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: price the consumption history and compare with the recorded usage.
    #[clap(name = "simulate")]
    Simulate(Box<SimulateArgs>),

    /// Print the per-slot rates for the given tariff parameters.
    #[clap(name = "rates")]
    Rates(RatesArgs),
}

#[derive(Copy, Clone, Parser)]
pub struct TariffArgs {
    /// General daytime rate per kilowatt-hour.
    #[clap(long = "base-rate", default_value = "0.2", env = "BASE_RATE")]
    pub base_rate: KilowattHourRate,

    /// Night window start; the window may wrap past midnight.
    #[clap(long = "night-start", default_value = "23:00", env = "NIGHT_START", value_parser = crate::core::slot::parse_slot_label)]
    pub night_start: NaiveTime,

    /// Night window end (exclusive).
    #[clap(long = "night-end", default_value = "08:00", env = "NIGHT_END", value_parser = crate::core::slot::parse_slot_label)]
    pub night_end: NaiveTime,

    /// Peak window start; the window must not wrap past midnight.
    #[clap(long = "peak-start", default_value = "17:00", env = "PEAK_START", value_parser = crate::core::slot::parse_slot_label)]
    pub peak_start: NaiveTime,

    /// Peak window end (exclusive).
    #[clap(long = "peak-end", default_value = "19:00", env = "PEAK_END", value_parser = crate::core::slot::parse_slot_label)]
    pub peak_end: NaiveTime,

    /// Night rate multiplier.
    #[clap(long = "night-multiplier", default_value = "0.5", env = "NIGHT_MULTIPLIER")]
    pub night_multiplier: f64,

    /// Peak rate multiplier.
    #[clap(long = "peak-multiplier", default_value = "1.5", env = "PEAK_MULTIPLIER")]
    pub peak_multiplier: f64,
}

impl TariffArgs {
    #[must_use]
    pub fn tariff(&self) -> TimeOfUseTariff {
        TimeOfUseTariff::builder()
            .base_rate(self.base_rate)
            .night(NightWindow { start: self.night_start, end: self.night_end })
            .peak(PeakWindow { start: self.peak_start, end: self.peak_end })
            .night_multiplier(self.night_multiplier)
            .peak_multiplier(self.peak_multiplier)
            .build()
    }
}

#[derive(Copy, Clone, Parser)]
pub struct SurchargeArgs {
    /// Per-slot usage limit before the excess rate applies.
    #[clap(long = "limit-kwh", default_value = "0", env = "LIMIT_KWH")]
    pub limit: KilowattHours,

    /// Multiplier applied to usage beyond the limit.
    #[clap(long = "excess-multiplier", default_value = "1", env = "EXCESS_MULTIPLIER")]
    pub excess_multiplier: f64,
}

impl SurchargeArgs {
    pub fn policy(&self) -> Result<SurchargePolicy, TariffError> {
        SurchargePolicy::try_new(self.limit, self.excess_multiplier)
    }
}

#[derive(Parser)]
pub struct SimulateArgs {
    /// Wide CSV table: the identifier column followed by one kWh column per half-hour slot.
    #[clap(long = "consumption", env = "CONSUMPTION_PATH")]
    pub consumption_path: PathBuf,

    /// Narrow CSV table with `AnonymisedMPRN` and `Daily Usage` columns.
    #[clap(long = "baseline", env = "BASELINE_PATH")]
    pub baseline_path: PathBuf,

    #[clap(flatten)]
    pub tariff: TariffArgs,

    #[clap(flatten)]
    pub surcharge: SurchargeArgs,

    /// Write the comparison table as CSV.
    #[clap(long = "output")]
    pub output_path: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RatesArgs {
    #[clap(flatten)]
    pub tariff: TariffArgs,
}
