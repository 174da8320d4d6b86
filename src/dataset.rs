//! CSV loading of the two input tables.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use itertools::Itertools;
use serde::Deserialize;

use crate::{
    core::consumption::{BaselineUsage, ConsumptionMatrix, ConsumptionRow, Mprn},
    prelude::*,
    quantity::energy::KilowattHours,
};

pub fn load_consumption_matrix(path: &Path) -> Result<ConsumptionMatrix> {
    let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
    read_consumption_matrix(file)
        .with_context(|| format!("failed to read the consumption matrix from {path:?}"))
}

/// Read the wide table: the identifier column first, then one kWh column per
/// half-hour slot.
pub fn read_consumption_matrix(reader: impl Read) -> Result<ConsumptionMatrix> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    ensure!(headers.len() > 1, "expected an identifier column and at least one slot column");
    let slots = headers.iter().skip(1).map(ToString::to_string).collect_vec();

    let mut rows = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mprn = Mprn::from(record.get(0).context("missing identifier cell")?);
        let usage = record
            .iter()
            .skip(1)
            .zip(&slots)
            .map(|(cell, slot)| {
                cell.parse::<f64>().map(KilowattHours).with_context(|| {
                    format!("row {}: bad kWh value {cell:?} in column {slot:?}", index + 1)
                })
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(ConsumptionRow { mprn, usage });
    }

    info!(n_customers = rows.len(), n_slots = slots.len(), "loaded the consumption matrix");
    Ok(ConsumptionMatrix { slots, rows })
}

#[derive(Deserialize)]
struct BaselineRecord {
    #[serde(rename = "AnonymisedMPRN")]
    mprn: Mprn,

    #[serde(rename = "Daily Usage")]
    usage: f64,
}

pub fn load_baseline_usage(path: &Path) -> Result<BaselineUsage> {
    let file = File::open(path).with_context(|| format!("failed to open {path:?}"))?;
    read_baseline_usage(file)
        .with_context(|| format!("failed to read the baseline usage table from {path:?}"))
}

/// Read the narrow table: `AnonymisedMPRN` and `Daily Usage` columns.
pub fn read_baseline_usage(reader: impl Read) -> Result<BaselineUsage> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut rows = Vec::new();
    for record in csv_reader.deserialize() {
        let record: BaselineRecord = record?;
        rows.push((record.mprn, record.usage));
    }

    info!(n_customers = rows.len(), "loaded the baseline usage table");
    Ok(BaselineUsage { rows })
}
