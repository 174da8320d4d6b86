use std::collections::HashMap;

use crate::quantity::energy::KilowattHours;

/// Opaque anonymised customer identifier, the join key between the
/// consumption matrix and the baseline table.
#[derive(
    Clone,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::Display,
    derive_more::From,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Mprn(pub String);

impl From<&str> for Mprn {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Wide input table: one row per customer, one kWh column per half-hour slot.
///
/// Read-only once loaded; a simulation run never mutates it.
pub struct ConsumptionMatrix {
    /// Slot label columns, identifier column excluded, in source order.
    pub slots: Vec<String>,
    pub rows: Vec<ConsumptionRow>,
}

pub struct ConsumptionRow {
    pub mprn: Mprn,
    /// Parallel to [`ConsumptionMatrix::slots`].
    pub usage: Vec<KilowattHours>,
}

/// Narrow input table: the previously known aggregate usage per customer.
///
/// The aggregate is an opaque number; no unit normalisation is applied to it.
pub struct BaselineUsage {
    pub rows: Vec<(Mprn, f64)>,
}

impl BaselineUsage {
    pub(crate) fn index(&self) -> HashMap<&Mprn, f64> {
        self.rows.iter().map(|(mprn, usage)| (mprn, *usage)).collect()
    }
}
