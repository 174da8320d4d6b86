use std::collections::HashSet;

use serde::Serialize;

use crate::{
    core::consumption::{BaselineUsage, Mprn},
    prelude::*,
    quantity::cost::Cost,
};

/// One comparison row per simulated customer.
///
/// Serialises with the column headers of the source data exports.
#[derive(Clone, Debug, Serialize)]
pub struct ComparisonRow {
    #[serde(rename = "AnonymisedMPRN")]
    pub mprn: Mprn,

    #[serde(rename = "Original Usage")]
    pub original_usage: Option<f64>,

    #[serde(rename = "Simulated Cost")]
    pub simulated_cost: Cost,

    /// `simulated_cost − original_usage`, full floating-point precision.
    #[serde(rename = "Difference")]
    pub difference: Option<f64>,

    /// Undefined when the original usage is absent or zero.
    #[serde(rename = "Percent Difference")]
    pub percent_difference: Option<f64>,
}

impl ComparisonRow {
    /// What the customer would save under the simulated tariff.
    #[must_use]
    pub fn savings(&self) -> Option<f64> {
        self.difference.map(|difference| -difference)
    }
}

/// Which side of the join an identifier is missing from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnmatchedCustomer {
    /// Simulated, but absent from the baseline table.
    MissingBaseline(Mprn),

    /// In the baseline table, but never simulated.
    MissingSimulation(Mprn),
}

pub struct Comparison {
    /// In cost-series row order.
    pub rows: Vec<ComparisonRow>,

    /// Non-fatal data-quality diagnostics; never aborts the run.
    pub unmatched: Vec<UnmatchedCustomer>,
}

/// Join the simulated costs with the recorded aggregate usage per customer.
///
/// Rows are matched by identifier, not by position, so reordered input tables
/// cannot silently misalign; identifiers present on only one side are
/// reported back as diagnostics.
#[instrument(skip_all)]
pub fn compare_with_original(baseline: &BaselineUsage, costs: &[(Mprn, Cost)]) -> Comparison {
    let baseline_index = baseline.index();
    let mut unmatched = Vec::new();

    let rows = costs
        .iter()
        .map(|(mprn, simulated_cost)| {
            let original_usage = baseline_index.get(mprn).copied();
            if original_usage.is_none() {
                warn!(%mprn, "no recorded usage for the customer");
                unmatched.push(UnmatchedCustomer::MissingBaseline(mprn.clone()));
            }
            let difference = original_usage.map(|original| simulated_cost.0 - original);
            let percent_difference = match (difference, original_usage) {
                (Some(difference), Some(original)) if original != 0.0 => {
                    Some(difference / original * 100.0)
                }
                _ => None,
            };
            ComparisonRow {
                mprn: mprn.clone(),
                original_usage,
                simulated_cost: *simulated_cost,
                difference,
                percent_difference,
            }
        })
        .collect();

    let simulated: HashSet<&Mprn> = costs.iter().map(|(mprn, _)| mprn).collect();
    for (mprn, _) in &baseline.rows {
        if !simulated.contains(mprn) {
            warn!(%mprn, "recorded usage for a customer that was never simulated");
            unmatched.push(UnmatchedCustomer::MissingSimulation(mprn.clone()));
        }
    }

    Comparison { rows, unmatched }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_difference_and_percentage() {
        let baseline = BaselineUsage { rows: vec![(Mprn::from("A"), 30.0)] };
        let costs = vec![(Mprn::from("A"), Cost(29.0))];

        let comparison = compare_with_original(&baseline, &costs);

        assert!(comparison.unmatched.is_empty());
        assert_eq!(comparison.rows.len(), 1);
        let row = &comparison.rows[0];
        assert_eq!(row.original_usage, Some(30.0));
        assert_eq!(row.difference, Some(-1.0));
        assert_abs_diff_eq!(row.percent_difference.unwrap(), -10.0 / 3.0, epsilon = 1e-9);
        assert_eq!(row.savings(), Some(1.0));
    }

    #[test]
    fn test_unmatched_customers_are_reported_both_ways() {
        let baseline = BaselineUsage { rows: vec![(Mprn::from("A"), 30.0)] };
        let costs = vec![(Mprn::from("B"), Cost(29.0))];

        let comparison = compare_with_original(&baseline, &costs);

        let row = &comparison.rows[0];
        assert_eq!(row.original_usage, None);
        assert_eq!(row.difference, None);
        assert_eq!(row.percent_difference, None);
        assert_eq!(
            comparison.unmatched,
            vec![
                UnmatchedCustomer::MissingBaseline(Mprn::from("B")),
                UnmatchedCustomer::MissingSimulation(Mprn::from("A")),
            ],
        );
    }

    #[test]
    fn test_zero_original_usage_leaves_the_percentage_undefined() {
        let baseline = BaselineUsage { rows: vec![(Mprn::from("A"), 0.0)] };
        let costs = vec![(Mprn::from("A"), Cost(29.0))];

        let comparison = compare_with_original(&baseline, &costs);

        let row = &comparison.rows[0];
        assert_eq!(row.difference, Some(29.0));
        assert_eq!(row.percent_difference, None);
        assert!(comparison.unmatched.is_empty());
    }

    #[test]
    fn test_rows_keep_the_cost_series_order() {
        let baseline =
            BaselineUsage { rows: vec![(Mprn::from("A"), 1.0), (Mprn::from("B"), 2.0)] };
        let costs = vec![(Mprn::from("B"), Cost(2.0)), (Mprn::from("A"), Cost(1.0))];

        let comparison = compare_with_original(&baseline, &costs);

        assert_eq!(comparison.rows[0].mprn, Mprn::from("B"));
        assert_eq!(comparison.rows[1].mprn, Mprn::from("A"));
    }
}
