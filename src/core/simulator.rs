use itertools::Itertools;

use crate::{
    core::{
        consumption::{ConsumptionMatrix, Mprn},
        tariff::RateTable,
    },
    errors::TariffError,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
};

/// Per-slot usage cap and the multiplier applied to consumption beyond it.
///
/// The cap applies to every half-hour slot independently, never to the
/// cumulative total: a customer staying just under the limit in each slot
/// incurs no surcharge regardless of their monthly total.
#[derive(Copy, Clone)]
pub struct SurchargePolicy {
    limit: KilowattHours,
    excess_multiplier: f64,
}

impl SurchargePolicy {
    pub fn try_new(limit: KilowattHours, excess_multiplier: f64) -> Result<Self, TariffError> {
        if limit < KilowattHours::ZERO {
            return Err(TariffError::InvalidParameter {
                name: "limit",
                reason: format!("{limit} is negative"),
            });
        }
        if excess_multiplier < 1.0 {
            return Err(TariffError::InvalidParameter {
                name: "excess multiplier",
                reason: format!("{excess_multiplier} is below 1"),
            });
        }
        Ok(Self { limit, excess_multiplier })
    }

    fn slot_cost(self, usage: KilowattHours, rate: KilowattHourRate) -> Cost {
        let normal = usage.min(self.limit);
        let excess = (usage - self.limit).max(KilowattHours::ZERO);
        normal * rate + excess * rate * self.excess_multiplier
    }
}

pub struct SimulationOutcome {
    /// One total cost per customer, in consumption-matrix row order.
    pub costs: Vec<(Mprn, Cost)>,

    /// Columns with no rate-table entry, excluded from every total.
    pub skipped_columns: Vec<String>,
}

/// Price every customer's consumption history under the given rate table.
///
/// Columns absent from the rate table are skipped for all customers and
/// reported back; they reduce coverage but never fail the run.
#[instrument(skip_all)]
pub fn simulate_tariff(
    matrix: &ConsumptionMatrix,
    rates: &RateTable,
    policy: SurchargePolicy,
) -> SimulationOutcome {
    let column_rates = matrix.slots.iter().map(|label| rates.get(label)).collect_vec();
    let skipped_columns = matrix
        .slots
        .iter()
        .zip(&column_rates)
        .filter(|(_, rate)| rate.is_none())
        .map(|(label, _)| label.clone())
        .collect_vec();
    for column in &skipped_columns {
        warn!(%column, "no rate for the column, skipping it");
    }

    let costs = matrix
        .rows
        .iter()
        .map(|row| {
            let total = row
                .usage
                .iter()
                .zip(&column_rates)
                .filter_map(|(usage, rate)| rate.map(|rate| policy.slot_cost(*usage, rate)))
                .sum::<Cost>();
            (row.mprn.clone(), total)
        })
        .collect_vec();
    info!(n_customers = costs.len(), n_skipped_columns = skipped_columns.len(), "simulated");

    SimulationOutcome { costs, skipped_columns }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::NaiveTime;

    use super::*;
    use crate::core::{
        consumption::ConsumptionRow,
        tariff::{NightWindow, PeakWindow, TimeOfUseTariff},
    };

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn example_tariff() -> TimeOfUseTariff {
        TimeOfUseTariff::builder()
            .base_rate(KilowattHourRate(0.2))
            .night(NightWindow { start: time(23, 0), end: time(8, 0) })
            .peak(PeakWindow { start: time(17, 0), end: time(19, 0) })
            .night_multiplier(0.5)
            .peak_multiplier(1.5)
            .build()
    }

    fn example_matrix() -> ConsumptionMatrix {
        ConsumptionMatrix {
            slots: vec!["02:00".to_string(), "18:00".to_string()],
            rows: vec![ConsumptionRow {
                mprn: Mprn::from("MPRN001"),
                usage: vec![KilowattHours(120.0), KilowattHours(50.0)],
            }],
        }
    }

    #[test]
    fn test_worked_scenario() {
        // Peak slot: 50 × 0.30 = 15.0. Night slot: 100 × 0.10 + 20 × 0.10 × 2 = 14.0.
        let matrix = example_matrix();
        let rates = example_tariff().build_rates(matrix.slots.iter().map(String::as_str)).unwrap();
        let policy = SurchargePolicy::try_new(KilowattHours(100.0), 2.0).unwrap();

        let outcome = simulate_tariff(&matrix, &rates, policy);

        assert!(outcome.skipped_columns.is_empty());
        assert_eq!(outcome.costs.len(), 1);
        assert_eq!(outcome.costs[0].0, Mprn::from("MPRN001"));
        assert_abs_diff_eq!(outcome.costs[0].1.0, 29.0);
    }

    #[test]
    fn test_zero_limit_and_unit_multiplier_are_flat() {
        let matrix = example_matrix();
        let rates = example_tariff().build_rates(matrix.slots.iter().map(String::as_str)).unwrap();
        let policy = SurchargePolicy::try_new(KilowattHours::ZERO, 1.0).unwrap();

        let outcome = simulate_tariff(&matrix, &rates, policy);

        // 120 × 0.10 + 50 × 0.30.
        assert_abs_diff_eq!(outcome.costs[0].1.0, 27.0);
    }

    #[test]
    fn test_cap_is_per_slot_not_cumulative() {
        let matrix = ConsumptionMatrix {
            slots: vec!["10:00".to_string(), "12:00".to_string()],
            rows: vec![ConsumptionRow {
                mprn: Mprn::from("MPRN001"),
                usage: vec![KilowattHours(90.0), KilowattHours(90.0)],
            }],
        };
        // Unit multipliers: every slot is rated at the base rate.
        let tariff = TimeOfUseTariff::builder()
            .base_rate(KilowattHourRate(1.0))
            .night(NightWindow { start: time(23, 0), end: time(23, 0) })
            .peak(PeakWindow { start: time(0, 0), end: time(0, 0) })
            .night_multiplier(1.0)
            .peak_multiplier(1.5)
            .build();
        let rates = tariff.build_rates(matrix.slots.iter().map(String::as_str)).unwrap();
        let policy = SurchargePolicy::try_new(KilowattHours(100.0), 2.0).unwrap();

        let outcome = simulate_tariff(&matrix, &rates, policy);

        // The total of 180 kWh exceeds the limit, but no single slot does.
        assert_abs_diff_eq!(outcome.costs[0].1.0, 180.0);
    }

    #[test]
    fn test_columns_without_a_rate_are_skipped() {
        let matrix = example_matrix();
        let rates = example_tariff().build_rates(["18:00"]).unwrap();
        let policy = SurchargePolicy::try_new(KilowattHours(100.0), 2.0).unwrap();

        let outcome = simulate_tariff(&matrix, &rates, policy);

        assert_eq!(outcome.skipped_columns, vec!["02:00".to_string()]);
        // Only the peak slot contributes.
        assert_abs_diff_eq!(outcome.costs[0].1.0, 15.0);
    }

    #[test]
    fn test_identical_inputs_yield_identical_outputs() {
        let matrix = example_matrix();
        let rates = example_tariff().build_rates(matrix.slots.iter().map(String::as_str)).unwrap();
        let policy = SurchargePolicy::try_new(KilowattHours(100.0), 2.0).unwrap();

        let first = simulate_tariff(&matrix, &rates, policy);
        let second = simulate_tariff(&matrix, &rates, policy);

        assert_eq!(first.costs, second.costs);
        assert_eq!(first.skipped_columns, second.skipped_columns);
    }

    #[test]
    fn test_policy_validation() {
        assert!(matches!(
            SurchargePolicy::try_new(KilowattHours(-1.0), 2.0),
            Err(TariffError::InvalidParameter { name: "limit", .. }),
        ));
        assert!(matches!(
            SurchargePolicy::try_new(KilowattHours::ZERO, 0.5),
            Err(TariffError::InvalidParameter { name: "excess multiplier", .. }),
        ));
        assert!(SurchargePolicy::try_new(KilowattHours::ZERO, 1.0).is_ok());
    }
}
