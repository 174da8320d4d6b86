use crate::{
    cli::SimulateArgs,
    core::{
        comparison::compare_with_original, simulator::simulate_tariff, summary::ComparisonSummary,
    },
    dataset,
    prelude::*,
    tables,
};

#[instrument(skip_all)]
pub fn simulate(args: &SimulateArgs) -> Result {
    let matrix = dataset::load_consumption_matrix(&args.consumption_path)?;
    let baseline = dataset::load_baseline_usage(&args.baseline_path)?;

    let tariff = args.tariff.tariff();
    let rates = tariff.build_rates(matrix.slots.iter().map(String::as_str))?;
    info!(n_slots = rates.len(), "built the rate table");

    let outcome = simulate_tariff(&matrix, &rates, args.surcharge.policy()?);
    let comparison = compare_with_original(&baseline, &outcome.costs);
    println!("{}", tables::build_comparison_table(&comparison));

    let summary = ComparisonSummary::of(&comparison);
    println!("{}", tables::build_change_counts_table(&summary));
    println!("{}", tables::build_savings_bands_table(&summary));

    if let Some(path) = &args.output_path {
        let mut writer =
            csv::Writer::from_path(path).with_context(|| format!("failed to create {path:?}"))?;
        for row in &comparison.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        info!(?path, n_rows = comparison.rows.len(), "exported the comparison");
    }

    Ok(())
}
