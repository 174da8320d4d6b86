use crate::{cli::RatesArgs, core::slot::half_hour_labels, prelude::*, tables};

pub fn rates(args: &RatesArgs) -> Result {
    let tariff = args.tariff.tariff();
    let labels = half_hour_labels();
    let rates = tariff.build_rates(labels.iter().map(String::as_str))?;
    println!("{}", tables::try_build_rate_table(&tariff, &rates)?);
    Ok(())
}
