mod cli;
mod core;
mod dataset;
mod errors;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Simulate(args) => cli::simulate(&args)?,
        Command::Rates(args) => cli::rates(&args)?,
    }

    info!("done!");
    Ok(())
}
