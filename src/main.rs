extern crate env_logger;
#[macro_use]
extern crate log;

use anyhow::Result;
use clap::Parser;

mod cli;
mod consensus;
mod errors;
mod loader;
mod nucleotide;
mod profile;
mod report;

use cli::Cli;
use errors::ProfileError;

fn try_main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let sequences = loader::load(&cli.input)?;
    info!(
        "Loaded {} sequences from {}",
        sequences.len(),
        cli.input.display()
    );

    let table = profile::tabulate(&sequences, &cli.input.display().to_string())?;
    info!("Tabulated nucleotide counts over {} positions", table.len());

    let consensus = consensus::derive_consensus(&table);
    report::save_report(&table, &consensus, &cli.output)?;
    info!("Wrote report to {}", cli.output.display());

    Ok(())
}

fn main() {
    if let Err(err) = try_main() {
        error!("{}", err);

        // report any errors that are produced
        err.chain()
            .skip(1)
            .for_each(|cause| error!("  because: {}", cause));

        let code = err
            .downcast_ref::<ProfileError>()
            .map_or(1, ProfileError::exit_code);
        std::process::exit(code);
    }
}
