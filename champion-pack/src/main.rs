//! CLI entrypoint for `champion-pack`.

use clap::Parser;
use color_eyre::eyre::eyre;

use champion_pack::cli::Args;
use champion_pack::error::PackError;
use champion_pack::{config, logging, pack};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.verbosity).map_err(|err| eyre!("failed to initialise logging: {err}"))?;
    run(&args).map_err(color_eyre::eyre::Report::from)
}

fn run(args: &Args) -> Result<(), PackError> {
    let config = config::load_config(args.config_path.as_deref(), &args.overrides)?;
    pack::generate(&config)?;
    Ok(())
}
