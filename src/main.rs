use std::process::ExitCode;

use anyhow::Result;
use clap::ArgMatches;
use log::{debug, error};

use tagmp3::prelude::*;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    let matches = get_matches();

    if let Err(e) = setup_logging(&matches) {
        eprintln!("Failed to initialise logging: {e:#}");
        return ExitCode::FAILURE;
    }

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(matches: &ArgMatches) -> Result<()> {
    let log_file = get_log_file(matches)?;
    init_logger(get_verbosity(matches), log_file.as_deref())
}

fn run(matches: &ArgMatches) -> Result<()> {
    let config = build_configuration(matches)?;
    let options = get_processing_options(matches);
    debug!("Running with {config:?}");

    let context = tag_files(&config, &options)?;
    debug!("Run statistics: {:?}", context.stats);

    Ok(())
}
