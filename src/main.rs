use std::process::ExitCode;

use clap::Parser;
use code_stats::{app, args::Args, config::AppConfig, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match AppConfig::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Application Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
