#![warn(clippy::pedantic)]

mod args;
mod commands;
mod logging;

use std::process::ExitCode;

use clap::Parser;

use crate::args::{Cli, Command};

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(e) = logging::init(cli.verbose, cli.log_level.as_deref()) {
		eprintln!("warning: failed to initialize logging: {e}");
	}

	let result = commands::load_config(&cli).and_then(|config| match &cli.command {
		Command::Links(args) => commands::run_links(config, args),
		Command::Catalog(args) => commands::run_catalog(&config, args),
		Command::Days => commands::run_days(),
	});

	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("error: {e:#}");
			ExitCode::FAILURE
		}
	}
}
