use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs the stderr subscriber. `RUST_LOG` wins over the flags so a
/// single run can be traced without editing the command line.
pub fn init(verbose: bool, log_level: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
	let level = match (verbose, log_level) {
		(_, Some(level)) if level.contains('=') => level.to_string(),
		(_, Some(level)) => format!("ztu_schedule={level},ztu_schedule_core={level}"),
		(true, None) => "ztu_schedule=debug,ztu_schedule_core=debug".to_string(),
		(false, None) => "warn".to_string(),
	};

	let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false)
				.without_time(),
		)
		.try_init()?;

	Ok(())
}
