use std::{
	fs::{self, File},
	io::{self, Read, Write},
	path::Path,
};

use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use ztu_schedule_core::{links, Catalog, Config, FilterSelection, Week, DAYS, SUBGROUPS};

use crate::args::{CatalogArgs, CatalogKind, Cli, LinksArgs};

pub fn load_config(cli: &Cli) -> Result<Config> {
	let mut config = match &cli.config {
		Some(path) => Config::load(path)?,
		None => Config::default(),
	};

	if let Some(catalog) = &cli.catalog {
		config.catalog = Some(catalog.clone());
	}

	Ok(config)
}

fn load_catalog(config: &Config) -> Result<Catalog> {
	Ok(match &config.catalog {
		Some(dir) => Catalog::load(dir)?,
		None => Catalog::bundled()?,
	})
}

fn read_selection(path: &Path) -> Result<FilterSelection> {
	let text = if path == Path::new("-") {
		let mut text = String::new();
		io::stdin()
			.read_to_string(&mut text)
			.context("failed to read selection from stdin")?;
		text
	} else {
		fs::read_to_string(path)
			.with_context(|| format!("failed to read selection {}", path.display()))?
	};

	serde_json::from_str(&text).context("selection is not valid JSON")
}

/// Flags are applied on top of the selection file, if any.
fn build_selection(args: &LinksArgs) -> Result<FilterSelection> {
	let mut selection = match &args.selection {
		Some(path) => read_selection(path)?,
		None => FilterSelection::default(),
	};

	if let Some(group) = &args.group {
		selection.set_group(group.as_str());
	}

	if args.subgroup.is_some() {
		selection.set_subgroup(args.subgroup);
	}

	for elective in &args.electives {
		selection.add_elective(elective);
	}

	for (week, days) in [(Week::First, args.week1), (Week::Second, args.week2)] {
		if let Some(days) = days {
			*selection.elective_days.week_mut(week) = days;
		}
	}

	if args.no_filter_electives {
		selection.set_filter_electives_by_group(false);
	}

	if let Some(english) = &args.english {
		selection.set_english_teacher(english.as_str());
	}

	Ok(selection)
}

pub fn run_links(mut config: Config, args: &LinksArgs) -> Result<()> {
	if let Some(endpoint) = &args.endpoint {
		config.set_endpoint(endpoint)?;
	}

	if let Some(title) = &args.title {
		config.title.clone_from(title);
	}

	let selection = build_selection(args)?;
	let catalog = load_catalog(&config)?;

	let mut problems = 0;

	for error in selection.validate() {
		warn!(field = ?error.field, "{error}");
		problems += 1;
	}

	for issue in catalog.check(&selection) {
		warn!("{issue}");
		problems += 1;
	}

	if args.strict && problems > 0 {
		bail!("selection has {problems} problem(s)");
	}

	let links = links(&selection, &config);

	if !links.actionable {
		warn!("no group selected; the links will not be usable yet");
	}

	let mut out: Box<dyn Write> = match &args.output {
		Some(path) => Box::new(
			File::create(path).with_context(|| format!("failed to create {}", path.display()))?,
		),
		None => Box::new(io::stdout().lock()),
	};

	if args.json {
		serde_json::to_writer_pretty(&mut out, &links)?;
		writeln!(out)?;
	} else {
		writeln!(out, "{}", links.raw)?;
		writeln!(out, "{}", links.subscription)?;
	}

	if let Some(path) = &args.output {
		info!(path = %path.display(), "wrote links");
	}

	Ok(())
}

pub fn run_catalog(config: &Config, args: &CatalogArgs) -> Result<()> {
	let catalog = load_catalog(config)?;
	let query = args.search.as_deref().unwrap_or_default();
	let mut out = io::stdout().lock();

	match args.kind {
		CatalogKind::Groups => {
			for group in catalog.search_groups(query) {
				writeln!(out, "{group}")?;
			}
		}
		CatalogKind::Subgroups => {
			for subgroup in SUBGROUPS {
				writeln!(out, "{subgroup}\t{}", subgroup.label())?;
			}
		}
		CatalogKind::Electives => {
			for elective in catalog.search_electives(query) {
				writeln!(out, "{elective}")?;
			}
		}
		CatalogKind::Teachers => {
			for teacher in catalog.search_teachers(query) {
				writeln!(out, "{}\t{}", teacher.value, teacher.label)?;
			}
		}
	}

	Ok(())
}

pub fn run_days() -> Result<()> {
	let mut out = io::stdout().lock();

	for day in DAYS {
		writeln!(out, "{}\t{}", day.id(), day.label())?;
	}

	Ok(())
}
