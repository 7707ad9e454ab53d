use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use ztu_schedule_core::{DaySet, Subgroup};

#[derive(Parser)]
#[command(name = "ztu-schedule", version, about = "Build filtered ZTU schedule subscription links")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
	/// TOML file with `endpoint`, `title` and `catalog`
	#[arg(long, global = true, value_hint = ValueHint::FilePath)]
	pub config: Option<PathBuf>,
	/// Directory with groups.json, electives.json and english.json
	#[arg(long, global = true, value_hint = ValueHint::DirPath)]
	pub catalog: Option<PathBuf>,
	/// Log at debug level
	#[arg(short, long, global = true)]
	pub verbose: bool,
	/// Log filter, e.g. `trace` or `ztu_schedule_core=debug`
	#[arg(long, global = true, value_name = "LEVEL")]
	pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum Command {
	/// Print the raw filter URL and the subscription link
	Links(LinksArgs),
	/// List catalog entries
	Catalog(CatalogArgs),
	/// List day ids accepted by --week1/--week2
	Days,
}

#[derive(clap::Args)]
pub struct LinksArgs {
	/// JSON selection in the web form's shape, `-` for stdin
	#[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
	pub selection: Option<PathBuf>,
	#[arg(short, long)]
	pub group: Option<String>,
	#[arg(short, long)]
	pub subgroup: Option<Subgroup>,
	/// Elective to include; repeat for several
	#[arg(long = "elective", value_name = "NAME")]
	pub electives: Vec<String>,
	/// Elective days in week 1, e.g. `5,6`
	#[arg(long, value_name = "DAYS")]
	pub week1: Option<DaySet>,
	/// Elective days in week 2, e.g. `2,5,6`
	#[arg(long, value_name = "DAYS")]
	pub week2: Option<DaySet>,
	/// Show practicals of other groups too
	#[arg(long)]
	pub no_filter_electives: bool,
	/// English teacher id
	#[arg(long, value_name = "TEACHER")]
	pub english: Option<String>,
	#[arg(long, value_name = "URL")]
	pub endpoint: Option<String>,
	/// Subscription title
	#[arg(long)]
	pub title: Option<String>,
	/// Print links as JSON
	#[arg(long)]
	pub json: bool,
	/// Fail on missing fields or ids not in the catalog
	#[arg(long)]
	pub strict: bool,
	#[arg(short, long, value_hint = ValueHint::FilePath)]
	pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CatalogArgs {
	#[arg(value_enum)]
	pub kind: CatalogKind,
	/// Case-insensitive substring filter
	#[arg(long)]
	pub search: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CatalogKind {
	Groups,
	Subgroups,
	Electives,
	Teachers,
}
