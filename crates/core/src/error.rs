use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
	#[error("failed to read {}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid JSON in {origin}")]
	Json {
		origin: String,
		#[source]
		source: serde_json::Error,
	},
	#[error("invalid config in {origin}")]
	Config {
		origin: String,
		#[source]
		source: toml::de::Error,
	},
	#[error("invalid endpoint {endpoint:?}: {reason}")]
	Endpoint { endpoint: String, reason: String },
	#[error("day must be a number from 1 (Monday) to 6 (Saturday), got {0:?}")]
	Day(String),
	#[error("subgroup must be \"1\" or \"2\", got {0:?}")]
	Subgroup(String),
}

impl Error {
	pub(crate) fn json(origin: impl Into<String>, source: serde_json::Error) -> Self {
		Self::Json {
			origin: origin.into(),
			source,
		}
	}
}
