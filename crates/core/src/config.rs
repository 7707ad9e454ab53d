use std::{
	fs,
	path::{Path, PathBuf},
	sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::{
	encode::{DEBLOATER_URL, SUBSCRIPTION_TITLE},
	error::{Error, Result},
};

static DEFAULT_ENDPOINT: LazyLock<Url> =
	LazyLock::new(|| Url::parse(DEBLOATER_URL).expect("default endpoint is a valid URL"));

/// Where links point and what the subscription is called.
///
/// Read from a TOML file; every key is optional:
///
/// ```toml
/// endpoint = "https://debloater.anyduck.workers.dev/filters.txt"
/// title = "ZTU Schedule"
/// catalog = "data"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub endpoint: Url,
	pub title: String,
	/// Directory holding `groups.json`, `electives.json` and `english.json`.
	/// The bundled catalog is used when unset.
	pub catalog: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.clone(),
			title: SUBSCRIPTION_TITLE.to_string(),
			catalog: None,
		}
	}
}

impl Config {
	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|source| Error::Io {
			path: path.to_path_buf(),
			source,
		})?;
		let mut config = Self::parse(&text, &path.display().to_string())?;

		// relative catalog paths are resolved against the config file
		if let (Some(catalog), Some(parent)) = (&config.catalog, path.parent()) {
			if catalog.is_relative() {
				config.catalog = Some(parent.join(catalog));
			}
		}

		debug!(path = %path.display(), endpoint = %config.endpoint, "loaded config");

		Ok(config)
	}

	pub fn parse(text: &str, origin: &str) -> Result<Self> {
		let config: Self = toml::from_str(text).map_err(|source| Error::Config {
			origin: origin.to_string(),
			source,
		})?;

		check_endpoint(&config.endpoint)?;

		Ok(config)
	}

	pub fn set_endpoint(&mut self, endpoint: &str) -> Result<()> {
		self.endpoint = parse_endpoint(endpoint)?;

		Ok(())
	}
}

pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
	let url = Url::parse(endpoint).map_err(|e| Error::Endpoint {
		endpoint: endpoint.to_string(),
		reason: e.to_string(),
	})?;

	check_endpoint(&url)?;

	Ok(url)
}

/// The filter query is appended verbatim, so the endpoint must be a plain
/// http(s) URL without its own query or fragment.
fn check_endpoint(url: &Url) -> Result<()> {
	let reason = if !matches!(url.scheme(), "http" | "https") {
		"scheme must be http or https"
	} else if url.query().is_some() {
		"must not contain a query"
	} else if url.fragment().is_some() {
		"must not contain a fragment"
	} else {
		return Ok(());
	};

	Err(Error::Endpoint {
		endpoint: url.to_string(),
		reason: reason.to_string(),
	})
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use super::*;

	#[test]
	fn default_points_at_debloater() {
		let config = Config::default();

		assert_eq!(config.endpoint.as_str(), DEBLOATER_URL);
		assert_eq!(config.title, "ZTU Schedule");
	}

	#[test]
	fn missing_keys_fall_back_to_defaults() {
		let config = Config::parse("title = \"Розклад\"", "inline").unwrap();

		assert_eq!(config.title, "Розклад");
		assert_eq!(config.endpoint.as_str(), DEBLOATER_URL);
		assert_eq!(config.catalog, None);
	}

	#[test]
	fn rejects_bad_endpoints() {
		for endpoint in [
			"not a url",
			"ftp://example.com/filters.txt",
			"https://example.com/filters.txt?x=1",
			"https://example.com/filters.txt#top",
		] {
			assert!(parse_endpoint(endpoint).is_err(), "{endpoint}");
		}

		assert!(Config::parse("endpoint = \"adp:subscribe\"", "inline").is_err());
		assert!(Config::parse("colour = \"red\"", "inline").is_err());
	}

	#[test]
	fn load_resolves_catalog_next_to_the_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("ztu-schedule.toml");
		let mut file = fs::File::create(&path).unwrap();

		writeln!(file, "endpoint = \"http://localhost:8787/filters.txt\"").unwrap();
		writeln!(file, "catalog = \"data\"").unwrap();

		let config = Config::load(&path).unwrap();

		assert_eq!(config.endpoint.as_str(), "http://localhost:8787/filters.txt");
		assert_eq!(config.catalog, Some(dir.path().join("data")));
	}

	#[test]
	fn load_reports_missing_file() {
		let err = Config::load(Path::new("/nonexistent/ztu-schedule.toml")).unwrap_err();

		assert!(matches!(err, Error::Io { .. }));
	}
}
