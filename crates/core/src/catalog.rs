use std::{fs, path::Path};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::{
	error::{Error, Result},
	selection::FilterSelection,
};

pub const GROUPS_FILE: &str = "groups.json";
pub const ELECTIVES_FILE: &str = "electives.json";
pub const ENGLISH_FILE: &str = "english.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
	pub value: String,
	pub label: String,
}

/// Lists the form chooses from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
	pub groups: Vec<String>,
	pub electives: Vec<String>,
	pub english: Vec<Teacher>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogIssue {
	#[error("unknown group {0:?}")]
	UnknownGroup(String),
	#[error("unknown elective {0:?}")]
	UnknownElective(String),
	#[error("unknown English teacher {0:?}")]
	UnknownTeacher(String),
}

fn parse<T: DeserializeOwned>(text: &str, origin: &str) -> Result<T> {
	serde_json::from_str(text).map_err(|e| Error::json(origin, e))
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T> {
	let path = dir.join(name);
	let text = fs::read_to_string(&path).map_err(|source| Error::Io {
		path: path.clone(),
		source,
	})?;

	parse(&text, &path.display().to_string())
}

fn matches(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

impl Catalog {
	/// Sample catalog compiled into the binary.
	pub fn bundled() -> Result<Self> {
		Ok(Self {
			groups: parse(include_str!("../data/groups.json"), GROUPS_FILE)?,
			electives: parse(include_str!("../data/electives.json"), ELECTIVES_FILE)?,
			english: parse(include_str!("../data/english.json"), ENGLISH_FILE)?,
		})
	}

	pub fn load(dir: &Path) -> Result<Self> {
		let catalog = Self {
			groups: read(dir, GROUPS_FILE)?,
			electives: read(dir, ELECTIVES_FILE)?,
			english: read(dir, ENGLISH_FILE)?,
		};

		debug!(
			dir = %dir.display(),
			groups = catalog.groups.len(),
			electives = catalog.electives.len(),
			teachers = catalog.english.len(),
			"loaded catalog"
		);

		Ok(catalog)
	}

	#[must_use]
	pub fn has_group(&self, group: &str) -> bool {
		self.groups.iter().any(|g| g == group)
	}

	#[must_use]
	pub fn has_elective(&self, elective: &str) -> bool {
		self.electives.iter().any(|e| e == elective)
	}

	#[must_use]
	pub fn teacher(&self, value: &str) -> Option<&Teacher> {
		self.english.iter().find(|t| t.value == value)
	}

	/// Case-insensitive substring search, in catalog order.
	#[must_use]
	pub fn search_groups(&self, query: &str) -> Vec<&str> {
		let query = query.to_lowercase();

		self.groups
			.iter()
			.filter(|g| matches(g, &query))
			.map(String::as_str)
			.collect()
	}

	#[must_use]
	pub fn search_electives(&self, query: &str) -> Vec<&str> {
		let query = query.to_lowercase();

		self.electives
			.iter()
			.filter(|e| matches(e, &query))
			.map(String::as_str)
			.collect()
	}

	/// Matches either the teacher id or the display label.
	#[must_use]
	pub fn search_teachers(&self, query: &str) -> Vec<&Teacher> {
		let query = query.to_lowercase();

		self.english
			.iter()
			.filter(|t| matches(&t.value, &query) || matches(&t.label, &query))
			.collect()
	}

	/// Reports selected ids that the catalog does not list. Empty fields are
	/// left to [`FilterSelection::validate`].
	#[must_use]
	pub fn check(&self, selection: &FilterSelection) -> Vec<CatalogIssue> {
		let mut issues = Vec::new();

		if !selection.group.is_empty() && !self.has_group(&selection.group) {
			issues.push(CatalogIssue::UnknownGroup(selection.group.clone()));
		}

		issues.extend(
			selection
				.electives
				.iter()
				.filter(|e| !self.has_elective(e))
				.map(|e| CatalogIssue::UnknownElective(e.clone())),
		);

		if !selection.english_teacher.is_empty() && self.teacher(&selection.english_teacher).is_none() {
			issues.push(CatalogIssue::UnknownTeacher(
				selection.english_teacher.clone(),
			));
		}

		issues
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_catalog_parses() {
		let catalog = Catalog::bundled().unwrap();

		assert!(catalog.has_group("ПК-21"));
		assert!(catalog.has_elective("Economics"));
		assert_eq!(catalog.teacher("ivanenko").map(|t| t.label.as_str()), Some("Іваненко І. І."));
	}

	#[test]
	fn search_ignores_case() {
		let catalog = Catalog::bundled().unwrap();

		assert_eq!(catalog.search_groups("пк"), ["ПК-21", "ПК-22"]);
		assert_eq!(catalog.search_electives("DESIGN"), ["Web Design"]);
		assert_eq!(catalog.search_groups("").len(), catalog.groups.len());
	}

	#[test]
	fn teacher_search_matches_label() {
		let catalog = Catalog::bundled().unwrap();
		let found = catalog.search_teachers("шевч");

		assert_eq!(found.len(), 1);
		assert_eq!(found[0].value, "shevchenko");
	}

	#[test]
	fn check_reports_unknown_ids() {
		let catalog = Catalog::bundled().unwrap();
		let mut selection = FilterSelection::default();

		assert!(catalog.check(&selection).is_empty());

		selection.set_group("XX-99");
		selection.toggle_elective("Economics");
		selection.toggle_elective("Astrology");
		selection.set_english_teacher("nobody");

		assert_eq!(
			catalog.check(&selection),
			[
				CatalogIssue::UnknownGroup("XX-99".to_string()),
				CatalogIssue::UnknownElective("Astrology".to_string()),
				CatalogIssue::UnknownTeacher("nobody".to_string()),
			]
		);
	}

	#[test]
	fn load_reads_all_three_files() {
		let dir = tempfile::tempdir().unwrap();

		fs::write(dir.path().join(GROUPS_FILE), r#"["А-1"]"#).unwrap();
		fs::write(dir.path().join(ELECTIVES_FILE), "[]").unwrap();
		fs::write(
			dir.path().join(ENGLISH_FILE),
			r#"[{"value": "t", "label": "T"}]"#,
		)
		.unwrap();

		let catalog = Catalog::load(dir.path()).unwrap();

		assert_eq!(catalog.groups, ["А-1"]);
		assert!(catalog.electives.is_empty());
		assert_eq!(catalog.english.len(), 1);
	}

	#[test]
	fn load_reports_the_broken_file() {
		let dir = tempfile::tempdir().unwrap();

		fs::write(dir.path().join(GROUPS_FILE), "{").unwrap();

		let err = Catalog::load(dir.path()).unwrap_err();

		assert!(matches!(err, Error::Json { ref origin, .. } if origin.ends_with(GROUPS_FILE)));

		let missing = tempfile::tempdir().unwrap();

		assert!(matches!(Catalog::load(missing.path()), Err(Error::Io { .. })));
	}
}
