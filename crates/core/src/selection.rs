use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
	day::{Day, ElectiveDays, Week},
	error::{Error, Result},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subgroup {
	One,
	Two,
}

pub const SUBGROUPS: [Subgroup; 2] = [Subgroup::One, Subgroup::Two];

impl Subgroup {
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::One => "1",
			Self::Two => "2",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::One => "Підгрупа 1",
			Self::Two => "Підгрупа 2",
		}
	}
}

impl fmt::Display for Subgroup {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Subgroup {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		Ok(match s.trim() {
			"1" => Self::One,
			"2" => Self::Two,
			_ => return Err(Error::Subgroup(s.to_string())),
		})
	}
}

/// The form encodes "no subgroup chosen" as an empty string.
mod subgroup_field {
	use serde::{de, Deserialize, Deserializer, Serializer};

	use super::Subgroup;

	pub fn serialize<S: Serializer>(value: &Option<Subgroup>, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(value.map_or("", Subgroup::as_str))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Subgroup>, D::Error> {
		let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();

		if raw.is_empty() {
			return Ok(None);
		}

		raw.parse().map(Some).map_err(de::Error::custom)
	}
}

/// Everything the student picked on the form. Field names on the wire match
/// the web form, but each week of `days_with_electives` must be sent as an
/// array of day ids (`Array.from(set)`); a JS `Set` serializes to `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
	pub group: String,
	#[serde(with = "subgroup_field")]
	pub subgroup: Option<Subgroup>,
	#[serde(rename = "should_filter_electives_by_group")]
	pub filter_electives_by_group: bool,
	#[serde(rename = "days_with_electives")]
	pub elective_days: ElectiveDays,
	pub electives: Vec<String>,
	pub english_teacher: String,
}

impl Default for FilterSelection {
	fn default() -> Self {
		Self {
			group: String::new(),
			subgroup: None,
			filter_electives_by_group: true,
			elective_days: ElectiveDays::default(),
			electives: Vec::new(),
			english_teacher: String::new(),
		}
	}
}

impl FilterSelection {
	/// Picking the group that is already selected clears it.
	pub fn select_group(&mut self, group: &str) {
		if self.group == group {
			self.group.clear();
		} else {
			self.group = group.to_string();
		}
	}

	pub fn set_group(&mut self, group: impl Into<String>) {
		self.group = group.into();
	}

	pub fn set_subgroup(&mut self, subgroup: Option<Subgroup>) {
		self.subgroup = subgroup;
	}

	pub fn set_filter_electives_by_group(&mut self, enabled: bool) {
		self.filter_electives_by_group = enabled;
	}

	pub fn set_english_teacher(&mut self, teacher: impl Into<String>) {
		self.english_teacher = teacher.into();
	}

	/// Removes the elective if it is selected, otherwise appends it. Returns
	/// whether it is selected afterwards.
	pub fn toggle_elective(&mut self, elective: &str) -> bool {
		if let Some(index) = self.electives.iter().position(|e| e == elective) {
			self.electives.remove(index);
			false
		} else {
			self.electives.push(elective.to_string());
			true
		}
	}

	/// Appends the elective unless it is already selected.
	pub fn add_elective(&mut self, elective: &str) {
		if !self.has_elective(elective) {
			self.electives.push(elective.to_string());
		}
	}

	#[must_use]
	pub fn has_elective(&self, elective: &str) -> bool {
		self.electives.iter().any(|e| e == elective)
	}

	pub fn toggle_day(&mut self, week: Week, day: Day) -> bool {
		self.elective_days.toggle(week, day)
	}

	pub fn set_day(&mut self, week: Week, day: Day, checked: bool) {
		self.elective_days.week_mut(week).set(day, checked);
	}

	/// Whether the generated links should be offered to the user. The links
	/// are built either way.
	#[must_use]
	pub fn is_actionable(&self) -> bool {
		!self.group.is_empty()
	}

	#[must_use]
	pub fn validate(&self) -> Vec<FieldError> {
		let mut errors = Vec::new();

		if self.group.is_empty() {
			errors.push(FieldError::new(Field::Group));
		}

		if self.subgroup.is_none() {
			errors.push(FieldError::new(Field::Subgroup));
		}

		if self.english_teacher.is_empty() {
			errors.push(FieldError::new(Field::EnglishTeacher));
		}

		errors
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
	Group,
	Subgroup,
	EnglishTeacher,
}

impl Field {
	fn message(self) -> &'static str {
		match self {
			Self::Group => "Please select a group",
			Self::Subgroup => "Please select a subgroup",
			Self::EnglishTeacher => "Please select an English teacher",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
	pub field: Field,
	pub message: &'static str,
}

impl FieldError {
	fn new(field: Field) -> Self {
		Self {
			field,
			message: field.message(),
		}
	}
}

impl fmt::Display for FieldError {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(self.message)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn subgroups_have_labels() {
		let labels = SUBGROUPS.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>();

		assert_eq!(labels, [("1", "Підгрупа 1"), ("2", "Підгрупа 2")]);
		assert_eq!(" 2 ".parse::<Subgroup>().unwrap(), Subgroup::Two);
	}

	#[test]
	fn defaults_match_the_form() {
		let selection = FilterSelection::default();

		assert!(selection.filter_electives_by_group);
		assert_eq!(
			selection.elective_days.week(Week::Second).iter().map(Day::id).collect::<Vec<_>>(),
			[2, 5, 6]
		);
		assert!(!selection.is_actionable());
	}

	#[test]
	fn selecting_the_same_group_clears_it() {
		let mut selection = FilterSelection::default();

		selection.select_group("ПК-21");
		assert_eq!(selection.group, "ПК-21");
		assert!(selection.is_actionable());

		selection.select_group("ПК-22");
		assert_eq!(selection.group, "ПК-22");

		selection.select_group("ПК-22");
		assert!(selection.group.is_empty());
	}

	#[test]
	fn toggling_an_elective_twice_restores_order() {
		let mut selection = FilterSelection::default();

		selection.toggle_elective("Economics");
		selection.toggle_elective("Philosophy");
		selection.toggle_elective("Psychology");

		let before = selection.electives.clone();

		assert!(selection.toggle_elective("Web Design"));
		assert!(!selection.toggle_elective("Web Design"));
		assert_eq!(selection.electives, before);

		assert!(!selection.toggle_elective("Philosophy"));
		assert_eq!(selection.electives, ["Economics", "Psychology"]);
	}

	#[test]
	fn add_elective_does_not_duplicate() {
		let mut selection = FilterSelection::default();

		selection.add_elective("Economics");
		selection.add_elective("Economics");

		assert_eq!(selection.electives, ["Economics"]);
	}

	#[test]
	fn validation_reports_missing_fields() {
		let mut selection = FilterSelection::default();
		let fields = selection.validate().iter().map(|e| e.field).collect::<Vec<_>>();

		assert_eq!(fields, [Field::Group, Field::Subgroup, Field::EnglishTeacher]);

		selection.set_group("ПК-21");
		selection.set_subgroup(Some(Subgroup::Two));
		selection.set_english_teacher("ivanenko");

		assert!(selection.validate().is_empty());
	}

	#[test]
	fn reads_form_values() {
		let selection: FilterSelection = serde_json::from_str(
			r#"{
				"group": "ПК-21",
				"subgroup": "",
				"should_filter_electives_by_group": false,
				"days_with_electives": [[1], [3, 4]],
				"electives": ["Economics"],
				"english_teacher": "ivanenko"
			}"#,
		)
		.unwrap();

		assert_eq!(selection.subgroup, None);
		assert!(!selection.filter_electives_by_group);
		assert!(selection.elective_days.week(Week::First).contains(Day::MONDAY));

		let partial: FilterSelection = serde_json::from_str(r#"{"subgroup": "2"}"#).unwrap();

		assert_eq!(partial.subgroup, Some(Subgroup::Two));
		assert_eq!(partial.elective_days, ElectiveDays::default());

		assert!(serde_json::from_str::<FilterSelection>(r#"{"subgroup": "3"}"#).is_err());
		assert!(serde_json::from_str::<FilterSelection>(r#"{"days_with_electives": [{}, {}]}"#).is_err());
	}

	#[test]
	fn writes_empty_subgroup_as_empty_string() {
		let json = serde_json::to_value(FilterSelection::default()).unwrap();

		assert_eq!(json["subgroup"], "");
		assert_eq!(json["days_with_electives"], serde_json::json!([[5, 6], [2, 5, 6]]));
	}
}
