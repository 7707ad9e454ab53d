use std::{
	array,
	cmp::Ordering,
	fmt,
	iter::{Copied, Zip},
	ops::Index,
	slice,
	str::FromStr,
};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A teaching day, Monday through Saturday. Identified on the wire by its
/// number from Monday, so Monday is `1` and Saturday is `6`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(Weekday);

pub const DAYS: [Day; 6] = [
	Day(Weekday::Mon),
	Day(Weekday::Tue),
	Day(Weekday::Wed),
	Day(Weekday::Thu),
	Day(Weekday::Fri),
	Day(Weekday::Sat),
];

impl Day {
	pub const MONDAY: Self = Self(Weekday::Mon);
	pub const TUESDAY: Self = Self(Weekday::Tue);
	pub const WEDNESDAY: Self = Self(Weekday::Wed);
	pub const THURSDAY: Self = Self(Weekday::Thu);
	pub const FRIDAY: Self = Self(Weekday::Fri);
	pub const SATURDAY: Self = Self(Weekday::Sat);

	#[must_use]
	pub fn weekday(self) -> Weekday {
		self.0
	}

	#[must_use]
	#[allow(clippy::cast_possible_truncation)]
	pub fn id(self) -> u8 {
		self.0.number_from_monday() as u8
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self.0 {
			Weekday::Mon => "Понеділок",
			Weekday::Tue => "Вівторок",
			Weekday::Wed => "Середа",
			Weekday::Thu => "Четвер",
			Weekday::Fri => "П'ятниця",
			Weekday::Sat => "Субота",
			Weekday::Sun => "Неділя",
		}
	}

	fn bit(self) -> u8 {
		1 << (self.id() - 1)
	}
}

impl Ord for Day {
	fn cmp(&self, other: &Self) -> Ordering {
		self.id().cmp(&other.id())
	}
}

impl PartialOrd for Day {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Debug for Day {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl fmt::Display for Day {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}", self.id())
	}
}

impl TryFrom<u8> for Day {
	type Error = Error;

	fn try_from(id: u8) -> Result<Self> {
		match id {
			1..=6 => Ok(DAYS[usize::from(id - 1)]),
			_ => Err(Error::Day(id.to_string())),
		}
	}
}

impl From<Day> for u8 {
	fn from(day: Day) -> Self {
		day.id()
	}
}

impl FromStr for Day {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let id = s.trim().parse::<u8>().map_err(|_| Error::Day(s.to_string()))?;

		Self::try_from(id).map_err(|_| Error::Day(s.to_string()))
	}
}

/// Set of days within one week, stored as a bitset. Iteration is always in
/// ascending day order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<Day>", into = "Vec<Day>")]
pub struct DaySet(u8);

impl DaySet {
	#[must_use]
	pub const fn new() -> Self {
		Self(0)
	}

	#[must_use]
	pub fn contains(self, day: Day) -> bool {
		self.0 & day.bit() != 0
	}

	/// Returns `true` if the day was not already present.
	pub fn insert(&mut self, day: Day) -> bool {
		let added = !self.contains(day);
		self.0 |= day.bit();
		added
	}

	/// Returns `true` if the day was present.
	pub fn remove(&mut self, day: Day) -> bool {
		let removed = self.contains(day);
		self.0 &= !day.bit();
		removed
	}

	pub fn set(&mut self, day: Day, checked: bool) {
		if checked {
			self.insert(day);
		} else {
			self.remove(day);
		}
	}

	#[must_use]
	pub fn len(self) -> usize {
		self.0.count_ones() as usize
	}

	#[must_use]
	pub fn is_empty(self) -> bool {
		self.0 == 0
	}

	pub fn iter(self) -> impl Iterator<Item = Day> {
		DAYS.into_iter().filter(move |&day| self.contains(day))
	}
}

impl fmt::Debug for DaySet {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl FromIterator<Day> for DaySet {
	fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
		let mut set = Self::new();

		for day in iter {
			set.insert(day);
		}

		set
	}
}

impl From<Vec<Day>> for DaySet {
	fn from(days: Vec<Day>) -> Self {
		days.into_iter().collect()
	}
}

impl From<DaySet> for Vec<Day> {
	fn from(set: DaySet) -> Self {
		set.iter().collect()
	}
}

/// Parses a comma-separated list of day ids such as `2,5,6`. An empty
/// string is the empty set.
impl FromStr for DaySet {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		s.split(',')
			.map(str::trim)
			.filter(|part| !part.is_empty())
			.map(str::parse::<Day>)
			.collect()
	}
}

/// The schedule alternates between two weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Week {
	First,
	Second,
}

pub const WEEKS: [Week; 2] = [Week::First, Week::Second];

impl Week {
	#[must_use]
	pub fn index(self) -> usize {
		match self {
			Self::First => 0,
			Self::Second => 1,
		}
	}

	#[must_use]
	pub fn number(self) -> u8 {
		match self {
			Self::First => 1,
			Self::Second => 2,
		}
	}

	/// Query parameter carrying this week's elective days.
	#[must_use]
	pub fn param(self) -> &'static str {
		match self {
			Self::First => "days_with_electives[1]",
			Self::Second => "days_with_electives[2]",
		}
	}
}

/// Days on which electives happen, one set per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElectiveDays([DaySet; 2]);

impl ElectiveDays {
	#[must_use]
	pub fn new(first: DaySet, second: DaySet) -> Self {
		Self([first, second])
	}

	#[must_use]
	pub fn week(&self, week: Week) -> DaySet {
		self.0[week.index()]
	}

	pub fn week_mut(&mut self, week: Week) -> &mut DaySet {
		&mut self.0[week.index()]
	}

	/// Flips a single checkbox and returns whether it is now checked.
	pub fn toggle(&mut self, week: Week, day: Day) -> bool {
		let set = self.week_mut(week);

		if set.remove(day) {
			false
		} else {
			set.insert(day);
			true
		}
	}

	pub fn iter(&self) -> ElectiveDaysIter<'_> {
		WEEKS.into_iter().zip(self.0.iter().copied())
	}
}

pub type ElectiveDaysIter<'a> = Zip<array::IntoIter<Week, 2>, Copied<slice::Iter<'a, DaySet>>>;

impl<'a> IntoIterator for &'a ElectiveDays {
	type Item = (Week, DaySet);
	type IntoIter = ElectiveDaysIter<'a>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl Default for ElectiveDays {
	fn default() -> Self {
		Self::new(
			[Day::FRIDAY, Day::SATURDAY].into_iter().collect(),
			[Day::TUESDAY, Day::FRIDAY, Day::SATURDAY]
				.into_iter()
				.collect(),
		)
	}
}

impl Index<Week> for ElectiveDays {
	type Output = DaySet;

	fn index(&self, week: Week) -> &DaySet {
		&self.0[week.index()]
	}
}
