use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use tracing::debug;

use crate::{
	config::Config,
	selection::{FilterSelection, Subgroup},
};

pub const DEBLOATER_URL: &str = "https://debloater.anyduck.workers.dev/filters.txt";
pub const SUBSCRIPTION_TITLE: &str = "ZTU Schedule";
pub const SUBSCRIBE_PREFIX: &str = "adp:subscribe?";

/// Bytes left as-is in query keys and values; everything else, including
/// space, is percent-encoded.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'*')
	.remove(b'-')
	.remove(b'.')
	.remove(b'_');

#[derive(Default)]
struct Query(String);

impl Query {
	fn append(&mut self, key: &str, value: &str) -> &mut Self {
		if !self.0.is_empty() {
			self.0.push('&');
		}

		self.0.extend(utf8_percent_encode(key, QUERY));
		self.0.push('=');
		self.0.extend(utf8_percent_encode(value, QUERY));
		self
	}

	fn finish(self) -> String {
		self.0
	}
}

/// Builds the debloater URL for the default endpoint.
#[must_use]
pub fn raw_filter_url(selection: &FilterSelection) -> String {
	raw_filter_url_with(DEBLOATER_URL, selection)
}

#[must_use]
pub fn raw_filter_url_with(endpoint: &str, selection: &FilterSelection) -> String {
	let mut query = Query::default();

	query
		.append("group", &selection.group)
		.append("subgroup", selection.subgroup.map_or("", Subgroup::as_str))
		.append(
			"should_filter_electives_by_group",
			if selection.filter_electives_by_group {
				"true"
			} else {
				"false"
			},
		)
		.append("english", &selection.english_teacher);

	for elective in &selection.electives {
		query.append("electives", elective);
	}

	for (week, days) in &selection.elective_days {
		for day in days.iter() {
			query.append(week.param(), &day.to_string());
		}
	}

	format!("{endpoint}?{}", query.finish())
}

#[must_use]
pub fn subscription_url(raw_url: &str) -> String {
	subscription_url_with(SUBSCRIPTION_TITLE, raw_url)
}

/// Wraps a feed URL in a calendar-subscription deep link.
#[must_use]
pub fn subscription_url_with(title: &str, raw_url: &str) -> String {
	let mut query = Query::default();

	query.append("location", raw_url).append("title", title);

	format!("{SUBSCRIBE_PREFIX}{}", query.finish())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Links {
	pub raw: String,
	pub subscription: String,
	/// `false` while no group is chosen; front ends show the links as disabled.
	pub actionable: bool,
}

#[must_use]
pub fn links(selection: &FilterSelection, config: &Config) -> Links {
	let raw = raw_filter_url_with(config.endpoint.as_str(), selection);
	let subscription = subscription_url_with(&config.title, &raw);

	debug!(
		group = %selection.group,
		electives = selection.electives.len(),
		"built filter links"
	);

	Links {
		raw,
		subscription,
		actionable: selection.is_actionable(),
	}
}
