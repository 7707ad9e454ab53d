#![warn(clippy::pedantic)]

use wasm_bindgen::{prelude::wasm_bindgen, JsError};
use ztu_schedule_core::{Config, FilterSelection};

fn parse(selection: &str) -> Result<FilterSelection, JsError> {
	Ok(serde_json::from_str(selection)?)
}

/// Takes the form values as JSON and returns `{ raw, subscription, actionable }`.
/// Each week of `days_with_electives` must be an array of day ids, so convert
/// the form's sets with `Array.from` before `JSON.stringify`.
#[wasm_bindgen]
pub fn links(selection: &str) -> Result<String, JsError> {
	let links = ztu_schedule_core::links(&parse(selection)?, &Config::default());

	Ok(serde_json::to_string(&links)?)
}

#[wasm_bindgen(js_name = rawFilterUrl)]
pub fn raw_filter_url(selection: &str) -> Result<String, JsError> {
	Ok(ztu_schedule_core::raw_filter_url(&parse(selection)?))
}

#[wasm_bindgen(js_name = subscriptionUrl)]
#[must_use]
pub fn subscription_url(raw_url: &str) -> String {
	ztu_schedule_core::subscription_url(raw_url)
}

/// Field errors as a JSON array of `{ field, message }`.
#[wasm_bindgen]
pub fn validate(selection: &str) -> Result<String, JsError> {
	Ok(serde_json::to_string(&parse(selection)?.validate())?)
}

#[wasm_bindgen(js_name = defaultSelection)]
pub fn default_selection() -> Result<String, JsError> {
	Ok(serde_json::to_string(&FilterSelection::default())?)
}

#[cfg(test)]
mod tests {
	use serde_json::Value;

	use super::*;

	fn json(result: Result<String, JsError>) -> Value {
		let Ok(text) = result else {
			panic!("binding returned an error");
		};

		serde_json::from_str(&text).unwrap()
	}

	#[test]
	fn links_for_a_chosen_group_are_actionable() {
		let links = json(links(r#"{"group": "ПК-21"}"#));

		assert_eq!(links["actionable"], true);
		assert!(links["raw"]
			.as_str()
			.unwrap()
			.starts_with("https://debloater.anyduck.workers.dev/filters.txt?group=%D0%9F%D0%9A-21&"));
	}

	#[test]
	fn default_selection_feeds_back_into_links() {
		let Ok(selection) = default_selection() else {
			panic!("default selection failed");
		};
		let links = json(links(&selection));

		assert_eq!(links["actionable"], false);
		assert!(links["raw"]
			.as_str()
			.unwrap()
			.ends_with("days_with_electives%5B2%5D=2&days_with_electives%5B2%5D=5&days_with_electives%5B2%5D=6"));
	}

	#[test]
	fn raw_and_subscription_urls_agree_with_links() {
		let selection = r#"{"group": "ПК-21", "subgroup": "1"}"#;
		let links = json(links(selection));
		let Ok(raw) = raw_filter_url(selection) else {
			panic!("raw url failed");
		};

		assert_eq!(links["raw"], raw.as_str());
		assert_eq!(links["subscription"], subscription_url(&raw).as_str());
	}

	#[test]
	fn validate_lists_every_missing_field() {
		let errors = json(validate("{}"));
		let fields = errors
			.as_array()
			.unwrap()
			.iter()
			.map(|e| e["field"].as_str().unwrap())
			.collect::<Vec<_>>();

		assert_eq!(fields, ["group", "subgroup", "english_teacher"]);
	}
}
