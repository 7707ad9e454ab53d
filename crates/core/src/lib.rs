//! Selection model for the ZTU schedule filter form and the encoder that
//! turns it into debloater feed links.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod day;
pub mod encode;
pub mod error;
pub mod selection;

pub use catalog::{Catalog, CatalogIssue, Teacher};
pub use config::Config;
pub use day::{Day, DaySet, ElectiveDays, Week, DAYS, WEEKS};
pub use encode::{
	links, raw_filter_url, raw_filter_url_with, subscription_url, subscription_url_with, Links,
};
pub use error::{Error, Result};
pub use selection::{Field, FieldError, FilterSelection, Subgroup, SUBGROUPS};
