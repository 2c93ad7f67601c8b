use std::path::PathBuf;
use std::time::Duration;

use roster::SearchOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, Setting, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub contacts: PathBuf,
	pub directory: PathBuf,
	/// Delay added to every remote directory lookup.
	pub latency: Duration,
	pub search: SearchOptions,
	pub log_level: Option<String>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
