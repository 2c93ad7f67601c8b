use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, Setting};

mod search;
mod sources;

use search::{LogSection, SearchSection};
use sources::SourcesSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	sources: SourcesSection,
	search: SearchSection,
	log: LogSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.sources.apply_cli_overrides(cli);
		self.search.apply_cli_overrides(cli);
		self.log.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			contacts: Setting::CONTACTS
				.origin(cli.contacts.is_some(), self.sources.contacts.is_some()),
			directory: Setting::DIRECTORY
				.origin(cli.directory.is_some(), self.sources.directory.is_some()),
			remote_timeout: Setting::REMOTE_TIMEOUT.origin(
				cli.timeout_ms.is_some(),
				self.search.remote_timeout_ms.is_some(),
			),
		};

		let resolved_sources = self.sources.resolve()?;
		let config = ResolvedConfig {
			contacts: resolved_sources.contacts,
			directory: resolved_sources.directory,
			latency: resolved_sources.latency,
			search: self.search.resolve(),
			log_level: self.log.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}
