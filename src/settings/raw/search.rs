use std::time::Duration;

use serde::Deserialize;

use roster::SearchOptions;

use crate::cli::CliArgs;

/// Session tuning as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) remote_timeout_ms: Option<u64>,
	pub(super) debounce_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.timeout_ms {
			self.remote_timeout_ms = Some(value);
		}
		if let Some(value) = cli.debounce_ms {
			self.debounce_ms = Some(value);
		}
	}

	pub(super) fn resolve(self) -> SearchOptions {
		let mut options = SearchOptions::default()
			.with_debounce(Duration::from_millis(self.debounce_ms.unwrap_or(0)));
		if let Some(ms) = self.remote_timeout_ms {
			options = options.with_remote_timeout(Duration::from_millis(ms));
		}
		options
	}
}

/// Diagnostic output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LogSection {
	pub(super) level: Option<String>,
}

impl LogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(level) = cli.log_level.clone() {
			self.level = Some(level);
		}
	}

	pub(super) fn resolve(self) -> Option<String> {
		self.level
			.map(|level| level.trim().to_string())
			.filter(|level| !level.is_empty())
	}
}
