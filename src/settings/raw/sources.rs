use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use roster::app_dirs;

use crate::cli::CliArgs;

use super::super::util::absolutize;

const CONTACTS_FILE: &str = "contacts.json";
const DIRECTORY_FILE: &str = "directory.json";

/// Locations of the contact list and the directory backing file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SourcesSection {
	pub(super) contacts: Option<PathBuf>,
	pub(super) directory: Option<PathBuf>,
	pub(super) latency_ms: Option<u64>,
}

/// Paths and latency after defaults have been filled in.
pub(super) struct ResolvedSources {
	pub(super) contacts: PathBuf,
	pub(super) directory: PathBuf,
	pub(super) latency: Duration,
}

impl SourcesSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.contacts.clone() {
			self.contacts = Some(path);
		}
		if let Some(path) = cli.directory.clone() {
			self.directory = Some(path);
		}
		if let Some(value) = cli.latency_ms {
			self.latency_ms = Some(value);
		}
	}

	pub(super) fn resolve(self) -> Result<ResolvedSources> {
		let contacts = match self.contacts {
			Some(path) => absolutize(path)?,
			None => default_file(CONTACTS_FILE)?,
		};
		let directory = match self.directory {
			Some(path) => absolutize(path)?,
			None => default_file(DIRECTORY_FILE)?,
		};

		Ok(ResolvedSources {
			contacts,
			directory,
			latency: Duration::from_millis(self.latency_ms.unwrap_or(0)),
		})
	}
}

fn default_file(name: &str) -> Result<PathBuf> {
	let dir = app_dirs::get_data_dir()
		.with_context(|| format!("no path given for {name} and no data directory available"))?;
	Ok(dir.join(name))
}
