use std::path::Path;

use super::{ConfigError, ConfigSources, ResolvedConfig, Setting};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if let Some(timeout) = config.search.remote_timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::rejected(
			Setting::REMOTE_TIMEOUT,
			timeout.as_millis(),
			sources.origin_of(Setting::REMOTE_TIMEOUT),
			"must be greater than zero",
		));
	}

	for (setting, path) in [
		(Setting::CONTACTS, &config.contacts),
		(Setting::DIRECTORY, &config.directory),
	] {
		ensure_file(setting, path, sources)?;
	}

	Ok(())
}

fn ensure_file(setting: Setting, path: &Path, sources: &ConfigSources) -> Result<(), ConfigError> {
	if path.is_file() {
		return Ok(());
	}
	Err(ConfigError::rejected(
		setting,
		path.display(),
		sources.origin_of(setting),
		"must name an existing file",
	))
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;
	use std::time::Duration;

	use roster::SearchOptions;
	use tempfile::NamedTempFile;

	use super::super::SettingSource;
	use super::*;

	fn config(contacts: PathBuf, directory: PathBuf, search: SearchOptions) -> ResolvedConfig {
		ResolvedConfig {
			contacts,
			directory,
			latency: Duration::ZERO,
			search,
			log_level: None,
		}
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let contacts = NamedTempFile::new().expect("contacts");
		let directory = NamedTempFile::new().expect("directory");
		let config = config(
			contacts.path().to_path_buf(),
			directory.path().to_path_buf(),
			SearchOptions::default().with_remote_timeout(Duration::ZERO),
		);
		let sources = ConfigSources {
			remote_timeout: Some(SettingSource::CliFlag("--timeout-ms")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "search.remote_timeout_ms");
		let message = err.to_string();
		assert!(message.starts_with("search.remote_timeout_ms = 0 (from CLI flag"));
	}

	#[test]
	fn validation_rejects_missing_contacts_file() {
		let directory = NamedTempFile::new().expect("directory");
		let config = config(
			PathBuf::from("/nonexistent/roster/contacts.json"),
			directory.path().to_path_buf(),
			SearchOptions::default(),
		);

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "sources.contacts");
		assert_eq!(err.origin, SettingSource::Default);
		assert!(err.to_string().contains("built-in default"));
	}

	#[test]
	fn validation_accepts_existing_files() {
		let contacts = NamedTempFile::new().expect("contacts");
		let directory = NamedTempFile::new().expect("directory");
		let config = config(
			contacts.path().to_path_buf(),
			directory.path().to_path_buf(),
			SearchOptions::default().with_remote_timeout(Duration::from_millis(250)),
		);

		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}
}
