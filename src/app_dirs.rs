//! Where `roster` looks for its configuration and data files.
//!
//! Both locations can be pinned with an environment variable; otherwise the
//! platform defaults from the `directories` crate are used.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

/// One of the application directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AppDir {
	/// Holds `config.toml`.
	Config,
	/// Holds the default `contacts.json` and `directory.json`.
	Data,
}

impl AppDir {
	fn override_var(self) -> &'static str {
		match self {
			AppDir::Config => "ROSTER_CONFIG_DIR",
			AppDir::Data => "ROSTER_DATA_DIR",
		}
	}

	fn locate(self) -> Result<PathBuf> {
		// An empty override counts as unset.
		if let Some(dir) = env::var_os(self.override_var()).filter(|value| !value.is_empty()) {
			return Ok(PathBuf::from(dir));
		}

		let dirs = ProjectDirs::from("io", "roster", "roster")
			.ok_or_else(|| anyhow!("no home directory to place roster files in"))?;
		let dir = match self {
			AppDir::Config => dirs.config_local_dir(),
			AppDir::Data => dirs.data_local_dir(),
		};
		Ok(dir.to_path_buf())
	}
}

pub fn get_config_dir() -> Result<PathBuf> {
	AppDir::Config.locate()
}

pub fn get_data_dir() -> Result<PathBuf> {
	AppDir::Data.locate()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn config_and_data_have_distinct_overrides() {
		assert_ne!(AppDir::Config.override_var(), AppDir::Data.override_var());
	}

	#[test]
	fn located_directories_are_absolute() {
		for dir in [AppDir::Config, AppDir::Data] {
			if env::var_os(dir.override_var()).is_some() {
				continue;
			}
			if let Ok(path) = dir.locate() {
				assert!(path.is_absolute());
			}
		}
	}
}
