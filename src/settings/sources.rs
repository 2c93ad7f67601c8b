use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};

use crate::cli::CliArgs;
use roster::app_dirs;

/// Prefix for environment overrides such as `ROSTER__SEARCH__DEBOUNCE_MS`.
pub(super) const ENV_PREFIX: &str = "roster";

/// Stack every configuration layer, lowest precedence first. CLI flags are
/// applied later, on the deserialised value.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let defaults = if cli.no_config {
		Vec::new()
	} else {
		default_config_files()
	};

	let files = defaults
		.into_iter()
		.map(|path| File::from(path).required(false))
		.chain(cli.config.iter().map(|path| File::from(path.as_path()).required(true)));

	files
		.fold(Config::builder(), |builder, file| builder.add_source(file))
		.add_source(Environment::with_prefix(ENV_PREFIX).separator("__").try_parsing(true))
		.build()
		.context("failed to read configuration")
}

/// Optional config files: the per-user file, then `.roster.toml` and
/// `roster.toml` in the working directory.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let user = app_dirs::get_config_dir().ok().map(|dir| dir.join("config.toml"));
	let local = env::current_dir()
		.ok()
		.into_iter()
		.flat_map(|cwd| [cwd.join(".roster.toml"), cwd.join("roster.toml")]);

	user.into_iter().chain(local).collect()
}
