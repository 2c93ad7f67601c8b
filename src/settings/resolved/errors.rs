use thiserror::Error;

use super::{Setting, SettingSource};

/// A configured value that resolved but cannot be used.
#[derive(Debug, Error)]
#[error("{key} = {value} (from {origin}) {reason}")]
pub(crate) struct ConfigError {
	pub(crate) key: &'static str,
	pub(crate) value: String,
	pub(crate) origin: SettingSource,
	pub(crate) reason: &'static str,
}

impl ConfigError {
	pub(crate) fn rejected(
		setting: Setting,
		value: impl ToString,
		origin: SettingSource,
		reason: &'static str,
	) -> Self {
		Self {
			key: setting.key,
			value: value.to_string(),
			origin,
			reason,
		}
	}
}
