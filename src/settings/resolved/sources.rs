use std::env;
use std::fmt;

/// A user-settable value, named the three ways it can be supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Setting {
	pub(crate) key: &'static str,
	pub(crate) env_var: &'static str,
	pub(crate) flag: &'static str,
}

impl Setting {
	pub(crate) const CONTACTS: Setting = Setting {
		key: "sources.contacts",
		env_var: "ROSTER__SOURCES__CONTACTS",
		flag: "--contacts",
	};
	pub(crate) const DIRECTORY: Setting = Setting {
		key: "sources.directory",
		env_var: "ROSTER__SOURCES__DIRECTORY",
		flag: "--directory",
	};
	pub(crate) const REMOTE_TIMEOUT: Setting = Setting {
		key: "search.remote_timeout_ms",
		env_var: "ROSTER__SEARCH__REMOTE_TIMEOUT_MS",
		flag: "--timeout-ms",
	};

	/// Work out which layer supplied the value. CLI flags win, then the
	/// environment, then config files; an unset value came from nowhere.
	pub(crate) fn origin(self, from_cli: bool, is_set: bool) -> Option<SettingSource> {
		if !is_set {
			None
		} else if from_cli {
			Some(SettingSource::CliFlag(self.flag))
		} else if env::var_os(self.env_var).is_some() {
			Some(SettingSource::Environment(self.env_var))
		} else {
			Some(SettingSource::ConfigKey(self.key))
		}
	}
}

/// Where a configuration value came from, for error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
	Default,
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
			Self::Default => f.write_str("the built-in default"),
		}
	}
}

/// Origins of the settings that validation can reject. `None` means the
/// built-in default was used.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) contacts: Option<SettingSource>,
	pub(crate) directory: Option<SettingSource>,
	pub(crate) remote_timeout: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn origin_of(&self, setting: Setting) -> SettingSource {
		let recorded = match setting {
			Setting::CONTACTS => &self.contacts,
			Setting::DIRECTORY => &self.directory,
			Setting::REMOTE_TIMEOUT => &self.remote_timeout,
			_ => &None,
		};
		recorded.clone().unwrap_or(SettingSource::Default)
	}
}
