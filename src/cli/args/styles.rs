use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use roster::app_dirs;

/// Version banner for `--version`, listing where files are looked up.
pub(super) fn long_version() -> &'static str {
	let show = |dir: anyhow::Result<std::path::PathBuf>| match dir {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let banner = [
		env!("CARGO_PKG_VERSION").to_string(),
		format!("config directory: {}", show(app_dirs::get_config_dir())),
		format!("data directory: {}", show(app_dirs::get_data_dir())),
	]
	.join("\n");

	// clap wants a 'static str; the banner is built once per process.
	Box::leak(banner.into_boxed_str())
}

pub(super) fn cli_styles() -> Styles {
	let heading = AnsiColor::Green.on_default().effects(Effects::BOLD);
	Styles::styled()
		.header(heading)
		.usage(heading)
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}
