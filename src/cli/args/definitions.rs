use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `roster` binary.
#[derive(Parser, Debug)]
#[command(
	name = "roster",
	version,
	long_version = long_version(),
	about = "Search local contacts and a remote user directory as you type",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "ROSTER_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		long,
		value_name = "FILE",
		help = "JSON file with the local contact list (default: contacts.json in the data directory)"
	)]
	pub(crate) contacts: Option<PathBuf>,
	#[arg(
		long,
		value_name = "FILE",
		help = "JSON file backing the remote directory (default: directory.json in the data directory)"
	)]
	pub(crate) directory: Option<PathBuf>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		action = ArgAction::Append,
		help = "Query text to submit; repeat to replay successive keystrokes (default: empty query)"
	)]
	pub(crate) queries: Vec<String>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Simulated remote directory latency (default: 0)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		long = "timeout-ms",
		value_name = "MS",
		help = "Give up on a remote lookup after this long (default: wait indefinitely)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		help = "Delay remote lookups until the text is stable for this long (default: 0)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "interval-ms",
		value_name = "MS",
		default_value_t = 0,
		help = "Pause between replayed queries"
	)]
	pub(crate) interval_ms: u64,
	#[arg(
		long = "settle-ms",
		value_name = "MS",
		default_value_t = 5_000,
		help = "How long to wait for the last query to settle"
	)]
	pub(crate) settle_ms: u64,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Tracing filter directive such as `debug` (default: RUST_LOG or warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the publications"
	)]
	pub(crate) output: OutputFormat,
}
