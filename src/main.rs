mod cli;
mod settings;
mod workflow;

use std::time::Duration;

use anyhow::Result;
use cli::{CliArgs, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	roster::logging::initialize(resolved.log_level.as_deref());

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(cli, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(cli: CliArgs, settings: ResolvedConfig) -> Result<()> {
	let format = cli.output;
	let workflow = SearchWorkflow::from_config(
		settings,
		cli.queries,
		Duration::from_millis(cli.interval_ms),
		Duration::from_millis(cli.settle_ms),
	)?;
	let outcome = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
