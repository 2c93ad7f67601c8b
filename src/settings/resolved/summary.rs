use std::time::Duration;

use super::ResolvedConfig;
use super::super::util::display_path;

pub(super) fn print_summary(config: &ResolvedConfig) {
	for line in summary_lines(config) {
		println!("{line}");
	}
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	vec![
		"Effective configuration:".to_string(),
		format!("  Contacts: {}", display_path(&config.contacts)),
		format!("  Directory: {}", display_path(&config.directory)),
		format!("  Directory latency: {}", millis(config.latency)),
		format!(
			"  Remote timeout: {}",
			config
				.search
				.remote_timeout
				.map(millis)
				.unwrap_or_else(|| "none".to_string())
		),
		format!("  Debounce: {}", millis(config.search.debounce)),
		format!(
			"  Log level: {}",
			config.log_level.as_deref().unwrap_or("(RUST_LOG or warn)")
		),
	]
}

fn millis(duration: Duration) -> String {
	format!("{}ms", duration.as_millis())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use roster::SearchOptions;

	use super::*;

	#[test]
	fn summary_mentions_every_setting() {
		let config = ResolvedConfig {
			contacts: PathBuf::from("/srv/roster/contacts.json"),
			directory: PathBuf::from("/srv/roster/directory.json"),
			latency: Duration::from_millis(120),
			search: SearchOptions::default().with_debounce(Duration::from_millis(30)),
			log_level: Some("debug".into()),
		};

		let lines = summary_lines(&config);
		assert!(lines.iter().any(|line| line.ends_with("contacts.json")));
		assert!(lines.contains(&"  Directory latency: 120ms".to_string()));
		assert!(lines.contains(&"  Remote timeout: none".to_string()));
		assert!(lines.contains(&"  Debounce: 30ms".to_string()));
		assert!(lines.contains(&"  Log level: debug".to_string()));
	}
}
