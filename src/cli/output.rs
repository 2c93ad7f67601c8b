use anyhow::Result;
use roster::{Publication, SearchEntry, SearchPhase, Section};
use serde_json::json;

use crate::workflow::WorkflowOutcome;

/// Print a plain-text representation of every publication.
pub(crate) fn print_plain(outcome: &WorkflowOutcome) {
	print!("{}", format_plain(outcome));
}

pub(crate) fn format_plain(outcome: &WorkflowOutcome) -> String {
	let mut out = String::new();
	for publication in &outcome.publications {
		push_publication(&mut out, publication);
	}
	if !outcome.settled {
		out.push_str("(search did not settle)\n");
	}
	out
}

fn push_publication(out: &mut String, publication: &Publication) {
	let phase = match publication.phase {
		SearchPhase::LocalOnly => "local",
		SearchPhase::LocalAndRemote => "local+remote",
	};
	out.push_str(&format!(
		"#{} '{}' [{phase}]\n",
		publication.sequence, publication.query
	));

	for section in Section::ALL {
		if let Some(title) = publication.section_title(section) {
			out.push_str(&format!("  {title}\n"));
		}
		let mut row = 0;
		while let Some(entry) = publication.result.entry_at(section, row) {
			let identity = match entry {
				SearchEntry::Contact(contact) => contact.identity.as_str(),
				SearchEntry::User(user) => user.identity.as_str(),
			};
			out.push_str(&format!("    {} ({identity})\n", entry.display_name()));
			row += 1;
		}
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &WorkflowOutcome) -> Result<String> {
	let payload = json!({
		"settled": outcome.settled,
		"publications": outcome.publications,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &WorkflowOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
