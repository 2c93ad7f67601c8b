use std::mem;
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use roster::{JsonContacts, JsonDirectory, Publication, SearchSession};

use crate::settings::ResolvedConfig;

/// Everything the session published while replaying the queries.
#[derive(Debug)]
pub(crate) struct WorkflowOutcome {
	pub(crate) publications: Vec<Publication>,
	/// Whether the last query resolved before the settle limit.
	pub(crate) settled: bool,
}

/// Replays a list of query edits against a session built from configuration.
pub(crate) struct SearchWorkflow {
	session: SearchSession,
	queries: Vec<String>,
	interval: Duration,
	settle: Duration,
}

impl SearchWorkflow {
	pub(crate) fn from_config(
		config: ResolvedConfig,
		queries: Vec<String>,
		interval: Duration,
		settle: Duration,
	) -> Result<Self> {
		let contacts = JsonContacts::load(&config.contacts)
			.with_context(|| format!("failed to load contacts from {}", config.contacts.display()))?;
		let directory = JsonDirectory::load(&config.directory, config.latency).with_context(|| {
			format!("failed to load directory from {}", config.directory.display())
		})?;
		let session = SearchSession::with_options(Arc::new(contacts), Arc::new(directory), config.search);
		Ok(Self::new(session, queries, interval, settle))
	}

	pub(crate) fn new(
		session: SearchSession,
		mut queries: Vec<String>,
		interval: Duration,
		settle: Duration,
	) -> Self {
		if queries.is_empty() {
			queries.push(String::new());
		}
		Self {
			session,
			queries,
			interval,
			settle,
		}
	}

	pub(crate) fn run(mut self) -> Result<WorkflowOutcome> {
		let (tx, rx) = mpsc::channel();
		self.session.subscribe(tx);

		let queries = mem::take(&mut self.queries);
		let last = queries.len() - 1;
		for (index, text) in queries.iter().enumerate() {
			let sequence = self.session.submit(text.as_str());
			tracing::debug!(sequence, query = %text, "submitted query");
			if index < last && !self.interval.is_zero() {
				self.pause();
			}
		}

		let settled = self.session.wait_until_settled(self.settle);
		if !settled {
			tracing::warn!(limit_ms = self.settle.as_millis(), "search did not settle in time");
		}
		self.session.shutdown();

		Ok(WorkflowOutcome {
			publications: rx.try_iter().collect(),
			settled,
		})
	}

	/// Let replies arrive for one interval, then sleep out whatever is left.
	fn pause(&mut self) {
		let started = Instant::now();
		self.session.wait_until_settled(self.interval);
		let remaining = self.interval.saturating_sub(started.elapsed());
		if !remaining.is_zero() {
			thread::sleep(remaining);
		}
	}
}
