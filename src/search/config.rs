use std::time::Duration;

/// Tuning knobs for a [`SearchSession`](super::SearchSession).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
	/// Give up on a remote lookup after this long and show no remote matches.
	/// `None` waits indefinitely.
	pub remote_timeout: Option<Duration>,
	/// Hold back the remote lookup until the text has been unchanged for this
	/// long. Zero dispatches on every keystroke.
	pub debounce: Duration,
}

impl SearchOptions {
	#[must_use]
	pub fn with_remote_timeout(mut self, timeout: Duration) -> Self {
		self.remote_timeout = Some(timeout);
		self
	}

	#[must_use]
	pub fn with_debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}
}
