use std::time::{Duration, Instant};

use roster_stream::SequenceGate;

use super::commands::LookupRequest;
use crate::types::Query;

/// Where the latest query of a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
	/// Nothing has been submitted yet, or the session was shut down.
	Idle,
	/// Local results for this sequence are published; a remote lookup may
	/// still be pending.
	LocalOnly(u64),
	/// The remote lookup for this sequence has resolved. Terminal until the
	/// next submission.
	LocalAndRemote(u64),
}

#[derive(Debug)]
struct PendingLookup {
	request: LookupRequest,
	due: Instant,
	dispatched_at: Option<Instant>,
}

/// Issues sequence numbers and decides which remote replies are still wanted.
///
/// At most one lookup is tracked at a time: the one belonging to the latest
/// query. Everything older is forgotten the moment a new query begins, which
/// is what makes late replies fall through [`accept`](Self::accept).
#[derive(Debug)]
pub struct QuerySequencer {
	gate: SequenceGate,
	state: SessionState,
	pending: Option<PendingLookup>,
}

impl Default for QuerySequencer {
	fn default() -> Self {
		Self::new(SequenceGate::new())
	}
}

impl QuerySequencer {
	#[must_use]
	pub fn new(gate: SequenceGate) -> Self {
		Self {
			gate,
			state: SessionState::Idle,
			pending: None,
		}
	}

	/// Gate shared with lookup workers.
	#[must_use]
	pub fn gate(&self) -> &SequenceGate {
		&self.gate
	}

	/// Latest issued sequence, `0` before the first query.
	#[must_use]
	pub fn current(&self) -> u64 {
		self.gate.latest()
	}

	#[must_use]
	pub fn state(&self) -> SessionState {
		self.state
	}

	/// Whether the latest query needs nothing further from the directory.
	#[must_use]
	pub fn is_settled(&self) -> bool {
		self.pending.is_none()
	}

	/// Start a new query, superseding whatever came before.
	///
	/// Non-blank queries schedule a remote lookup that becomes due after
	/// `debounce`.
	pub fn begin(&mut self, text: impl Into<String>, now: Instant, debounce: Duration) -> Query {
		let query = Query::new(text, self.gate.advance());
		self.state = SessionState::LocalOnly(query.sequence);
		self.pending = (!query.is_blank()).then(|| PendingLookup {
			request: LookupRequest {
				id: query.sequence,
				text: query.text.clone(),
			},
			due: now + debounce,
			dispatched_at: None,
		});
		query
	}

	/// Hand out the pending lookup once it is due. Each lookup is handed out
	/// at most once.
	pub(crate) fn take_due(&mut self, now: Instant) -> Option<LookupRequest> {
		let pending = self.pending.as_mut()?;
		if pending.dispatched_at.is_some() || pending.due > now {
			return None;
		}
		pending.dispatched_at = Some(now);
		Some(pending.request.clone())
	}

	/// Claim the reply for sequence `id`.
	///
	/// Returns `true` only for the first reply to the latest dispatched
	/// lookup; the state then moves to [`SessionState::LocalAndRemote`].
	pub fn accept(&mut self, id: u64) -> bool {
		let dispatched = self
			.pending
			.as_ref()
			.is_some_and(|pending| pending.request.id == id && pending.dispatched_at.is_some());
		if !dispatched || self.state != SessionState::LocalOnly(id) || !self.gate.is_current(id) {
			return false;
		}
		self.resolve(id);
		true
	}

	/// Resolve the in-flight lookup as failed once it has been outstanding for
	/// `timeout`. Returns the sequence that expired.
	pub fn expire(&mut self, now: Instant, timeout: Option<Duration>) -> Option<u64> {
		let timeout = timeout?;
		let pending = self.pending.as_ref()?;
		let dispatched_at = pending.dispatched_at?;
		if now.saturating_duration_since(dispatched_at) < timeout {
			return None;
		}
		let id = pending.request.id;
		self.resolve(id);
		Some(id)
	}

	/// Next instant at which [`take_due`](Self::take_due) or
	/// [`expire`](Self::expire) could change something.
	#[must_use]
	pub fn next_deadline(&self, timeout: Option<Duration>) -> Option<Instant> {
		let pending = self.pending.as_ref()?;
		match pending.dispatched_at {
			None => Some(pending.due),
			Some(dispatched_at) => timeout.map(|timeout| dispatched_at + timeout),
		}
	}

	/// Abandon the latest query so that nothing outstanding is ever applied.
	pub fn retire(&mut self) {
		self.gate.advance();
		self.pending = None;
		self.state = SessionState::Idle;
	}

	fn resolve(&mut self, id: u64) {
		self.pending = None;
		self.state = SessionState::LocalAndRemote(id);
	}
}
