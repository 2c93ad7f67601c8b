use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::{Duration, Instant};

use super::aggregator::{ResultAggregator, ResultSink, SubscriptionId};
use super::commands::{LookupMarker, LookupReply, LookupRequest, LookupStream};
use super::config::SearchOptions;
use super::filter::filter;
use super::sequencer::{QuerySequencer, SessionState};
use super::worker::spawn_lookup;
use crate::sources::{ContactStore, RemoteDirectory};
use crate::types::Publication;

/// One search screen's worth of state, owned by the control thread.
///
/// [`submit`](Self::submit) publishes local matches straight away and hands
/// the remote lookup to a worker thread. Replies are applied when the owner
/// calls [`pump`](Self::pump) or [`wait_until_settled`](Self::wait_until_settled),
/// and only if they answer the most recent submission.
pub struct SearchSession {
	contacts: Arc<dyn ContactStore>,
	directory: Arc<dyn RemoteDirectory>,
	options: SearchOptions,
	sequencer: QuerySequencer,
	aggregator: ResultAggregator,
	reply_tx: Sender<LookupReply>,
	reply_rx: Receiver<LookupReply>,
}

impl SearchSession {
	#[must_use]
	pub fn new(contacts: Arc<dyn ContactStore>, directory: Arc<dyn RemoteDirectory>) -> Self {
		Self::with_options(contacts, directory, SearchOptions::default())
	}

	#[must_use]
	pub fn with_options(
		contacts: Arc<dyn ContactStore>,
		directory: Arc<dyn RemoteDirectory>,
		options: SearchOptions,
	) -> Self {
		let (reply_tx, reply_rx) = mpsc::channel();
		Self {
			contacts,
			directory,
			options,
			sequencer: QuerySequencer::default(),
			aggregator: ResultAggregator::new(),
			reply_tx,
			reply_rx,
		}
	}

	/// Register a sink for every publication from now on.
	pub fn subscribe(&mut self, sink: impl ResultSink + 'static) -> SubscriptionId {
		self.aggregator.subscribe(sink)
	}

	/// Stop delivering publications to a sink.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		self.aggregator.unsubscribe(id)
	}

	/// Most recent publication.
	#[must_use]
	pub fn latest(&self) -> Option<&Publication> {
		self.aggregator.latest()
	}

	#[must_use]
	pub fn state(&self) -> SessionState {
		self.sequencer.state()
	}

	/// Whether the latest submission has nothing left to wait for.
	#[must_use]
	pub fn is_settled(&self) -> bool {
		self.sequencer.is_settled()
	}

	/// Handle a change of the query text. Never blocks.
	///
	/// Returns the sequence number assigned to the new query.
	pub fn submit(&mut self, text: impl Into<String>) -> u64 {
		let now = Instant::now();
		let query = self.sequencer.begin(text, now, self.options.debounce);
		let snapshot = self.contacts.snapshot();
		self.aggregator
			.publish_local(&query, filter(&snapshot, &query.text));
		self.dispatch_due(now);
		query.sequence
	}

	/// Apply any replies that have arrived and fire due lookups or timeouts.
	///
	/// Returns the number of publications made.
	pub fn pump(&mut self) -> usize {
		let mut published = 0;
		while let Ok(reply) = self.reply_rx.try_recv() {
			if self.apply_reply(reply) {
				published += 1;
			}
		}
		published + self.advance_clock(Instant::now())
	}

	/// Block until the latest submission settles or `limit` elapses.
	///
	/// Returns `true` if the session settled.
	pub fn wait_until_settled(&mut self, limit: Duration) -> bool {
		let deadline = Instant::now() + limit;
		loop {
			self.pump();
			if self.is_settled() {
				return true;
			}

			let now = Instant::now();
			if now >= deadline {
				return false;
			}
			let wake = self
				.sequencer
				.next_deadline(self.options.remote_timeout)
				.map_or(deadline, |next| next.min(deadline));

			match self.reply_rx.recv_timeout(wake.saturating_duration_since(now)) {
				Ok(reply) => {
					self.apply_reply(reply);
				}
				Err(RecvTimeoutError::Timeout) => {}
				Err(RecvTimeoutError::Disconnected) => return self.is_settled(),
			}
		}
	}

	/// Tear the session down: drop all subscribers and make every outstanding
	/// lookup stale.
	pub fn shutdown(&mut self) {
		self.sequencer.retire();
		self.aggregator.clear_subscribers();
	}

	fn advance_clock(&mut self, now: Instant) -> usize {
		self.dispatch_due(now);
		let Some(sequence) = self.sequencer.expire(now, self.options.remote_timeout) else {
			return 0;
		};
		tracing::warn!(sequence, "remote lookup timed out");
		usize::from(self.aggregator.publish_remote(sequence, Vec::new()).is_some())
	}

	fn dispatch_due(&mut self, now: Instant) {
		let Some(request) = self.sequencer.take_due(now) else {
			return;
		};
		tracing::debug!(sequence = request.id, text = %request.text, "dispatching remote lookup");
		self.dispatch(request);
	}

	fn dispatch(&mut self, request: LookupRequest) {
		let id = request.id;
		let stream = LookupStream::new(self.reply_tx.clone(), id, LookupMarker);
		let gate = self.sequencer.gate().clone();
		if let Err(err) = spawn_lookup(Arc::clone(&self.directory), request, stream, gate) {
			tracing::warn!(sequence = id, error = %err, "failed to start remote lookup");
			if self.sequencer.accept(id) {
				self.aggregator.publish_remote(id, Vec::new());
			}
		}
	}

	fn apply_reply(&mut self, reply: LookupReply) -> bool {
		if !reply.is_current(self.sequencer.gate()) || !self.sequencer.accept(reply.id) {
			return false;
		}
		let remote = match reply.payload {
			Ok(users) => users,
			Err(err) => {
				tracing::debug!(sequence = reply.id, error = %err, "remote lookup failed");
				Vec::new()
			}
		};
		self.aggregator.publish_remote(reply.id, remote).is_some()
	}
}

impl Drop for SearchSession {
	fn drop(&mut self) {
		self.shutdown();
	}
}
