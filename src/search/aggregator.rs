use std::fmt;
use std::sync::mpsc::Sender;

use super::dedupe::dedupe;
use crate::types::{Contact, Publication, Query, RemoteUser, SearchPhase, SearchResult};

/// Consumer of published results, typically the presentation layer.
pub trait ResultSink: Send {
	/// Receive a publication.
	///
	/// Returns `false` once the sink can no longer accept updates; it is then
	/// dropped from the subscriber list.
	fn publish(&mut self, publication: &Publication) -> bool;
}

impl ResultSink for Sender<Publication> {
	fn publish(&mut self, publication: &Publication) -> bool {
		self.send(publication.clone()).is_ok()
	}
}

impl<S: ResultSink + ?Sized> ResultSink for Box<S> {
	fn publish(&mut self, publication: &Publication) -> bool {
		(**self).publish(publication)
	}
}

/// Adapts a closure into a [`ResultSink`] that never unsubscribes itself.
pub struct FnSink<F>(pub F);

impl<F> ResultSink for FnSink<F>
where
	F: FnMut(&Publication) + Send,
{
	fn publish(&mut self, publication: &Publication) -> bool {
		(self.0)(publication);
		true
	}
}

/// Handle returned by [`ResultAggregator::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Combine a local section with an optional remote reply.
///
/// A missing reply yields an empty remote section. A present one is stripped
/// of every user already listed locally.
#[must_use]
pub fn combine(local: Vec<Contact>, remote: Option<Vec<RemoteUser>>) -> SearchResult {
	let remote = remote.map_or_else(Vec::new, |users| dedupe(users, &local));
	SearchResult { local, remote }
}

/// Builds results and fans them out to subscribers.
///
/// The aggregator remembers the latest publication so the remote phase of a
/// query can reuse the local section that was already shown for it.
#[derive(Default)]
pub struct ResultAggregator {
	sinks: Vec<(SubscriptionId, Box<dyn ResultSink>)>,
	next_subscription: u64,
	latest: Option<Publication>,
}

impl fmt::Debug for ResultAggregator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ResultAggregator")
			.field("subscribers", &self.sinks.len())
			.field("latest", &self.latest)
			.finish()
	}
}

impl ResultAggregator {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a sink for all subsequent publications.
	pub fn subscribe(&mut self, sink: impl ResultSink + 'static) -> SubscriptionId {
		self.next_subscription += 1;
		let id = SubscriptionId(self.next_subscription);
		self.sinks.push((id, Box::new(sink)));
		id
	}

	/// Remove a sink. Returns `false` if it was not subscribed.
	pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
		let before = self.sinks.len();
		self.sinks.retain(|(existing, _)| *existing != id);
		self.sinks.len() != before
	}

	/// Drop every subscriber.
	pub fn clear_subscribers(&mut self) {
		self.sinks.clear();
	}

	#[must_use]
	pub fn subscriber_count(&self) -> usize {
		self.sinks.len()
	}

	/// Most recent publication, if any.
	#[must_use]
	pub fn latest(&self) -> Option<&Publication> {
		self.latest.as_ref()
	}

	/// Publish the local-only phase of `query`.
	pub fn publish_local(&mut self, query: &Query, local: Vec<Contact>) -> &Publication {
		let scroll_to_top = !local.is_empty();
		self.emit(Publication {
			sequence: query.sequence,
			query: query.text.clone(),
			phase: SearchPhase::LocalOnly,
			result: combine(local, None),
			scroll_to_top,
		})
	}

	/// Publish the combined phase for `sequence` using the local section that
	/// was published for it.
	///
	/// Returns `None` when the latest publication belongs to another sequence.
	pub fn publish_remote(&mut self, sequence: u64, remote: Vec<RemoteUser>) -> Option<&Publication> {
		let base = self
			.latest
			.as_ref()
			.filter(|latest| latest.sequence == sequence)?;
		let publication = Publication {
			sequence,
			query: base.query.clone(),
			phase: SearchPhase::LocalAndRemote,
			result: combine(base.result.local.clone(), Some(remote)),
			scroll_to_top: false,
		};
		Some(self.emit(publication))
	}

	fn emit(&mut self, publication: Publication) -> &Publication {
		tracing::trace!(
			sequence = publication.sequence,
			phase = ?publication.phase,
			local = publication.result.local.len(),
			remote = publication.result.remote.len(),
			"publishing search result"
		);
		self.sinks.retain_mut(|(_, sink)| sink.publish(&publication));
		self.latest.insert(publication)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::sync::{Arc, Mutex};

	use super::*;
	use crate::types::Identity;

	fn contact(id: &str, name: &str) -> Contact {
		Contact::new(Identity::parse(id).expect("identity"), name, "")
	}

	#[test]
	fn combine_without_reply_has_empty_remote_section() {
		let result = combine(vec![contact("1", "Ann")], None);
		assert_eq!(result.local.len(), 1);
		assert!(result.remote.is_empty());
	}

	#[test]
	fn remote_phase_is_deduplicated_against_published_local() {
		let mut aggregator = ResultAggregator::new();
		let query = Query::new("z", 4);
		aggregator.publish_local(&query, vec![contact("5", "Zed")]);

		let publication = aggregator
			.publish_remote(4, vec![RemoteUser::new("5", "Zed"), RemoteUser::new("9", "Zara")])
			.expect("same sequence");
		assert_eq!(publication.phase, SearchPhase::LocalAndRemote);
		assert_eq!(publication.result.remote, vec![RemoteUser::new("9", "Zara")]);
		assert!(!publication.scroll_to_top);
	}

	#[test]
	fn remote_phase_for_other_sequence_is_refused() {
		let mut aggregator = ResultAggregator::new();
		aggregator.publish_local(&Query::new("z", 2), Vec::new());
		assert!(aggregator.publish_remote(1, Vec::new()).is_none());
		assert_eq!(aggregator.latest().map(|latest| latest.sequence), Some(2));
	}

	#[test]
	fn scroll_hint_follows_local_matches() {
		let mut aggregator = ResultAggregator::new();
		assert!(aggregator.publish_local(&Query::new("a", 1), vec![contact("1", "Ann")]).scroll_to_top);
		assert!(!aggregator.publish_local(&Query::new("q", 2), Vec::new()).scroll_to_top);
	}

	#[test]
	fn each_subscriber_sees_every_publication_once() {
		let mut aggregator = ResultAggregator::new();
		let seen = Arc::new(Mutex::new(Vec::new()));
		let recorder = Arc::clone(&seen);
		aggregator.subscribe(FnSink(move |publication: &Publication| {
			recorder.lock().expect("lock").push(publication.phase);
		}));
		let (tx, rx) = mpsc::channel();
		aggregator.subscribe(tx);

		aggregator.publish_local(&Query::new("z", 1), Vec::new());
		aggregator.publish_remote(1, Vec::new());

		assert_eq!(
			*seen.lock().expect("lock"),
			vec![SearchPhase::LocalOnly, SearchPhase::LocalAndRemote]
		);
		assert_eq!(rx.try_iter().count(), 2);
	}

	#[test]
	fn unsubscribed_sink_receives_nothing() {
		let mut aggregator = ResultAggregator::new();
		let (tx, rx) = mpsc::channel();
		let id = aggregator.subscribe(tx);
		assert!(aggregator.unsubscribe(id));
		assert!(!aggregator.unsubscribe(id));

		aggregator.publish_local(&Query::new("z", 1), Vec::new());
		assert!(rx.try_recv().is_err());
	}

	#[test]
	fn disconnected_sender_is_pruned() {
		let mut aggregator = ResultAggregator::new();
		let (tx, rx) = mpsc::channel();
		aggregator.subscribe(tx);
		drop(rx);

		aggregator.publish_local(&Query::new("z", 1), Vec::new());
		assert_eq!(aggregator.subscriber_count(), 0);
	}
}
