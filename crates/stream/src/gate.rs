use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Shared record of the most recently issued request id.
///
/// The control thread is the only writer. Workers hold clones and read it to
/// find out whether the work they were handed has been superseded.
#[derive(Debug, Clone, Default)]
pub struct SequenceGate {
	latest: Arc<AtomicU64>,
}

impl SequenceGate {
	/// Create a gate that has not issued any id yet.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Issue the next id and make it the current one.
	pub fn advance(&self) -> u64 {
		self.latest.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
	}

	/// Most recently issued id, `0` before the first [`advance`](Self::advance).
	#[must_use]
	pub fn latest(&self) -> u64 {
		self.latest.load(Ordering::Acquire)
	}

	/// Whether `id` is still the most recently issued id.
	#[must_use]
	pub fn is_current(&self, id: u64) -> bool {
		self.latest() == id
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_at_zero() {
		let gate = SequenceGate::new();
		assert_eq!(gate.latest(), 0);
		assert!(gate.is_current(0));
	}

	#[test]
	fn advance_is_strictly_increasing() {
		let gate = SequenceGate::new();
		let first = gate.advance();
		let second = gate.advance();
		assert_eq!(first, 1);
		assert_eq!(second, 2);
		assert!(!gate.is_current(first));
		assert!(gate.is_current(second));
	}

	#[test]
	fn clones_observe_the_same_sequence() {
		let gate = SequenceGate::new();
		let worker_view = gate.clone();
		let id = gate.advance();
		assert!(worker_view.is_current(id));
		gate.advance();
		assert!(!worker_view.is_current(id));
	}
}
