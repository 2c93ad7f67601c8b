//! Streaming primitives for delivering background results to a single
//! control thread.
//!
//! Background workers never touch control-thread state directly. Instead they
//! wrap whatever they produced in a [`StreamEnvelope`] tagged with the
//! sequence id of the request that caused the work, and send it over an
//! [`mpsc`] channel. The control thread compares the id against the shared
//! [`SequenceGate`] and drops anything that is no longer current.
//!
//! ```
//! use std::sync::mpsc;
//!
//! use roster_stream::{DataStream, SequenceGate, StreamEnvelope};
//!
//! let gate = SequenceGate::new();
//! let (tx, rx) = mpsc::channel::<StreamEnvelope<(), &'static str>>();
//!
//! let first = gate.advance();
//! let stale = DataStream::new(tx.clone(), first, ());
//! let second = gate.advance();
//! let fresh = DataStream::new(tx, second, ());
//!
//! fresh.send("fresh");
//! stale.send("stale");
//!
//! let accepted: Vec<_> = rx
//!     .try_iter()
//!     .filter(|envelope| envelope.is_current(&gate))
//!     .map(|envelope| envelope.payload)
//!     .collect();
//! assert_eq!(accepted, vec!["fresh"]);
//! ```
//!
//! [`mpsc`]: std::sync::mpsc

mod gate;

use std::sync::mpsc::Sender;

pub use gate::SequenceGate;

/// Message emitted by a background worker and delivered to the control thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamEnvelope<M, P> {
	/// Sequence id of the request that produced the payload.
	pub id: u64,
	/// Stream-specific metadata describing the payload.
	pub kind: M,
	/// Payload delivered to the consumer.
	pub payload: P,
}

impl<M, P> StreamEnvelope<M, P> {
	/// Whether the envelope still belongs to the latest issued request.
	#[must_use]
	pub fn is_current(&self, gate: &SequenceGate) -> bool {
		gate.is_current(self.id)
	}
}

/// Sending handle bound to a single request id.
///
/// The handle owns its [`Sender`] so it can be moved onto a worker thread.
pub struct DataStream<M, P> {
	tx: Sender<StreamEnvelope<M, P>>,
	id: u64,
	kind: M,
}

impl<M: Clone, P: Send + 'static> DataStream<M, P> {
	/// Create a new handle backed by the provided sender.
	#[must_use]
	pub fn new(tx: Sender<StreamEnvelope<M, P>>, id: u64, kind: M) -> Self {
		Self { tx, id, kind }
	}

	/// Emit a payload to the consumer.
	///
	/// Returns `false` once the receiving side has been dropped.
	pub fn send(&self, payload: P) -> bool {
		self.tx
			.send(StreamEnvelope {
				id: self.id,
				kind: self.kind.clone(),
				payload,
			})
			.is_ok()
	}
}

impl<M: Clone, P> Clone for DataStream<M, P> {
	fn clone(&self) -> Self {
		Self {
			tx: self.tx.clone(),
			id: self.id,
			kind: self.kind.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::mpsc;
	use std::thread;

	use super::*;

	#[test]
	fn envelope_goes_stale_once_the_gate_moves_on() {
		let gate = SequenceGate::new();
		let envelope = StreamEnvelope {
			id: gate.advance(),
			kind: (),
			payload: 21,
		};
		assert!(envelope.is_current(&gate));
		gate.advance();
		assert!(!envelope.is_current(&gate));
	}

	#[test]
	fn stream_delivers_from_worker_thread() {
		let (tx, rx) = mpsc::channel();
		let stream = DataStream::new(tx, 3, ());
		let handle = thread::spawn(move || stream.send(String::from("done")));
		assert!(handle.join().expect("worker joins"));

		let envelope = rx.recv().expect("envelope");
		assert_eq!(envelope.id, 3);
		assert_eq!(envelope.payload, "done");
	}

	#[test]
	fn send_reports_disconnected_receiver() {
		let (tx, rx) = mpsc::channel::<StreamEnvelope<(), u8>>();
		drop(rx);
		let stream = DataStream::new(tx, 1, ());
		assert!(!stream.send(1));
	}
}
