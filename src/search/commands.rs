use roster_stream::{DataStream, StreamEnvelope};

use crate::sources::DirectoryError;
use crate::types::RemoteUser;

/// Envelope marker for remote directory replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LookupMarker;

/// Outcome of one remote directory call.
pub(crate) type LookupOutcome = Result<Vec<RemoteUser>, DirectoryError>;

/// Reply sent from a lookup worker back to the session.
pub(crate) type LookupReply = StreamEnvelope<LookupMarker, LookupOutcome>;

/// Sending half handed to a lookup worker.
pub(crate) type LookupStream = DataStream<LookupMarker, LookupOutcome>;

/// Remote lookup the session wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LookupRequest {
	/// Sequence of the query that asked for the lookup.
	pub(crate) id: u64,
	/// Query text passed to the directory exactly as typed.
	pub(crate) text: String,
}
