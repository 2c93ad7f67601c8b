use std::io;
use std::sync::Arc;
use std::thread;

use roster_stream::SequenceGate;

use super::commands::{LookupRequest, LookupStream};
use crate::sources::RemoteDirectory;

/// Run a remote lookup on its own thread and stream the outcome back.
///
/// The worker re-checks `gate` before calling the directory and again before
/// replying, so work for a superseded query is skipped where possible and
/// never sent. The session still performs the authoritative check when the
/// reply arrives.
pub(crate) fn spawn_lookup(
	directory: Arc<dyn RemoteDirectory>,
	request: LookupRequest,
	stream: LookupStream,
	gate: SequenceGate,
) -> io::Result<()> {
	thread::Builder::new()
		.name(format!("roster-lookup-{}", request.id))
		.spawn(move || run_lookup(directory.as_ref(), &request, &stream, &gate))
		.map(drop)
}

fn run_lookup(
	directory: &dyn RemoteDirectory,
	request: &LookupRequest,
	stream: &LookupStream,
	gate: &SequenceGate,
) {
	if !gate.is_current(request.id) {
		return;
	}

	let outcome = directory.search(&request.text);

	if gate.is_current(request.id) {
		stream.send(outcome);
	}
}
