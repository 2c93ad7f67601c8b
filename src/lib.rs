//! Contact search that merges a local address book with a remote directory.
//!
//! Every change of the query text is submitted to a [`SearchSession`]. The
//! session publishes local matches at once, looks the text up in the remote
//! directory on a worker thread, and republishes with the remote matches that
//! are not already listed locally. Replies that belong to an older query are
//! discarded, so subscribers always converge on the latest text.
//!
//! ```
//! use std::sync::{Arc, mpsc};
//! use std::time::Duration;
//!
//! use roster::{Contact, Identity, MemoryContacts, RemoteUser, SearchSession, StaticDirectory};
//!
//! let contacts = Arc::new(MemoryContacts::new(vec![Contact::new(
//!     Identity::parse("5").unwrap(),
//!     "Zed",
//!     "zed",
//! )]));
//! let directory = Arc::new(StaticDirectory::new(vec![
//!     RemoteUser::new("5", "Zed"),
//!     RemoteUser::new("9", "Zara"),
//! ]));
//!
//! let mut session = SearchSession::new(contacts, directory);
//! let (tx, rx) = mpsc::channel();
//! session.subscribe(tx);
//!
//! session.submit("z");
//! assert!(session.wait_until_settled(Duration::from_secs(1)));
//!
//! let combined = rx.try_iter().last().unwrap();
//! assert_eq!(combined.result.remote, vec![RemoteUser::new("9", "Zara")]);
//! ```

pub mod app_dirs;
pub mod logging;
pub mod search;
pub mod sources;
pub mod types;

pub use search::{
	FnSink, QuerySequencer, ResultAggregator, ResultSink, SearchOptions, SearchSession,
	SessionState, SubscriptionId,
};
pub use sources::{
	ContactStore, DirectoryError, JsonContacts, JsonDirectory, MemoryContacts, RemoteDirectory,
	SourceError, StaticDirectory,
};
pub use types::{
	Contact, Identity, IdentityError, Publication, Query, RemoteUser, SearchEntry, SearchPhase,
	SearchResult, Section,
};
