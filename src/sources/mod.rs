//! Collaborators the search pipeline reads from.
//!
//! The pipeline only knows about the [`ContactStore`] and [`RemoteDirectory`]
//! traits. In-memory and JSON-file implementations are provided for tests and
//! for the command-line driver.

mod json;
mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::types::{Contact, Identity, RemoteUser};

pub use json::{JsonContacts, JsonDirectory};
pub use memory::{MemoryContacts, StaticDirectory};

/// Read-only access to the locally cached contact list.
pub trait ContactStore: Send + Sync {
	/// Current contacts in display order.
	fn snapshot(&self) -> Arc<[Contact]>;
}

/// Remote user lookup. Called off the control thread and allowed to block.
pub trait RemoteDirectory: Send + Sync {
	/// Find users matching `text`.
	fn search(&self, text: &str) -> Result<Vec<RemoteUser>, DirectoryError>;
}

/// Failure reported by a [`RemoteDirectory`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
	#[error("remote directory is unavailable: {0}")]
	Unavailable(String),
}

/// Failure while loading a file-backed source.
#[derive(Debug, Error)]
pub enum SourceError {
	#[error("failed to read {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse {path}")]
	Parse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	#[error("contact identity '{identity}' appears more than once in {path}")]
	DuplicateIdentity { path: PathBuf, identity: Identity },
}
