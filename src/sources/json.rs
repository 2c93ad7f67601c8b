use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::{
	ContactStore, DirectoryError, MemoryContacts, RemoteDirectory, SourceError, StaticDirectory,
};
use crate::types::{Contact, RemoteUser};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, SourceError> {
	let text = fs::read_to_string(path).map_err(|source| SourceError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	serde_json::from_str(&text).map_err(|source| SourceError::Parse {
		path: path.to_path_buf(),
		source,
	})
}

fn ensure_unique(path: &Path, contacts: &[Contact]) -> Result<(), SourceError> {
	let mut seen = HashSet::with_capacity(contacts.len());
	for contact in contacts {
		if !seen.insert(contact.identity.as_str()) {
			return Err(SourceError::DuplicateIdentity {
				path: path.to_path_buf(),
				identity: contact.identity.clone(),
			});
		}
	}
	Ok(())
}

/// Contact list loaded from a JSON array of
/// `{"identity", "display_name", "handle"}` objects.
#[derive(Debug)]
pub struct JsonContacts {
	inner: MemoryContacts,
}

impl JsonContacts {
	/// Load and validate the contact file at `path`.
	pub fn load(path: &Path) -> Result<Self, SourceError> {
		let contacts: Vec<Contact> = read_json(path)?;
		ensure_unique(path, &contacts)?;

		tracing::debug!(path = %path.display(), count = contacts.len(), "loaded contacts");
		Ok(Self {
			inner: MemoryContacts::new(contacts),
		})
	}
}

impl ContactStore for JsonContacts {
	fn snapshot(&self) -> Arc<[Contact]> {
		self.inner.snapshot()
	}
}

/// Remote directory stand-in backed by a JSON array of
/// `{"identity", "display_name"}` objects.
#[derive(Debug)]
pub struct JsonDirectory {
	inner: StaticDirectory,
}

impl JsonDirectory {
	/// Load the user file at `path`, answering each lookup after `latency`.
	pub fn load(path: &Path, latency: Duration) -> Result<Self, SourceError> {
		let users: Vec<RemoteUser> = read_json(path)?;
		tracing::debug!(path = %path.display(), count = users.len(), "loaded directory users");
		Ok(Self {
			inner: StaticDirectory::new(users).with_latency(latency),
		})
	}

	/// Number of lookups served so far.
	#[must_use]
	pub fn lookups(&self) -> usize {
		self.inner.lookups()
	}
}

impl RemoteDirectory for JsonDirectory {
	fn search(&self, text: &str) -> Result<Vec<RemoteUser>, DirectoryError> {
		self.inner.search(text)
	}
}
