use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;
use std::time::Duration;

use super::{ContactStore, DirectoryError, RemoteDirectory};
use crate::types::{Contact, RemoteUser};

/// Contact list held in memory.
///
/// Each call to [`snapshot`](ContactStore::snapshot) hands out the list that
/// was current at that moment; [`replace`](Self::replace) never disturbs
/// snapshots already taken.
#[derive(Debug, Default)]
pub struct MemoryContacts {
	contacts: RwLock<Arc<[Contact]>>,
}

impl MemoryContacts {
	#[must_use]
	pub fn new(contacts: Vec<Contact>) -> Self {
		Self {
			contacts: RwLock::new(contacts.into()),
		}
	}

	/// Swap in a new contact list for subsequent snapshots.
	pub fn replace(&self, contacts: Vec<Contact>) {
		let mut guard = self.contacts.write().unwrap_or_else(PoisonError::into_inner);
		*guard = contacts.into();
	}
}

impl ContactStore for MemoryContacts {
	fn snapshot(&self) -> Arc<[Contact]> {
		Arc::clone(&self.contacts.read().unwrap_or_else(PoisonError::into_inner))
	}
}

/// Directory that answers from a fixed user list.
///
/// Matching is a case-insensitive substring test on the display name or the
/// identity. An artificial latency and a forced failure can be configured to
/// imitate a slow or broken backend.
#[derive(Debug, Default)]
pub struct StaticDirectory {
	users: Vec<RemoteUser>,
	latency: Duration,
	failure: Option<DirectoryError>,
	lookups: AtomicUsize,
}

impl StaticDirectory {
	#[must_use]
	pub fn new(users: Vec<RemoteUser>) -> Self {
		Self {
			users,
			..Self::default()
		}
	}

	/// Sleep for `latency` before answering each lookup.
	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	/// Fail every lookup with `error`.
	#[must_use]
	pub fn failing(mut self, error: DirectoryError) -> Self {
		self.failure = Some(error);
		self
	}

	/// Number of lookups served so far.
	#[must_use]
	pub fn lookups(&self) -> usize {
		self.lookups.load(Ordering::Relaxed)
	}
}

impl RemoteDirectory for StaticDirectory {
	fn search(&self, text: &str) -> Result<Vec<RemoteUser>, DirectoryError> {
		self.lookups.fetch_add(1, Ordering::Relaxed);
		if !self.latency.is_zero() {
			thread::sleep(self.latency);
		}
		if let Some(error) = &self.failure {
			return Err(error.clone());
		}

		let needle = text.to_lowercase();
		Ok(self
			.users
			.iter()
			.filter(|user| {
				user.display_name.to_lowercase().contains(&needle)
					|| user.identity.to_lowercase().contains(&needle)
			})
			.cloned()
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::Identity;

	fn contact(id: &str, name: &str) -> Contact {
		Contact::new(Identity::parse(id).expect("identity"), name, "")
	}

	#[test]
	fn replace_does_not_touch_existing_snapshots() {
		let store = MemoryContacts::new(vec![contact("1", "Ann")]);
		let before = store.snapshot();
		store.replace(vec![contact("2", "Bob"), contact("3", "Cy")]);

		assert_eq!(before.len(), 1);
		assert_eq!(store.snapshot().len(), 2);
	}

	#[test]
	fn static_directory_matches_case_insensitively() {
		let directory = StaticDirectory::new(vec![
			RemoteUser::new("9", "Zara"),
			RemoteUser::new("10", "Bob"),
		]);
		let users = directory.search("ZA").expect("lookup");
		assert_eq!(users, vec![RemoteUser::new("9", "Zara")]);
		assert_eq!(directory.lookups(), 1);
	}

	#[test]
	fn failing_directory_reports_error() {
		let directory = StaticDirectory::new(Vec::new())
			.failing(DirectoryError::Unavailable("offline".into()));
		let err = directory.search("a").unwrap_err();
		assert_eq!(err.to_string(), "remote directory is unavailable: offline");
	}
}
