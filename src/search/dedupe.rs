use std::collections::HashSet;

use crate::types::{Contact, RemoteUser};

/// Drop remote users that already appear in the local section.
///
/// Remote order is preserved. Users with a malformed identity never match and
/// are always kept.
#[must_use]
pub fn dedupe(remote_users: Vec<RemoteUser>, local: &[Contact]) -> Vec<RemoteUser> {
	let known: HashSet<&str> = local
		.iter()
		.map(|contact| contact.identity.as_str())
		.collect();

	remote_users
		.into_iter()
		.filter(|user| {
			user.identity()
				.is_none_or(|identity| !known.contains(identity.as_str()))
		})
		.collect()
}
