use serde::{Deserialize, Serialize};

use super::Identity;

/// A person returned by the remote directory for a single lookup.
///
/// The identity is kept exactly as the directory sent it. Entries whose
/// identity is malformed are still shown, they simply never match a local
/// contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteUser {
	pub identity: String,
	pub display_name: String,
}

impl RemoteUser {
	#[must_use]
	pub fn new(identity: impl Into<String>, display_name: impl Into<String>) -> Self {
		Self {
			identity: identity.into(),
			display_name: display_name.into(),
		}
	}

	/// Validated identity, or `None` when the directory sent a malformed one.
	#[must_use]
	pub fn identity(&self) -> Option<Identity> {
		Identity::parse(&self.identity).ok()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_identity_is_reported_as_none() {
		assert!(RemoteUser::new("", "Nobody").identity().is_none());
		assert_eq!(
			RemoteUser::new(" 9 ", "Zara").identity().map(String::from),
			Some(" 9 ".to_string())
		);
	}
}
