use serde::{Deserialize, Serialize};

use super::Identity;

/// A person from the locally cached contact list.
///
/// Contacts are immutable once built. Lowercased copies of the searchable
/// fields are prepared up front so filtering does not allocate per keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ContactRecord", into = "ContactRecord")]
pub struct Contact {
	pub identity: Identity,
	pub display_name: String,
	pub handle: String,
	folded_name: String,
	folded_handle: String,
}

/// On-disk representation of a [`Contact`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ContactRecord {
	identity: Identity,
	display_name: String,
	#[serde(default)]
	handle: String,
}

impl Contact {
	#[must_use]
	pub fn new(
		identity: Identity,
		display_name: impl Into<String>,
		handle: impl Into<String>,
	) -> Self {
		let display_name = display_name.into();
		let handle = handle.into();
		Self {
			folded_name: display_name.to_lowercase(),
			folded_handle: handle.to_lowercase(),
			identity,
			display_name,
			handle,
		}
	}

	/// Whether the display name or handle contains `needle`.
	///
	/// `needle` must already be lowercased.
	pub(crate) fn matches_folded(&self, needle: &str) -> bool {
		self.folded_name.contains(needle) || self.folded_handle.contains(needle)
	}
}

impl From<ContactRecord> for Contact {
	fn from(record: ContactRecord) -> Self {
		Self::new(record.identity, record.display_name, record.handle)
	}
}

impl From<Contact> for ContactRecord {
	fn from(contact: Contact) -> Self {
		Self {
			identity: contact.identity,
			display_name: contact.display_name,
			handle: contact.handle,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn contact(name: &str, handle: &str) -> Contact {
		Contact::new(Identity::parse("1").expect("identity"), name, handle)
	}

	#[test]
	fn folded_match_covers_name_and_handle() {
		let ann = contact("Ann Lee", "annie");
		assert!(ann.matches_folded("lee"));
		assert!(ann.matches_folded("nie"));
		assert!(!ann.matches_folded("bob"));
	}

	#[test]
	fn handle_defaults_to_empty_when_missing() {
		let parsed: Contact =
			serde_json::from_str(r#"{"identity":"7","display_name":"Zed"}"#).expect("contact");
		assert_eq!(parsed.handle, "");
		assert!(parsed.matches_folded("zed"));
	}

	#[test]
	fn serialises_without_folded_fields() {
		let value = serde_json::to_value(contact("Ann", "ann")).expect("json");
		assert_eq!(
			value,
			serde_json::json!({"identity": "1", "display_name": "Ann", "handle": "ann"})
		);
	}
}
