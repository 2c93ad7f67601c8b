use crate::types::Contact;

/// Keep the contacts whose display name or handle contains `text`,
/// ignoring case.
///
/// Blank text (empty or whitespace only) matches everything. Any other text
/// is matched as typed, surrounding spaces included. Input order is
/// preserved; nothing is re-sorted.
#[must_use]
pub fn filter(contacts: &[Contact], text: &str) -> Vec<Contact> {
	if text.trim().is_empty() {
		return contacts.to_vec();
	}

	let needle = text.to_lowercase();
	contacts
		.iter()
		.filter(|contact| contact.matches_folded(&needle))
		.cloned()
		.collect()
}
