use serde::Serialize;

use super::{Contact, RemoteUser};

/// The two sections shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
	/// Contacts from the local address book.
	Local,
	/// Users found by the remote directory.
	Remote,
}

impl Section {
	pub const ALL: [Section; 2] = [Section::Local, Section::Remote];

	/// Header shown above the section while a search is active.
	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Section::Local => "Friends",
			Section::Remote => "Users",
		}
	}
}

/// Which stage of a query a publication reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
	/// Only the local filter has run; the remote section is empty.
	LocalOnly,
	/// The remote lookup for this query has resolved (possibly with nothing).
	LocalAndRemote,
}

/// Finished two-section result handed to the presentation layer.
///
/// Every remote user is guaranteed not to share an identity with any local
/// contact in the same result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchResult {
	pub local: Vec<Contact>,
	pub remote: Vec<RemoteUser>,
}

/// Borrowed view of one row in a [`SearchResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEntry<'a> {
	Contact(&'a Contact),
	User(&'a RemoteUser),
}

impl SearchEntry<'_> {
	#[must_use]
	pub fn display_name(&self) -> &str {
		match self {
			SearchEntry::Contact(contact) => &contact.display_name,
			SearchEntry::User(user) => &user.display_name,
		}
	}
}

impl SearchResult {
	/// Number of rows in `section`.
	#[must_use]
	pub fn len(&self, section: Section) -> usize {
		match section {
			Section::Local => self.local.len(),
			Section::Remote => self.remote.len(),
		}
	}

	/// Row `row` of `section`, or `None` when out of range.
	#[must_use]
	pub fn entry_at(&self, section: Section, row: usize) -> Option<SearchEntry<'_>> {
		match section {
			Section::Local => self.local.get(row).map(SearchEntry::Contact),
			Section::Remote => self.remote.get(row).map(SearchEntry::User),
		}
	}
}

/// A result as delivered to subscribers, tagged with the query it answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
	pub sequence: u64,
	pub query: String,
	pub phase: SearchPhase,
	pub result: SearchResult,
	/// Set on the local-only publication of a query whose local section is
	/// non-empty.
	pub scroll_to_top: bool,
}

impl Publication {
	/// Whether the publication answers a non-blank query.
	#[must_use]
	pub fn is_active(&self) -> bool {
		!self.query.trim().is_empty()
	}

	/// Header for `section`, only while searching and only for non-empty
	/// sections.
	#[must_use]
	pub fn section_title(&self, section: Section) -> Option<&'static str> {
		if self.is_active() && self.result.len(section) > 0 {
			Some(section.title())
		} else {
			None
		}
	}
}
