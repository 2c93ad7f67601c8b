/// A single text-change event together with the sequence number it was issued
/// under.
///
/// Sequence numbers are strictly increasing within a session and are the only
/// thing used to decide whether a late remote reply is still wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
	pub text: String,
	pub sequence: u64,
}

impl Query {
	#[must_use]
	pub fn new(text: impl Into<String>, sequence: u64) -> Self {
		Self {
			text: text.into(),
			sequence,
		}
	}

	/// Whether the query carries no searchable text (empty or whitespace
	/// only).
	#[must_use]
	pub fn is_blank(&self) -> bool {
		self.text.trim().is_empty()
	}
}
