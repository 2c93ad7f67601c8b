use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier shared by local contacts and remote directory users.
///
/// A well-formed identity is not blank and contains no control characters.
/// The text is kept exactly as given, so `" 5 "` and `"5"` are different
/// identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

/// Reasons a raw string cannot be used as an [`Identity`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
	#[error("identity is empty")]
	Empty,
	#[error("identity contains control characters: {0:?}")]
	ControlCharacter(String),
}

impl Identity {
	/// Validate `raw` and build an identity from it.
	pub fn parse(raw: &str) -> Result<Self, IdentityError> {
		if raw.trim().is_empty() {
			return Err(IdentityError::Empty);
		}
		if raw.chars().any(char::is_control) {
			return Err(IdentityError::ControlCharacter(raw.to_string()));
		}
		Ok(Self(raw.to_string()))
	}

	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl TryFrom<String> for Identity {
	type Error = IdentityError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl TryFrom<&str> for Identity {
	type Error = IdentityError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl From<Identity> for String {
	fn from(value: Identity) -> Self {
		value.0
	}
}

impl Borrow<str> for Identity {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Identity {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Identity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[test]
	fn parse_keeps_text_verbatim() {
		let identity = Identity::parse(" u-42").expect("valid identity");
		assert_eq!(identity.as_str(), " u-42");
		assert_ne!(identity, Identity::parse("u-42").expect("valid identity"));
	}

	#[rstest]
	#[case("")]
	#[case("   ")]
	#[case("\t\n")]
	fn blank_identities_are_rejected(#[case] raw: &str) {
		assert_eq!(Identity::parse(raw), Err(IdentityError::Empty));
	}

	#[test]
	fn control_characters_are_rejected() {
		let err = Identity::parse("ab\u{0007}cd").unwrap_err();
		assert!(matches!(err, IdentityError::ControlCharacter(_)));
	}

	#[test]
	fn deserialisation_validates() {
		let ok: Identity = serde_json::from_str("\"abc\"").expect("valid");
		assert_eq!(ok.as_str(), "abc");
		assert!(serde_json::from_str::<Identity>("\"  \"").is_err());
	}
}
