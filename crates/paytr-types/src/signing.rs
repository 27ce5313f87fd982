//! Signing primitives: credentials and ordered field sets
//!
//! The gateway recomputes each token over the exact byte sequence of the
//! concatenated field values, so field order is part of the wire contract.
//! A [`FieldSet`] makes that order explicit instead of deriving it from the
//! iteration order of a map.

use crate::models::SecretString;
use thiserror::Error;

/// A base64-encoded HMAC-SHA256 digest proving the request or callback
/// originated from a holder of the merchant key
pub type Token = String;

/// Errors raised while assembling or signing an ordered field set
#[derive(Error, Debug)]
pub enum SigningError {
	/// A field required by the operation's ordering was absent. Raised
	/// instead of concatenating an empty string, which would produce a
	/// well-formed token over a malformed request.
	#[error("Missing required field: {field}")]
	MissingField { field: String },

	#[error("Failed to create HMAC: {reason}")]
	HmacCreation { reason: String },
}

/// Immutable merchant credentials shared by all signing and verification
/// calls
///
/// Constructed once from trusted configuration and passed by reference.
/// The key and salt only ever feed the signing computation; neither appears
/// as an outbound payload field.
#[derive(Debug, Clone)]
pub struct SigningContext {
	merchant_id: String,
	merchant_key: SecretString,
	merchant_salt: SecretString,
}

impl SigningContext {
	pub fn new(
		merchant_id: impl Into<String>,
		merchant_key: SecretString,
		merchant_salt: SecretString,
	) -> Self {
		Self {
			merchant_id: merchant_id.into(),
			merchant_key,
			merchant_salt,
		}
	}

	pub fn merchant_id(&self) -> &str {
		&self.merchant_id
	}

	/// HMAC secret
	pub fn merchant_key(&self) -> &SecretString {
		&self.merchant_key
	}

	/// Plaintext suffix appended to every signing string; never transmitted
	pub fn merchant_salt(&self) -> &SecretString {
		&self.merchant_salt
	}
}

/// An explicitly ordered sequence of named field values
///
/// Entries hold `Option<String>` so that an absent value fails signing with
/// [`SigningError::MissingField`] naming the field, rather than silently
/// coercing to an empty string.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
	entries: Vec<(&'static str, Option<String>)>,
}

impl FieldSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a field that is always present
	pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
		self.entries.push((name, Some(value.into())));
		self
	}

	/// Append a field that may be absent; `None` fails at signing time
	pub fn optional_field(mut self, name: &'static str, value: Option<String>) -> Self {
		self.entries.push((name, value));
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Field names in signing order
	pub fn names(&self) -> Vec<&'static str> {
		self.entries.iter().map(|(name, _)| *name).collect()
	}

	/// Concatenate all values in order, with no separators
	pub fn concat(&self) -> Result<String, SigningError> {
		let mut payload = String::new();
		for (name, value) in &self.entries {
			match value {
				Some(value) => payload.push_str(value),
				None => {
					return Err(SigningError::MissingField {
						field: (*name).to_string(),
					})
				},
			}
		}
		Ok(payload)
	}
}

/// Canonical wire rendering for booleans; the gateway expects `1`/`0`
pub fn flag(value: bool) -> &'static str {
	if value {
		"1"
	} else {
		"0"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_concat_preserves_caller_order() {
		let fields = FieldSet::new()
			.field("first", "abc")
			.field("second", "123")
			.field("third", "xyz");

		assert_eq!(fields.concat().unwrap(), "abc123xyz");
		assert_eq!(fields.names(), vec!["first", "second", "third"]);
	}

	#[test]
	fn test_concat_has_no_separators() {
		let fields = FieldSet::new().field("a", "1").field("b", "2");
		assert_eq!(fields.concat().unwrap(), "12");
	}

	#[test]
	fn test_len_counts_absent_entries() {
		let empty = FieldSet::new();
		assert!(empty.is_empty());
		assert_eq!(empty.len(), 0);

		// Absent values still occupy a position in the ordering
		let fields = FieldSet::new()
			.field("a", "1")
			.optional_field("b", None);
		assert!(!fields.is_empty());
		assert_eq!(fields.len(), 2);
	}

	#[test]
	fn test_missing_field_names_the_field() {
		let fields = FieldSet::new()
			.field("merchant_id", "10001")
			.optional_field("merchant_oid", None)
			.field("email", "x@example.com");

		let err = fields.concat().unwrap_err();
		match err {
			SigningError::MissingField { field } => assert_eq!(field, "merchant_oid"),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_empty_string_value_is_not_missing() {
		// Only an absent value is an error; an explicitly empty one signs as-is
		let fields = FieldSet::new()
			.field("a", "")
			.field("b", "tail");
		assert_eq!(fields.concat().unwrap(), "tail");
	}

	#[test]
	fn test_flag_rendering() {
		assert_eq!(flag(true), "1");
		assert_eq!(flag(false), "0");
	}

	#[test]
	fn test_signing_context_accessors() {
		let context = SigningContext::new(
			"10001",
			SecretString::from("key"),
			SecretString::from("salt"),
		);
		assert_eq!(context.merchant_id(), "10001");
		assert_eq!(context.merchant_key().expose_secret(), "key");
		assert_eq!(context.merchant_salt().expose_secret(), "salt");
	}
}
