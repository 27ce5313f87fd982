//! Validation errors for typed gateway requests

use thiserror::Error;

/// Request validation failures, raised before any signing or network call
#[derive(Error, Debug)]
pub enum ValidationError {
	#[error("Missing required field: {field}")]
	MissingRequiredField { field: String },

	#[error("Invalid amount: {reason}")]
	InvalidAmount { reason: String },

	#[error("Invalid basket entry: {reason}")]
	InvalidBasketEntry { reason: String },
}

impl ValidationError {
	/// The offending field name, when the error concerns a single field
	pub fn field(&self) -> Option<&str> {
		match self {
			ValidationError::MissingRequiredField { field } => Some(field),
			_ => None,
		}
	}
}
