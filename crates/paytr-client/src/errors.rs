//! Error types for gateway client operations

use paytr_types::{SigningError, ValidationError};
use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

/// Gateway client operation errors
#[derive(Error, Debug)]
pub enum ClientError {
	/// Raised before signing; no token is computed and no request is sent
	#[error("Request validation failed: {0}")]
	Validation(#[from] ValidationError),

	#[error(transparent)]
	Signing(#[from] SigningError),

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Configuration error: {reason}")]
	Config { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl ClientError {
	/// Extract the HTTP status code from the error if available
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ClientError::HttpStatus { status_code, .. } => Some(*status_code),
			ClientError::Http(reqwest_error) => {
				reqwest_error.status().map(|status| status.as_u16())
			},
			_ => None,
		}
	}
}
