//! Asynchronous payment-result notifications
//!
//! The gateway delivers the final status of a payment to the merchant's
//! callback endpoint, possibly more than once on retries. Only verification
//! lives in this SDK; receiving and parsing the HTTP request is the
//! caller's responsibility.

use crate::signing::SigningError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A gateway-initiated notification, already parsed from the callback form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackNotification {
	pub merchant_oid: String,
	/// `"success"`, `"failed"`, or other gateway-defined values
	pub status: String,
	/// Total charged amount as the gateway renders it
	pub total_amount: String,
	/// Gateway-supplied signature over the notification
	pub hash: String,
}

/// Verified payment outcome
///
/// Any status other than `"success"` collapses to `Failure` at this layer;
/// callers needing finer discrimination read `notification.status` after
/// verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackOutcome {
	Success,
	Failure,
}

impl CallbackOutcome {
	pub fn is_success(&self) -> bool {
		matches!(self, CallbackOutcome::Success)
	}
}

/// Errors raised while verifying a callback
#[derive(Error, Debug)]
pub enum CallbackError {
	/// The supplied hash did not match the recomputed signature. A security
	/// failure: the notification must not be acted on, and repeated
	/// occurrences signal tampering or misconfigured credentials.
	#[error("Invalid Hash")]
	InvalidSignature,

	#[error(transparent)]
	Signing(#[from] SigningError),
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_outcome_success_flag() {
		assert!(CallbackOutcome::Success.is_success());
		assert!(!CallbackOutcome::Failure.is_success());
	}

	#[test]
	fn test_notification_deserializes_from_form_shape() {
		let body = r#"{"merchant_oid":"test12345","status":"success","total_amount":"10000","hash":"dGVzdA=="}"#;
		let notification: CallbackNotification = serde_json::from_str(body).unwrap();
		assert_eq!(notification.merchant_oid, "test12345");
		assert_eq!(notification.status, "success");
	}

	#[test]
	fn test_invalid_signature_message() {
		assert_eq!(CallbackError::InvalidSignature.to_string(), "Invalid Hash");
	}
}
