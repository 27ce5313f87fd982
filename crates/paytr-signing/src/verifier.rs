//! Callback signature verification

use paytr_types::{CallbackError, CallbackNotification, CallbackOutcome};

use crate::fields::callback_fields;
use crate::signer::{TokenSigner, TokenSignerTrait};

/// Verifies gateway-initiated payment-result notifications
///
/// Recomputes the expected token over the callback field ordering and
/// compares it constant-time against the gateway-supplied hash. Pure and
/// idempotent: the gateway retries callbacks, and every delivery is checked
/// independently with no side effects.
pub struct CallbackVerifier {
	signer: TokenSigner,
}

impl CallbackVerifier {
	pub fn new(signer: TokenSigner) -> Self {
		Self { signer }
	}

	/// Verify a notification's signature and report the payment outcome
	///
	/// A hash mismatch is a hard failure; the caller must not act on the
	/// notification's status when this returns
	/// [`CallbackError::InvalidSignature`].
	pub fn verify(
		&self,
		notification: &CallbackNotification,
	) -> Result<CallbackOutcome, CallbackError> {
		let fields = callback_fields(self.signer.context(), notification);
		let expected = self.signer.sign(&fields)?;

		if !constant_time_eq(expected.as_bytes(), notification.hash.as_bytes()) {
			return Err(CallbackError::InvalidSignature);
		}

		if notification.status == "success" {
			Ok(CallbackOutcome::Success)
		} else {
			Ok(CallbackOutcome::Failure)
		}
	}
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
	if a.len() != b.len() {
		return false;
	}

	let mut result = 0u8;
	for (x, y) in a.iter().zip(b.iter()) {
		result |= x ^ y;
	}
	result == 0
}
