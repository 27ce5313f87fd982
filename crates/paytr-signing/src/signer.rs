//! HMAC-SHA256 token generation

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use paytr_types::{FieldSet, SigningContext, SigningError, Token};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Token generation behind a trait so callers can be tested without real
/// credentials
#[cfg_attr(test, mockall::automock)]
pub trait TokenSignerTrait: Send + Sync {
	/// Sign an ordered field set, returning the base64 token
	fn sign(&self, fields: &FieldSet) -> Result<Token, SigningError>;
}

/// Deterministic token generation over an explicitly ordered field set
///
/// The signing string is the concatenation of the field values in caller
/// order with the merchant salt appended as the final suffix; the token is
/// the base64-encoded HMAC-SHA256 digest of that string under the merchant
/// key. Pure and synchronous; a shared instance is safe to use from any
/// number of threads.
#[derive(Debug)]
pub struct TokenSigner {
	context: SigningContext,
}

impl TokenSigner {
	pub fn new(context: SigningContext) -> Self {
		Self { context }
	}

	pub fn context(&self) -> &SigningContext {
		&self.context
	}
}

impl TokenSignerTrait for TokenSigner {
	fn sign(&self, fields: &FieldSet) -> Result<Token, SigningError> {
		let mut payload = fields.concat()?;
		payload.push_str(self.context.merchant_salt().expose_secret());

		let mut mac =
			HmacSha256::new_from_slice(self.context.merchant_key().expose_secret().as_bytes())
				.map_err(|e| SigningError::HmacCreation {
					reason: e.to_string(),
				})?;
		mac.update(payload.as_bytes());

		Ok(BASE64.encode(mac.finalize().into_bytes()))
	}
}
