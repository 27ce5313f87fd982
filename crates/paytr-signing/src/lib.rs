//! PayTR Signing
//!
//! The message authentication core: deterministic token generation over
//! explicitly ordered field sets, the per-operation field-order contracts,
//! and verification of gateway callback signatures.

pub mod fields;
pub mod signer;
pub mod verifier;

pub use fields::{
	callback_fields, card_list_fields, card_remove_fields, payment_fields,
	recurring_payment_fields,
};
pub use signer::{TokenSigner, TokenSignerTrait};
pub use verifier::CallbackVerifier;
