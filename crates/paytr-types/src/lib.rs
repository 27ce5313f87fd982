//! PayTR Types
//!
//! Shared models for the PayTR gateway client. This crate contains the
//! domain models organized by business entity: signing primitives, payment
//! requests and responses, stored-card operations, and callback
//! notifications.

pub mod callback;
pub mod cards;
pub mod models;
pub mod payments;
pub mod signing;

// Re-export serde_json for convenience
pub use serde_json;

// Re-export commonly used types for convenience
pub use callback::{CallbackError, CallbackNotification, CallbackOutcome};

pub use cards::{
	CardListResponse, GatewayFailure, ListCardsRequest, RemoveCardRequest, RemoveCardResponse,
	StoredCard,
};

pub use models::SecretString;

pub use payments::{
	BasketItem, CardDetails, ClientLang, Currency, PaymentRequest, PaymentResponse, PaymentStatus,
	RecurringPaymentRequest, ValidationError,
};

pub use signing::{FieldSet, SigningContext, SigningError, Token};
