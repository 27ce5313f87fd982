//! Payment request and response models

pub mod errors;
pub mod request;
pub mod response;

pub use errors::ValidationError;
pub use request::{
	BasketItem, CardDetails, ClientLang, Currency, PaymentRequest, RecurringPaymentRequest,
};
pub use response::{PaymentResponse, PaymentStatus};
