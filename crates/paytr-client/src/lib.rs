//! PayTR Client
//!
//! The HTTP boundary of the SDK: a transport abstraction over reqwest and
//! the gateway client that composes the signing core with it. The signing
//! and verification logic itself lives in `paytr-signing`.

pub mod errors;
pub mod gateway;
pub mod transport;

pub use errors::{ClientError, ClientResult};
pub use gateway::{
	GatewayClient, RedirectUrls, CARD_LIST_PATH, CARD_REMOVE_PATH, PAYMENT_PATH,
};
pub use transport::{FormFields, HttpTransport, ReqwestTransport};
