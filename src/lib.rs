//! PayTR Gateway
//!
//! Client SDK for the PayTR card-payment gateway: deterministic HMAC-SHA256
//! request signing, verification of asynchronous payment-result callbacks,
//! and the five gateway operations (pay, pay-and-store-card, recurring pay,
//! list cards, remove card).

// Core domain types - the most commonly used types
pub use paytr_types::{
	// External dependencies for convenience
	serde_json,
	// Callback verification
	CallbackError,
	CallbackNotification,
	CallbackOutcome,
	// Card operations
	CardListResponse,
	ListCardsRequest,
	RemoveCardRequest,
	RemoveCardResponse,
	StoredCard,
	// Payments
	BasketItem,
	CardDetails,
	ClientLang,
	Currency,
	PaymentRequest,
	PaymentResponse,
	PaymentStatus,
	RecurringPaymentRequest,
	// Signing primitives
	FieldSet,
	SecretString,
	SigningContext,
	SigningError,
	Token,
	ValidationError,
};

// Signing core
pub use paytr_signing::{
	callback_fields, card_list_fields, card_remove_fields, payment_fields,
	recurring_payment_fields, CallbackVerifier, TokenSigner, TokenSignerTrait,
};

// HTTP boundary
pub use paytr_client::{
	ClientError, ClientResult, FormFields, GatewayClient, HttpTransport, RedirectUrls,
	ReqwestTransport,
};

// Config
pub use paytr_config::{load_config, ConfigurableValue, LogFormat, Settings};

// Module aliases for advanced usage
pub mod types {
	pub use paytr_types::*;
}

pub mod signing {
	pub use paytr_signing::*;
}

pub mod client {
	pub use paytr_client::*;
}

pub mod config {
	pub use paytr_config::*;
}

use tracing::info;

/// Builder wiring settings into a ready gateway client
///
/// [`GatewayBuilder::start`] handles the full startup path: loading `.env`,
/// loading the config file with defaults, initializing tracing, resolving
/// credentials, and constructing the reqwest transport. [`GatewayBuilder::build`]
/// does the same without touching the process environment or the global
/// tracing subscriber, which is what tests and embedding applications want.
#[derive(Default)]
pub struct GatewayBuilder {
	settings: Option<Settings>,
}

impl GatewayBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	///
	/// Installation is best-effort: when a subscriber is already set
	/// (repeated starts, embedding applications), the existing one stays.
	fn init_tracing_from_settings(&self, settings: &Settings) {
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					let _ = subscriber.with_target(true).with_thread_ids(true).try_init();
				} else {
					let _ = subscriber.try_init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					let _ = subscriber.with_target(true).with_thread_ids(true).try_init();
				} else {
					let _ = subscriber.try_init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					let _ = subscriber.with_target(true).with_thread_ids(true).try_init();
				} else {
					let _ = subscriber.try_init();
				}
			},
		}
	}

	/// Build the client from the provided settings (or defaults)
	pub fn build(self) -> ClientResult<GatewayClient<ReqwestTransport>> {
		let settings = self.settings.unwrap_or_default();
		Self::client_from_settings(&settings)
	}

	/// Full startup: `.env`, config file, tracing, then the client
	pub fn start(mut self) -> ClientResult<GatewayClient<ReqwestTransport>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let mut settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config().unwrap_or_default(),
		};

		// PAYTR_HOST overrides the configured gateway host, but never
		// explicitly provided settings
		if !using_provided_settings {
			if let Ok(host) = std::env::var("PAYTR_HOST") {
				settings.gateway.host = host;
			}
		}

		self.init_tracing_from_settings(&settings);

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);

		let client = Self::client_from_settings(&settings)?;
		info!(
			"PayTR gateway client configured for {} (merchant id from {})",
			settings.gateway.host,
			settings.merchant.merchant_id.description()
		);
		Ok(client)
	}

	fn client_from_settings(settings: &Settings) -> ClientResult<GatewayClient<ReqwestTransport>> {
		let context = settings.signing_context().map_err(|e| ClientError::Config {
			reason: e.to_string(),
		})?;
		let redirects = RedirectUrls {
			success_url: settings.success_url().map_err(|e| ClientError::Config {
				reason: e.to_string(),
			})?,
			fail_url: settings.fail_url().map_err(|e| ClientError::Config {
				reason: e.to_string(),
			})?,
		};
		let transport =
			ReqwestTransport::new(settings.gateway.host.clone(), settings.gateway.timeout_ms)?;

		Ok(GatewayClient::new(context, redirects, transport))
	}
}
