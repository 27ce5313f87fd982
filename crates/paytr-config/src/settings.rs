//! Configuration settings structures

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};
use paytr_types::SigningContext;
use serde::{Deserialize, Serialize};

/// Main client settings
///
/// Every section falls back to its default when absent, so a partial config
/// file resolves instead of failing wholesale.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
	#[serde(default)]
	pub gateway: GatewaySettings,
	#[serde(default)]
	pub merchant: MerchantSettings,
	#[serde(default)]
	pub redirects: RedirectSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
}

/// Gateway endpoint configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewaySettings {
	/// Base URL of the gateway host
	pub host: String,
	/// Request timeout for HTTP calls
	pub timeout_ms: u64,
}

/// Merchant credentials
///
/// Key and salt are credential material and should reference environment
/// variables in production configurations.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MerchantSettings {
	pub merchant_id: ConfigurableValue,
	pub merchant_key: ConfigurableValue,
	pub merchant_salt: ConfigurableValue,
}

/// Customer redirect targets after a payment completes
///
/// Two independent values; the gateway sends the customer to whichever
/// matches the payment outcome.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RedirectSettings {
	pub success_url: ConfigurableValue,
	pub fail_url: ConfigurableValue,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for GatewaySettings {
	fn default() -> Self {
		Self {
			host: "https://www.paytr.com".to_string(),
			timeout_ms: 30_000,
		}
	}
}

impl Default for MerchantSettings {
	fn default() -> Self {
		Self {
			merchant_id: ConfigurableValue::from_env("PAYTR_MERCHANT_ID"),
			merchant_key: ConfigurableValue::from_env("PAYTR_MERCHANT_KEY"),
			merchant_salt: ConfigurableValue::from_env("PAYTR_MERCHANT_SALT"),
		}
	}
}

impl Default for RedirectSettings {
	fn default() -> Self {
		Self {
			success_url: ConfigurableValue::from_env("PAYTR_SUCCESS_URL"),
			fail_url: ConfigurableValue::from_env("PAYTR_FAIL_URL"),
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Resolve merchant credentials into an immutable signing context
	pub fn signing_context(&self) -> Result<SigningContext, ConfigurableValueError> {
		let merchant_id = self.merchant.merchant_id.resolve()?;
		let merchant_key = self.merchant.merchant_key.resolve_secret()?;
		let merchant_salt = self.merchant.merchant_salt.resolve_secret()?;
		Ok(SigningContext::new(merchant_id, merchant_key, merchant_salt))
	}

	pub fn success_url(&self) -> Result<String, ConfigurableValueError> {
		self.redirects.success_url.resolve()
	}

	pub fn fail_url(&self) -> Result<String, ConfigurableValueError> {
		self.redirects.fail_url.resolve()
	}
}
