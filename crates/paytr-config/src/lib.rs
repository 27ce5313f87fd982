//! PayTR Config
//!
//! Settings structures and loading for the gateway client: merchant
//! credentials resolved from environment variables or plain values, gateway
//! host, redirect URLs, and logging options.

pub mod configurable_value;
pub mod loader;
pub mod settings;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::load_config;
pub use settings::{
	GatewaySettings, LogFormat, LoggingSettings, MerchantSettings, RedirectSettings, Settings,
};
