//! Configurable values that resolve from environment variables or plain text
//!
//! Merchant credentials should come from the environment in production; the
//! plain form exists for tests and local development.

use paytr_types::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value that is either an environment-variable reference or a literal
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ConfigurableValue {
	/// "env" to read from an environment variable, "plain" for a literal
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// The environment variable name, or the literal value itself
	pub value: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	Env,
	Plain,
}

impl ConfigurableValue {
	/// Reference an environment variable
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	/// Use a literal value directly
	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the actual value
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve directly into a [`SecretString`] for credential material
	pub fn resolve_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		Ok(SecretString::from(self.resolve()?.as_str()))
	}

	/// Describe the source of this value for startup logging
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "configured plain value".to_string(),
		}
	}
}

/// Errors raised while resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Display never shows a resolvable value; plain literals may be credentials
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		// "env:NAME" selects the environment form; anything else is literal
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}
