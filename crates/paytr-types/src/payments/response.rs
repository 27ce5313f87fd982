//! Gateway payment responses

use serde::Deserialize;
use std::collections::HashMap;

/// Final or interim status reported by the gateway for a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
	Success,
	Failed,
	/// Asynchronous flow; the result arrives later through the callback
	WaitCallback,
	#[serde(other)]
	Unknown,
}

/// Parsed `/odeme` response
///
/// Fields the gateway sends beyond the stable trio are preserved in `extra`
/// rather than dropped, since the gateway adds diagnostic fields in test
/// mode.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentResponse {
	pub status: PaymentStatus,
	#[serde(default)]
	pub reason: Option<String>,
	#[serde(default)]
	pub token: Option<String>,
	#[serde(flatten)]
	pub extra: HashMap<String, serde_json::Value>,
}

impl PaymentResponse {
	pub fn is_success(&self) -> bool {
		self.status == PaymentStatus::Success
	}
}
