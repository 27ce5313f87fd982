//! Mock transport for integration tests
//!
//! Records every request the gateway client makes and returns a canned JSON
//! response, with a call counter so tests can assert that invalid requests
//! never reach the wire.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use paytr_gateway::serde_json::Value;
use paytr_gateway::{ClientResult, FormFields, HttpTransport};

/// Which encoding the client chose for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
	FormUrlencoded,
	Multipart,
}

/// One captured outbound request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub path: String,
	pub encoding: Encoding,
	pub fields: FormFields,
}

impl RecordedRequest {
	/// First value for the named field, if present
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|(field_name, _)| field_name == name)
			.map(|(_, value)| value.as_str())
	}

	pub fn has_field(&self, name: &str) -> bool {
		self.field(name).is_some()
	}
}

/// Transport double returning a fixed response for every call
#[derive(Clone)]
pub struct MockTransport {
	response: Value,
	calls: Arc<AtomicUsize>,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockTransport {
	pub fn new(response: Value) -> Self {
		Self {
			response,
			calls: Arc::new(AtomicUsize::new(0)),
			requests: Arc::new(Mutex::new(Vec::new())),
		}
	}

	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.requests.lock().unwrap().clone()
	}

	/// The single captured request; panics if there is not exactly one
	pub fn only_request(&self) -> RecordedRequest {
		let requests = self.requests();
		assert_eq!(requests.len(), 1, "expected exactly one request");
		requests.into_iter().next().unwrap()
	}

	fn record(&self, path: &str, encoding: Encoding, fields: FormFields) -> Value {
		self.calls.fetch_add(1, Ordering::SeqCst);
		self.requests.lock().unwrap().push(RecordedRequest {
			path: path.to_string(),
			encoding,
			fields,
		});
		self.response.clone()
	}
}

#[async_trait]
impl HttpTransport for MockTransport {
	async fn post_form(&self, path: &str, fields: FormFields) -> ClientResult<Value> {
		Ok(self.record(path, Encoding::FormUrlencoded, fields))
	}

	async fn post_multipart(&self, path: &str, fields: FormFields) -> ClientResult<Value> {
		Ok(self.record(path, Encoding::Multipart, fields))
	}
}

/// Signing context used across the integration suites
pub fn test_context() -> paytr_gateway::SigningContext {
	paytr_gateway::SigningContext::new(
		"10001",
		paytr_gateway::SecretString::from("test-key"),
		paytr_gateway::SecretString::from("test-salt"),
	)
}

/// Redirect URLs used across the integration suites
pub fn test_redirects() -> paytr_gateway::RedirectUrls {
	paytr_gateway::RedirectUrls {
		success_url: "https://example.com/payment/success".to_string(),
		fail_url: "https://example.com/payment/fail".to_string(),
	}
}
