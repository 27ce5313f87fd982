//! HTTP transport to the gateway host
//!
//! The client only needs `post(path, fields, encoding) -> JSON`; the trait
//! keeps the reqwest plumbing swappable for tests.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::errors::{ClientError, ClientResult};

/// Outbound form payload: ordered (name, value) pairs ready for encoding
pub type FormFields = Vec<(String, String)>;

/// Generic POST transport returning the gateway's parsed JSON response
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
	/// POST as `application/x-www-form-urlencoded`
	async fn post_form(&self, path: &str, fields: FormFields) -> ClientResult<Value>;

	/// POST as `multipart/form-data`
	async fn post_multipart(&self, path: &str, fields: FormFields) -> ClientResult<Value>;
}

/// reqwest-backed transport bound to a single gateway host
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
	client: Client,
	base_url: String,
}

impl ReqwestTransport {
	pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> ClientResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert("Accept", HeaderValue::from_static("application/json"));
		headers.insert("User-Agent", HeaderValue::from_static("paytr-gateway/0.1"));

		let client = Client::builder()
			.default_headers(headers)
			.timeout(Duration::from_millis(timeout_ms))
			.build()?;

		Ok(Self {
			client,
			base_url: base_url.into(),
		})
	}

	/// Join the base host with an operation path
	fn build_url(&self, path: &str) -> ClientResult<String> {
		let mut base = Url::parse(&self.base_url).map_err(|e| ClientError::Config {
			reason: format!("Invalid gateway host '{}': {}", self.base_url, e),
		})?;

		// Treat the base URL as a directory so join() appends instead of replacing
		if !base.path().ends_with('/') {
			base.set_path(&format!("{}/", base.path()));
		}

		let joined = base
			.join(path.trim_start_matches('/'))
			.map_err(|e| ClientError::Config {
				reason: format!("Failed to join path '{}' to '{}': {}", path, self.base_url, e),
			})?;

		Ok(joined.to_string())
	}

	async fn decode(response: reqwest::Response) -> ClientResult<Value> {
		let status = response.status();
		if !status.is_success() {
			return Err(ClientError::HttpStatus {
				status_code: status.as_u16(),
				reason: status
					.canonical_reason()
					.unwrap_or("HTTP error")
					.to_string(),
			});
		}

		let body = response.text().await?;
		serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse {
			reason: format!("Gateway response was not JSON: {}", e),
		})
	}
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
	async fn post_form(&self, path: &str, fields: FormFields) -> ClientResult<Value> {
		let url = self.build_url(path)?;
		// Field values carry tokens and card data; log only the shape
		debug!(path, field_count = fields.len(), "POST form-urlencoded");

		let response = self.client.post(&url).form(&fields).send().await?;
		Self::decode(response).await
	}

	async fn post_multipart(&self, path: &str, fields: FormFields) -> ClientResult<Value> {
		let url = self.build_url(path)?;
		debug!(path, field_count = fields.len(), "POST multipart");

		let mut form = reqwest::multipart::Form::new();
		for (name, value) in fields {
			form = form.text(name, value);
		}

		let response = self.client.post(&url).multipart(form).send().await?;
		Self::decode(response).await
	}
}
