//! Gateway client composing the token signer with an HTTP transport
//!
//! Boundary plumbing only: each operation validates its request, signs the
//! operation's ordered field set, merges the static fields, and posts with
//! the encoding the gateway expects. Transport errors surface unmodified;
//! retries are the caller's concern.

use paytr_signing::{
	card_list_fields, card_remove_fields, payment_fields, recurring_payment_fields, TokenSigner,
	TokenSignerTrait,
};
use paytr_types::signing::flag;
use paytr_types::{
	CardListResponse, ListCardsRequest, PaymentRequest, PaymentResponse,
	RecurringPaymentRequest, RemoveCardRequest, RemoveCardResponse, SigningContext, Token,
};
use serde_json::Value;
use tracing::debug;

use crate::errors::{ClientError, ClientResult};
use crate::transport::{FormFields, HttpTransport};

/// Payment submission endpoint, multipart-encoded
pub const PAYMENT_PATH: &str = "/odeme";
/// Stored-card listing endpoint, form-urlencoded
pub const CARD_LIST_PATH: &str = "/odeme/capi/list";
/// Stored-card removal endpoint, form-urlencoded
pub const CARD_REMOVE_PATH: &str = "/odeme/capi/delete";

/// Customer redirect targets sent with every payment request
///
/// Two independent values: `merchant_ok_url` receives the success URL and
/// `merchant_fail_url` the failure URL.
#[derive(Debug, Clone)]
pub struct RedirectUrls {
	pub success_url: String,
	pub fail_url: String,
}

/// Client for the five gateway operations
///
/// Holds the signer (and through it the immutable signing context) plus an
/// injected transport. Cheap to share behind an `Arc`; all state is
/// read-only after construction.
#[derive(Debug)]
pub struct GatewayClient<T: HttpTransport> {
	signer: TokenSigner,
	redirects: RedirectUrls,
	transport: T,
}

impl<T: HttpTransport> GatewayClient<T> {
	pub fn new(context: SigningContext, redirects: RedirectUrls, transport: T) -> Self {
		Self {
			signer: TokenSigner::new(context),
			redirects,
			transport,
		}
	}

	fn context(&self) -> &SigningContext {
		self.signer.context()
	}

	/// List the cards stored for a customer
	pub async fn list_cards(&self, request: &ListCardsRequest) -> ClientResult<CardListResponse> {
		request.validate()?;
		let token = self.signer.sign(&card_list_fields(request))?;

		let fields: FormFields = vec![
			("utoken".to_string(), request.utoken.expose_secret().to_string()),
			("merchant_id".to_string(), self.context().merchant_id().to_string()),
			("paytr_token".to_string(), token),
		];

		debug!(merchant_id = %self.context().merchant_id(), "listing stored cards");
		let value = self.transport.post_form(CARD_LIST_PATH, fields).await?;
		parse_response(value, "card list")
	}

	/// Remove a single stored card
	pub async fn remove_card(
		&self,
		request: &RemoveCardRequest,
	) -> ClientResult<RemoveCardResponse> {
		request.validate()?;
		let token = self.signer.sign(&card_remove_fields(request))?;

		let fields: FormFields = vec![
			("ctoken".to_string(), request.ctoken.expose_secret().to_string()),
			("utoken".to_string(), request.utoken.expose_secret().to_string()),
			("merchant_id".to_string(), self.context().merchant_id().to_string()),
			("paytr_token".to_string(), token),
		];

		debug!(merchant_id = %self.context().merchant_id(), "removing stored card");
		let value = self.transport.post_form(CARD_REMOVE_PATH, fields).await?;
		parse_response(value, "card removal")
	}

	/// Direct card payment
	pub async fn pay(&self, request: &PaymentRequest) -> ClientResult<PaymentResponse> {
		request.validate()?;
		let token = self.signer.sign(&payment_fields(self.context(), request, true))?;

		let mut fields = self.payment_body(request, token)?;
		fields.push(("currency".to_string(), request.currency.as_str().to_string()));

		debug!(merchant_oid = %request.merchant_oid, "submitting payment");
		self.submit_payment(fields).await
	}

	/// Direct card payment that also stores the card for later use
	pub async fn pay_and_store_card(
		&self,
		request: &PaymentRequest,
	) -> ClientResult<PaymentResponse> {
		request.validate()?;
		// The store-card token ordering omits currency
		let token = self.signer.sign(&payment_fields(self.context(), request, false))?;

		let mut fields = self.payment_body(request, token)?;
		fields.push(("currency".to_string(), request.currency.as_str().to_string()));
		fields.push(("store_card".to_string(), "1".to_string()));

		debug!(merchant_oid = %request.merchant_oid, "submitting payment with card storage");
		self.submit_payment(fields).await
	}

	/// Recurring charge against a previously stored card
	pub async fn recurring_pay(
		&self,
		request: &RecurringPaymentRequest,
	) -> ClientResult<PaymentResponse> {
		request.validate()?;
		let token = self
			.signer
			.sign(&recurring_payment_fields(self.context(), request))?;

		let fields: FormFields = vec![
			("merchant_id".to_string(), self.context().merchant_id().to_string()),
			("paytr_token".to_string(), token),
			("user_ip".to_string(), request.user_ip.clone()),
			("merchant_oid".to_string(), request.merchant_oid.clone()),
			("email".to_string(), request.email.clone()),
			("payment_amount".to_string(), request.payment_amount.to_string()),
			("payment_type".to_string(), "card".to_string()),
			("installment_count".to_string(), request.installment_count.to_string()),
			("test_mode".to_string(), flag(request.test_mode).to_string()),
			("non_3d".to_string(), "1".to_string()),
			("recurring_payment".to_string(), "1".to_string()),
			("utoken".to_string(), request.utoken.expose_secret().to_string()),
			("ctoken".to_string(), request.ctoken.expose_secret().to_string()),
			("merchant_ok_url".to_string(), self.redirects.success_url.clone()),
			("merchant_fail_url".to_string(), self.redirects.fail_url.clone()),
		];

		debug!(merchant_oid = %request.merchant_oid, "submitting recurring payment");
		self.submit_payment(fields).await
	}

	/// Shared body for the direct payment variants
	fn payment_body(&self, request: &PaymentRequest, token: Token) -> ClientResult<FormFields> {
		let basket = request.basket_json()?;
		let card = &request.card;

		Ok(vec![
			("merchant_id".to_string(), self.context().merchant_id().to_string()),
			("paytr_token".to_string(), token),
			("user_ip".to_string(), request.user_ip.clone()),
			("merchant_oid".to_string(), request.merchant_oid.clone()),
			("email".to_string(), request.email.clone()),
			("payment_amount".to_string(), request.payment_amount.to_string()),
			("payment_type".to_string(), "card".to_string()),
			("installment_count".to_string(), request.installment_count.to_string()),
			("no_installment".to_string(), flag(request.no_installment).to_string()),
			("max_installment".to_string(), request.max_installment.to_string()),
			("test_mode".to_string(), flag(request.test_mode).to_string()),
			("non_3d".to_string(), flag(request.non_3d).to_string()),
			("sync_mode".to_string(), flag(request.sync_mode).to_string()),
			("merchant_ok_url".to_string(), self.redirects.success_url.clone()),
			("merchant_fail_url".to_string(), self.redirects.fail_url.clone()),
			("user_name".to_string(), request.user_name.clone()),
			("user_address".to_string(), request.user_address.clone()),
			("user_phone".to_string(), request.user_phone.clone()),
			("user_basket".to_string(), basket),
			("debug_on".to_string(), flag(request.debug_on).to_string()),
			("client_lang".to_string(), request.client_lang.as_str().to_string()),
			("cc_owner".to_string(), card.owner.clone()),
			("card_number".to_string(), card.number.expose_secret().to_string()),
			("expiry_month".to_string(), card.expiry_month.clone()),
			("expiry_year".to_string(), card.expiry_year.clone()),
			("cvv".to_string(), card.cvv.expose_secret().to_string()),
		])
	}

	async fn submit_payment(&self, fields: FormFields) -> ClientResult<PaymentResponse> {
		let value = self.transport.post_multipart(PAYMENT_PATH, fields).await?;
		parse_response(value, "payment")
	}
}

fn parse_response<R: serde::de::DeserializeOwned>(value: Value, operation: &str) -> ClientResult<R> {
	serde_json::from_value(value).map_err(|e| ClientError::InvalidResponse {
		reason: format!("Failed to parse {} response: {}", operation, e),
	})
}
