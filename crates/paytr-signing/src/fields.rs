//! Per-operation ordered field sets
//!
//! The gateway recomputes each token over the exact byte sequence of these
//! values, so the orderings below are part of the wire contract. They are
//! spelled out per operation instead of being derived from request struct
//! layout or map iteration order.

use paytr_types::signing::flag;
use paytr_types::{
	CallbackNotification, FieldSet, ListCardsRequest, PaymentRequest, RecurringPaymentRequest,
	RemoveCardRequest, SigningContext,
};

/// Ordering for listing stored cards: `utoken`
pub fn card_list_fields(request: &ListCardsRequest) -> FieldSet {
	FieldSet::new().optional_field("utoken", non_empty(request.utoken.expose_secret()))
}

/// Ordering for removing a stored card: `ctoken`, `utoken`
pub fn card_remove_fields(request: &RemoveCardRequest) -> FieldSet {
	FieldSet::new()
		.optional_field("ctoken", non_empty(request.ctoken.expose_secret()))
		.optional_field("utoken", non_empty(request.utoken.expose_secret()))
}

/// Ordering for direct payments. `include_currency` is true only for the
/// plain pay operation; the store-card variant signs without it.
pub fn payment_fields(
	context: &SigningContext,
	request: &PaymentRequest,
	include_currency: bool,
) -> FieldSet {
	let set = FieldSet::new()
		.field("merchant_id", context.merchant_id())
		.optional_field("user_ip", non_empty(&request.user_ip))
		.optional_field("merchant_oid", non_empty(&request.merchant_oid))
		.optional_field("email", non_empty(&request.email))
		.field("payment_amount", request.payment_amount.to_string())
		.field("payment_type", "card")
		.field("installment_count", request.installment_count.to_string());

	let set = if include_currency {
		set.field("currency", request.currency.as_str())
	} else {
		set
	};

	set.field("test_mode", flag(request.test_mode))
		.field("non_3d", flag(request.non_3d))
}

/// Ordering for recurring payments against a stored card. `non_3d` is fixed
/// to `1`, matching the value transmitted in the body.
pub fn recurring_payment_fields(
	context: &SigningContext,
	request: &RecurringPaymentRequest,
) -> FieldSet {
	FieldSet::new()
		.field("merchant_id", context.merchant_id())
		.optional_field("user_ip", non_empty(&request.user_ip))
		.optional_field("merchant_oid", non_empty(&request.merchant_oid))
		.optional_field("email", non_empty(&request.email))
		.field("payment_amount", request.payment_amount.to_string())
		.field("payment_type", "card")
		.field("installment_count", request.installment_count.to_string())
		.field("test_mode", flag(request.test_mode))
		.field("non_3d", "1")
}

/// Ordering for callback verification: `merchant_oid`, `merchant_salt`,
/// `status`, `total_amount`.
///
/// The salt appears here as a field value in addition to the suffix the
/// signer always appends; the gateway computes callback hashes with the salt
/// in both positions, and only there. Request signing uses it solely as the
/// suffix.
pub fn callback_fields(context: &SigningContext, notification: &CallbackNotification) -> FieldSet {
	FieldSet::new()
		.optional_field("merchant_oid", non_empty(&notification.merchant_oid))
		.field("merchant_salt", context.merchant_salt().expose_secret())
		.optional_field("status", non_empty(&notification.status))
		.optional_field("total_amount", non_empty(&notification.total_amount))
}

fn non_empty(value: &str) -> Option<String> {
	if value.is_empty() {
		None
	} else {
		Some(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use paytr_types::{
		BasketItem, CardDetails, ClientLang, Currency, SecretString, SigningError,
	};

	fn context() -> SigningContext {
		SigningContext::new(
			"10001",
			SecretString::from("test-key"),
			SecretString::from("test-salt"),
		)
	}

	fn payment_request() -> PaymentRequest {
		PaymentRequest {
			user_ip: "127.0.0.1".to_string(),
			merchant_oid: "test12345".to_string(),
			email: "customer@example.com".to_string(),
			payment_amount: 100,
			currency: Currency::Tl,
			installment_count: 0,
			no_installment: false,
			max_installment: 0,
			test_mode: true,
			non_3d: false,
			sync_mode: false,
			card: CardDetails {
				owner: "PAYTR TEST".to_string(),
				number: SecretString::from("9792030394440796"),
				expiry_month: "12".to_string(),
				expiry_year: "30".to_string(),
				cvv: SecretString::from("000"),
			},
			user_name: "Customer Name".to_string(),
			user_address: "Customer Address".to_string(),
			user_phone: "1234567890".to_string(),
			basket: vec![BasketItem::new("Sample Product", "1.00", 1)],
			debug_on: false,
			client_lang: ClientLang::Tr,
		}
	}

	#[test]
	fn test_payment_ordering_with_currency() {
		let fields = payment_fields(&context(), &payment_request(), true);
		assert_eq!(
			fields.names(),
			vec![
				"merchant_id",
				"user_ip",
				"merchant_oid",
				"email",
				"payment_amount",
				"payment_type",
				"installment_count",
				"currency",
				"test_mode",
				"non_3d",
			]
		);
		assert_eq!(
			fields.concat().unwrap(),
			"10001127.0.0.1test12345customer@example.com100card0TL10"
		);
	}

	#[test]
	fn test_store_card_ordering_omits_currency() {
		let fields = payment_fields(&context(), &payment_request(), false);
		assert!(!fields.names().contains(&"currency"));
		assert_eq!(
			fields.concat().unwrap(),
			"10001127.0.0.1test12345customer@example.com100card010"
		);
	}

	#[test]
	fn test_missing_merchant_oid_fails_signing() {
		let mut request = payment_request();
		request.merchant_oid.clear();
		let err = payment_fields(&context(), &request, true)
			.concat()
			.unwrap_err();
		match err {
			SigningError::MissingField { field } => assert_eq!(field, "merchant_oid"),
			other => panic!("unexpected error: {other}"),
		}
	}

	#[test]
	fn test_recurring_ordering_forces_non_3d() {
		let request = RecurringPaymentRequest {
			user_ip: "127.0.0.1".to_string(),
			merchant_oid: "test12345".to_string(),
			email: "customer@example.com".to_string(),
			payment_amount: 100,
			installment_count: 0,
			test_mode: false,
			utoken: SecretString::from("utoken-1"),
			ctoken: SecretString::from("ctoken-1"),
		};
		let fields = recurring_payment_fields(&context(), &request);
		assert_eq!(
			fields.concat().unwrap(),
			"10001127.0.0.1test12345customer@example.com100card001"
		);
	}

	#[test]
	fn test_card_orderings() {
		let list = card_list_fields(&ListCardsRequest::new(SecretString::from("u-1")));
		assert_eq!(list.names(), vec!["utoken"]);
		assert_eq!(list.concat().unwrap(), "u-1");

		let remove = card_remove_fields(&RemoveCardRequest::new(
			SecretString::from("c-1"),
			SecretString::from("u-1"),
		));
		assert_eq!(remove.names(), vec!["ctoken", "utoken"]);
		assert_eq!(remove.concat().unwrap(), "c-1u-1");
	}

	#[test]
	fn test_callback_ordering_includes_salt_as_field() {
		let notification = CallbackNotification {
			merchant_oid: "test12345".to_string(),
			status: "success".to_string(),
			total_amount: "10000".to_string(),
			hash: String::new(),
		};
		let fields = callback_fields(&context(), &notification);
		assert_eq!(
			fields.names(),
			vec!["merchant_oid", "merchant_salt", "status", "total_amount"]
		);
		assert_eq!(
			fields.concat().unwrap(),
			"test12345test-saltsuccess10000"
		);
	}
}
