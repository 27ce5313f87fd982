//! Typed payment requests
//!
//! The gateway accepts loosely structured form fields; these structs pin
//! down which fields each operation requires, with amounts as integers in
//! minor currency units.

use crate::models::SecretString;
use crate::payments::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
	Tl,
	Usd,
	Eur,
	Gbp,
	Rub,
}

impl Currency {
	pub fn as_str(&self) -> &'static str {
		match self {
			Currency::Tl => "TL",
			Currency::Usd => "USD",
			Currency::Eur => "EUR",
			Currency::Gbp => "GBP",
			Currency::Rub => "RUB",
		}
	}
}

impl fmt::Display for Currency {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Language of the hosted payment page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientLang {
	Tr,
	En,
}

impl ClientLang {
	pub fn as_str(&self) -> &'static str {
		match self {
			ClientLang::Tr => "tr",
			ClientLang::En => "en",
		}
	}
}

/// A single basket entry rendered into the gateway's `user_basket` field
///
/// The gateway displays the unit price verbatim, so it is kept as a decimal
/// string (e.g. `"18.00"`) rather than re-derived from minor units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasketItem {
	pub name: String,
	pub unit_price: String,
	pub quantity: u32,
}

impl BasketItem {
	pub fn new(name: impl Into<String>, unit_price: impl Into<String>, quantity: u32) -> Self {
		Self {
			name: name.into(),
			unit_price: unit_price.into(),
			quantity,
		}
	}
}

/// Card details for a direct payment
///
/// PAN and CVV are [`SecretString`]s; they are exposed only while the form
/// body is assembled and zeroize on drop.
#[derive(Debug, Clone)]
pub struct CardDetails {
	pub owner: String,
	pub number: SecretString,
	pub expiry_month: String,
	pub expiry_year: String,
	pub cvv: SecretString,
}

/// A direct card payment, with or without storing the card
#[derive(Debug, Clone)]
pub struct PaymentRequest {
	/// Customer IP as seen by the integrating server
	pub user_ip: String,
	/// Merchant order id; must be unique per transaction
	pub merchant_oid: String,
	pub email: String,
	/// Amount in minor currency units (kurus for TL)
	pub payment_amount: u64,
	pub currency: Currency,
	/// 0 lets the customer choose an installment plan
	pub installment_count: u32,
	pub no_installment: bool,
	pub max_installment: u32,
	pub test_mode: bool,
	pub non_3d: bool,
	pub sync_mode: bool,
	pub card: CardDetails,
	pub user_name: String,
	pub user_address: String,
	pub user_phone: String,
	pub basket: Vec<BasketItem>,
	pub debug_on: bool,
	pub client_lang: ClientLang,
}

impl PaymentRequest {
	/// Check the fields the signing string and the gateway both require.
	/// Fails fast so a malformed request is never signed or transmitted.
	pub fn validate(&self) -> Result<(), ValidationError> {
		require("user_ip", &self.user_ip)?;
		require("merchant_oid", &self.merchant_oid)?;
		require("email", &self.email)?;
		if self.payment_amount == 0 {
			return Err(ValidationError::InvalidAmount {
				reason: "payment_amount must be greater than zero".to_string(),
			});
		}
		require("cc_owner", &self.card.owner)?;
		require_secret("card_number", &self.card.number)?;
		require("expiry_month", &self.card.expiry_month)?;
		require("expiry_year", &self.card.expiry_year)?;
		require_secret("cvv", &self.card.cvv)?;
		for item in &self.basket {
			if item.name.is_empty() || item.unit_price.is_empty() {
				return Err(ValidationError::InvalidBasketEntry {
					reason: "basket entries need a name and a unit price".to_string(),
				});
			}
		}
		Ok(())
	}

	/// Render the basket as the JSON array of `[name, price, quantity]`
	/// triples the gateway expects
	pub fn basket_json(&self) -> Result<String, serde_json::Error> {
		let rows: Vec<(&str, &str, u32)> = self
			.basket
			.iter()
			.map(|item| (item.name.as_str(), item.unit_price.as_str(), item.quantity))
			.collect();
		serde_json::to_string(&rows)
	}
}

/// A recurring charge against a previously stored card
///
/// Recurring payments are always non-3D; the flag is fixed rather than
/// caller-supplied so the signed value and the transmitted value cannot
/// diverge.
#[derive(Debug, Clone)]
pub struct RecurringPaymentRequest {
	pub user_ip: String,
	pub merchant_oid: String,
	pub email: String,
	/// Amount in minor currency units
	pub payment_amount: u64,
	pub installment_count: u32,
	pub test_mode: bool,
	/// Customer token issued by the gateway when the card was stored
	pub utoken: SecretString,
	/// Card token identifying which stored card to charge
	pub ctoken: SecretString,
}

impl RecurringPaymentRequest {
	pub fn validate(&self) -> Result<(), ValidationError> {
		require("user_ip", &self.user_ip)?;
		require("merchant_oid", &self.merchant_oid)?;
		require("email", &self.email)?;
		if self.payment_amount == 0 {
			return Err(ValidationError::InvalidAmount {
				reason: "payment_amount must be greater than zero".to_string(),
			});
		}
		require_secret("utoken", &self.utoken)?;
		require_secret("ctoken", &self.ctoken)?;
		Ok(())
	}
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
	if value.is_empty() {
		return Err(ValidationError::MissingRequiredField {
			field: field.to_string(),
		});
	}
	Ok(())
}

fn require_secret(field: &'static str, value: &SecretString) -> Result<(), ValidationError> {
	if value.is_empty() {
		return Err(ValidationError::MissingRequiredField {
			field: field.to_string(),
		});
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn payment_request() -> PaymentRequest {
		PaymentRequest {
			user_ip: "127.0.0.1".to_string(),
			merchant_oid: "order-1".to_string(),
			email: "customer@example.com".to_string(),
			payment_amount: 10_000,
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
			basket: vec![BasketItem::new("Sample Product", "100.00", 1)],
			debug_on: false,
			client_lang: ClientLang::Tr,
		}
	}

	#[test]
	fn test_valid_request_passes() {
		assert!(payment_request().validate().is_ok());
	}

	#[test]
	fn test_missing_merchant_oid_names_the_field() {
		let mut request = payment_request();
		request.merchant_oid.clear();
		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), Some("merchant_oid"));
	}

	#[test]
	fn test_zero_amount_rejected() {
		let mut request = payment_request();
		request.payment_amount = 0;
		assert!(matches!(
			request.validate(),
			Err(ValidationError::InvalidAmount { .. })
		));
	}

	#[test]
	fn test_missing_cvv_rejected() {
		let mut request = payment_request();
		request.card.cvv = SecretString::from("");
		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), Some("cvv"));
	}

	#[test]
	fn test_basket_json_shape() {
		let mut request = payment_request();
		request.basket = vec![
			BasketItem::new("Sample Product 1", "18.00", 1),
			BasketItem::new("Sample Product 2", "33.25", 2),
		];
		let json = request.basket_json().unwrap();
		assert_eq!(
			json,
			r#"[["Sample Product 1","18.00",1],["Sample Product 2","33.25",2]]"#
		);
	}

	#[test]
	fn test_recurring_requires_tokens() {
		let request = RecurringPaymentRequest {
			user_ip: "127.0.0.1".to_string(),
			merchant_oid: "order-2".to_string(),
			email: "customer@example.com".to_string(),
			payment_amount: 5_000,
			installment_count: 0,
			test_mode: true,
			utoken: SecretString::from(""),
			ctoken: SecretString::from("ctoken-1"),
		};
		let err = request.validate().unwrap_err();
		assert_eq!(err.field(), Some("utoken"));
	}

	#[test]
	fn test_currency_rendering() {
		assert_eq!(Currency::Tl.as_str(), "TL");
		assert_eq!(Currency::Eur.to_string(), "EUR");
	}
}
