//! Stored-card (card API) requests and responses

use crate::models::SecretString;
use crate::payments::errors::ValidationError;
use serde::Deserialize;

/// List the cards stored for a customer
#[derive(Debug, Clone)]
pub struct ListCardsRequest {
	/// Customer token issued by the gateway when a card was first stored
	pub utoken: SecretString,
}

impl ListCardsRequest {
	pub fn new(utoken: SecretString) -> Self {
		Self { utoken }
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.utoken.is_empty() {
			return Err(ValidationError::MissingRequiredField {
				field: "utoken".to_string(),
			});
		}
		Ok(())
	}
}

/// Remove a single stored card
#[derive(Debug, Clone)]
pub struct RemoveCardRequest {
	/// Token identifying the card to remove
	pub ctoken: SecretString,
	pub utoken: SecretString,
}

impl RemoveCardRequest {
	pub fn new(ctoken: SecretString, utoken: SecretString) -> Self {
		Self { ctoken, utoken }
	}

	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.ctoken.is_empty() {
			return Err(ValidationError::MissingRequiredField {
				field: "ctoken".to_string(),
			});
		}
		if self.utoken.is_empty() {
			return Err(ValidationError::MissingRequiredField {
				field: "utoken".to_string(),
			});
		}
		Ok(())
	}
}

/// A card the gateway holds for a customer
#[derive(Debug, Clone, Deserialize)]
pub struct StoredCard {
	pub ctoken: String,
	pub last_4: String,
	pub month: String,
	pub year: String,
	#[serde(default)]
	pub c_name: Option<String>,
	#[serde(default)]
	pub c_bank: Option<String>,
	#[serde(default)]
	pub c_brand: Option<String>,
	#[serde(default)]
	pub require_cvv: Option<u8>,
}

/// Error body returned by the card API on failure
#[derive(Debug, Clone, Deserialize)]
pub struct GatewayFailure {
	pub status: String,
	#[serde(default)]
	pub err_msg: Option<String>,
	#[serde(default)]
	pub err_no: Option<String>,
}

/// Card-list result: a bare array on success, an error object otherwise
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CardListResponse {
	Cards(Vec<StoredCard>),
	Failure(GatewayFailure),
}

impl CardListResponse {
	pub fn cards(&self) -> Option<&[StoredCard]> {
		match self {
			CardListResponse::Cards(cards) => Some(cards),
			CardListResponse::Failure(_) => None,
		}
	}
}

/// Card-removal result
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveCardResponse {
	pub status: String,
	#[serde(default)]
	pub err_msg: Option<String>,
}

impl RemoveCardResponse {
	pub fn is_success(&self) -> bool {
		self.status == "success"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_card_list_parses_array() {
		let body = r#"[{"ctoken":"ct-1","last_4":"0796","month":"12","year":"30","c_bank":"Test Bank"}]"#;
		let response: CardListResponse = serde_json::from_str(body).unwrap();
		let cards = response.cards().unwrap();
		assert_eq!(cards.len(), 1);
		assert_eq!(cards[0].last_4, "0796");
		assert_eq!(cards[0].c_bank.as_deref(), Some("Test Bank"));
	}

	#[test]
	fn test_card_list_parses_failure_object() {
		let body = r#"{"status":"error","err_msg":"utoken gecersiz"}"#;
		let response: CardListResponse = serde_json::from_str(body).unwrap();
		assert!(response.cards().is_none());
		match response {
			CardListResponse::Failure(failure) => {
				assert_eq!(failure.err_msg.as_deref(), Some("utoken gecersiz"))
			},
			CardListResponse::Cards(_) => panic!("expected failure"),
		}
	}

	#[test]
	fn test_remove_card_status() {
		let ok: RemoveCardResponse = serde_json::from_str(r#"{"status":"success"}"#).unwrap();
		assert!(ok.is_success());

		let err: RemoveCardResponse =
			serde_json::from_str(r#"{"status":"error","err_msg":"ctoken gecersiz"}"#).unwrap();
		assert!(!err.is_success());
	}

	#[test]
	fn test_request_validation() {
		let request = ListCardsRequest::new(SecretString::from(""));
		assert_eq!(request.validate().unwrap_err().field(), Some("utoken"));

		let request =
			RemoveCardRequest::new(SecretString::from(""), SecretString::from("utoken-1"));
		assert_eq!(request.validate().unwrap_err().field(), Some("ctoken"));
	}
}
