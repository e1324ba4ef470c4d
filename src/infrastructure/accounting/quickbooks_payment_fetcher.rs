use async_trait::async_trait;
use log::info;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use time::Date;

use crate::domain::credentials::AccessToken;
use crate::domain::error::QuickBooksError;
use crate::domain::payment::{Payment, PaymentFetcher};
use crate::domain::payment_query::{MINOR_VERSION, payments_since};

#[derive(Debug, Deserialize)]
struct QueryEnvelope {
	#[serde(rename = "QueryResponse", default)]
	query_response: Option<QueryResponse>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
	#[serde(rename = "Payment", default)]
	payment: Option<Vec<Payment>>,
}

/// Runs payment queries against the QuickBooks Online accounting API.
#[derive(Clone)]
pub struct QuickBooksPaymentFetcher {
	http_client: Client,
	base_url:    String,
}

impl QuickBooksPaymentFetcher {
	pub fn new(http_client: Client, base_url: impl Into<String>) -> Self {
		Self {
			http_client,
			base_url: base_url.into(),
		}
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Query text is percent-encoded with `%20` for spaces.
	fn query_url(&self, realm_id: &str, query: &str) -> String {
		format!(
			"{}/v3/company/{realm_id}/query?query={}&minorversion={MINOR_VERSION}",
			self.base_url.trim_end_matches('/'),
			urlencoding::encode(query)
		)
	}
}

#[async_trait]
impl PaymentFetcher for QuickBooksPaymentFetcher {
	async fn fetch_since(
		&self,
		token: &AccessToken,
		realm_id: &str,
		since: Date,
	) -> Result<Vec<Payment>, QuickBooksError> {
		let query = payments_since(since);

		let resp = self
			.http_client
			.get(self.query_url(realm_id, &query))
			.header(AUTHORIZATION, format!("Bearer {}", token.secret()))
			.header(ACCEPT, "application/json")
			.send()
			.await
			.map_err(|e| QuickBooksError::query(e.to_string()))?;

		let status = resp.status();
		if !status.is_success() {
			let body = resp.text().await.unwrap_or_default();
			return Err(QuickBooksError::query(format!("status {status}: {body}")));
		}

		let envelope = resp
			.json::<QueryEnvelope>()
			.await
			.map_err(|e| QuickBooksError::query(format!("unexpected body: {e}")))?;

		let payments = envelope
			.query_response
			.and_then(|response| response.payment)
			.unwrap_or_default();
		info!("Fetched {} payments since {since}", payments.len());
		Ok(payments)
	}
}
