use std::time::Duration;

use mockito::{Matcher, Mock, ServerGuard};
use quickbooks_payments_proxy::QuickBooksPaymentsUseCase;
use quickbooks_payments_proxy::domain::credentials::Credentials;
use quickbooks_payments_proxy::domain::payment_query::{
	payments_since, window_start,
};
use quickbooks_payments_proxy::infrastructure::accounting::quickbooks_payment_fetcher::QuickBooksPaymentFetcher;
use quickbooks_payments_proxy::infrastructure::oauth::intuit_token_acquirer::IntuitTokenAcquirer;
use quickbooks_payments_proxy::use_cases::fetch_payments::FetchPaymentsUseCase;
use reqwest::Client;
use time::OffsetDateTime;

pub const TOKEN_PATH: &str = "/oauth2/v1/tokens/bearer";
pub const REALM_ID: &str = "9130357792";
/// base64("test-client:test-secret")
pub const BASIC_AUTHORIZATION: &str = "Basic dGVzdC1jbGllbnQ6dGVzdC1zZWNyZXQ=";

/// One mockito server playing both the Intuit token endpoint and the
/// accounting API.
pub struct IntuitTestServer {
	pub server: ServerGuard,
}

impl IntuitTestServer {
	pub async fn start() -> Self {
		Self {
			server: mockito::Server::new_async().await,
		}
	}

	pub fn token_url(&self) -> String {
		format!("{}{TOKEN_PATH}", self.server.url())
	}

	pub fn query_path(&self) -> String {
		format!("/v3/company/{REALM_ID}/query")
	}

	pub fn use_case(&self, credentials: Credentials) -> QuickBooksPaymentsUseCase {
		let http_client = http_client();
		FetchPaymentsUseCase::new(
			credentials,
			IntuitTokenAcquirer::with_token_url(
				http_client.clone(),
				self.token_url(),
			),
			QuickBooksPaymentFetcher::new(http_client, self.server.url()),
		)
	}

	pub async fn mock_token(&mut self, status: usize, body: &str) -> Mock {
		self.server
			.mock("POST", TOKEN_PATH)
			.match_header("authorization", BASIC_AUTHORIZATION)
			.match_header("content-type", "application/x-www-form-urlencoded")
			.match_body(Matcher::AllOf(vec![
				Matcher::UrlEncoded(
					"grant_type".to_string(),
					"refresh_token".to_string(),
				),
				Matcher::UrlEncoded(
					"refresh_token".to_string(),
					"test-refresh".to_string(),
				),
			]))
			.with_status(status)
			.with_header("content-type", "application/json")
			.with_body(body)
			.create_async()
			.await
	}

	pub async fn mock_query(
		&mut self,
		bearer: &str,
		status: usize,
		body: &str,
	) -> Mock {
		let query_path = self.query_path();
		self.server
			.mock("GET", query_path.as_str())
			.match_query(Matcher::AllOf(vec![
				Matcher::UrlEncoded("query".to_string(), expected_query()),
				Matcher::UrlEncoded("minorversion".to_string(), "65".to_string()),
			]))
			.match_header("authorization", format!("Bearer {bearer}").as_str())
			.match_header("accept", "application/json")
			.with_status(status)
			.with_header("content-type", "application/json")
			.with_body(body)
			.create_async()
			.await
	}

	/// A query mock that must never be hit.
	pub async fn forbid_query(&mut self) -> Mock {
		let query_path = self.query_path();
		self.server
			.mock("GET", query_path.as_str())
			.match_query(Matcher::Any)
			.expect(0)
			.create_async()
			.await
	}

	/// A token mock that must never be hit.
	pub async fn forbid_token(&mut self) -> Mock {
		self.server
			.mock("POST", TOKEN_PATH)
			.expect(0)
			.create_async()
			.await
	}
}

pub fn credentials() -> Credentials {
	Credentials {
		client_id:     Some("test-client".to_string()),
		client_secret: Some("test-secret".to_string()),
		refresh_token: Some("test-refresh".to_string()),
		realm_id:      Some(REALM_ID.to_string()),
	}
}

pub fn http_client() -> Client {
	Client::builder()
		.timeout(Duration::from_secs(5))
		.build()
		.unwrap()
}

pub fn expected_query() -> String {
	payments_since(window_start(OffsetDateTime::now_utc().date()))
}
