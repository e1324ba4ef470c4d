use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::domain::credentials::{AccessToken, RefreshGrant};
use crate::domain::error::QuickBooksError;
use crate::domain::token::TokenAcquirer;

pub const INTUIT_TOKEN_URL: &str =
	"https://oauth.platform.intuit.com/oauth2/v1/tokens/bearer";

#[derive(Debug, Deserialize)]
struct TokenResponse {
	#[serde(default)]
	access_token: String,
	#[serde(default)]
	expires_in:   Option<u64>,
}

/// Refresh-token grant against Intuit's OAuth 2.0 token endpoint.
#[derive(Clone)]
pub struct IntuitTokenAcquirer {
	http_client: Client,
	token_url:   String,
}

impl IntuitTokenAcquirer {
	pub fn new(http_client: Client) -> Self {
		Self::with_token_url(http_client, INTUIT_TOKEN_URL)
	}

	pub fn with_token_url(
		http_client: Client,
		token_url: impl Into<String>,
	) -> Self {
		Self {
			http_client,
			token_url: token_url.into(),
		}
	}
}

#[async_trait]
impl TokenAcquirer for IntuitTokenAcquirer {
	async fn acquire(
		&self,
		grant: &RefreshGrant<'_>,
	) -> Result<AccessToken, QuickBooksError> {
		let result = self
			.http_client
			.post(&self.token_url)
			.header(AUTHORIZATION, grant.basic_authorization())
			.header(ACCEPT, "application/json")
			.form(&[
				("grant_type", "refresh_token"),
				("refresh_token", grant.refresh_token),
			])
			.send()
			.await;

		let resp = match result {
			Ok(resp) => resp,
			Err(e) => {
				error!("Error refreshing QuickBooks token: {e}");
				return Err(QuickBooksError::token(e.to_string()));
			}
		};

		let status = resp.status();
		if !status.is_success() {
			let body = resp.text().await.unwrap_or_default();
			error!("Error refreshing QuickBooks token: status {status}: {body}");
			return Err(QuickBooksError::token(format!("status {status}: {body}")));
		}

		let token = match resp.json::<TokenResponse>().await {
			Ok(token) => token,
			Err(e) => {
				error!("Malformed QuickBooks token response: {e}");
				return Err(QuickBooksError::token(e.to_string()));
			}
		};

		if token.access_token.is_empty() {
			error!("QuickBooks token response did not include an access_token");
			return Err(QuickBooksError::token("response had no access_token"));
		}

		debug!(
			"Refreshed QuickBooks access token (expires in {:?}s)",
			token.expires_in
		);
		Ok(AccessToken::new(token.access_token))
	}
}
