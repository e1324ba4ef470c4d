use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::domain::error::QuickBooksError;

/// OAuth client credentials and company id, read once from configuration.
///
/// Values are kept as loaded; validation happens per request so that a
/// misconfigured process keeps serving (and failing) instead of exiting.
#[derive(Clone, Default)]
pub struct Credentials {
	pub client_id:     Option<String>,
	pub client_secret: Option<String>,
	pub refresh_token: Option<String>,
	pub realm_id:      Option<String>,
}

/// Borrowed, validated view of the values needed for the refresh-token grant.
pub struct RefreshGrant<'a> {
	pub client_id:     &'a str,
	pub client_secret: &'a str,
	pub refresh_token: &'a str,
}

impl RefreshGrant<'_> {
	/// Value for the `Authorization` header of the token request.
	pub fn basic_authorization(&self) -> String {
		let encoded =
			STANDARD.encode(format!("{}:{}", self.client_id, self.client_secret));
		format!("Basic {encoded}")
	}
}

impl Credentials {
	pub fn refresh_grant(&self) -> Result<RefreshGrant<'_>, QuickBooksError> {
		Ok(RefreshGrant {
			client_id:     required(&self.client_id, "QUICKBOOKS_CLIENT_ID")?,
			client_secret: required(
				&self.client_secret,
				"QUICKBOOKS_CLIENT_SECRET",
			)?,
			refresh_token: required(
				&self.refresh_token,
				"QUICKBOOKS_REFRESH_TOKEN",
			)?,
		})
	}

	pub fn realm_id(&self) -> Result<&str, QuickBooksError> {
		required(&self.realm_id, "QUICKBOOKS_REALM_ID")
	}
}

fn required<'a>(
	value: &'a Option<String>,
	name: &'static str,
) -> Result<&'a str, QuickBooksError> {
	value
		.as_deref()
		.map(str::trim)
		.filter(|v| !v.is_empty())
		.ok_or(QuickBooksError::Configuration { missing: name })
}

fn redacted(value: &Option<String>) -> &'static str {
	match value {
		Some(v) if !v.trim().is_empty() => "<redacted>",
		_ => "<unset>",
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("client_id", &self.client_id)
			.field("client_secret", &redacted(&self.client_secret))
			.field("refresh_token", &redacted(&self.refresh_token))
			.field("realm_id", &self.realm_id)
			.finish()
	}
}

/// Short-lived bearer token. Lives for a single inbound request.
#[derive(Clone, PartialEq)]
pub struct AccessToken(String);

impl AccessToken {
	pub fn new(token: impl Into<String>) -> Self {
		AccessToken(token.into())
	}

	pub fn secret(&self) -> &str {
		&self.0
	}
}

impl fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("AccessToken(<redacted>)")
	}
}
