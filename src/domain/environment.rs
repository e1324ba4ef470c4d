use std::fmt;

pub const PRODUCTION_BASE_URL: &str = "https://quickbooks.api.intuit.com";
pub const SANDBOX_BASE_URL: &str = "https://sandbox-quickbooks.api.intuit.com";

/// Which QuickBooks API host the proxy talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnvironment {
	Sandbox,
	Production,
}

impl ApiEnvironment {
	/// Only the exact value `production` selects the production host.
	pub fn from_node_env(node_env: Option<&str>) -> Self {
		match node_env {
			Some("production") => ApiEnvironment::Production,
			_ => ApiEnvironment::Sandbox,
		}
	}

	pub fn base_url(&self) -> &'static str {
		match self {
			ApiEnvironment::Sandbox => SANDBOX_BASE_URL,
			ApiEnvironment::Production => PRODUCTION_BASE_URL,
		}
	}
}

impl fmt::Display for ApiEnvironment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiEnvironment::Sandbox => f.write_str("sandbox"),
			ApiEnvironment::Production => f.write_str("production"),
		}
	}
}
