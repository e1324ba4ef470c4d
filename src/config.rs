use std::fmt;

use serde::Deserialize;

use crate::domain::credentials::Credentials;
use crate::domain::environment::ApiEnvironment;

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

fn default_port() -> u16 {
	DEFAULT_PORT
}

fn default_http_timeout_secs() -> u64 {
	DEFAULT_HTTP_TIMEOUT_SECS
}

#[derive(Deserialize, Clone)]
pub struct Config {
	#[serde(default = "default_port")]
	pub port: u16,
	#[serde(default)]
	pub quickbooks_client_id: Option<String>,
	#[serde(default)]
	pub quickbooks_client_secret: Option<String>,
	#[serde(default)]
	pub quickbooks_refresh_token: Option<String>,
	#[serde(default)]
	pub quickbooks_realm_id: Option<String>,
	#[serde(default)]
	pub node_env: Option<String>,
	#[serde(default = "default_http_timeout_secs")]
	pub http_timeout_secs: u64,
}

impl Config {
	/// Reads the process environment. Credentials are not validated here.
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::default())
			.build()?;

		config_builder.try_deserialize()
	}

	pub fn credentials(&self) -> Credentials {
		Credentials {
			client_id:     self.quickbooks_client_id.clone(),
			client_secret: self.quickbooks_client_secret.clone(),
			refresh_token: self.quickbooks_refresh_token.clone(),
			realm_id:      self.quickbooks_realm_id.clone(),
		}
	}

	pub fn api_environment(&self) -> ApiEnvironment {
		ApiEnvironment::from_node_env(self.node_env.as_deref())
	}
}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("port", &self.port)
			.field("credentials", &self.credentials())
			.field("node_env", &self.node_env)
			.field("http_timeout_secs", &self.http_timeout_secs)
			.finish()
	}
}
