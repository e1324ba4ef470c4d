use derive_more::derive::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum QuickBooksError {
	#[display("QuickBooks credentials are not configured: {missing} is not set")]
	Configuration { missing: &'static str },
	#[display("Could not refresh QuickBooks token: {detail}")]
	TokenAcquisition { detail: String },
	#[display("QuickBooks query failed: {detail}")]
	Query { detail: String },
}

impl QuickBooksError {
	pub fn token(detail: impl Into<String>) -> Self {
		QuickBooksError::TokenAcquisition {
			detail: detail.into(),
		}
	}

	pub fn query(detail: impl Into<String>) -> Self {
		QuickBooksError::Query {
			detail: detail.into(),
		}
	}

	/// Short stage name used in server-side logs.
	pub fn stage(&self) -> &'static str {
		match self {
			QuickBooksError::Configuration { .. } => "configuration",
			QuickBooksError::TokenAcquisition { .. } => "token",
			QuickBooksError::Query { .. } => "query",
		}
	}
}
