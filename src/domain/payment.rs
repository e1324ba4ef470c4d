use async_trait::async_trait;
use serde_json::Value;
use time::Date;

use crate::domain::credentials::AccessToken;
use crate::domain::error::QuickBooksError;

/// A `Payment` entity exactly as the accounting API returned it.
pub type Payment = Value;

#[async_trait]
pub trait PaymentFetcher: Send + Sync + 'static {
	/// Fetches every payment dated on or after `since`, in a single query.
	async fn fetch_since(
		&self,
		token: &AccessToken,
		realm_id: &str,
		since: Date,
	) -> Result<Vec<Payment>, QuickBooksError>;
}
