use async_trait::async_trait;

use crate::domain::credentials::{AccessToken, RefreshGrant};
use crate::domain::error::QuickBooksError;

#[async_trait]
pub trait TokenAcquirer: Send + Sync + 'static {
	async fn acquire(
		&self,
		grant: &RefreshGrant<'_>,
	) -> Result<AccessToken, QuickBooksError>;
}
