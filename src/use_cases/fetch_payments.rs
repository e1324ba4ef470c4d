use time::{Date, OffsetDateTime};

use crate::domain::credentials::Credentials;
use crate::domain::error::QuickBooksError;
use crate::domain::payment::{Payment, PaymentFetcher};
use crate::domain::payment_query::window_start;
use crate::domain::token::TokenAcquirer;

/// Refreshes a token, then queries payments since January 1 of last year.
#[derive(Clone)]
pub struct FetchPaymentsUseCase<T: TokenAcquirer, P: PaymentFetcher> {
	credentials:     Credentials,
	token_acquirer:  T,
	payment_fetcher: P,
}

impl<T: TokenAcquirer, P: PaymentFetcher> FetchPaymentsUseCase<T, P> {
	pub fn new(
		credentials: Credentials,
		token_acquirer: T,
		payment_fetcher: P,
	) -> Self {
		Self {
			credentials,
			token_acquirer,
			payment_fetcher,
		}
	}

	pub fn payment_fetcher(&self) -> &P {
		&self.payment_fetcher
	}

	pub async fn execute(&self) -> Result<Vec<Payment>, QuickBooksError> {
		self.execute_on(OffsetDateTime::now_utc().date()).await
	}

	pub async fn execute_on(
		&self,
		today: Date,
	) -> Result<Vec<Payment>, QuickBooksError> {
		let grant = self.credentials.refresh_grant()?;
		let realm_id = self.credentials.realm_id()?;

		let token = self.token_acquirer.acquire(&grant).await?;

		self.payment_fetcher
			.fetch_since(&token, realm_id, window_start(today))
			.await
	}
}
