use std::sync::Arc;
use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use log::info;
use reqwest::Client;

use crate::adapters::web::quickbooks_payments_handler::quickbooks_payments;
use crate::config::Config;
use crate::infrastructure::accounting::quickbooks_payment_fetcher::QuickBooksPaymentFetcher;
use crate::infrastructure::oauth::intuit_token_acquirer::IntuitTokenAcquirer;
use crate::use_cases::fetch_payments::FetchPaymentsUseCase;

pub mod config;

pub mod domain {
	pub mod credentials;
	pub mod environment;
	pub mod error;
	pub mod payment;
	pub mod payment_query;
	pub mod token;
}

pub mod use_cases {
	pub mod fetch_payments;
}

pub mod infrastructure {
	pub mod oauth {
		pub mod intuit_token_acquirer;
	}
	pub mod accounting {
		pub mod quickbooks_payment_fetcher;
	}
}

pub mod adapters {
	pub mod web {
		pub mod errors;
		pub mod quickbooks_payments_handler;
		pub mod schema;
	}
}

pub type QuickBooksPaymentsUseCase =
	FetchPaymentsUseCase<IntuitTokenAcquirer, QuickBooksPaymentFetcher>;

/// Browsers on any origin may call the proxy.
pub fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allow_any_method()
		.allow_any_header()
		.send_wildcard()
}

pub fn build_use_case(
	config: &Config,
) -> Result<QuickBooksPaymentsUseCase, reqwest::Error> {
	let http_client = Client::builder()
		.timeout(Duration::from_secs(config.http_timeout_secs))
		.build()?;

	Ok(FetchPaymentsUseCase::new(
		config.credentials(),
		IntuitTokenAcquirer::new(http_client.clone()),
		QuickBooksPaymentFetcher::new(
			http_client,
			config.api_environment().base_url(),
		),
	))
}

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let fetch_payments_use_case =
		build_use_case(&config).map_err(std::io::Error::other)?;

	info!(
		"Using QuickBooks {} API at {}",
		config.api_environment(),
		config.api_environment().base_url()
	);
	info!("Starting Actix-Web server on 0.0.0.0:{}...", config.port);

	let server = HttpServer::new(move || {
		App::new()
			.wrap(cors())
			.wrap(middleware::Logger::default())
			.app_data(web::Data::new(fetch_payments_use_case.clone()))
			.service(quickbooks_payments)
	})
	.bind(("0.0.0.0", config.port))?;

	info!(
		"QuickBooks backend server running on http://localhost:{}",
		config.port
	);
	server.run().await
}
