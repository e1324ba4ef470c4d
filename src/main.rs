use std::sync::Arc;

use quickbooks_payments_proxy::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	// A missing .env file is fine; the real environment still applies.
	let _ = dotenvy::dotenv();
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or("info"),
	)
	.init();

	let config = Arc::new(
		quickbooks_payments_proxy::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
