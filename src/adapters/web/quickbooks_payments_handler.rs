use actix_web::{HttpResponse, Responder, ResponseError, get, web};
use log::{error, info};

use crate::QuickBooksPaymentsUseCase;
use crate::adapters::web::errors::ApiError;

#[get("/api/quickbooks-payments")]
pub async fn quickbooks_payments(
	fetch_payments_use_case: web::Data<QuickBooksPaymentsUseCase>,
) -> impl Responder {
	match fetch_payments_use_case.execute().await {
		Ok(payments) => {
			info!("Serving {} QuickBooks payments", payments.len());
			HttpResponse::Ok().json(payments)
		}
		Err(e) => {
			error!("QuickBooks API Error ({} stage): {e}", e.stage());
			ApiError::from(e).error_response()
		}
	}
}
