use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error};
use derive_more::derive::{Display, Error};

use crate::adapters::web::schema::ErrorResponse;
use crate::domain::error::QuickBooksError;

/// Client-visible failure. Upstream detail never reaches the browser.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Failed to fetch data from QuickBooks.")]
	QuickBooksUnavailable,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				error: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::QuickBooksUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<QuickBooksError> for ApiError {
	fn from(_: QuickBooksError) -> Self {
		ApiError::QuickBooksUnavailable
	}
}
