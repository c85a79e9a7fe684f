mod carbon;
mod health;
mod solar;

use actix_web::{HttpRequest, HttpResponse, ResponseError, error::JsonPayloadError, http::StatusCode, web};
use derive_more::derive::{Display, Error};
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("/", web::get().to(health::index_handler))
        .route("/carbon-footprint", web::post().to(carbon::carbon_footprint_handler))
        .route("/solar-savings", web::post().to(solar::solar_savings_handler))
        .route("/solar-savings/regions", web::get().to(solar::regions_handler));
}

#[derive(Debug, Error, Display)]
pub enum ApiError {
    #[display("Invalid value for {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[display("Malformed request body: {reason}")]
    Payload { reason: String },
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        tracing::warn!("Rejected request: {}", self);

        let body = match self {
            ApiError::Validation { field, reason } => json!({
                "error": "validation",
                "field": field,
                "detail": reason,
            }),
            ApiError::Payload { reason } => json!({
                "error": "validation",
                "detail": reason,
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

//Covers missing fields and unknown region names, both reported before any
//calculation runs
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::Payload { reason: err.to_string() }.into()
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), ApiError> {
    if !value.is_finite() {
        return Err(ApiError::Validation {
            field,
            reason: "must be a finite number".to_owned(),
        });
    }

    if value < 0.0 {
        return Err(ApiError::Validation {
            field,
            reason: "must not be negative".to_owned(),
        });
    }

    Ok(())
}
