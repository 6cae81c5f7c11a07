use actix_web::http::StatusCode;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

pub mod main;
pub mod products;

/// JSON body used for every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

/// Build a JSON error response with the given status and message.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody {
        message: message.into(),
    })
}

/// 404 response carrying the canonical not-found message for a product id.
pub fn product_not_found(id: i32) -> HttpResponse {
    json_error(
        StatusCode::NOT_FOUND,
        format!("Product with id '{id}' was not found."),
    )
}

/// Generic 500 response; internal detail stays in the log.
pub fn internal_error() -> HttpResponse {
    json_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

/// Reject write requests whose `Content-Type` is missing or not JSON.
///
/// Runs before any body parsing so that a bad media type is always a 415,
/// never a 400.
pub fn require_json_content_type(req: &HttpRequest) -> Result<(), HttpResponse> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    match content_type {
        Some(value)
            if value
                .split(';')
                .next()
                .is_some_and(|essence| essence.trim().eq_ignore_ascii_case("application/json")) =>
        {
            Ok(())
        }
        Some(other) => Err(json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!("Content-Type must be application/json, got {other}"),
        )),
        None => Err(json_error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Content-Type must be application/json",
        )),
    }
}
