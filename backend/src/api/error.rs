//! HTTP mapping and logging for classified failures.
//!
//! Keep the domain free of transport concerns by translating [`Failure`]
//! into Actix responses here. Typed failures implement [`ResponseError`] so
//! they travel the framework's error channel to the boundary translator;
//! the `error_response` below is only a fallback for apps mounted without
//! that middleware.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use tracing::error;

use crate::api::envelope::{ApiResponse, ErrorDetail};
use crate::domain::Classification;
use crate::domain::Failure;

/// Convenience alias for HTTP handlers raising typed failures.
pub type ApiResult<T> = Result<T, Failure>;

/// Render the error envelope for a classification, with optional request
/// context.
pub(crate) fn envelope_response(
    classification: &Classification,
    path: Option<String>,
    method: Option<String>,
) -> HttpResponse {
    let status =
        StatusCode::from_u16(classification.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let detail = ErrorDetail::new(classification.status, path, method, classification.category);
    let body = ApiResponse::<serde_json::Value>::error(classification.message.clone(), detail);
    HttpResponse::build(status).json(body)
}

/// Log line for a classified failure.
///
/// The two formats are a contract relied on by log-based monitoring:
/// `"<METHOD> <PATH> - <status> - <message>"` with request context and
/// `"<status> - <message>"` without. Do not change them incidentally.
pub(crate) fn format_log_line(
    classification: &Classification,
    context: Option<(&str, &str)>,
) -> String {
    match context {
        Some((method, path)) => format!(
            "{method} {path} - {} - {}",
            classification.status, classification.message
        ),
        None => format!("{} - {}", classification.status, classification.message),
    }
}

/// Emit exactly one error-severity log line for a classified failure.
///
/// The source-error chain, the closest analogue of a stack trace, is
/// attached as a structured field when available.
pub(crate) fn log_failure(
    classification: &Classification,
    context: Option<(&str, &str)>,
    source: Option<&(dyn std::error::Error + 'static)>,
) {
    let line = format_log_line(classification, context);
    match source {
        Some(source) => error!(error = %source, code = classification.code, "{line}"),
        None => error!(code = classification.code, "{line}"),
    }
}

impl ResponseError for Failure {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(Classification::of_failure(self).status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        let classification = Classification::of_failure(self);
        envelope_response(&classification, None, None)
    }
}
