//! Health endpoint aggregating dependency liveness.
//!
//! A healthy probe returns the success envelope; any dependency failure is a
//! typed [`Failure`] propagated through the middleware pipeline, which
//! renders the standard 503 error envelope.

use actix_web::{get, web};

use crate::api::envelope::ApiResponse;
use crate::api::error::ApiResult;
use crate::domain::{HealthReport, HealthService};

/// Probe every monitored dependency and report the verdict.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    operation_id = "checkHealth",
    responses(
        (status = 200, description = "All dependencies connected", body = ApiResponse<HealthReport>),
        (status = 503, description = "A dependency is unavailable")
    )
)]
#[get("/health")]
pub async fn check_health(
    service: web::Data<HealthService>,
) -> ApiResult<web::Json<ApiResponse<HealthReport>>> {
    let report = service.check_health().await?;
    Ok(web::Json(ApiResponse::success(
        report,
        "Health check completed",
    )))
}
