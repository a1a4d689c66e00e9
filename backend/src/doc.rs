//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers the health endpoint and the
//! envelope schemas every response uses. The generated specification backs
//! Swagger UI in debug builds.

use utoipa::OpenApi;

use crate::api::envelope::{ApiResponse, ErrorDetail};
use crate::domain::health::{DependencyStatus, HealthReport, OverallStatus};

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Whopaywhat backend API",
        description = "HTTP interface for bill splitting with dependency health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(crate::api::health::check_health),
    components(schemas(
        ApiResponse<HealthReport>,
        ErrorDetail,
        HealthReport,
        DependencyStatus,
        OverallStatus
    )),
    tags(
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
