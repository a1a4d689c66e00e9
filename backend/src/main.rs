//! Backend entry-point: wires the health endpoint, failure middleware, and
//! OpenAPI docs.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use backend::api::health::check_health;
#[cfg(debug_assertions)]
use backend::doc::ApiDoc;
use backend::domain::HealthService;
use backend::middleware::{Normalize, Translate};
use backend::outbound::{HttpIdentityProbe, IdentitySettings, PgStateSource, RedisCachePing};
use backend::server::AppConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env().map_err(std::io::Error::other)?;

    let store = PgStateSource::new(config.database_url());
    store.warm().await;

    let cache = RedisCachePing::new(config.redis_url()).map_err(std::io::Error::other)?;
    let identity = HttpIdentityProbe::new(IdentitySettings {
        base_url: config.identity_url().clone(),
        service_key: config.identity_service_key().to_owned(),
        timeout: Duration::from_secs(5),
    })
    .map_err(std::io::Error::other)?;

    let health = web::Data::new(HealthService::new(
        Arc::new(store),
        Arc::new(cache),
        Arc::new(identity),
    ));

    let bind_addr = config.bind_addr();
    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(health.clone())
            // Translate is mounted last so it runs outermost and sees what
            // Normalize re-raises.
            .wrap(Normalize)
            .wrap(Translate)
            .service(check_health);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );

        app
    })
    .bind(bind_addr)?;

    info!(%bind_addr, "server listening");
    server.run().await
}
