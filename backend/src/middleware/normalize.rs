//! Pipeline error interceptor.
//!
//! Wraps request handling and observes failures flowing out of business
//! logic before they reach the boundary translator. Recognised [`Failure`]s
//! are re-raised unchanged to preserve classification fidelity; anything
//! else is wrapped in [`Failure::unclassified`] carrying the original
//! message, so no raw failure reaches the boundary unadorned.

use actix_service::forward_ready;
use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::error;

use crate::domain::Failure;

/// Middleware normalising opaque failures into typed ones.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::Normalize;
///
/// let app = App::new().wrap(Normalize);
/// ```
#[derive(Clone)]
pub struct Normalize;

impl<S, B> Transform<S, ServiceRequest> for Normalize
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = NormalizeMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(NormalizeMiddleware { service }))
    }
}

/// Service wrapper produced by [`Normalize`].
///
/// Applications should not use this type directly.
pub struct NormalizeMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for NormalizeMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let fut = self.service.call(req);
        Box::pin(async move {
            match fut.await {
                Ok(res) => Ok(res),
                Err(err) => {
                    error!(error = %err, "failure observed in request pipeline");
                    if err.as_error::<Failure>().is_some() {
                        Err(err)
                    } else {
                        Err(Failure::unclassified(err.to_string()).into())
                    }
                }
            }
        })
    }
}
