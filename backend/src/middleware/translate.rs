//! Terminal request-error translator.
//!
//! Outermost middleware turning every escaped failure into a JSON error
//! envelope. Nothing escapes past it: typed [`Failure`]s are classified
//! through the canonical table, unrecognised errors fall back to an
//! internal-error classification carrying their message, and unwound
//! panics are rendered as an unknown error with the payload discarded.
//! Each translation emits exactly one error log line with the request
//! method and path.

use std::panic::AssertUnwindSafe;

use actix_service::forward_ready;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpRequest};
use futures_util::FutureExt;
use futures_util::future::{LocalBoxFuture, Ready, ready};

use crate::api::error::{envelope_response, log_failure};
use crate::domain::{Classification, Failure};

/// Middleware translating escaped failures into error envelopes.
///
/// Mount it after every other layer so it runs first and observes
/// everything the inner stack raises.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::middleware::{Normalize, Translate};
///
/// let app = App::new().wrap(Normalize).wrap(Translate);
/// ```
#[derive(Clone)]
pub struct Translate;

impl<S, B> Transform<S, ServiceRequest> for Translate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = TranslateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TranslateMiddleware { service }))
    }
}

/// Service wrapper produced by [`Translate`].
///
/// Applications should not use this type directly.
pub struct TranslateMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TranslateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request = req.request().clone();
        let fut = self.service.call(req);
        Box::pin(async move {
            match AssertUnwindSafe(fut).catch_unwind().await {
                Ok(Ok(res)) => Ok(res.map_into_left_body()),
                Ok(Err(err)) => {
                    let classification = classify_escaped(&err);
                    log_failure(
                        &classification,
                        Some((request.method().as_str(), request.path())),
                        err.as_error::<Failure>()
                            .map(|f| f as &(dyn std::error::Error + 'static)),
                    );
                    Ok(render(&request, &classification))
                }
                // Panic payload discarded on purpose; nothing from it may
                // leak into the response.
                Err(_) => {
                    let classification = Classification::opaque();
                    log_failure(
                        &classification,
                        Some((request.method().as_str(), request.path())),
                        None,
                    );
                    Ok(render(&request, &classification))
                }
            }
        })
    }
}

fn classify_escaped(error: &Error) -> Classification {
    match error.as_error::<Failure>() {
        Some(failure) => Classification::of_failure(failure),
        None => Classification::internal(error.to_string()),
    }
}

fn render<B>(
    request: &HttpRequest,
    classification: &Classification,
) -> ServiceResponse<EitherBody<B>> {
    let response = envelope_response(
        classification,
        Some(request.path().to_owned()),
        Some(request.method().to_string()),
    );
    ServiceResponse::new(request.clone(), response).map_into_right_body()
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use actix_web::error::ErrorInternalServerError;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    use super::*;
    use crate::api::envelope::ApiResponse;
    use crate::middleware::Normalize;

    type TestBody = EitherBody<actix_web::body::BoxBody>;

    async fn get(
        app: &impl Service<
            actix_http::Request,
            Response = ServiceResponse<TestBody>,
            Error = Error,
        >,
        uri: &str,
    ) -> ServiceResponse<TestBody> {
        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_service(app, req).await
    }

    #[actix_web::test]
    async fn typed_failures_become_classified_envelopes() {
        let app = test::init_service(App::new().wrap(Translate).route(
            "/health",
            web::get().to(|| async {
                Result::<HttpResponse, Failure>::Err(Failure::cache(
                    "cache connection check failed",
                ))
            }),
        ))
        .await;

        let res = get(&app, "/health").await;
        assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
        let envelope: ApiResponse = test::read_body_json(res).await;
        assert!(!envelope.success);
        assert_eq!(envelope.message, "cache connection check failed");
        assert_eq!(envelope.path.as_deref(), Some("/health"));
        let detail = envelope.error.expect("error detail present");
        assert_eq!(detail.status_code, 503);
        assert_eq!(detail.category, "Redis Connection Error");
        assert_eq!(detail.method.as_deref(), Some("GET"));
    }

    #[actix_web::test]
    async fn opaque_errors_fall_back_to_internal_classification() {
        let app = test::init_service(App::new().wrap(Translate).route(
            "/boom",
            web::get().to(|| async {
                Result::<HttpResponse, Error>::Err(ErrorInternalServerError("boom"))
            }),
        ))
        .await;

        let res = get(&app, "/boom").await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope: ApiResponse = test::read_body_json(res).await;
        assert_eq!(envelope.message, "boom");
        let detail = envelope.error.expect("error detail present");
        assert_eq!(detail.category, "Internal Server Error");
    }

    #[actix_web::test]
    async fn panics_are_rendered_as_unknown_errors_without_their_payload() {
        let app = test::init_service(App::new().wrap(Translate).route(
            "/panic",
            web::get().to(|| async {
                panic!("secret detail");
                #[allow(unreachable_code)]
                HttpResponse::Ok().finish()
            }),
        ))
        .await;

        let res = get(&app, "/panic").await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope: ApiResponse = test::read_body_json(res).await;
        assert_eq!(envelope.message, "An unexpected error occurred");
        assert!(!envelope.message.contains("secret"));
    }

    #[actix_web::test]
    async fn successful_responses_pass_through_untouched() {
        let app = test::init_service(App::new().wrap(Translate).route(
            "/ok",
            web::get().to(|| async { HttpResponse::Ok().body("payload") }),
        ))
        .await;

        let res = get(&app, "/ok").await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = test::read_body(res).await;
        assert_eq!(&body[..], b"payload");
    }

    #[actix_web::test]
    async fn composes_with_the_pipeline_interceptor() {
        // Wrap order puts Translate outermost so it sees what Normalize
        // re-raises.
        let app = test::init_service(
            App::new().wrap(Normalize).wrap(Translate).route(
                "/boom",
                web::get().to(|| async {
                    Result::<HttpResponse, Error>::Err(ErrorInternalServerError("boom"))
                }),
            ),
        )
        .await;

        let res = get(&app, "/boom").await;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let envelope: ApiResponse = test::read_body_json(res).await;
        assert_eq!(envelope.message, "boom");
        let detail = envelope.error.expect("error detail present");
        assert_eq!(detail.category, "Internal Server Error");
    }
}
