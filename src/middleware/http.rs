//! HTTP-level middleware (cross-cutting concerns).
//!
//! Applied to every route, public or not:
//! - Request-Id generation + propagation (`x-request-id`)
//! - Access log via TraceLayer
//! - Body size limit and global timeout, both taken from `Config`

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::{StatusCode, header::HeaderName};
use axum::response::{IntoResponse, Response};
use tower::timeout::TimeoutLayer;
use tower::{BoxError, ServiceBuilder};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::AppError;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn apply(router: Router, config: &Config) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    let layers = ServiceBuilder::new()
        // TimeoutLayer's error must become a response for axum
        .layer(HandleErrorLayer::new(|err: BoxError| async move {
            handle_error(err)
        }))
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        .layer(RequestBodyLimitLayer::new(config.request_body_limit_bytes))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}

fn handle_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        StatusCode::REQUEST_TIMEOUT.into_response()
    } else {
        tracing::error!(error = %err, "unhandled middleware error");
        AppError::Internal.into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use axum::body::Body;
    use axum::http::{Request, header};
    use axum::routing::{get, post};
    use tower::ServiceExt;

    fn app(config: &Config) -> Router {
        let router = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            );
        apply(router, config)
    }

    #[tokio::test]
    async fn test_body_over_limit_is_rejected() {
        let config = Config {
            request_body_limit_bytes: 16,
            ..Config::default()
        };
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .header(header::CONTENT_LENGTH, "64")
            .body(Body::from(vec![b'a'; 64]))
            .unwrap();

        let res = app(&config).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn test_body_within_limit_is_accepted() {
        let config = Config {
            request_body_limit_bytes: 16,
            ..Config::default()
        };
        let req = Request::builder()
            .method("POST")
            .uri("/echo")
            .body(Body::from("small"))
            .unwrap();

        let res = app(&config).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let config = Config {
            request_timeout: Duration::from_millis(20),
            ..Config::default()
        };
        let req = Request::builder().uri("/slow").body(Body::empty()).unwrap();

        let res = app(&config).oneshot(req).await.unwrap();
        assert_eq!(res.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
