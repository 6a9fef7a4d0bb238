use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue, Method};
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; \
    script-src 'self' 'unsafe-inline' 'unsafe-eval' https://maps.googleapis.com https://maps.gstatic.com; \
    style-src 'self' 'unsafe-inline' https://fonts.googleapis.com; \
    font-src 'self' https://fonts.gstatic.com; \
    img-src 'self' data: https: blob:; \
    media-src 'self' https://res.cloudinary.com https://videos.pexels.com; \
    connect-src 'self'; \
    frame-src https://maps.google.com https://www.google.com https://*.google.com https://*.google.com.br; \
    frame-ancestors 'none';";

fn security_headers() -> [(HeaderName, HeaderValue); 5] {
    [
        (
            header::CONTENT_SECURITY_POLICY,
            HeaderValue::from_static(CONTENT_SECURITY_POLICY),
        ),
        (
            HeaderName::from_static("cross-origin-opener-policy"),
            HeaderValue::from_static("same-origin"),
        ),
        (header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY")),
        (
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ),
        (
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ),
    ]
}

pub fn app(state: Arc<AppState>) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::pages::index_page))
        .route("/reservas", get(handlers::pages::index_page))
        .route("/health", get(handlers::health::health))
        .route("/api/content", get(handlers::content::get_content))
        .route("/api/content/:section", get(handlers::content::get_section))
        .route("/api/media/image", get(handlers::media::optimize_image))
        .route(
            "/api/booking/blocked-dates",
            get(handlers::booking::get_blocked_dates),
        )
        .route(
            "/api/booking/sessions",
            post(handlers::booking::open_session),
        )
        .route(
            "/api/booking/sessions/:id",
            get(handlers::booking::get_session),
        )
        .route(
            "/api/booking/sessions/:id/service",
            put(handlers::booking::change_service),
        )
        .route(
            "/api/booking/sessions/:id/dates",
            put(handlers::booking::select_dates),
        )
        .route(
            "/api/booking/sessions/:id/submit",
            post(handlers::booking::submit),
        )
        .route(
            "/api/booking/sessions/:id/events",
            get(handlers::booking::events_stream),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http());

    for (name, value) in security_headers() {
        router = router.layer(SetResponseHeaderLayer::overriding(name, value));
    }
    router
}
