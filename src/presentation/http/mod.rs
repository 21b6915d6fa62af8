use axum::Router;
use axum::extract::{DefaultBodyLimit, MatchedPath};
use http::HeaderValue;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

pub mod auth;
pub mod envelope;
pub mod health;
pub mod markdowns;
pub mod openapi;

pub fn router(ctx: AppContext) -> Router {
    let cors = build_cors(&ctx.cfg);
    let body_limit = ctx.cfg.body_max_bytes;

    Router::new()
        .nest("/api", health::routes(ctx.clone()))
        .nest("/api", markdowns::routes(ctx))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &http::Request<_>| {
                let method = req.method().clone();
                let uri = req.uri().clone();
                let matched = req
                    .extensions()
                    .get::<MatchedPath>()
                    .map(|p| p.as_str().to_string())
                    .unwrap_or_default();
                tracing::info_span!("http", %method, %uri, matched_path = %matched)
            }),
        )
}

fn build_cors(cfg: &Config) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([
            http::Method::GET,
            http::Method::POST,
            http::Method::PUT,
            http::Method::DELETE,
            http::Method::PATCH,
            http::Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);

    match cfg.frontend_url.as_deref().map(HeaderValue::from_str) {
        Some(Ok(origin)) => base.allow_origin(origin).allow_credentials(true),
        // In production FRONTEND_URL is enforced by Config; an unusable value denies all origins
        _ if cfg.is_production => {
            base.allow_origin(AllowOrigin::exact(HeaderValue::from_static("http://invalid")))
        }
        _ => base
            .allow_origin(AllowOrigin::mirror_request())
            .allow_credentials(true),
    }
}
