use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api_doc::openapi_handler;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the application router with every endpoint, CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    Router::new()
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::GET_GAME_TITLE, get(handlers::get_title_handler))
        .route(routes::CHANGE_GAME_TITLE, post(handlers::change_title_handler))
        .route(routes::CHANGE_GAME_TITLE_V2, post(handlers::change_title_v2_handler))
        .route(routes::MODIFY_ASSET, post(handlers::modify_asset_handler))
        .route(routes::OPENAPI_JSON, get(openapi_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS with credentials allowed, so methods and headers mirror the request
/// instead of using a wildcard. A `*` origin mirrors the request origin.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let list: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(list)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
