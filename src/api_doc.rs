use axum::Json;
use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{
    ChangeGameTitleRequest, ChangeGameTitleResponse, ChangeGameTitleV2Response, GameTitleResponse,
    ModifyAssetRequest, ModifyAssetResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "game-studio-api",
        version = "1.0.0",
        description = "Game title metadata and asset modification endpoints for the game studio"
    ),
    paths(
        handlers::health::health_handler,
        handlers::get_title::get_title_handler,
        handlers::change_title::change_title_handler,
        handlers::change_title::change_title_v2_handler,
        handlers::modify_asset::modify_asset_handler
    ),
    components(
        schemas(
            GameTitleResponse,
            ChangeGameTitleRequest,
            ChangeGameTitleResponse,
            ChangeGameTitleV2Response,
            ModifyAssetRequest,
            ModifyAssetResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "games", description = "Game title operations"),
        (name = "assets", description = "Asset modification operations")
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json handler
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
