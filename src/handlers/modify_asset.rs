use crate::assets;
use crate::error::ErrorResponse;
use crate::models::{ModifyAssetRequest, ModifyAssetResponse};
use crate::routes;
use axum::{http::StatusCode, Json};

/// POST /modify-asset handler - Acknowledge an asset modification request
#[utoipa::path(
    post,
    path = routes::MODIFY_ASSET,
    request_body = ModifyAssetRequest,
    responses(
        (status = 200, description = "Modification acknowledged", body = ModifyAssetResponse),
        (status = 500, description = "Unexpected error", body = ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn modify_asset_handler(
    Json(request): Json<ModifyAssetRequest>,
) -> (StatusCode, Json<ModifyAssetResponse>) {
    let result = assets::modify_asset(&request);

    (
        StatusCode::OK,
        Json(ModifyAssetResponse {
            status: result.status,
            reply: result.reply,
        }),
    )
}
