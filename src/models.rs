use serde::{Deserialize, Serialize};

use crate::store::GameMetadata;

/// Success message shared by both title change endpoints
pub const TITLE_CHANGED_MESSAGE: &str = "Game title changed successfully.";

/// Query parameters for the title lookup endpoint
///
/// `game_name` is optional so that a missing parameter is reported the same
/// way as a blank one.
#[derive(Deserialize)]
pub struct GameTitleQuery {
    pub game_name: Option<String>,
}

/// Response type for title lookups
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GameTitleResponse {
    pub title: String,
    pub game_name: String,
}

/// Request body for both title change endpoints
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChangeGameTitleRequest {
    /// Game identifier
    pub game_name: String,
    pub new_title: String,
}

/// Response type for the stub title change endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChangeGameTitleResponse {
    pub status: String,
    pub message: String,
    pub game_name: String,
    pub new_title: String,
}

/// Response type for the persisting title change endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChangeGameTitleV2Response {
    pub status: String,
    pub message: String,
    /// Merged metadata document as stored
    #[schema(value_type = Object)]
    pub data: GameMetadata,
}

/// Request body for asset modification
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModifyAssetRequest {
    pub game_name: String,
    pub asset_name: String,
    pub prompt: String,
}

/// Response type for asset modification
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ModifyAssetResponse {
    pub status: String,
    pub reply: String,
}
