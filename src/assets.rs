use crate::models::ModifyAssetRequest;

/// Outcome of an asset modification request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetModification {
    pub status: String,
    pub reply: String,
}

/// Acknowledge an asset modification
///
/// No image work happens here; the request is logged and a confirmation
/// message is built from the asset name and prompt.
pub fn modify_asset(request: &ModifyAssetRequest) -> AssetModification {
    tracing::info!(
        game = %request.game_name,
        asset = %request.asset_name,
        prompt = %request.prompt,
        "Asset modification requested"
    );

    AssetModification {
        status: "success".to_string(),
        reply: format!(
            "'{}' asset was modified according to the '{}' request.",
            request.asset_name, request.prompt
        ),
    }
}
