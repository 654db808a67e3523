use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    ChangeGameTitleRequest, ChangeGameTitleResponse, ChangeGameTitleV2Response,
    TITLE_CHANGED_MESSAGE,
};
use crate::routes;
use crate::state::AppState;
use crate::titles;
use axum::{extract::State, http::StatusCode, Json};

/// POST /change-game-title handler - Acknowledge a title change
///
/// Validates the request and echoes it back. The new title is only written
/// to the metadata store when `PERSIST_TITLE_CHANGES` is enabled.
#[utoipa::path(
    post,
    path = routes::CHANGE_GAME_TITLE,
    request_body = ChangeGameTitleRequest,
    responses(
        (status = 200, description = "Title change accepted", body = ChangeGameTitleResponse),
        (status = 400, description = "Blank game_name or new_title", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "games"
)]
pub async fn change_title_handler(
    State(state): State<AppState>,
    Json(request): Json<ChangeGameTitleRequest>,
) -> Result<(StatusCode, Json<ChangeGameTitleResponse>), ApiError> {
    let change = titles::set_title(
        &state.store,
        &request.game_name,
        &request.new_title,
        state.config.persist_title_changes,
    )
    .await?;

    tracing::debug!(
        "Title change for game {} acknowledged (persisted: {})",
        change.game_name,
        change.persisted
    );
    Ok((
        StatusCode::OK,
        Json(ChangeGameTitleResponse {
            status: "success".to_string(),
            message: TITLE_CHANGED_MESSAGE.to_string(),
            game_name: change.game_name,
            new_title: change.new_title,
        }),
    ))
}

/// POST /change-game-title-v2 handler - Persist a title change
///
/// Merges `title` and `game_name` into the game's metadata document and
/// returns the merged document.
#[utoipa::path(
    post,
    path = routes::CHANGE_GAME_TITLE_V2,
    request_body = ChangeGameTitleRequest,
    responses(
        (status = 200, description = "Title stored", body = ChangeGameTitleV2Response),
        (status = 400, description = "Blank or unusable game_name, or blank new_title", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "games"
)]
pub async fn change_title_v2_handler(
    State(state): State<AppState>,
    Json(request): Json<ChangeGameTitleRequest>,
) -> Result<(StatusCode, Json<ChangeGameTitleV2Response>), ApiError> {
    let data =
        titles::set_title_persisted(&state.store, &request.game_name, &request.new_title).await?;

    Ok((
        StatusCode::OK,
        Json(ChangeGameTitleV2Response {
            status: "success".to_string(),
            message: TITLE_CHANGED_MESSAGE.to_string(),
            data,
        }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::test_app;
    use crate::store::{MetadataStore, METADATA_FILE};
    use axum::{
        body::{Body, Bytes},
        http::Request,
        Router,
    };
    use serde_json::json;
    use tempfile::tempdir;
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Bytes) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body)
    }

    fn title_request(game_name: &str, new_title: &str) -> String {
        json!({ "game_name": game_name, "new_title": new_title }).to_string()
    }

    #[tokio::test]
    async fn test_change_title_acknowledges_without_persisting() {
        let dir = tempdir().unwrap();
        let games_dir = dir.path().join("games");
        let app = test_app(&games_dir, false);
        let game_id = Uuid::new_v4().to_string();

        let (status, body) = post_json(
            app,
            "/change-game-title",
            title_request(&game_id, "My Awesome Game"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let response_json: ChangeGameTitleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "success");
        assert_eq!(response_json.message, TITLE_CHANGED_MESSAGE);
        assert_eq!(response_json.game_name, game_id);
        assert_eq!(response_json.new_title, "My Awesome Game");
        assert!(!games_dir.exists());
    }

    #[tokio::test]
    async fn test_change_title_persists_when_enabled() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), true);

        let (status, _) = post_json(app, "/change-game-title", title_request("g1", "Space Quest")).await;

        assert_eq!(status, StatusCode::OK);
        let stored = MetadataStore::new(dir.path()).load("g1").await.unwrap();
        assert_eq!(stored["title"], json!("Space Quest"));
    }

    #[tokio::test]
    async fn test_change_title_blank_fields() {
        let dir = tempdir().unwrap();

        for (game_name, new_title, field) in [("", "Title", "game_name"), ("g1", "   ", "new_title")] {
            let app = test_app(dir.path(), false);
            let (status, body) =
                post_json(app, "/change-game-title", title_request(game_name, new_title)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert!(error_response.error.contains(field));
        }
    }

    #[tokio::test]
    async fn test_change_title_v2_returns_merged_document() {
        let dir = tempdir().unwrap();
        let store = MetadataStore::new(dir.path());
        let mut existing = crate::store::GameMetadata::new();
        existing.insert("title".to_string(), json!("Old"));
        existing.insert("thumbnail".to_string(), json!("cover.png"));
        store.save("g1", &existing).await.unwrap();

        let app = test_app(dir.path(), false);
        let (status, body) =
            post_json(app, "/change-game-title-v2", title_request("g1", "Space Quest")).await;

        assert_eq!(status, StatusCode::OK);
        let response_json: ChangeGameTitleV2Response = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "success");
        assert_eq!(response_json.data["title"], json!("Space Quest"));
        assert_eq!(response_json.data["game_name"], json!("g1"));
        assert_eq!(response_json.data["thumbnail"], json!("cover.png"));

        assert_eq!(store.load("g1").await.unwrap(), response_json.data);
    }

    #[tokio::test]
    async fn test_change_title_v2_then_get_title() {
        let dir = tempdir().unwrap();

        for title in ["A", "B"] {
            let app = test_app(dir.path(), false);
            let (status, _) =
                post_json(app, "/change-game-title-v2", title_request("g1", title)).await;
            assert_eq!(status, StatusCode::OK);
        }

        let response = test_app(dir.path(), false)
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/get-game-title?game_name=g1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let title: crate::models::GameTitleResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(title.title, "B");
        assert_eq!(title.game_name, "g1");
    }

    #[tokio::test]
    async fn test_change_title_v2_blank_fields_do_no_io() {
        let dir = tempdir().unwrap();
        let games_dir = dir.path().join("games");

        for (game_name, new_title) in [("  ", "Title"), ("g1", "")] {
            let app = test_app(&games_dir, false);
            let (status, _) =
                post_json(app, "/change-game-title-v2", title_request(game_name, new_title)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert!(!games_dir.exists());
    }

    #[tokio::test]
    async fn test_change_title_v2_unsafe_game_name() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), false);

        let (status, body) =
            post_json(app, "/change-game-title-v2", title_request("../escape", "Title")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("invalid game identifier"));
    }

    #[tokio::test]
    async fn test_change_title_v2_malformed_document() {
        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("broken")).unwrap();
        std::fs::write(dir.path().join("broken").join(METADATA_FILE), "{oops").unwrap();
        let app = test_app(dir.path(), false);

        let (status, body) =
            post_json(app, "/change-game-title-v2", title_request("broken", "Title")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Storage error"));
    }

    #[tokio::test]
    async fn test_change_title_v2_invalid_json() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), false);

        let (status, _) = post_json(app, "/change-game-title-v2", "{invalid json}".to_string()).await;

        // Axum's Json extractor returns 400 for invalid JSON
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_change_title_v2_missing_field() {
        let dir = tempdir().unwrap();
        let app = test_app(dir.path(), false);

        let (status, _) =
            post_json(app, "/change-game-title-v2", json!({ "game_name": "g1" }).to_string()).await;

        // Axum's Json extractor returns 422 when the body does not match the schema
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
