use crate::error::{ApiError, ErrorResponse};
use crate::models::{GameTitleQuery, GameTitleResponse};
use crate::routes;
use crate::state::AppState;
use crate::titles;
use axum::{extract::Query, extract::State, http::StatusCode, Json};

/// GET /get-game-title handler - Look up a game's title
///
/// Falls back to the game identifier as the title whenever no usable
/// metadata document exists.
#[utoipa::path(
    get,
    path = routes::GET_GAME_TITLE,
    params(
        ("game_name" = String, Query, description = "Game identifier")
    ),
    responses(
        (status = 200, description = "Title resolved", body = GameTitleResponse),
        (status = 400, description = "Missing or blank game_name", body = ErrorResponse)
    ),
    tag = "games"
)]
pub async fn get_title_handler(
    State(state): State<AppState>,
    Query(query): Query<GameTitleQuery>,
) -> Result<(StatusCode, Json<GameTitleResponse>), ApiError> {
    let game_name = query.game_name.unwrap_or_default();

    let resolved = titles::get_title(&state.store, &game_name).await?;

    tracing::info!("Resolved title for game: {}", resolved.game_name);
    Ok((
        StatusCode::OK,
        Json(GameTitleResponse {
            title: resolved.title,
            game_name: resolved.game_name,
        }),
    ))
}
