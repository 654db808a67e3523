use serde_json::Value as JsonValue;

use crate::error::ApiError;
use crate::store::{GameMetadata, MetadataStore};

/// Resolved title of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTitle {
    pub title: String,
    pub game_name: String,
}

/// Acknowledged title change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleChange {
    pub game_name: String,
    pub new_title: String,
    pub persisted: bool,
}

/// Reject empty and whitespace-only values. The value itself is returned untrimmed.
pub fn require_non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidArgument(format!("{} is required", field)));
    }
    Ok(value)
}

/// Look up the title of `game_id`
///
/// Never fails because of storage: a missing, unreadable, or malformed
/// document resolves to the identifier itself as the title.
pub async fn get_title(store: &MetadataStore, game_id: &str) -> Result<GameTitle, ApiError> {
    let game_id = require_non_blank("game_name", game_id)?;

    let metadata = store.load_or_default(game_id).await;
    let title = metadata
        .get("title")
        .and_then(JsonValue::as_str)
        .unwrap_or(game_id)
        .to_string();

    Ok(GameTitle {
        title,
        game_name: game_id.to_string(),
    })
}

/// Validate and acknowledge a title change
///
/// Only writes to the store when `persist` is set; otherwise this is an
/// acknowledgment with no side effects beyond the log line.
pub async fn set_title(
    store: &MetadataStore,
    game_id: &str,
    new_title: &str,
    persist: bool,
) -> Result<TitleChange, ApiError> {
    let game_id = require_non_blank("game_name", game_id)?;
    let new_title = require_non_blank("new_title", new_title)?;

    tracing::info!("Changing title of game '{}' to '{}'", game_id, new_title);

    if persist {
        store.update_title(game_id, new_title).await?;
    }

    Ok(TitleChange {
        game_name: game_id.to_string(),
        new_title: new_title.to_string(),
        persisted: persist,
    })
}

/// Validate, then merge the new title into the stored document and return it
pub async fn set_title_persisted(
    store: &MetadataStore,
    game_id: &str,
    new_title: &str,
) -> Result<GameMetadata, ApiError> {
    let game_id = require_non_blank("game_name", game_id)?;
    let new_title = require_non_blank("new_title", new_title)?;

    let metadata = store.update_title(game_id, new_title).await?;

    tracing::info!("Persisted title '{}' for game '{}'", new_title, game_id);
    Ok(metadata)
}
