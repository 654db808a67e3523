use serde_json::Value as JsonValue;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Name of the per-game document inside its directory
pub const METADATA_FILE: &str = "metadata.json";

/// Flat metadata document for one game
///
/// Keys other than `title` and `game_name` belong to other writers and are
/// carried through untouched.
pub type GameMetadata = serde_json::Map<String, JsonValue>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Identifier cannot be used as a single directory name
    #[error("invalid game identifier '{0}'")]
    InvalidGameId(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed metadata document {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed store of game metadata documents
///
/// Each game lives at `<root>/<game_id>/metadata.json`. Reads and writes are
/// whole-file; there is no locking, so concurrent updates of the same game
/// are last-write-wins.
#[derive(Clone, Debug)]
pub struct MetadataStore {
    root: Arc<PathBuf>,
}

impl MetadataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Arc::new(root.into()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the document for `game_id`
    ///
    /// # Returns
    /// * `Ok(map)` - Stored document, or an empty map if none exists yet
    /// * `Err(_)` - Unsafe identifier, I/O failure, or a file that is not a JSON object
    pub async fn load(&self, game_id: &str) -> Result<GameMetadata, StorageError> {
        let path = self.document_path(game_id)?;

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No metadata document for game: {}", game_id);
                return Ok(GameMetadata::new());
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        let metadata = serde_json::from_slice(&bytes)
            .map_err(|source| StorageError::Json { path, source })?;

        tracing::debug!("Loaded metadata document for game: {}", game_id);
        Ok(metadata)
    }

    /// Load the document, falling back to an empty map on any failure
    pub async fn load_or_default(&self, game_id: &str) -> GameMetadata {
        match self.load(game_id).await {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::warn!("Falling back to default metadata for game '{}': {}", game_id, err);
                GameMetadata::new()
            }
        }
    }

    /// Replace the document for `game_id`, creating its directory if needed
    pub async fn save(&self, game_id: &str, metadata: &GameMetadata) -> Result<(), StorageError> {
        let path = self.document_path(game_id)?;
        let dir = self.root.join(game_id);

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| StorageError::Io { path: dir, source })?;

        // serde_json keeps non-ASCII characters as UTF-8 rather than escaping them
        let bytes = serde_json::to_vec_pretty(metadata).map_err(|source| StorageError::Json {
            path: path.clone(),
            source,
        })?;

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|source| StorageError::Io { path, source })?;

        tracing::debug!("Saved metadata document for game: {}", game_id);
        Ok(())
    }

    /// Read-merge-write of `title` and `game_name`; returns the merged document
    pub async fn update_title(
        &self,
        game_id: &str,
        new_title: &str,
    ) -> Result<GameMetadata, StorageError> {
        let mut metadata = self.load(game_id).await?;

        metadata.insert("title".to_string(), JsonValue::String(new_title.to_string()));
        metadata.insert("game_name".to_string(), JsonValue::String(game_id.to_string()));

        self.save(game_id, &metadata).await?;
        Ok(metadata)
    }

    /// Make sure the games directory exists and is usable
    pub async fn health_check(&self) -> Result<(), StorageError> {
        let root = self.root.as_ref();

        tokio::fs::create_dir_all(root)
            .await
            .map_err(|source| StorageError::Io {
                path: root.clone(),
                source,
            })?;

        let meta = tokio::fs::metadata(root)
            .await
            .map_err(|source| StorageError::Io {
                path: root.clone(),
                source,
            })?;

        if !meta.is_dir() {
            return Err(StorageError::Io {
                path: root.clone(),
                source: std::io::Error::other("games directory is not a directory"),
            });
        }

        Ok(())
    }

    fn document_path(&self, game_id: &str) -> Result<PathBuf, StorageError> {
        if !is_safe_game_id(game_id) {
            return Err(StorageError::InvalidGameId(game_id.to_string()));
        }
        Ok(self.root.join(game_id).join(METADATA_FILE))
    }
}

/// A game id must name exactly one entry directly under the games directory.
fn is_safe_game_id(game_id: &str) -> bool {
    !game_id.is_empty()
        && game_id != "."
        && game_id != ".."
        && !game_id.contains(['/', '\\', '\0'])
}
