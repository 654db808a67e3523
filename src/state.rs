use crate::config::Config;
use crate::store::MetadataStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: MetadataStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        Self {
            store: MetadataStore::new(config.games_dir.clone()),
            config: Arc::new(config),
        }
    }
}
