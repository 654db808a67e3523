// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const GET_GAME_TITLE: &str = "/get-game-title";
pub const CHANGE_GAME_TITLE: &str = "/change-game-title";
pub const CHANGE_GAME_TITLE_V2: &str = "/change-game-title-v2";
pub const MODIFY_ASSET: &str = "/modify-asset";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
