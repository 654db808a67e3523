pub mod health;
pub mod get_title;
pub mod change_title;
pub mod modify_asset;

pub use health::health_handler;
pub use get_title::get_title_handler;
pub use change_title::{change_title_handler, change_title_v2_handler};
pub use modify_asset::modify_asset_handler;
