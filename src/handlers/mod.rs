pub mod create;
pub mod external_api;
pub mod get;
pub mod health;
pub mod info;
pub mod list;

pub use create::create_handler;
pub use external_api::external_api_status_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use info::info_handler;
pub use list::list_handler;
