pub mod models;
pub mod service;
pub mod suggestion;

pub use models::*;
pub use service::create_app;
pub use suggestion::build_suggestion;
