pub mod accounts;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod quotes;
pub mod report;
pub mod session;
pub mod state;
pub mod storage;
pub mod ui;
pub mod validation;

pub use accounts::AccountStore;
pub use app::router;
pub use config::AppConfig;
pub use session::Session;
pub use state::AppState;
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
