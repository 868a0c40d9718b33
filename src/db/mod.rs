pub mod connection;
pub mod schema;
pub mod models;
pub mod queries;
pub mod db_manager;
pub mod score_store;

pub use models::score_records::PersistedScoreRecord;
pub use db_manager::DbManager;
pub use score_store::{MemoryScoreStore, ScoreStore};
