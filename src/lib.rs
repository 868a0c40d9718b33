pub mod constants;
pub mod config;
pub mod logging;
pub mod error;
pub mod data_ingestion;
pub mod standings;
pub mod summary;
pub mod db;
pub mod notify;
pub mod handlers;
pub mod event_io;

pub use error::{Result, StandingsError};
