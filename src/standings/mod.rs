pub mod ranker;
pub mod format;

pub use ranker::{find_placement, rank, Placement};
pub use format::{format_currency, ordinal};
