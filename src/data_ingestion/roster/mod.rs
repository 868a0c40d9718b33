pub mod score_entry;
pub mod page_fetcher;
pub mod roster_parser;

pub use score_entry::{ScoreEntry, TeamSnapshot};
pub use page_fetcher::PageFetcher;
pub use roster_parser::{parse_amount, parse_roster, ParsedRoster};
