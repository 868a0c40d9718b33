// Team roster page
pub const DEFAULT_TEAM_PAGE_BASE_URL: &str = "https://www.aidswalk.net/wisconsin/Team/View";

// Roster page selectors
pub const TEAM_TABLE_SELECTOR: &str = "#tblTeamList";
pub const TEAM_ROW_SELECTOR: &str = ".tableRow";
pub const NAME_CELL_SELECTOR: &str = ".tableColName";
pub const RAISED_CELL_SELECTOR: &str = ".tableColRaised";
pub const TEAM_TOTAL_SELECTOR: &str = "#NewProgressAmtRaised";
pub const TEAM_TOTAL_AMOUNT_SELECTOR: &str = ".was-raised";

// Message rendering
pub const STANDINGS_TEMPLATE_NAME: &str = "personalized_standings.html.jinja2";
pub const TOP_STANDINGS_LIMIT: usize = 10;
pub const DEFAULT_EVENT_LABEL: &str = "AIDS Walk";
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";
