pub mod view;
pub mod renderer;

pub use view::{build_view, StandingRow, StandingsView};
pub use renderer::TemplateRenderer;
