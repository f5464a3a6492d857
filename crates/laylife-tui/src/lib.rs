//! laylife TUI: ratatui search palette over the site index.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use laylife_core::{config::Config, SearchIndex, SearchRecord};

/// Run the palette over the site index. Returns the record picked with
/// `Enter`, or `None` when the user closed the palette.
pub fn run(config: Config) -> anyhow::Result<Option<SearchRecord>> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    App::new(SearchIndex::build(), config, theme).run()
}
