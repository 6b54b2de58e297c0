//! paperscope TUI: ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use paperscope_core::{config::Config, Paper};

/// Attach an explorer over `papers` to the terminal and run until quit.
pub fn run(papers: Vec<Paper>, config: Config) -> anyhow::Result<()> {
    tracing::info!(papers = papers.len(), theme = %config.ui.theme, "starting tui");
    App::new(papers, config)?.run()
}
