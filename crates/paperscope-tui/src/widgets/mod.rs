//! Ratatui widgets for the paperscope TUI.

pub mod command_bar;
pub mod facet_panel;
pub mod help;
pub mod line_edit;
pub mod paper_list;
pub mod search_bar;
pub mod status_bar;
