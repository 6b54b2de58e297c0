//! Floating key reference, toggled with `?`.
//!
//! Rows for the configurable actions read the live [`Keymap`], so a rebound
//! key shows up here as the user configured it.

use crate::event::{key_label, Keymap};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const KEY_COL: usize = 22;
const POPUP_WIDTH: u16 = 72;

/// `(keys, description)` rows in display order.
pub fn bindings(keymap: &Keymap) -> Vec<(String, &'static str)> {
    let fixed = |k: &str, d| (k.to_string(), d);
    vec![
        fixed("q  /  Ctrl+c", "Quit"),
        (
            key_label(keymap.toggle_focus),
            "Cycle focus: filters → papers → search",
        ),
        (key_label(keymap.search_focus), "Focus search bar"),
        fixed("Escape", "Leave search bar"),
        fixed("↑ k  /  ↓ j", "Move in filters or papers"),
        fixed("← h  /  → l", "Collapse / expand facet"),
        fixed("Space", "Toggle option (on a facet: all / none)"),
        fixed("Enter", "Toggle option / expand facet"),
        (
            key_label(keymap.clear_facet),
            "Quitar: clear facet under cursor",
        ),
        (
            key_label(keymap.clear_all),
            "Limpiar filtros: clear search and all facets",
        ),
        fixed("PageUp  /  Ctrl+u", "Papers: page up"),
        fixed("PageDown / Ctrl+d", "Papers: page down"),
        fixed("g  /  Home", "Papers: first card"),
        fixed(":", "Command line (clear, theme, abstracts, q)"),
        fixed("?", "Toggle this help popup"),
    ]
}

pub struct HelpPopup<'a> {
    theme: &'a Theme,
    keymap: &'a Keymap,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme, keymap: &'a Keymap) -> Self {
        Self { theme, keymap }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = bindings(self.keymap);
        let popup = centre(area, POPUP_WIDTH, rows.len() as u16 + 2);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" paperscope keys (? to close) ")
            .border_style(self.theme.border_focused);
        let inner = block.inner(popup);
        block.render(popup, buf);

        let key_style = Style::default().add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = rows
            .into_iter()
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<KEY_COL$}"), key_style),
                    Span::raw(desc),
                ])
            })
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

fn centre(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
