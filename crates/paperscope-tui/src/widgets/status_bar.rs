//! Status bar widget: the 1-line strip at the top of the screen.

use crate::event::{key_label, Keymap};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub const APP_TITLE: &str = "Explorador de papers biomédicos – EUSIPCO 2025";

/// Renders the app title, the result count and the number of active
/// filters, with keybinding hints right-aligned in the same row.
pub struct StatusBar<'a> {
    count_text: &'a str,
    active_filters: usize,
    theme: &'a Theme,
    keymap: &'a Keymap,
}

impl<'a> StatusBar<'a> {
    pub fn new(
        count_text: &'a str,
        active_filters: usize,
        theme: &'a Theme,
        keymap: &'a Keymap,
    ) -> Self {
        Self {
            count_text,
            active_filters,
            theme,
            keymap,
        }
    }

    /// Right-aligned key hints; the clear-all key follows the keymap.
    pub fn hint(&self) -> String {
        format!(
            " {}:limpiar filtros  q:quit  ?:help ",
            key_label(self.keymap.clear_all)
        )
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!(" {APP_TITLE} "),
                Style::default()
                    .bg(ratatui::style::Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.count_text.to_string(), self.theme.result_count),
        ];
        if self.active_filters > 0 {
            spans.push(Span::styled(
                format!("  · {} filtro(s) activo(s)", self.active_filters),
                Style::default().add_modifier(Modifier::DIM),
            ));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        let hint = self.hint();
        let hint_x = area.right().saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            &hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
