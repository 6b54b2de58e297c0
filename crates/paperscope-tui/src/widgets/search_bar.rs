//! Search bar widget: the free-text input above the paper list.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! Every edit that changes the text yields a [`ControlEvent::SetTerm`] with
//! the raw input; trimming and lowercasing happen in the filter state.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::line_edit::{Edit, LineEdit};
use paperscope_core::ControlEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SearchBarState {
    /// Raw text typed by the user.
    pub line: LineEdit,
}

impl SearchBarState {
    /// Empty the input, as "Limpiar filtros" does.
    pub fn clear(&mut self) {
        self.line.clear();
    }

    /// Handle a key event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) -> Option<ControlEvent> {
        match self.line.apply(event) {
            Edit::Changed => {
                tracing::debug!(input = %self.line.as_str(), "search: term edited");
                Some(ControlEvent::SetTerm(self.line.as_str().to_owned()))
            }
            Edit::Moved | Edit::Ignored => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct SearchBar<'a> {
    state: &'a SearchBarState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> SearchBar<'a> {
    pub fn new(state: &'a SearchBarState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.line.cursor_chars() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(2));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Buscar")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.state.line.is_empty() && !self.focused {
            Line::from(Span::styled(
                "press / to search titles and abstracts",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.line.as_str())
        };
        Paragraph::new(line).render(inner, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
