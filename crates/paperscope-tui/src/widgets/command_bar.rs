//! The `:` command line drawn over the bottom row.
//!
//! The shell owns `Enter` and `Escape` (parse and run, or cancel); this module
//! only edits the text and shows the last parse error.

use crate::event::AppEvent;
use crate::theme::Theme;
use crate::widgets::line_edit::LineEdit;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

const PROMPT: &str = ":";

#[derive(Debug, Default)]
pub struct CommandBarState {
    pub line: LineEdit,
    /// Shown instead of the prompt until the next key.
    pub error: Option<String>,
}

impl CommandBarState {
    pub fn clear(&mut self) {
        self.line.clear();
        self.error = None;
    }

    pub fn fail(&mut self, message: String) {
        tracing::debug!(%message, "command rejected");
        self.error = Some(message);
    }

    pub fn handle(&mut self, event: &AppEvent) {
        self.error = None;
        self.line.apply(event);
    }

    /// Terminal column for the text cursor, clamped to `area`.
    pub fn cursor_col(&self, area: Rect) -> u16 {
        let offset = (PROMPT.len() + self.line.cursor_chars()) as u16;
        area.x
            .saturating_add(offset)
            .min(area.right().saturating_sub(1))
    }
}

pub struct CommandBar<'a> {
    state: &'a CommandBarState,
    theme: &'a Theme,
}

impl<'a> CommandBar<'a> {
    pub fn new(state: &'a CommandBarState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn line(&self) -> Line<'a> {
        match &self.state.error {
            Some(err) => Line::from(Span::styled(
                format!("E  {err}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(vec![
                Span::styled(PROMPT, self.theme.border_command_bar),
                Span::raw(self.state.line.as_str()),
            ]),
        }
    }
}

impl Widget for CommandBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let line = self.line();
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
