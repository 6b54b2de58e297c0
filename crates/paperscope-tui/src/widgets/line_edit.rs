//! Single-line text buffer shared by the search bar and the command bar.

use crate::event::{AppEvent, Direction};

/// What an [`AppEvent`] did to a [`LineEdit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// The text changed.
    Changed,
    /// Only the cursor moved.
    Moved,
    /// Nothing happened.
    Ignored,
}

/// Text plus a cursor kept on a char boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LineEdit {
    text: String,
    cursor: usize,
}

impl LineEdit {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Cursor position in characters, which is also its display column for
    /// the narrow text these inputs hold.
    pub fn cursor_chars(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    /// Apply an editing key: `Char`, `Backspace`, `Nav(Left)`, `Nav(Right)`.
    pub fn apply(&mut self, event: &AppEvent) -> Edit {
        match event {
            AppEvent::Char(c) => {
                self.text.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                Edit::Changed
            }
            AppEvent::Backspace => match self.prev_boundary() {
                Some(prev) => {
                    self.text.remove(prev);
                    self.cursor = prev;
                    Edit::Changed
                }
                None => Edit::Ignored,
            },
            AppEvent::Nav(Direction::Left) => self.move_to(self.prev_boundary()),
            AppEvent::Nav(Direction::Right) => self.move_to(self.next_boundary()),
            _ => Edit::Ignored,
        }
    }

    fn move_to(&mut self, target: Option<usize>) -> Edit {
        match target {
            Some(pos) => {
                self.cursor = pos;
                Edit::Moved
            }
            None => Edit::Ignored,
        }
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().next_back().map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
