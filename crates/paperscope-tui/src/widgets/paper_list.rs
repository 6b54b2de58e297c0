//! Paper list widget: the scrollable card list on the right.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Previous card |
//! | `↓` / `j` | Next card |
//! | `PageUp` / `Ctrl+u` | Up one page of cards |
//! | `PageDown` / `Ctrl+d` | Down one page of cards |
//! | `g` / `Home` | First card |
//!
//! # Scroll semantics
//!
//! `offset` = index of the first card drawn; `cursor` = index of the
//! highlighted card. Cards have variable height, so the window is measured
//! in cards using the height cached from the last render. Every new view
//! resets both to the top.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use paperscope_core::{PaperCard, RenderedView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 5;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct PaperListState {
    pub view: RenderedView,
    /// First card drawn.
    pub offset: usize,
    /// Highlighted card.
    pub cursor: usize,
    /// Whether each card shows its abstract line.
    pub show_abstracts: bool,
    /// Cached from the last render so `handle()` can keep the cursor visible.
    last_height: Cell<usize>,
}

impl PaperListState {
    pub fn new(view: RenderedView) -> Self {
        Self {
            view,
            offset: 0,
            cursor: 0,
            show_abstracts: true,
            last_height: Cell::new(40),
        }
    }

    /// Replace the whole list with a new view.
    pub fn set_view(&mut self, view: RenderedView) {
        self.view = view;
        self.offset = 0;
        self.cursor = 0;
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Number of cards, starting at `offset`, that fit in the pane.
    fn cards_that_fit(&self, offset: usize) -> usize {
        let mut used = 0;
        let mut count = 0;
        for card in &self.view.cards[offset.min(self.view.cards.len())..] {
            used += card_height(card, self.show_abstracts);
            if used > self.height() && count > 0 {
                break;
            }
            count += 1;
        }
        count
    }

    /// Move `offset` so the cursor card is drawn.
    fn follow_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        }
        while self.cursor >= self.offset + self.cards_that_fit(self.offset) {
            self.offset += 1;
        }
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.view.cards.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
            }
            AppEvent::ScrollToTop => {
                self.cursor = 0;
            }
            _ => return,
        }
        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, offset = self.offset, "papers: moved");
    }
}

/// Rows a card occupies, including the blank separator line.
fn card_height(card: &PaperCard, show_abstracts: bool) -> usize {
    let mut rows = 2; // title + separator
    if !card.tags.is_empty() {
        rows += 1;
    }
    if show_abstracts && !card.abstract_text.is_empty() {
        rows += 1;
    }
    if card.link.is_some() {
        rows += 1;
    }
    rows
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct PaperList<'a> {
    state: &'a PaperListState,
    /// Current search term, highlighted in titles.
    term: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PaperList<'a> {
    pub fn new(state: &'a PaperListState, term: &'a str, focused: bool, theme: &'a Theme) -> Self {
        Self {
            state,
            term,
            focused,
            theme,
        }
    }
}

impl Widget for PaperList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title(Line::from(vec![
                Span::raw("Papers — "),
                Span::styled(self.state.view.count_text.clone(), self.theme.result_count),
            ]))
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle(); draw always runs before handle()
        self.state.last_height.set(height);

        let cards = &self.state.view.cards;
        let mut lines: Vec<Line<'static>> = Vec::new();
        for (i, card) in cards.iter().enumerate().skip(self.state.offset) {
            if lines.len() >= height {
                break;
            }
            let highlighted = self.focused && i == self.state.cursor;
            lines.extend(card_lines(
                card,
                self.term,
                highlighted,
                self.state.show_abstracts,
                self.theme,
            ));
        }

        if cards.is_empty() {
            lines.push(Line::from(Span::styled(
                "Sin resultados",
                Style::default().add_modifier(Modifier::DIM),
            )));
        }

        // Text (fill) + 1-column scrollbar strip inside the borders.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        if !cards.is_empty() {
            let mut sb_state = ScrollbarState::new(cards.len()).position(self.state.cursor);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

fn card_lines(
    card: &PaperCard,
    term: &str,
    highlighted: bool,
    show_abstract: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(5);

    let mut title = Line::from(title_spans(&card.title, term, theme));
    if highlighted {
        title = title.patch_style(Style::default().add_modifier(Modifier::REVERSED));
    }
    lines.push(title);

    if !card.tags.is_empty() {
        let mut spans = Vec::with_capacity(card.tags.len() * 2);
        for tag in &card.tags {
            spans.push(Span::styled(format!("[{tag}]"), theme.tag_style(tag)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    if show_abstract && !card.abstract_text.is_empty() {
        lines.push(Line::from(Span::styled(
            card.abstract_text.clone(),
            theme.card_abstract,
        )));
    }

    if let Some(link) = &card.link {
        lines.push(Line::from(vec![
            Span::styled(format!("↗ {}", link.label), theme.card_link),
            Span::styled(
                format!("  {}", link.href),
                Style::default().add_modifier(Modifier::DIM),
            ),
        ]));
    }

    lines.push(Line::default());
    lines
}

/// Split a title into spans, highlighting case-insensitive matches of `term`.
fn title_spans(title: &str, term: &str, theme: &Theme) -> Vec<Span<'static>> {
    let lower = title.to_lowercase();
    // Byte offsets only line up when lowercasing preserves lengths.
    if term.is_empty() || lower.len() != title.len() {
        return vec![Span::styled(title.to_string(), theme.card_title)];
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    for (start, matched) in lower.match_indices(term) {
        let end = start + matched.len();
        if !title.is_char_boundary(start) || !title.is_char_boundary(end) {
            continue;
        }
        if start > pos {
            spans.push(Span::styled(title[pos..start].to_string(), theme.card_title));
        }
        spans.push(Span::styled(
            title[start..end].to_string(),
            theme.search_highlight,
        ));
        pos = end;
    }
    if pos < title.len() {
        spans.push(Span::styled(title[pos..].to_string(), theme.card_title));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
