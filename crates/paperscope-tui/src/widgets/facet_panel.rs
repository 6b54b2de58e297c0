//! Facet panel widget: one collapsible multi-select group per facet field
//! in the left pane.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible rows.
//! - `→`/`l` expands the group under the cursor; `←`/`h` collapses it.
//! - `Enter` on a header expands/collapses; on an option it toggles it.
//! - `Space` toggles the option under the cursor. On a header it clears the
//!   group if anything is selected, otherwise selects every option.
//! - `x` clears the group under the cursor.
//!
//! The panel never stores selections: it reads them from the explorer's
//! [`FilterState`] and answers key presses with the [`ControlEvent`] that
//! expresses the user's intent.

use std::collections::BTreeSet;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use paperscope_core::surface::FacetControl;
use paperscope_core::{ControlEvent, FacetField, FilterState};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// Selection state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeSelection {
    /// Every option of the group is selected.
    Selected,
    /// No option is selected; the facet is inactive.
    Unselected,
    /// Some (but not all) options are selected.
    Partial,
}

/// Derive a group header's state from the facet's current selection.
fn group_selection(control: &FacetControl, state: &FilterState) -> NodeSelection {
    let selected = state
        .selected(control.field)
        .map(|s| control.options.iter().filter(|o| s.contains(*o)).count())
        .unwrap_or(0);
    if selected == 0 {
        NodeSelection::Unselected
    } else if selected == control.options.len() {
        NodeSelection::Selected
    } else {
        NodeSelection::Partial
    }
}

// ---------------------------------------------------------------------------
// Panel state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct FacetGroup {
    pub control: FacetControl,
    pub expanded: bool,
}

/// One row of the flattened panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Header(usize),
    Option(usize, usize),
}

#[derive(Debug, Default)]
pub struct FacetPanelState {
    pub groups: Vec<FacetGroup>,
    /// Index into the currently-visible rows.
    pub cursor: usize,
}

impl FacetPanelState {
    /// Replace the groups with freshly built controls.
    ///
    /// Groups that fit within their control's visible rows start expanded;
    /// longer ones start collapsed.
    pub fn set_controls(&mut self, controls: Vec<FacetControl>) {
        self.groups = controls
            .into_iter()
            .map(|control| FacetGroup {
                expanded: control.options.len() <= control.visible_rows,
                control,
            })
            .collect();
        self.cursor = 0;
    }

    /// Flatten the groups into rows, respecting expanded state.
    pub fn visible(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            rows.push(Row::Header(g));
            if group.expanded {
                rows.extend((0..group.control.options.len()).map(|o| Row::Option(g, o)));
            }
        }
        rows
    }

    fn cursor_row(&self) -> Option<Row> {
        self.visible().get(self.cursor).copied()
    }

    /// Field of the group under the cursor.
    pub fn cursor_field(&self) -> Option<FacetField> {
        self.cursor_row().map(|row| match row {
            Row::Header(g) | Row::Option(g, _) => self.groups[g].control.field,
        })
    }

    /// Handle an [`AppEvent`], returning the control event it expresses.
    pub fn handle(&mut self, event: &AppEvent, filters: &FilterState) -> Option<ControlEvent> {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "facets: cursor up");
                None
            }
            AppEvent::Nav(Direction::Down) => {
                let max = self.visible().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "facets: cursor down");
                None
            }
            AppEvent::Nav(Direction::Right) => {
                if let Some(Row::Header(g)) = self.cursor_row() {
                    tracing::debug!(facet = %self.groups[g].control.field, "facets: expand");
                    self.groups[g].expanded = true;
                }
                None
            }
            AppEvent::Nav(Direction::Left) => {
                if let Some(Row::Header(g) | Row::Option(g, _)) = self.cursor_row() {
                    tracing::debug!(facet = %self.groups[g].control.field, "facets: collapse");
                    self.groups[g].expanded = false;
                    self.cursor = self.header_index(g);
                }
                None
            }
            AppEvent::Enter => match self.cursor_row()? {
                Row::Header(g) => {
                    let group = &mut self.groups[g];
                    group.expanded = !group.expanded;
                    tracing::debug!(facet = %group.control.field, expanded = group.expanded, "facets: toggle expand");
                    self.clamp_cursor();
                    None
                }
                Row::Option(g, o) => Some(self.toggle_option(g, o, filters)),
            },
            AppEvent::Char(' ') => match self.cursor_row()? {
                Row::Header(g) => Some(self.toggle_group(g, filters)),
                Row::Option(g, o) => Some(self.toggle_option(g, o, filters)),
            },
            AppEvent::ClearFacet => {
                let field = self.cursor_field()?;
                tracing::debug!(facet = %field, "facets: clear");
                Some(ControlEvent::ClearFacet(field))
            }
            _ => None,
        }
    }

    /// The facet's selection with option `o` flipped.
    fn toggle_option(&self, g: usize, o: usize, filters: &FilterState) -> ControlEvent {
        let control = &self.groups[g].control;
        let value = &control.options[o];
        let mut values: BTreeSet<String> =
            filters.selected(control.field).cloned().unwrap_or_default();
        if !values.remove(value) {
            values.insert(value.clone());
        }
        tracing::debug!(facet = %control.field, option = %value, "facets: toggle option");
        ControlEvent::SetSelection {
            field: control.field,
            values,
        }
    }

    /// Clear a group with any selection; select everything in an empty one.
    fn toggle_group(&self, g: usize, filters: &FilterState) -> ControlEvent {
        let control = &self.groups[g].control;
        match group_selection(control, filters) {
            NodeSelection::Selected | NodeSelection::Partial => {
                tracing::debug!(facet = %control.field, "facets: clear group");
                ControlEvent::ClearFacet(control.field)
            }
            NodeSelection::Unselected => {
                tracing::debug!(facet = %control.field, "facets: select whole group");
                ControlEvent::select(control.field, control.options.iter().cloned())
            }
        }
    }

    fn header_index(&self, g: usize) -> usize {
        self.visible()
            .iter()
            .position(|r| *r == Row::Header(g))
            .unwrap_or(0)
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FacetPanel<'a> {
    state: &'a FacetPanelState,
    filters: &'a FilterState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> FacetPanel<'a> {
    pub fn new(
        state: &'a FacetPanelState,
        filters: &'a FilterState,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            filters,
            focused,
            theme,
        }
    }

    fn row_line(&self, row: Row) -> Line<'static> {
        match row {
            Row::Header(g) => {
                let group = &self.state.groups[g];
                let expand = if group.control.options.is_empty() {
                    "  "
                } else if group.expanded {
                    "▼ "
                } else {
                    "▶ "
                };
                let sel = match group_selection(&group.control, self.filters) {
                    NodeSelection::Selected => " ✓",
                    NodeSelection::Unselected => "",
                    NodeSelection::Partial => " ◐",
                };
                Line::from(vec![
                    Span::raw(expand),
                    Span::styled(group.control.label, self.theme.facet_header),
                    Span::raw(format!(" ({}){}", group.control.options.len(), sel)),
                ])
            }
            Row::Option(g, o) => {
                let control = &self.state.groups[g].control;
                let value = &control.options[o];
                if self.filters.is_selected(control.field, value) {
                    Line::from(Span::styled(
                        format!("    ✓ {value}"),
                        self.theme.facet_selected,
                    ))
                } else {
                    Line::from(format!("    ○ {value}"))
                }
            }
        }
    }
}

impl Widget for FacetPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };

        let block = Block::bordered()
            .title("Filtros")
            .border_style(border_style);

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .visible()
            .into_iter()
            .map(|row| ListItem::new(self.row_line(row)))
            .collect();

        let list =
            List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let selected = self.focused.then_some(self.state.cursor);
        let mut list_state = ListState::default().with_selected(selected);
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
