//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! The three panes together form the [`Surface`] the [`Explorer`] is
//! attached to: facet controls go to the facet panel, rendered views to the
//! paper list.

use crate::{
    commands::{execute_command, Command},
    event::{AppEvent, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        facet_panel::{FacetPanel, FacetPanelState},
        help::HelpPopup,
        paper_list::{PaperList, PaperListState},
        search_bar::{SearchBar, SearchBarState},
        status_bar::StatusBar,
    },
};
use crossterm::{
    event::{self as ct_event, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use paperscope_core::{
    config::Config,
    render,
    surface::FacetControl,
    ControlEvent, Explorer, MountPoint, Paper, RenderedView, Surface,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Facets,
    Papers,
    Search,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// Panes
// ---------------------------------------------------------------------------

/// Widget state for the three panes. Implements [`Surface`] so the explorer
/// can build controls into it and present views to it.
pub struct Panes {
    pub facets: FacetPanelState,
    pub papers: PaperListState,
    pub search: SearchBarState,
}

impl Surface for Panes {
    fn has_mount(&self, _mount: MountPoint) -> bool {
        // facets → Filters, search → Search, paper list title → ResultCount,
        // paper list body → Papers
        true
    }

    fn build_controls(&mut self, controls: Vec<FacetControl>) {
        self.facets.set_controls(controls);
    }

    fn present(&mut self, view: &RenderedView) {
        self.papers.set_view(view.clone());
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub explorer: Explorer,
    pub panes: Panes,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Route a control event through the explorer and refresh the panes.
    ///
    /// "Limpiar filtros" also empties the search input so the bar and the
    /// filter state agree.
    pub fn control(&mut self, event: ControlEvent) {
        if matches!(event, ControlEvent::ClearAll) {
            self.panes.search.clear();
        }
        self.explorer.dispatch(event, &mut self.panes);
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(papers: Vec<Paper>, config: Config) -> anyhow::Result<Self> {
        let explorer = Explorer::new(&papers);

        let mut papers_pane = PaperListState::new(render::render(&[]));
        papers_pane.show_abstracts = config.ui.show_abstracts;
        let mut panes = Panes {
            facets: FacetPanelState::default(),
            papers: papers_pane,
            search: SearchBarState::default(),
        };
        explorer.attach(&mut panes)?;

        let state = AppState {
            explorer,
            panes,
            focus: Focus::Facets,
            prev_focus: Focus::Facets,
            theme: Theme::by_name(&config.ui.theme),
            keymap: Keymap::from_config(&config.keybindings),
            config,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };

        Ok(App { state })
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                // Use insert-mode mapping when a text widget is focused
                let keymap = &self.state.keymap;
                let app_event = if is_insert_mode(self.state.focus) {
                    keymap.to_app_event_insert(raw)
                } else {
                    keymap.to_app_event(raw)
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        handle_event(&mut self.state, event);
    }
}

fn handle_event(s: &mut AppState, event: AppEvent) {
    // Help popup intercepts all events; only close keys pass through.
    if s.show_help {
        match event {
            AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            _ => {}
        }
        return;
    }

    // Command mode intercepts all events.
    if s.focus == Focus::Command {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                s.command_bar.clear();
                s.focus = s.prev_focus;
            }
            AppEvent::Enter => match Command::parse(s.command_bar.line.as_str()) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                    execute_command(s, cmd);
                }
                Err(msg) if msg.is_empty() => {
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                // Bar stays open showing the error
                Err(msg) => s.command_bar.fail(msg),
            },
            other => s.command_bar.handle(&other),
        }
        return;
    }

    match event {
        AppEvent::Char('?') if s.focus != Focus::Search => {
            tracing::debug!("help popup opened");
            s.show_help = true;
        }

        AppEvent::Char(':') if s.focus != Focus::Search => {
            tracing::debug!(prev_focus = ?s.focus, "entering command mode");
            s.prev_focus = s.focus;
            s.command_bar.clear();
            s.focus = Focus::Command;
        }

        AppEvent::Quit => {
            tracing::debug!("quit");
            s.quit = true;
        }

        // Leave the search bar; the term stays applied
        AppEvent::Escape | AppEvent::Enter if s.focus == Focus::Search => {
            tracing::debug!("focus: Search -> Facets");
            s.focus = Focus::Facets;
        }

        // Tab-cycle focus: Facets → Papers → Search → Facets
        AppEvent::FocusNext => {
            let next = match s.focus {
                Focus::Facets => Focus::Papers,
                Focus::Papers => Focus::Search,
                Focus::Search | Focus::Command => Focus::Facets,
            };
            tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
            s.focus = next;
        }

        AppEvent::SearchFocus => {
            tracing::debug!("focus -> Search");
            s.focus = Focus::Search;
        }

        AppEvent::ClearAll => {
            tracing::debug!("clear all filters");
            s.control(ControlEvent::ClearAll);
        }

        // Terminal resize is handled automatically by ratatui
        AppEvent::Resize(_, _) => {}

        other => dispatch_to_focused(s, other),
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Command)
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    let control = match s.focus {
        Focus::Facets => s.panes.facets.handle(&event, s.explorer.state()),
        Focus::Papers => {
            s.panes.papers.handle(&event);
            None
        }
        Focus::Search => s.panes.search.handle(&event),
        Focus::Command => None, // handled before dispatch
    };
    if let Some(control) = control {
        s.control(control);
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: 1-line status bar | body
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(1), Constraint::Fill(1)])
        .split(area);

    // Horizontal body split: facets | (search over papers)
    let pct = state.config.ui.facet_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[1]);

    let right = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Length(3), Constraint::Fill(1)])
        .split(horiz[1]);

    let filters = state.explorer.state();
    let view = &state.panes.papers.view;

    frame.render_widget(
        StatusBar::new(
            &view.count_text,
            filters.active_facets().count(),
            &state.theme,
            &state.keymap,
        ),
        vert[0],
    );
    frame.render_widget(
        FacetPanel::new(
            &state.panes.facets,
            filters,
            state.focus == Focus::Facets,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        SearchBar::new(&state.panes.search, state.focus == Focus::Search, &state.theme),
        right[0],
    );
    frame.render_widget(
        PaperList::new(
            &state.panes.papers,
            filters.term(),
            state.focus == Focus::Papers,
            &state.theme,
        ),
        right[1],
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme, &state.keymap), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect {
            y: area.bottom().saturating_sub(1),
            height: 1,
            ..area
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return;
    }

    if state.focus == Focus::Search {
        let bar = SearchBar::new(&state.panes.search, true, &state.theme);
        frame.set_cursor_position(bar.cursor_position(right[0]));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
