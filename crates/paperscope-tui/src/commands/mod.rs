//! `:` commands: parsed from the command bar and executed against the app.
//!
//! | Command | Action |
//! |---------|--------|
//! | `q`, `quit` | Quit |
//! | `help` | Toggle the help popup |
//! | `theme <name>` | Switch theme (`default`, `gruvbox`) |
//! | `clear` | Limpiar filtros: clear search and every facet |
//! | `clear <facet>` | Quitar: clear one facet (`task`, `signals`, …) |
//! | `abstracts` | Toggle abstract lines on cards |

use crate::{app::AppState, theme::Theme};
use paperscope_core::{ControlEvent, FacetField};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    /// `None` clears everything; `Some` clears one facet.
    Clear(Option<FacetField>),
    Abstracts,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "abstracts" => Ok(Command::Abstracts),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "clear" => {
                if rest.is_empty() {
                    Ok(Command::Clear(None))
                } else {
                    rest.parse::<FacetField>()
                        .map(|f| Command::Clear(Some(f)))
                        .map_err(|e| e.to_string())
                }
            }
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
        }
        Command::Clear(None) => s.control(ControlEvent::ClearAll),
        Command::Clear(Some(field)) => s.control(ControlEvent::ClearFacet(field)),
        Command::Abstracts => {
            s.panes.papers.show_abstracts = !s.panes.papers.show_abstracts;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
