//! Semantic application events: crossterm key events mapped to a
//! widget-agnostic vocabulary so widgets never touch crossterm directly.
//!
//! # Usage
//!
//! In the main event loop, call [`Keymap::to_app_event`] on every
//! [`crossterm::event::Event`] and match on the returned [`AppEvent`] instead
//! of crossterm types.
//!
//! # Keybindings
//!
//! The focus, search, clear-facet and clear-all keys come from the
//! `[keybindings]` config section; the rest are fixed.
//!
//! | Key(s)                  | Event                      |
//! |-------------------------|----------------------------|
//! | `q`, `Ctrl+c`           | `Quit`                     |
//! | `Tab` (configurable)    | `FocusNext`                |
//! | `/` (configurable)      | `SearchFocus`              |
//! | `x` (configurable)      | `ClearFacet`               |
//! | `X` (configurable)      | `ClearAll`                 |
//! | `PageUp`, `Ctrl+u`      | `ScrollUp`                 |
//! | `PageDown`, `Ctrl+d`    | `ScrollDown`               |
//! | `g`, `Home`             | `ScrollToTop`              |
//! | `↑` / `k`               | `Nav(Up)`                  |
//! | `↓` / `j`               | `Nav(Down)`                |
//! | `←` / `h`               | `Nav(Left)`                |
//! | `→` / `l`               | `Nav(Right)`               |
//! | printable char          | `Char(c)`                  |
//! | `Backspace`             | `Backspace`                |
//! | `Enter`                 | `Enter`                    |
//! | terminal resize         | `Resize(w, h)`             |
//!
//! ## Insert mode
//!
//! When a text-input widget (search bar, command bar) is focused, the event
//! loop calls [`Keymap::to_app_event_insert`] instead. In insert mode every
//! printable character is forwarded as `Char`; only `Ctrl+c`, `Escape`,
//! `Enter`, the focus key and `Backspace` keep their special bindings, and
//! arrow keys still produce `Nav` for cursor movement.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use paperscope_core::config::KeybindingsConfig;

/// Cardinal direction for facet panel and paper list navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values and never inspect crossterm types
/// directly. The App shell routes events to the focused widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Move keyboard focus to the next pane (Tab-cycle).
    FocusNext,
    /// Transfer focus to the search bar.
    SearchFocus,
    /// Deselect every option of the facet under the cursor ("Quitar").
    ClearFacet,
    /// Empty the search text and every facet ("Limpiar filtros").
    ClearAll,
    /// Scroll the paper list up one page.
    ScrollUp,
    /// Scroll the paper list down one page.
    ScrollDown,
    /// Jump to the first paper.
    ScrollToTop,
    /// Navigate within the facet panel or paper list, or move a text cursor.
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete the character before the cursor in the active text input.
    Backspace,
    /// Confirm the active input, or toggle the option under the cursor.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal (search focus, help popup, command bar).
    Escape,
}

/// Resolved key bindings for the configurable actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub toggle_focus: KeyCode,
    pub search_focus: KeyCode,
    pub clear_facet: KeyCode,
    pub clear_all: KeyCode,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeybindingsConfig::default())
    }
}

impl Keymap {
    /// Resolve config strings. Unparseable entries keep their default key.
    pub fn from_config(cfg: &KeybindingsConfig) -> Self {
        let resolve = |s: &str, fallback: KeyCode| {
            parse_key(s).unwrap_or_else(|| {
                tracing::warn!(binding = %s, "unrecognised key binding, using default");
                fallback
            })
        };
        Self {
            toggle_focus: resolve(&cfg.toggle_focus, KeyCode::Tab),
            search_focus: resolve(&cfg.search_focus, KeyCode::Char('/')),
            clear_facet: resolve(&cfg.clear_facet, KeyCode::Char('x')),
            clear_all: resolve(&cfg.clear_all, KeyCode::Char('X')),
        }
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] (navigation mode).
    ///
    /// Returns `None` for events that carry no meaning for the application
    /// (mouse events, unbound keys).
    pub fn to_app_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => self.map_key(key),
            _ => None,
        }
    }

    /// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input mode.
    pub fn to_app_event_insert(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Key(key) => self.map_key_insert(key),
            _ => None,
        }
    }

    fn map_key(&self, key: KeyEvent) -> Option<AppEvent> {
        use KeyCode::*;
        use KeyModifiers as Mod;

        // Uppercase bindings may arrive with or without SHIFT.
        let plain = key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT;

        match key.code {
            Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),
            Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
            Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

            code if plain && code == self.toggle_focus => Some(AppEvent::FocusNext),
            code if plain && code == self.search_focus => Some(AppEvent::SearchFocus),
            code if plain && code == self.clear_all => Some(AppEvent::ClearAll),
            code if plain && code == self.clear_facet => Some(AppEvent::ClearFacet),

            Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),

            PageUp => Some(AppEvent::ScrollUp),
            PageDown => Some(AppEvent::ScrollDown),
            Home => Some(AppEvent::ScrollToTop),
            Char('g') if key.modifiers == Mod::NONE => Some(AppEvent::ScrollToTop),

            Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
            Down | Char('j') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Down))
            }
            Left | Char('h') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Left))
            }
            Right | Char('l') if key.modifiers == Mod::NONE => {
                Some(AppEvent::Nav(Direction::Right))
            }

            Char(c) if plain => Some(AppEvent::Char(c)),

            Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
            Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
            Esc => Some(AppEvent::Escape),

            _ => None,
        }
    }

    fn map_key_insert(&self, key: KeyEvent) -> Option<AppEvent> {
        use KeyCode::*;
        use KeyModifiers as Mod;

        match key.code {
            // Ctrl+c always quits, even while typing
            Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

            Up => Some(AppEvent::Nav(Direction::Up)),
            Down => Some(AppEvent::Nav(Direction::Down)),
            Left => Some(AppEvent::Nav(Direction::Left)),
            Right => Some(AppEvent::Nav(Direction::Right)),

            // A character focus key would be untypeable; only non-char keys
            // leave the input this way.
            code if !matches!(code, Char(_))
                && code == self.toggle_focus
                && key.modifiers == Mod::NONE =>
            {
                Some(AppEvent::FocusNext)
            }

            Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
                Some(AppEvent::Char(c))
            }

            Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
            Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
            Esc => Some(AppEvent::Escape),

            _ => None,
        }
    }
}

/// Human label for a bound key.
pub fn key_label(code: KeyCode) -> String {
    match code {
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::BackTab => "Shift+Tab".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Delete => "Delete".into(),
        KeyCode::Insert => "Insert".into(),
        KeyCode::End => "End".into(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

/// Parse a binding string: a single character, or a named key.
fn parse_key(s: &str) -> Option<KeyCode> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Some(KeyCode::Char(c));
    }
    match s.to_ascii_lowercase().as_str() {
        "tab" => Some(KeyCode::Tab),
        "enter" | "return" => Some(KeyCode::Enter),
        "space" => Some(KeyCode::Char(' ')),
        "backtab" => Some(KeyCode::BackTab),
        "delete" | "del" => Some(KeyCode::Delete),
        "insert" => Some(KeyCode::Insert),
        "end" => Some(KeyCode::End),
        s if s.starts_with('f') => s[1..].parse::<u8>().ok().map(KeyCode::F),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
