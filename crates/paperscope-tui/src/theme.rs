//! Colour theme for the paperscope TUI.
//!
//! Themes are TOML files embedded with [`include_str!`], so the binary needs
//! nothing on disk. [`Theme::by_name`] resolves the configured name once at
//! startup; `:theme <name>` swaps it at runtime.
//!
//! Every entry is an inline table:
//!
//! ```toml
//! focused = { fg = "cyan", bg = "#282828", modifiers = ["bold", "underlined"] }
//! ```
//!
//! Colours go through ratatui's own [`Color`] parser (names, `#rrggbb`, a
//! 256-colour index). Tag badges pick a palette colour by hashing the tag
//! text, so `ECG` is the same colour on every card.

use std::str::FromStr;

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// TOML shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct StyleEntry {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    modifiers: Vec<String>,
}

impl StyleEntry {
    fn resolve(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg.as_deref().and_then(color) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg.as_deref().and_then(color) {
            style = style.bg(bg);
        }
        self.modifiers
            .iter()
            .filter_map(|m| modifier(m))
            .fold(style, Style::add_modifier)
    }
}

#[derive(Debug, Deserialize)]
struct ThemeFile {
    borders: BorderStyles,
    search: SearchStyles,
    cards: CardStyles,
    facets: FacetStyles,
    tags: TagStyles,
}

#[derive(Debug, Deserialize)]
struct BorderStyles {
    focused: StyleEntry,
    unfocused: StyleEntry,
    command_bar: StyleEntry,
}

#[derive(Debug, Deserialize)]
struct SearchStyles {
    highlight: StyleEntry,
}

#[derive(Debug, Deserialize)]
struct CardStyles {
    title: StyleEntry,
    #[serde(rename = "abstract")]
    abstract_text: StyleEntry,
    link: StyleEntry,
    result_count: StyleEntry,
}

#[derive(Debug, Deserialize)]
struct FacetStyles {
    header: StyleEntry,
    selected: StyleEntry,
}

#[derive(Debug, Deserialize)]
struct TagStyles {
    #[serde(default)]
    palette: Vec<String>,
}

// ---------------------------------------------------------------------------
// Theme
// ---------------------------------------------------------------------------

/// Resolved styles for every themed element.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    /// The `:` prompt of the command line.
    pub border_command_bar: Style,
    /// Search-term matches inside card titles.
    pub search_highlight: Style,
    pub card_title: Style,
    pub card_abstract: Style,
    pub card_link: Style,
    /// The `N resultado(s)` text.
    pub result_count: Style,
    pub facet_header: Style,
    pub facet_selected: Style,
    tag_palette: Vec<Color>,
}

impl Theme {
    /// The embedded default theme.
    ///
    /// # Panics
    ///
    /// Only if the embedded TOML is malformed; `default_theme_loads` guards it.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// The embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Only if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a built-in theme by name; unknown names get the default.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().replace('-', "_").as_str() {
            "gruvbox" | "gruvbox_dark" => Self::load_gruvbox_dark(),
            "default" => Self::load_default(),
            other => {
                tracing::warn!(theme = %other, "unknown theme, using default");
                Self::load_default()
            }
        }
    }

    /// Parse a theme from TOML text.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let file: ThemeFile = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: file.borders.focused.resolve(),
            border_unfocused: file.borders.unfocused.resolve(),
            border_command_bar: file.borders.command_bar.resolve(),
            search_highlight: file.search.highlight.resolve(),
            card_title: file.cards.title.resolve(),
            card_abstract: file.cards.abstract_text.resolve(),
            card_link: file.cards.link.resolve(),
            result_count: file.cards.result_count.resolve(),
            facet_header: file.facets.header.resolve(),
            facet_selected: file.facets.selected.resolve(),
            tag_palette: file.tags.palette.iter().filter_map(|c| color(c)).collect(),
        })
    }

    /// Badge style for `tag`; the same text always gets the same colour.
    pub fn tag_style(&self, tag: &str) -> Style {
        if self.tag_palette.is_empty() {
            return Style::default();
        }
        // FNV-1a, fixed so colours survive restarts
        let hash = tag.bytes().fold(0xcbf2_9ce4_8422_2325u64, |h, b| {
            (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
        });
        let idx = (hash % self.tag_palette.len() as u64) as usize;
        Style::default().fg(self.tag_palette[idx])
    }
}

fn color(name: &str) -> Option<Color> {
    let parsed = Color::from_str(name).ok();
    if parsed.is_none() {
        tracing::warn!(color = %name, "unrecognised theme colour, ignoring");
    }
    parsed
}

fn modifier(name: &str) -> Option<Modifier> {
    let m = match name.to_ascii_lowercase().as_str() {
        "bold" => Modifier::BOLD,
        "dim" => Modifier::DIM,
        "italic" => Modifier::ITALIC,
        "underlined" | "underline" => Modifier::UNDERLINED,
        "reversed" => Modifier::REVERSED,
        "crossed_out" => Modifier::CROSSED_OUT,
        other => {
            tracing::warn!(modifier = %other, "unrecognised theme modifier, ignoring");
            return None;
        }
    };
    Some(m)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
