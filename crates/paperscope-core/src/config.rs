//! Runtime settings: data location, pane layout, theme and key bindings.
//!
//! Sources, later ones winning:
//!
//! 1. the embedded [`DEFAULT_TOML`],
//! 2. `$XDG_CONFIG_HOME/paperscope/config.toml` (or an explicit `--config`),
//! 3. `PAPERSCOPE_<SECTION>__<KEY>` environment variables, e.g.
//!    `PAPERSCOPE_UI__THEME=gruvbox`.
//!
//! Keys missing from every source take the `Default` impls below, so a
//! config file only needs the settings it changes.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Written to disk on first run so users have something to edit.
pub const DEFAULT_TOML: &str = r#"[data]
path = "papers.json"

[ui]
facet_pane_width_pct = 30
show_abstracts       = true
theme                = "default"

[keybindings]
toggle_focus = "Tab"
search_focus = "/"
clear_facet  = "x"
clear_all    = "X"
"#;

const ENV_PREFIX: &str = "PAPERSCOPE";

/// Narrowest and widest facet pane, in percent of the terminal width.
pub const FACET_PANE_PCT: std::ops::RangeInclusive<u16> = 10..=70;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub ui: UiConfig,
    pub keybindings: KeybindingsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Paper collection: a JSON array, or a `papers.js` bundle.
    pub path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("papers.json") }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub facet_pane_width_pct: u16,
    pub show_abstracts: bool,
    pub theme: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            facet_pane_width_pct: 30,
            show_abstracts: true,
            theme: "default".into(),
        }
    }
}

/// Key names as written in the file: a single character, or `Tab`,
/// `Enter`, `Space`, `F1`..`F12` and friends.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub toggle_focus: String,
    pub search_focus: String,
    pub clear_facet: String,
    pub clear_all: String,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: "Tab".into(),
            search_focus: "/".into(),
            clear_facet: "x".into(),
            clear_all: "X".into(),
        }
    }
}

impl Config {
    /// Load the user config, writing [`DEFAULT_TOML`] there first if absent.
    pub fn load() -> anyhow::Result<Self> {
        let path = user_config_path();
        if !path.exists() {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            std::fs::write(&path, DEFAULT_TOML)?;
            tracing::info!(path = %path.display(), "wrote default config");
        }
        Self::load_from(&path)
    }

    /// Load `path` over the defaults. A missing file is not an error.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        Self::load_layered(path, env_layer())
    }

    fn load_layered(path: &Path, env: config::Environment) -> anyhow::Result<Self> {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_TOML, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()?;
        Ok(cfg.validated())
    }

    /// Built-in settings, without reading disk or environment.
    pub fn defaults() -> Self {
        Self::default()
    }

    fn validated(mut self) -> Self {
        let pct = self.ui.facet_pane_width_pct;
        let clamped = pct.clamp(*FACET_PANE_PCT.start(), *FACET_PANE_PCT.end());
        if clamped != pct {
            tracing::warn!(pct, clamped, "facet_pane_width_pct out of range");
            self.ui.facet_pane_width_pct = clamped;
        }
        self
    }
}

fn env_layer() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn user_config_path() -> PathBuf {
    let base = match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };
    base.join("paperscope").join("config.toml")
}
