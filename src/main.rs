use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use paperscope::headless::{self, HeadlessRequest, OutputFormat};
use paperscope_core::{config::Config, filter::parse_facet_filter, FacetField};

#[derive(Parser)]
#[command(
    name = "paperscope",
    about = "Faceted explorer for biomedical conference papers"
)]
struct Cli {
    /// Paper collection: a JSON array or a papers.js bundle. Overrides the config.
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Write debug logs to $TMPDIR/paperscope-debug.log (tail -f to inspect).
    #[arg(long)]
    debug: bool,

    /// Load this config file instead of ~/.config/paperscope/config.toml.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the filtered result instead of starting the TUI.
    #[arg(long)]
    headless: bool,

    /// Free-text search term (headless only).
    #[arg(long, requires = "headless")]
    query: Option<String>,

    /// Facet selection as FIELD=VALUE; repeat to select more values (headless only).
    #[arg(long, value_name = "FIELD=VALUE", requires = "headless", value_parser = parse_facet)]
    facet: Vec<(FacetField, String)>,

    /// Output format (headless only).
    #[arg(long, value_enum, requires = "headless", default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn parse_facet(expr: &str) -> Result<(FacetField, String), String> {
    parse_facet_filter(expr).map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("paperscope-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(log = %path.display(), "paperscope debug log started");
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "config load failed, using defaults");
            Config::defaults()
        }),
    };

    let data_path = cli.data.clone().unwrap_or_else(|| config.data.path.clone());
    let papers = paperscope_data::load_path(&data_path);
    tracing::info!(path = %data_path.display(), papers = papers.len(), "collection loaded");

    if cli.headless {
        let request = HeadlessRequest {
            query: cli.query,
            facets: cli.facet,
        };
        let view = headless::run(&papers, &request)?;
        let out = headless::format(&view, cli.format)?;
        std::io::stdout().write_all(out.as_bytes())?;
        return Ok(());
    }

    paperscope_tui::run(papers, config)
}
