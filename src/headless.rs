//! Headless mode: one dispatch cycle per CLI flag against a
//! [`HeadlessSurface`], then print the final view.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;

use paperscope_core::{
    markup, ControlEvent, Explorer, ExplorerError, FacetField, HeadlessSurface, Paper,
    RenderedView,
};

/// How the final view is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

/// Filters requested on the command line.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRequest {
    pub query: Option<String>,
    /// `field=value` pairs; values for the same field accumulate.
    pub facets: Vec<(FacetField, String)>,
}

impl HeadlessRequest {
    /// The control events this request expands to, in dispatch order:
    /// the search term first, then one selection per facet field.
    pub fn events(&self) -> Vec<ControlEvent> {
        let mut grouped: BTreeMap<FacetField, BTreeSet<String>> = BTreeMap::new();
        for (field, value) in &self.facets {
            grouped.entry(*field).or_default().insert(value.clone());
        }

        self.query
            .iter()
            .map(|q| ControlEvent::SetTerm(q.clone()))
            .chain(
                grouped
                    .into_iter()
                    .map(|(field, values)| ControlEvent::SetSelection { field, values }),
            )
            .collect()
    }
}

/// Attach an explorer over `papers` to a headless surface and dispatch the
/// request's events. Returns the last presented view.
pub fn run(papers: &[Paper], request: &HeadlessRequest) -> Result<RenderedView, ExplorerError> {
    let mut explorer = Explorer::new(papers);
    let mut surface = HeadlessSurface::new();
    explorer.attach(&mut surface)?;

    for event in request.events() {
        explorer.dispatch(event, &mut surface);
    }
    tracing::debug!(presents = surface.presents, "headless run finished");

    Ok(surface.view.unwrap_or_else(|| explorer.view()))
}

/// Serialise `view` in the requested format.
pub fn format(view: &RenderedView, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Text => to_text(view),
        OutputFormat::Json => serde_json::to_string_pretty(view)? + "\n",
        OutputFormat::Html => markup::to_html(view),
    })
}

fn to_text(view: &RenderedView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.count_text);
    for card in &view.cards {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", card.title);
        if !card.tags.is_empty() {
            let tags: Vec<String> = card.tags.iter().map(|t| format!("[{t}]")).collect();
            let _ = writeln!(out, "  {}", tags.join(" "));
        }
        if !card.abstract_text.is_empty() {
            let _ = writeln!(out, "  {}", card.abstract_text);
        }
        if let Some(link) = &card.link {
            let _ = writeln!(out, "  {}: {}", link.label, link.href);
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
